//! Spotify plugin for a Sonos zone player

use tracing::{debug, info};

use crate::config::{PluginConfig, SonosAccount, SpotifyCredentials};
use crate::error::Result;
use crate::region::ServiceRegion;
use crate::transport::{QueueOutcome, QueueTransport};
use crate::translator::{SpotifyTranslator, Translation};

/// Enqueues Spotify items on one zone player
///
/// Construction validates the configuration, so a plugin with an unknown
/// service region never exists.
#[derive(Debug)]
pub struct SpotifyPlugin<T> {
    translator: SpotifyTranslator,
    account: SonosAccount,
    credentials: SpotifyCredentials,
    transport: T,
}

impl<T: QueueTransport> SpotifyPlugin<T> {
    pub fn new(config: PluginConfig, transport: T) -> Result<Self> {
        let region = config.validate()?;
        info!(%region, service_number = region.service_number(), "Spotify plugin configured");

        Ok(Self {
            translator: SpotifyTranslator::new(region),
            account: config.account,
            credentials: config.credentials,
            transport,
        })
    }

    pub fn name(&self) -> &'static str {
        "Spotify"
    }

    /// Build the queue request for a Spotify item without sending it
    pub fn didl_for(&self, title: &str, identifier: &str) -> Translation {
        self.translator.translate(title, identifier)
    }

    /// Add a Spotify album, track or playlist to the end of the queue
    ///
    /// Returns `Ok(None)` without touching the transport when `identifier`
    /// is not a Spotify resource reference.
    pub fn add_to_queue(&self, title: &str, identifier: &str) -> Result<Option<QueueOutcome>> {
        let Some(request) = self.didl_for(title, identifier).into_request() else {
            return Ok(None);
        };

        let outcome = self.transport.add_uri_to_queue(&request)?;
        debug!(
            uri = %request.enqueued_uri,
            tracks = outcome.num_tracks_added,
            queue_length = outcome.new_queue_length,
            "enqueued Spotify item"
        );
        Ok(Some(outcome))
    }

    pub fn translator(&self) -> &SpotifyTranslator {
        &self.translator
    }

    pub fn region(&self) -> ServiceRegion {
        self.translator.region()
    }

    pub fn account(&self) -> &SonosAccount {
        &self.account
    }

    pub fn credentials(&self) -> &SpotifyCredentials {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
