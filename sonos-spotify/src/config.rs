//! Configuration for the Spotify plugin
//!
//! The region is the only value this crate interprets. Account and OAuth
//! settings are carried through untouched for the Sonos account lookup and
//! the Spotify Web API client that live outside this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpotifyError};
use crate::region::ServiceRegion;

/// OAuth settings for the Spotify Web API client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Space separated OAuth scopes
    #[serde(default)]
    pub scope: String,
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

/// The Sonos music service account the Spotify service is linked under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SonosAccount {
    pub username: String,
    pub service_type: String,
}

/// Complete plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Spotify service region name, `global` or `us`
    /// Default: "global"
    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub account: SonosAccount,

    pub credentials: SpotifyCredentials,
}

fn default_region() -> String {
    ServiceRegion::default().name().to_string()
}

impl PluginConfig {
    /// Create a configuration for the default region
    pub fn new(credentials: SpotifyCredentials) -> Self {
        Self {
            region: default_region(),
            account: SonosAccount::default(),
            credentials,
        }
    }

    /// Load configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// - `SONOS_SPOTIFY_REGION`: service region (default `global`)
    /// - `SONOS_SERVICE_USERNAME`, `SONOS_SERVICE_TYPE`: Sonos account (optional)
    /// - `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `SPOTIFY_REDIRECT_URI`: required
    /// - `SPOTIFY_SCOPE`: OAuth scopes (optional)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| SpotifyError::Config(format!("{} is not set", key)))
        };

        Ok(Self {
            region: lookup("SONOS_SPOTIFY_REGION").unwrap_or_else(default_region),
            account: SonosAccount {
                username: lookup("SONOS_SERVICE_USERNAME").unwrap_or_default(),
                service_type: lookup("SONOS_SERVICE_TYPE").unwrap_or_default(),
            },
            credentials: SpotifyCredentials {
                client_id: required("SPOTIFY_CLIENT_ID")?,
                client_secret: required("SPOTIFY_CLIENT_SECRET")?,
                redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
                scope: lookup("SPOTIFY_SCOPE").unwrap_or_default(),
            },
        })
    }

    /// Validate the configuration and resolve the service region
    pub fn validate(&self) -> Result<ServiceRegion> {
        self.region.parse()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_account(
        mut self,
        username: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        self.account = SonosAccount {
            username: username.into(),
            service_type: service_type.into(),
        };
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.credentials.scope = scope.into();
        self
    }
}
