//! Spotify identifier to `AddURIToQueue` translation

use tracing::debug;

use crate::didl;
use crate::error::{Result, SpotifyError};
use crate::identifier::SpotifyId;
use crate::region::ServiceRegion;
use crate::request::EnqueueRequest;

/// Outcome of translating one identifier
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The identifier named a Spotify album, track or playlist
    Enqueue(EnqueueRequest),
    /// The identifier is not a Spotify resource reference
    NotRecognized,
}

impl Translation {
    /// Check if the identifier was recognized
    pub fn is_recognized(&self) -> bool {
        matches!(self, Translation::Enqueue(_))
    }

    /// Get the request if the identifier was recognized
    pub fn into_request(self) -> Option<EnqueueRequest> {
        match self {
            Translation::Enqueue(request) => Some(request),
            Translation::NotRecognized => None,
        }
    }

    /// Get a reference to the request if the identifier was recognized
    pub fn request(&self) -> Option<&EnqueueRequest> {
        match self {
            Translation::Enqueue(request) => Some(request),
            Translation::NotRecognized => None,
        }
    }

    /// Convert into a `Result`, reporting `identifier` when it was not recognized
    pub fn into_result(self, identifier: &str) -> Result<EnqueueRequest> {
        self.into_request()
            .ok_or_else(|| SpotifyError::UnrecognizedIdentifier(identifier.to_string()))
    }
}

/// Builds Sonos queue requests for Spotify identifiers
///
/// Holds only the service region, so it is cheap to copy and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpotifyTranslator {
    region: ServiceRegion,
}

impl SpotifyTranslator {
    pub fn new(region: ServiceRegion) -> Self {
        Self { region }
    }

    /// Create a translator from a configured region name
    ///
    /// Fails with [`SpotifyError::UnknownRegion`] for anything but `global`
    /// or `us`.
    pub fn from_region_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn region(&self) -> ServiceRegion {
        self.region
    }

    /// Translate a title and Spotify identifier into an enqueue request
    ///
    /// # Arguments
    /// * `title` - Display title, escaped into the DIDL-Lite metadata
    /// * `identifier` - Spotify URN or share URL
    ///
    /// # Returns
    /// [`Translation::NotRecognized`] when `identifier` does not reference a
    /// Spotify album, track or playlist.
    pub fn translate(&self, title: &str, identifier: &str) -> Translation {
        let Some(id) = SpotifyId::find(identifier) else {
            debug!(identifier, "identifier is not a Spotify resource");
            return Translation::NotRecognized;
        };

        Translation::Enqueue(self.request_for(title, &id))
    }

    /// Build the enqueue request for an already parsed identifier
    pub fn request_for(&self, title: &str, id: &SpotifyId) -> EnqueueRequest {
        let descriptor = id.kind().descriptor();
        let encoded = id.encoded();
        let item_id = format!("{}{}", descriptor.key, encoded);
        let metadata = didl::render_metadata(
            &item_id,
            title,
            descriptor.class,
            self.region.service_number(),
        );

        debug!(
            kind = %id.kind(),
            container = id.kind().is_container(),
            token = id.token(),
            region = %self.region,
            "built enqueue request"
        );

        EnqueueRequest::new(format!("{}{}", descriptor.prefix, encoded), metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ItemKind;
    use rstest::rstest;

    #[test]
    fn test_translate_track() {
        let translator = SpotifyTranslator::new(ServiceRegion::Us);
        let request = translator
            .translate("Midnight City", "spotify:track:1abCDe2")
            .into_request()
            .unwrap();

        assert_eq!(request.enqueued_uri, "spotify%3atrack%3a1abCDe2");
        let item = request.metadata().unwrap();
        assert_eq!(item.id, "00032020spotify%3atrack%3a1abCDe2");
        assert_eq!(item.class, "object.item.audioItem.musicTrack");
        assert_eq!(item.desc.as_deref(), Some("SA_RINCON3079_X_#Svc3079-0-Token"));
    }

    #[rstest]
    #[case(
        ItemKind::Album,
        "spotify:album:abc",
        "x-rincon-cpcontainer:1004206cspotify%3aalbum%3aabc"
    )]
    #[case(
        ItemKind::Playlist,
        "https://open.spotify.com/playlist/abc",
        "x-rincon-cpcontainer:1006206cspotify%3aplaylist%3aabc"
    )]
    fn test_translate_containers(
        #[case] kind: ItemKind,
        #[case] identifier: &str,
        #[case] uri: &str,
    ) {
        assert!(kind.is_container());
        let translator = SpotifyTranslator::default();
        let request = translator.translate("Container", identifier).into_request().unwrap();
        assert_eq!(request.enqueued_uri, uri);

        let item = request.metadata().unwrap();
        assert_eq!(item.class, kind.descriptor().class);
        assert_eq!(item.desc.as_deref(), Some("SA_RINCON2311_X_#Svc2311-0-Token"));
    }

    #[test]
    fn test_translate_unrecognized() {
        let translator = SpotifyTranslator::default();
        let translation = translator.translate("Anything", "x-not-a-spotify-thing");
        assert_eq!(translation, Translation::NotRecognized);
        assert!(!translation.is_recognized());
        assert!(translation.request().is_none());
    }

    #[test]
    fn test_into_result() {
        let translator = SpotifyTranslator::default();
        let err = translator
            .translate("Anything", "spotify:artist:abc")
            .into_result("spotify:artist:abc")
            .unwrap_err();
        assert!(matches!(
            err,
            SpotifyError::UnrecognizedIdentifier(id) if id == "spotify:artist:abc"
        ));

        assert!(translator
            .translate("Song", "spotify:track:abc")
            .into_result("spotify:track:abc")
            .is_ok());
    }

    #[test]
    fn test_from_region_name() {
        assert_eq!(
            SpotifyTranslator::from_region_name("us").unwrap().region(),
            ServiceRegion::Us
        );
        assert!(matches!(
            SpotifyTranslator::from_region_name("eu"),
            Err(SpotifyError::UnknownRegion(_))
        ));
    }
}
