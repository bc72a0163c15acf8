use thiserror::Error;

/// Errors raised while configuring the plugin or handling its payloads
///
/// An identifier that does not look like a Spotify resource is not an error on
/// its own; `translate` reports it as [`Translation::NotRecognized`]. The
/// `UnrecognizedIdentifier` variant only appears when a caller asks for a
/// `Result` via [`Translation::into_result`].
///
/// [`Translation::NotRecognized`]: crate::Translation::NotRecognized
/// [`Translation::into_result`]: crate::Translation::into_result
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The configured region name has no Sonos service number
    #[error("Unknown Spotify service region '{0}' (expected one of: global, us)")]
    UnknownRegion(String),

    /// The identifier does not contain a Spotify album, track or playlist reference
    #[error("Unrecognized Spotify identifier: {0}")]
    UnrecognizedIdentifier(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// DIDL-Lite or SOAP response content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The queue transport failed to deliver the request
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Type alias for results that can return a SpotifyError
pub type Result<T> = std::result::Result<T, SpotifyError>;

impl From<xmltree::ParseError> for SpotifyError {
    fn from(error: xmltree::ParseError) -> Self {
        SpotifyError::Parse(error.to_string())
    }
}

impl From<serde_json::Error> for SpotifyError {
    fn from(error: serde_json::Error) -> Self {
        SpotifyError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpotifyError::UnknownRegion("eu".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown Spotify service region 'eu' (expected one of: global, us)"
        );

        let err = SpotifyError::UnrecognizedIdentifier("x-not-a-spotify-thing".to_string());
        assert_eq!(
            format!("{}", err),
            "Unrecognized Spotify identifier: x-not-a-spotify-thing"
        );

        let err = SpotifyError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", err), "Transport error: connection refused");
    }

    #[test]
    fn test_xml_error_conversion() {
        let xml_error = xmltree::Element::parse("<unclosed>".as_bytes()).unwrap_err();
        let err: SpotifyError = xml_error.into();
        assert!(matches!(err, SpotifyError::Parse(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SpotifyError = json_error.into();
        assert!(matches!(err, SpotifyError::Config(_)));
    }
}
