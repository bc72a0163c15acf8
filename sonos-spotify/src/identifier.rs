//! Spotify resource identifier parsing
//!
//! Spotify hands out identifiers as URNs (`spotify:track:4uLU6h...`) and as
//! share URLs (`https://open.spotify.com/track/4uLU6h...`). Both forms carry a
//! kind tag and a resource token after the `spotify` marker, which is all the
//! Sonos queue needs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::kind::ItemKind;

/// Unanchored: text before the marker and after the token is ignored.
static SPOTIFY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"spotify.*[:/](album|track|playlist)[:/](\w+)").expect("valid identifier pattern")
});

/// A Spotify album, track or playlist reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpotifyId {
    kind: ItemKind,
    token: String,
}

impl SpotifyId {
    /// Create an identifier from its parts
    pub fn new(kind: ItemKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    /// Search `identifier` for a Spotify resource reference
    ///
    /// Returns `None` when no `spotify ... {album|track|playlist}{:|/}{token}`
    /// sequence is present. When several kind/token pairs follow the marker,
    /// the last one wins.
    pub fn find(identifier: &str) -> Option<Self> {
        let captures = SPOTIFY_ID.captures(identifier)?;
        let kind = ItemKind::from_tag(captures.get(1)?.as_str())?;
        let token = captures.get(2)?.as_str();
        Some(Self::new(kind, token))
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Percent-encoded URN used in both the enqueue URI and the item id
    ///
    /// The separators are always written as `%3a`, whichever separator the
    /// source identifier used.
    pub fn encoded(&self) -> String {
        format!("spotify%3a{}%3a{}", self.kind.tag(), self.token)
    }
}

impl fmt::Display for SpotifyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spotify:{}:{}", self.kind.tag(), self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("spotify:track:1abCDe2", ItemKind::Track, "1abCDe2")]
    #[case("spotify:album:4aawyAB9vmqN3uQ7FjRGTy", ItemKind::Album, "4aawyAB9vmqN3uQ7FjRGTy")]
    #[case("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M", ItemKind::Playlist, "37i9dQZF1DXcBWIGoYBM5M")]
    #[case("https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6?si=abc", ItemKind::Track, "6rqhFgbbKwnb9MLmUQDhG6")]
    #[case("https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3", ItemKind::Album, "1DFixLWuPkv3KT3TnV35m3")]
    #[case("spotify:user:someone:playlist:5Rrf7mqN8uus2AaQQQNdc1", ItemKind::Playlist, "5Rrf7mqN8uus2AaQQQNdc1")]
    #[case("spotify/track:mixed_sep", ItemKind::Track, "mixed_sep")]
    #[case("  leading garbage spotify:album:abc trailing", ItemKind::Album, "abc")]
    fn test_find_recognized(#[case] input: &str, #[case] kind: ItemKind, #[case] token: &str) {
        let id = SpotifyId::find(input).unwrap();
        assert_eq!(id.kind(), kind);
        assert_eq!(id.token(), token);
    }

    #[rstest]
    #[case("x-not-a-spotify-thing")]
    #[case("spotify:artist:0OdUWJ0sBjDrqHygGUXeCF")]
    #[case("spotify:Track:1abCDe2")]
    #[case("spotify:track:")]
    #[case("track:1abCDe2")]
    #[case("")]
    fn test_find_unrecognized(#[case] input: &str) {
        assert_eq!(SpotifyId::find(input), None);
    }

    #[test]
    fn test_last_pair_wins() {
        let id = SpotifyId::find("spotify:album:first:track:second").unwrap();
        assert_eq!(id, SpotifyId::new(ItemKind::Track, "second"));
    }

    #[test]
    fn test_encoded_normalizes_separators() {
        let from_urn = SpotifyId::find("spotify:track:1abCDe2").unwrap();
        let from_url = SpotifyId::find("https://open.spotify.com/track/1abCDe2").unwrap();
        assert_eq!(from_urn.encoded(), "spotify%3atrack%3a1abCDe2");
        assert_eq!(from_urn.encoded(), from_url.encoded());
    }

    #[test]
    fn test_display_is_canonical_urn() {
        let id = SpotifyId::find("https://open.spotify.com/playlist/abc123").unwrap();
        assert_eq!(id.to_string(), "spotify:playlist:abc123");
    }
}
