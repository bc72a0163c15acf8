//! Per-kind Sonos queue data for Spotify resources

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of Spotify resource an identifier points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Album,
    Track,
    Playlist,
}

/// Fixed Sonos data attached to each item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemKindDescriptor {
    /// Prepended to the encoded URN to form the `EnqueuedURI`
    pub prefix: &'static str,
    /// Prepended to the encoded URN to form the DIDL-Lite item id
    pub key: &'static str,
    /// UPnP class of the item
    pub class: &'static str,
}

static ALBUM: ItemKindDescriptor = ItemKindDescriptor {
    prefix: "x-rincon-cpcontainer:1004206c",
    key: "1004206c",
    class: "object.container.album.musicAlbum",
};

static TRACK: ItemKindDescriptor = ItemKindDescriptor {
    prefix: "",
    key: "00032020",
    class: "object.item.audioItem.musicTrack",
};

static PLAYLIST: ItemKindDescriptor = ItemKindDescriptor {
    prefix: "x-rincon-cpcontainer:1006206c",
    key: "1006206c",
    class: "object.container.playlistContainer",
};

impl ItemKind {
    /// Every item kind
    pub const ALL: [ItemKind; 3] = [ItemKind::Album, ItemKind::Track, ItemKind::Playlist];

    /// Get the tag used for this kind inside Spotify identifiers
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Album => "album",
            ItemKind::Track => "track",
            ItemKind::Playlist => "playlist",
        }
    }

    /// Look up a kind by its identifier tag. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Get the Sonos queue data for this kind
    pub fn descriptor(&self) -> &'static ItemKindDescriptor {
        match self {
            ItemKind::Album => &ALBUM,
            ItemKind::Track => &TRACK,
            ItemKind::Playlist => &PLAYLIST,
        }
    }

    /// Albums and playlists are enqueued as containers
    pub fn is_container(&self) -> bool {
        !matches!(self, ItemKind::Track)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
