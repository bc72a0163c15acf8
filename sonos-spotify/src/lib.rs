//! Spotify queueing for Sonos speakers
//!
//! This crate turns a Spotify album, track or playlist identifier into the
//! parameters of the AVTransport `AddURIToQueue` action, including the
//! DIDL-Lite metadata Sonos needs to resolve the item through its Spotify
//! service. Talking to the speaker and to the Spotify Web API is left to the
//! caller's clients.
//!
//! ```rust
//! use sonos_spotify::{ServiceRegion, SpotifyTranslator, Translation};
//!
//! let translator = SpotifyTranslator::new(ServiceRegion::Us);
//! match translator.translate("Midnight City", "spotify:track:1abCDe2") {
//!     Translation::Enqueue(request) => {
//!         assert_eq!(request.enqueued_uri, "spotify%3atrack%3a1abCDe2");
//!     }
//!     Translation::NotRecognized => unreachable!(),
//! }
//! ```

pub mod config;
pub mod didl;
pub mod error;
pub mod identifier;
pub mod kind;
pub mod logging;
pub mod plugin;
pub mod region;
pub mod request;
pub mod translator;
pub mod transport;

pub use config::{PluginConfig, SonosAccount, SpotifyCredentials};
pub use didl::DidlItem;
pub use error::{Result, SpotifyError};
pub use identifier::SpotifyId;
pub use kind::{ItemKind, ItemKindDescriptor};
pub use plugin::SpotifyPlugin;
pub use region::ServiceRegion;
pub use request::EnqueueRequest;
pub use translator::{SpotifyTranslator, Translation};
pub use transport::{QueueOutcome, QueueTransport};
