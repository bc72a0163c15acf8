//! Spotify service regions known to Sonos
//!
//! Sonos runs more than one Spotify integration. Each one has a service number
//! that appears in the `cdudn` descriptor of every enqueued item.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpotifyError;

/// A Spotify deployment as seen by Sonos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceRegion {
    /// Worldwide Spotify service
    #[default]
    Global,
    /// United States Spotify service
    Us,
}

impl ServiceRegion {
    /// Every recognized region
    pub const ALL: [ServiceRegion; 2] = [ServiceRegion::Global, ServiceRegion::Us];

    /// Get the configuration name of this region
    pub fn name(&self) -> &'static str {
        match self {
            ServiceRegion::Global => "global",
            ServiceRegion::Us => "us",
        }
    }

    /// Get the numeric Sonos service identifier for this region
    pub fn service_number(&self) -> u32 {
        match self {
            ServiceRegion::Global => 2311,
            ServiceRegion::Us => 3079,
        }
    }
}

impl fmt::Display for ServiceRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceRegion {
    type Err = SpotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceRegion::ALL
            .into_iter()
            .find(|region| region.name() == s)
            .ok_or_else(|| SpotifyError::UnknownRegion(s.to_string()))
    }
}

impl TryFrom<&str> for ServiceRegion {
    type Error = SpotifyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
