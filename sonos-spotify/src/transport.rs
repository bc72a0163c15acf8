//! Seam to the client that actually talks to the Sonos player

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::error::Result;
use crate::request::EnqueueRequest;

/// Something that can deliver an `AddURIToQueue` request to a zone player
///
/// Implemented by the application's UPnP/SOAP client. Delivery, retries and
/// timeouts are the implementor's concern.
pub trait QueueTransport {
    fn add_uri_to_queue(&self, request: &EnqueueRequest) -> Result<QueueOutcome>;
}

impl<T: QueueTransport + ?Sized> QueueTransport for &T {
    fn add_uri_to_queue(&self, request: &EnqueueRequest) -> Result<QueueOutcome> {
        (**self).add_uri_to_queue(request)
    }
}

/// Queue state reported back by `AddURIToQueue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueueOutcome {
    pub first_track_number_enqueued: u32,
    pub num_tracks_added: u32,
    pub new_queue_length: u32,
}

impl QueueOutcome {
    /// Read the outcome from an `AddURIToQueueResponse` element
    ///
    /// Missing or non-numeric fields read as 0.
    pub fn from_response(xml: &Element) -> Self {
        Self {
            first_track_number_enqueued: number(xml, "FirstTrackNumberEnqueued"),
            num_tracks_added: number(xml, "NumTracksAdded"),
            new_queue_length: number(xml, "NewQueueLength"),
        }
    }
}

fn number(xml: &Element, name: &str) -> u32 {
    xml.get_child(name)
        .and_then(|e| e.get_text())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}
