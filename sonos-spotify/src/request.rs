//! Parameters for the AVTransport `AddURIToQueue` action

use serde::{Deserialize, Serialize};

use crate::didl::DidlItem;
use crate::error::Result;

/// SOAP action that enqueues a URI on a Sonos zone player
pub const ACTION: &str = "AddURIToQueue";

/// UPnP service the action belongs to
pub const SERVICE_URI: &str = "urn:schemas-upnp-org:service:AVTransport:1";

/// A ready-to-send `AddURIToQueue` request for one Spotify item
///
/// Built fresh for every translation. Parameter names and their order are
/// fixed by the AVTransport service; see [`EnqueueRequest::params`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnqueueRequest {
    pub instance_id: u32,
    pub enqueued_uri: String,
    pub enqueued_uri_meta_data: String,
    pub desired_first_track_number_enqueued: u32,
    pub enqueue_as_next: bool,
}

impl EnqueueRequest {
    /// Create a request that appends `enqueued_uri` to the end of queue 0
    pub fn new(enqueued_uri: String, enqueued_uri_meta_data: String) -> Self {
        Self {
            instance_id: 0,
            enqueued_uri,
            enqueued_uri_meta_data,
            desired_first_track_number_enqueued: 0,
            enqueue_as_next: false,
        }
    }

    /// Action parameters in protocol order
    pub fn params(&self) -> [(&'static str, String); 5] {
        [
            ("InstanceID", self.instance_id.to_string()),
            ("EnqueuedURI", self.enqueued_uri.clone()),
            ("EnqueuedURIMetaData", self.enqueued_uri_meta_data.clone()),
            (
                "DesiredFirstTrackNumberEnqueued",
                self.desired_first_track_number_enqueued.to_string(),
            ),
            ("EnqueueAsNext", if self.enqueue_as_next { "1" } else { "0" }.to_string()),
        ]
    }

    /// Render the parameters as the body of the SOAP action element
    ///
    /// Values are escaped, so the DIDL-Lite metadata travels as text rather
    /// than as nested markup.
    pub fn to_soap_payload(&self) -> String {
        self.params()
            .iter()
            .map(|(name, value)| {
                format!("<{name}>{}</{name}>", quick_xml::escape::escape(value.as_str()))
            })
            .collect()
    }

    /// Parse the embedded DIDL-Lite metadata
    pub fn metadata(&self) -> Result<DidlItem> {
        DidlItem::from_xml(&self.enqueued_uri_meta_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnqueueRequest {
        EnqueueRequest::new(
            "x-rincon-cpcontainer:1004206cspotify%3aalbum%3aabc".to_string(),
            r#"<DIDL-Lite><item id="1004206cspotify%3aalbum%3aabc" parentID="R:0/0"><dc:title>A &amp; B</dc:title></item></DIDL-Lite>"#.to_string(),
        )
    }

    #[test]
    fn test_params_order_and_defaults() {
        let params = sample().params();
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "InstanceID",
                "EnqueuedURI",
                "EnqueuedURIMetaData",
                "DesiredFirstTrackNumberEnqueued",
                "EnqueueAsNext",
            ]
        );
        assert_eq!(params[0].1, "0");
        assert_eq!(params[1].1, "x-rincon-cpcontainer:1004206cspotify%3aalbum%3aabc");
        assert_eq!(params[3].1, "0");
        assert_eq!(params[4].1, "0");
    }

    #[test]
    fn test_enqueue_as_next_flag() {
        let mut request = sample();
        request.enqueue_as_next = true;
        assert_eq!(request.params()[4].1, "1");
    }

    #[test]
    fn test_soap_payload_escapes_metadata() {
        let payload = sample().to_soap_payload();
        assert!(payload.starts_with("<InstanceID>0</InstanceID><EnqueuedURI>"));
        assert!(payload.contains("<EnqueuedURIMetaData>&lt;DIDL-Lite&gt;&lt;item id=&quot;"));
        assert!(payload.contains("A &amp;amp; B"));
        assert!(payload.ends_with(
            "<DesiredFirstTrackNumberEnqueued>0</DesiredFirstTrackNumberEnqueued><EnqueueAsNext>0</EnqueueAsNext>"
        ));
    }

    #[test]
    fn test_soap_payload_parses_back() {
        let request = sample();
        let wrapped = format!(
            r#"<u:{ACTION} xmlns:u="{SERVICE_URI}">{}</u:{ACTION}>"#,
            request.to_soap_payload()
        );
        let element = xmltree::Element::parse(wrapped.as_bytes()).unwrap();
        let metadata = element
            .get_child("EnqueuedURIMetaData")
            .and_then(|e| e.get_text())
            .unwrap();
        assert_eq!(metadata, request.enqueued_uri_meta_data);
    }

    #[test]
    fn test_serde_fixture() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["instance_id"], 0);
        assert_eq!(json["enqueue_as_next"], false);
    }
}
