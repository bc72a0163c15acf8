//! DIDL-Lite metadata for Spotify queue items
//!
//! Sonos only accepts a Spotify item in `AddURIToQueue` when the metadata
//! carries the right item id, UPnP class and `cdudn` descriptor for the
//! Spotify service. The document is rendered from a fixed template; only the
//! four substituted fields vary between calls.
//!
//! DIDL-Lite format produced:
//! ```xml
//! <DIDL-Lite xmlns:dc="http://purl.org/dc/elements/1.1/" ...>
//!   <item id="00032020spotify%3atrack%3a..." parentID="R:0/0" restricted="true">
//!     <dc:title>Song Title</dc:title>
//!     <upnp:class>object.item.audioItem.musicTrack</upnp:class>
//!     <desc id="cdudn" nameSpace="urn:schemas-rinconnetworks-com:metadata-1-0/">SA_RINCON2311_X_#Svc2311-0-Token</desc>
//!   </item>
//! </DIDL-Lite>
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use xml::reader::ParserConfig;
use xmltree::Element;

use crate::error::{Result, SpotifyError};

const DIDL_OPEN: &str = concat!(
    r#"<DIDL-Lite xmlns:dc="http://purl.org/dc/elements/1.1/""#,
    r#" xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/""#,
    r#" xmlns:r="urn:schemas-rinconnetworks-com:metadata-1-0/""#,
    r#" xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/">"#,
);

const DIDL_CLOSE: &str = "</item></DIDL-Lite>";

/// Parent id Sonos expects for items enqueued from a music service
pub const PARENT_ID: &str = "R:0/0";

/// Escape a title for use as XML element content
///
/// Only `&`, `<` and `>` are replaced; quotes are left alone since the title
/// never lands in an attribute. Control characters that XML 1.0 forbids
/// (such as U+0001) pass through unchanged and make the document unparseable.
pub fn escape_title(title: &str) -> Cow<'_, str> {
    quick_xml::escape::partial_escape(title)
}

/// Account descriptor tying the item to a Sonos music service number
pub fn cdudn(service_number: u32) -> String {
    format!("SA_RINCON{sn}_X_#Svc{sn}-0-Token", sn = service_number)
}

/// Render the DIDL-Lite metadata document for one queue item
///
/// `title` is escaped here; `item_id` and `class` are inserted verbatim.
pub fn render_metadata(item_id: &str, title: &str, class: &str, service_number: u32) -> String {
    format!(
        concat!(
            "{open}",
            r#"<item id="{item_id}" parentID="{parent_id}" restricted="true">"#,
            "<dc:title>{title}</dc:title>",
            "<upnp:class>{class}</upnp:class>",
            r#"<desc id="cdudn" nameSpace="urn:schemas-rinconnetworks-com:metadata-1-0/">{desc}</desc>"#,
            "{close}",
        ),
        open = DIDL_OPEN,
        item_id = item_id,
        parent_id = PARENT_ID,
        title = escape_title(title),
        class = class,
        desc = cdudn(service_number),
        close = DIDL_CLOSE,
    )
}

/// A queue item read back out of DIDL-Lite metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidlItem {
    /// Item id (kind key followed by the encoded URN)
    pub id: String,

    /// Parent id, `R:0/0` for music service items
    pub parent_id: String,

    /// Value of the `restricted` attribute, if present
    pub restricted: Option<String>,

    /// Unescaped `dc:title` text
    pub title: String,

    /// `upnp:class` text
    pub class: String,

    /// `cdudn` descriptor text
    pub desc: Option<String>,
}

impl DidlItem {
    /// Parse the first `<item>` of a DIDL-Lite document.
    ///
    /// # Arguments
    ///
    /// * `xml` - The raw DIDL-Lite XML string
    ///
    /// # Returns
    ///
    /// The parsed item, or an error if the XML is malformed or has no item.
    pub fn from_xml(xml: &str) -> Result<Self> {
        // Whitespace-only text must survive as a title, not be dropped.
        let config = ParserConfig::new().whitespace_to_characters(true);
        let root = Element::parse_with_config(xml.as_bytes(), config)?;
        if root.name != "DIDL-Lite" {
            return Err(SpotifyError::Parse(format!(
                "Expected DIDL-Lite root element, found {}",
                root.name
            )));
        }

        let item = root
            .get_child("item")
            .ok_or_else(|| SpotifyError::Parse("Missing item element".to_string()))?;

        Ok(Self {
            id: item.attributes.get("id").cloned().unwrap_or_default(),
            parent_id: item.attributes.get("parentID").cloned().unwrap_or_default(),
            restricted: item.attributes.get("restricted").cloned(),
            title: child_text(item, "title").unwrap_or_default(),
            class: child_text(item, "class").unwrap_or_default(),
            desc: child_text(item, "desc"),
        })
    }
}

fn child_text(element: &Element, name: &str) -> Option<String> {
    element
        .get_child(name)
        .and_then(|e| e.get_text())
        .map(|text| text.into_owned())
}
