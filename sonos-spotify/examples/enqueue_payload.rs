//! Print the AddURIToQueue payload for a Spotify identifier
//!
//! Usage:
//! ```bash
//! cargo run -p sonos-spotify --example enqueue_payload -- us "Midnight City" spotify:track:1abCDe2
//! ```
//!
//! Set `SONOS_SPOTIFY_LOG_MODE=debug` (or `development`) to see the
//! translation events, and `SONOS_SPOTIFY_LOG` to filter them.

use sonos_spotify::logging::{init_logging, mode_from_name};
use sonos_spotify::{request, SpotifyTranslator, Translation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mode =
        std::env::var("SONOS_SPOTIFY_LOG_MODE").unwrap_or_else(|_| "development".to_string());
    init_logging(mode_from_name(&mode))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [region, title, identifier] = args.as_slice() else {
        eprintln!("usage: enqueue_payload <global|us> <title> <spotify identifier>");
        std::process::exit(2);
    };

    let translator = SpotifyTranslator::from_region_name(region)?;

    match translator.translate(title, identifier) {
        Translation::Enqueue(request) => {
            println!("Action:  {}#{}", request::SERVICE_URI, request::ACTION);
            for (name, value) in request.params() {
                println!("{:<32} {}", name, value);
            }
            println!();
            println!("SOAP body:");
            println!("{}", request.to_soap_payload());
        }
        Translation::NotRecognized => {
            eprintln!("'{}' is not a Spotify album, track or playlist", identifier);
            std::process::exit(1);
        }
    }

    Ok(())
}
