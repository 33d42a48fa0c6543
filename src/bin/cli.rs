//! # Offline Codec CLI
//!
//! Local encode/decode over the same codec the web server exposes, for use
//! without running the server.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin cli -- encode --base 😊 "meet at noon"
//! cargo run --bin cli -- decode "<paste the artifact here>"
//! ```
//!
//! `encode` prints the artifact to stdout; `decode` prints the recovered
//! payload as UTF-8 (with replacement characters for byte sequences that
//! are not valid text). Log lines go to stderr; only the codec output
//! lands on stdout.

use clap::{Parser, Subcommand};
use log::{info, warn};

use emoji_cloak::processing::steganography;
use emoji_cloak::utils::logging::init_logger;

/// Command-line arguments for the codec CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message behind a base character
    Encode {
        /// Visible character(s) the payload hides behind
        #[arg(short, long, default_value = "😊")]
        base: String,
        /// Message to hide
        text: String,
    },
    /// Recover the message hidden in a piece of text
    Decode {
        /// Text that may carry a hidden payload
        text: String,
    },
}

fn main() {
    init_logger();

    let args = Args::parse();

    match args.command {
        Command::Encode { base, text } => {
            info!("📤 Hiding {} bytes behind {:?}", text.len(), base);
            println!("{}", steganography::encode(&base, text.as_bytes()));
        }
        Command::Decode { text } => {
            let decoded = steganography::decode(&text);
            if decoded.is_empty() {
                warn!("🚫 No hidden payload in the input");
            } else {
                info!("📥 Recovered {} bytes", decoded.len());
            }
            println!("{}", String::from_utf8_lossy(&decoded));
        }
    }
}
