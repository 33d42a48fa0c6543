pub mod messages;
pub mod processing;
pub mod server;
pub mod utils;

pub use processing::steganography::{decode, encode};
pub use server::ServerConfig;
