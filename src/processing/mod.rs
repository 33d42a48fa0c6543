//! # Payload Processing and Steganography
//!
//! This module provides payload hiding and recovery using the Unicode
//! variation selector technique.

pub mod steganography;

// Re-export main functions for convenience
pub use steganography::{decode, encode};
