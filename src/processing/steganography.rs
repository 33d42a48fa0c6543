//! # Variation Selector Steganography
//!
//! Implements text hiding and recovery using Unicode variation selectors.
//!
//! ## Algorithm
//!
//! Unicode Plane 14 carries a contiguous block of 256 variation selector
//! codepoints starting at U+E0100 (VARIATION SELECTOR-17). Renderers treat a
//! variation selector they cannot apply as invisible, so a run of them can be
//! appended to any visible character without changing how the text looks.
//! That gives a direct 1:1 mapping between byte values and codepoints:
//!
//! ```text
//! codepoint = 0xE0100 + byte      byte = codepoint - 0xE0100
//! ```
//!
//! ### Encoding Process
//! 1. Copy the base character (emoji or letter) into the output verbatim
//! 2. For each payload byte, append the selector `char(0xE0100 + byte)`
//!
//! ### Decoding Process
//! 1. Scan codepoints left to right, skipping everything before the first
//!    selector (that prefix is the base character)
//! 2. Map each selector back to its byte value
//! 3. Stop at the first non-selector codepoint once payload bytes have been
//!    seen, so a caption pasted after the artifact is ignored
//!
//! ### Capacity
//! One codepoint per byte, with no length prefix or terminator. Each selector
//! occupies 4 bytes in UTF-8, so the artifact is roughly 4x the payload size
//! plus the base character.
//!
//! Both operations are total: every byte has a selector and every input
//! string decodes to a (possibly empty) byte sequence, so nothing here
//! returns `Result`.

/// First codepoint of the selector band, U+E0100 (VARIATION SELECTOR-17).
pub const VARIATION_SELECTOR_BASE: u32 = 0xE0100;

/// Width of the selector band: one codepoint per byte value.
pub const VARIATION_SELECTOR_COUNT: u32 = 256;

/// Map a byte value to its variation selector.
///
/// Every byte value 0-255 has a selector, so this cannot fail.
pub fn to_variation_selector(byte: u8) -> char {
    // The whole band lies below 0x10FFFF and outside the surrogate range,
    // so every codepoint in it is a valid scalar value.
    char::from_u32(VARIATION_SELECTOR_BASE + byte as u32)
        .expect("selector band contains only valid scalar values")
}

/// Map a character back to its byte value, or `None` if it lies outside the
/// selector band.
pub fn from_variation_selector(c: char) -> Option<u8> {
    let codepoint = c as u32;
    if (VARIATION_SELECTOR_BASE..VARIATION_SELECTOR_BASE + VARIATION_SELECTOR_COUNT)
        .contains(&codepoint)
    {
        Some((codepoint - VARIATION_SELECTOR_BASE) as u8)
    } else {
        None
    }
}

/// Hide `payload` behind `base` by appending one variation selector per byte.
///
/// The base string is copied verbatim and never examined: it may be empty, a
/// single letter, or a multi-codepoint emoji grapheme. The payload rides
/// behind it one selector per byte, in byte order.
///
/// # Arguments
/// - `base`: Visible character(s) the payload hides behind
/// - `payload`: Raw bytes to hide
///
/// # Example
/// ```
/// use emoji_cloak::processing::steganography::encode;
///
/// let artifact = encode("😊", b"hi");
/// assert_eq!(artifact, "😊\u{E0168}\u{E0169}");
/// ```
pub fn encode(base: &str, payload: &[u8]) -> String {
    // Each selector takes 4 bytes in UTF-8.
    let mut result = String::with_capacity(base.len() + payload.len() * 4);
    result.push_str(base);
    for &byte in payload {
        result.push(to_variation_selector(byte));
    }
    result
}

/// Recover the bytes hidden in `input`.
///
/// Codepoints before the first selector are skipped (that prefix is the base
/// character). Scanning stops at the first non-selector codepoint after at
/// least one byte has been decoded, so text trailing the artifact does not
/// contribute. An input with no selectors at all yields an empty vector.
///
/// # Arguments
/// - `input`: Text that may carry a hidden payload
///
/// # Example
/// ```
/// use emoji_cloak::processing::steganography::{decode, encode};
///
/// let artifact = encode("😊", b"hi");
/// assert_eq!(decode(&artifact), b"hi".to_vec());
/// assert_eq!(decode("no payload here"), Vec::<u8>::new());
/// ```
pub fn decode(input: &str) -> Vec<u8> {
    let mut decoded = Vec::new();
    for c in input.chars() {
        match from_variation_selector(c) {
            Some(byte) => decoded.push(byte),
            None if !decoded.is_empty() => break,
            None => continue,
        }
    }
    decoded
}
