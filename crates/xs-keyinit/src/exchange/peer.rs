//! Peer public value cleanup.
//!
//! Older Windows agents append CRLF to keyinit responses, sometimes as the
//! escaped text `\r\n` rather than control characters. The key agreement
//! parses strictly, so transports run raw responses through here first.

/// Strip surrounding whitespace and `\`, `r`, `n` characters from a peer
/// public value. Decimal digits are never affected.
pub fn normalize_peer_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_ascii_whitespace() || matches!(c, '\\' | 'r' | 'n'))
}
