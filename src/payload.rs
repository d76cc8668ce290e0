//! # Payload Extraction
//!
//! The pure half of the transducer: scan a line for the payload marker and
//! decode the hex string that follows it into raw bytes.
//!
//! Matching uses the FIRST occurrence of the marker only, and the candidate
//! string is trimmed before decoding. Lines carrying the marker more than
//! once, or hex with embedded whitespace, are handed to the decoder as-is and
//! rejected there rather than being second-guessed here.

use crate::error::Result;
use bytes::Bytes;

/// Extract the candidate hex string following the first occurrence of `marker`.
///
/// Returns `None` when the line does not contain the marker. The candidate is
/// trimmed of leading and trailing whitespace, including the line terminator.
pub fn extract_hex_payload<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = line.split_once(marker)?;
    Some(rest.trim())
}

/// Decode a candidate hex string into payload bytes.
///
/// Requires an even number of hex digits (`0-9`, `a-f`, `A-F`); anything else
/// is a decode error. The empty string decodes to an empty payload.
pub fn decode_payload(candidate: &str) -> Result<Bytes> {
    let raw = hex::decode(candidate)?;
    Ok(Bytes::from(raw))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::config::DEFAULT_MARKER;
    use crate::error::BridgeError;

    #[test]
    fn line_without_marker_yields_nothing() {
        assert_eq!(extract_hex_payload("noise\n", DEFAULT_MARKER), None);
        assert_eq!(extract_hex_payload("", DEFAULT_MARKER), None);
        // "DATA:" without the trailing space is not the marker
        assert_eq!(extract_hex_payload("DATA:48\n", DEFAULT_MARKER), None);
    }

    #[test]
    fn candidate_is_trimmed() {
        assert_eq!(
            extract_hex_payload("LOG DATA: 48656c6c6f\n", DEFAULT_MARKER),
            Some("48656c6c6f")
        );
        assert_eq!(
            extract_hex_payload("DATA:   0a0b  \r\n", DEFAULT_MARKER),
            Some("0a0b")
        );
    }

    #[test]
    fn splits_on_first_marker_occurrence() {
        // Everything after the first marker is the candidate, repeated
        // markers included. The decoder rejects it downstream.
        let candidate = extract_hex_payload("x DATA: aa DATA: bb\n", DEFAULT_MARKER).unwrap();
        assert_eq!(candidate, "aa DATA: bb");
        assert!(decode_payload(candidate).is_err());
    }

    #[test]
    fn decodes_valid_hex() {
        let payload = decode_payload("48656c6c6f").unwrap();
        assert_eq!(payload.as_ref(), b"Hello");
    }

    #[test]
    fn decodes_mixed_case_hex() {
        let payload = decode_payload("DeadBEEF").unwrap();
        assert_eq!(payload.as_ref(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn empty_candidate_is_an_empty_payload() {
        let payload = decode_payload("").unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn odd_length_is_rejected() {
        let err = decode_payload("abc").unwrap_err();
        assert!(matches!(err, BridgeError::Decode(_)));
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        let err = decode_payload("ZZ").unwrap_err();
        assert!(matches!(err, BridgeError::Decode(_)));
    }
}
