use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Failure decoding a Base64 payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed Base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes a string to Base64 format.
///
/// The input is expanded to its UTF-8 bytes first, so non-ASCII text
/// round-trips through [`base64_decode`].
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes a Base64 string to its original form.
///
/// Accepts payloads with or without padding. Malformed Base64 and payloads
/// that are not valid UTF-8 are reported as errors, not swallowed.
pub fn base64_decode(input: &str) -> Result<String, DecodeError> {
    let input = input.trim();
    let decoded = general_purpose::STANDARD
        .decode(input)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(input.trim_end_matches('=')))?;
    Ok(String::from_utf8(decoded)?)
}

/// Decodes a URL-safe Base64 string to its original form.
///
/// Share links copied from other clients frequently use the URL-safe
/// alphabet, usually without padding.
pub fn url_safe_base64_decode(input: &str) -> Result<String, DecodeError> {
    let input = input.trim();
    let decoded = general_purpose::URL_SAFE
        .decode(input)
        .or_else(|_| general_purpose::URL_SAFE_NO_PAD.decode(input.trim_end_matches('=')))?;
    Ok(String::from_utf8(decoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip_ascii() {
        let encoded = base64_encode("hello");
        assert_eq!(encoded, "aGVsbG8=");
        assert_eq!(base64_decode(&encoded).unwrap(), "hello");
    }

    #[test]
    fn test_base64_round_trip_non_ascii() {
        let original = "héllo世界";
        let decoded = base64_decode(&base64_encode(original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_base64_decode_unpadded() {
        assert_eq!(base64_decode("aGVsbG8").unwrap(), "hello");
    }

    #[test]
    fn test_base64_decode_invalid() {
        assert!(base64_decode("not base64!!").is_err());
    }

    #[test]
    fn test_base64_decode_invalid_utf8() {
        // 0xFF 0xFE is valid Base64 content but not valid UTF-8
        assert!(matches!(
            base64_decode("//4="),
            Err(DecodeError::Utf8(_))
        ));
    }

    #[test]
    fn test_url_safe_decode() {
        // "subjects?_d" encodes to c3ViamVjdHM_X2Q= in the URL-safe alphabet
        assert_eq!(
            url_safe_base64_decode("c3ViamVjdHM_X2Q").unwrap(),
            "subjects?_d"
        );
    }
}
