//! Base64 encoding and JSON-over-base64 (de)serialization.

use crate::core::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| Error::encoding_invalid_base64(e.to_string()))
}

/// Serialize a value to JSON and wrap it in base64, for embedding
/// structured payloads in places that only accept opaque strings.
pub fn encode_json_base64<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)
        .map_err(|e| Error::internal_json(e.to_string(), Some("encode payload".to_string())))?;
    Ok(STANDARD.encode(json))
}

/// Inverse of [`encode_json_base64`]. Distinguishes a malformed base64
/// wrapper from malformed JSON inside it.
pub fn decode_json_base64<T: DeserializeOwned>(encoded: &str) -> Result<T> {
    let bytes = decode_base64(encoded)?;
    serde_json::from_slice(&bytes).map_err(|e| Error::validation_invalid_json(e, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCode;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        id: u32,
        slug: String,
    }

    #[test]
    fn encodes_known_vector() {
        assert_eq!(encode_base64(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn decode_rejects_invalid_input() {
        let err = decode_base64("not%%base64").unwrap_err();
        assert_eq!(err.code, ErrorCode::EncodingInvalidBase64);
    }

    #[test]
    fn json_payload_roundtrips() {
        let payload = Payload {
            id: 7,
            slug: "hello-world".to_string(),
        };
        let encoded = encode_json_base64(&payload).unwrap();
        let decoded: Payload = decode_json_base64(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn valid_base64_invalid_json_is_json_error() {
        let encoded = encode_base64(b"not json");
        let err = decode_json_base64::<Payload>(&encoded).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidJson);
    }
}
