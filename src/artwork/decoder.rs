//! Trait payload decoding.

use std::io::Read;

use async_trait::async_trait;
use flate2::read::ZlibDecoder;
use thiserror::Error;

/// Errors turning a hex payload back into an SVG document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("payload did not inflate to an SVG document: {0}")]
    Inflate(#[from] std::io::Error),
}

/// Boundary to the artwork decompression routine.
///
/// Implementations may fail per call; callers decide whether a failure is
/// isolated or fatal.
#[async_trait]
pub trait SvgDecoder: Send + Sync {
    async fn decode(&self, hex_payload: &str) -> Result<String, DecodeError>;
}

/// Default decoder: hex → zlib inflate → UTF-8 SVG document.
#[derive(Debug, Default, Clone)]
pub struct ZlibSvgDecoder;

#[async_trait]
impl SvgDecoder for ZlibSvgDecoder {
    async fn decode(&self, hex_payload: &str) -> Result<String, DecodeError> {
        let compressed = hex::decode(hex_payload.strip_prefix("0x").unwrap_or(hex_payload))?;

        let mut svg = String::new();
        ZlibDecoder::new(compressed.as_slice()).read_to_string(&mut svg)?;
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn deflate_hex(svg: &str) -> String {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(svg.as_bytes()).unwrap();
        hex::encode(encoder.finish().unwrap())
    }

    #[tokio::test]
    async fn test_decode_inflates_svg() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#;
        let payload = deflate_hex(svg);

        let decoded = ZlibSvgDecoder.decode(&payload).await.unwrap();
        assert_eq!(decoded, svg);
    }

    #[tokio::test]
    async fn test_decode_accepts_0x_prefix() {
        let svg = "<svg/>";
        let payload = format!("0x{}", deflate_hex(svg));

        let decoded = ZlibSvgDecoder.decode(&payload).await.unwrap();
        assert_eq!(decoded, svg);
    }

    #[tokio::test]
    async fn test_invalid_hex_is_hex_error() {
        let err = ZlibSvgDecoder.decode("zz-not-hex").await.unwrap_err();
        assert!(matches!(err, DecodeError::Hex(_)));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_inflate_error() {
        // Valid hex, but not a zlib stream.
        let err = ZlibSvgDecoder.decode("deadbeef").await.unwrap_err();
        assert!(matches!(err, DecodeError::Inflate(_)));
    }
}
