//! Image header probing
//!
//! The terminal backend cannot show pixels, but it still insists on a real
//! PNG so a missing or broken sprite fails at startup instead of mid-game.

use crate::error::AssetError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
/// Signature, chunk length, `IHDR`, width, height
const HEADER_LEN: usize = 24;

/// Width and height from a PNG's IHDR chunk
pub fn png_dimensions(bytes: &[u8]) -> Result<(u32, u32), AssetError> {
    if bytes.len() < PNG_SIGNATURE.len() || bytes[..8] != PNG_SIGNATURE {
        return Err(AssetError::NotPng);
    }
    if bytes.len() < HEADER_LEN {
        return Err(AssetError::TruncatedHeader { len: bytes.len() });
    }
    if &bytes[12..16] != b"IHDR" {
        return Err(AssetError::NotPng);
    }

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    if width == 0 || height == 0 {
        return Err(AssetError::ZeroDimension { width, height });
    }
    Ok((width, height))
}

#[cfg(test)]
pub(crate) fn fake_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_dimensions() {
        assert_eq!(png_dimensions(&fake_png(50, 40)), Ok((50, 40)));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert_eq!(png_dimensions(b"GIF89a......"), Err(AssetError::NotPng));
        assert_eq!(png_dimensions(&[]), Err(AssetError::NotPng));
    }

    #[test]
    fn test_rejects_truncated() {
        let png = fake_png(1, 1);
        assert_eq!(
            png_dimensions(&png[..20]),
            Err(AssetError::TruncatedHeader { len: 20 })
        );
    }

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(
            png_dimensions(&fake_png(0, 10)),
            Err(AssetError::ZeroDimension {
                width: 0,
                height: 10
            })
        );
    }
}
