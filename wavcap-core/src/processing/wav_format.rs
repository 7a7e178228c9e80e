//! WAV container encoding.
//!
//! Serializes raw PCM bytes into a standard 44-byte-header RIFF/WAVE
//! file. All multi-byte fields are written little-endian regardless of
//! host byte order.

use crate::models::error::CaptureError;
use crate::models::format::PcmFormat;

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Largest payload the 32-bit RIFF size fields can describe.
pub const MAX_PAYLOAD_LEN: usize = (u32::MAX - 36) as usize;

/// Encode `pcm` as a complete WAV file.
///
/// Pure and deterministic: identical inputs always produce identical
/// output byte sequences. An empty payload yields a minimal, valid
/// 44-byte file. Payloads above [`MAX_PAYLOAD_LEN`] are rejected with
/// `PayloadTooLarge` rather than silently wrapping the size fields.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    36 + data_size
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * channels * bits_per_sample / 8
/// [32-33]  block_align = channels * bits_per_sample / 8
/// [34-35]  bits_per_sample
/// [36-39]  "data"
/// [40-43]  data_size
/// [44..]   raw PCM samples
/// ```
pub fn encode_wav(pcm: &[u8], format: &PcmFormat) -> Result<Vec<u8>, CaptureError> {
    if pcm.len() > MAX_PAYLOAD_LEN {
        return Err(CaptureError::PayloadTooLarge(pcm.len()));
    }

    let data_size = pcm.len() as u32;
    let chunk_size = 36 + data_size;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + pcm.len());

    // RIFF chunk descriptor
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&chunk_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // PCM format chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM format code
    out.extend_from_slice(&format.channels.to_le_bytes());
    out.extend_from_slice(&format.sample_rate.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&format.block_align().to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    // data sub-chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(pcm);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn le32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn empty_payload_is_minimal_valid_file() {
        let out = encode_wav(&[], &PcmFormat::CD_STEREO).unwrap();
        assert_eq!(out.len(), WAV_HEADER_SIZE);
        assert_eq!(le32(&out, 4), 36);
        assert_eq!(le32(&out, 40), 0);
    }

    #[test]
    fn riff_magic() {
        let out = encode_wav(&[0; 8], &PcmFormat::CD_STEREO).unwrap();
        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(&out[8..12], b"WAVE");
        assert_eq!(&out[12..16], b"fmt ");
        assert_eq!(&out[36..40], b"data");
    }

    #[test]
    fn length_is_header_plus_payload() {
        for len in [0usize, 1, 3, 44, 1000] {
            let pcm = vec![0xAB; len];
            let out = encode_wav(&pcm, &PcmFormat::CD_STEREO).unwrap();
            assert_eq!(out.len(), WAV_HEADER_SIZE + len);
            assert_eq!(le32(&out, 4) as usize, 36 + len);
        }
    }

    #[test]
    fn cd_stereo_four_byte_payload() {
        let pcm = [0x00, 0x01, 0x02, 0x03];
        let out = encode_wav(&pcm, &PcmFormat::CD_STEREO).unwrap();

        assert_eq!(out.len(), 48);
        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(le32(&out, 4), 40);
        assert_eq!(&out[8..12], b"WAVE");
        assert_eq!(&out[12..16], b"fmt ");
        assert_eq!(le32(&out, 16), 16);
        assert_eq!(le16(&out, 20), 1);
        assert_eq!(le16(&out, 22), 2);
        assert_eq!(le32(&out, 24), 44_100);
        assert_eq!(le32(&out, 28), 176_400);
        assert_eq!(le16(&out, 32), 4);
        assert_eq!(le16(&out, 34), 16);
        assert_eq!(&out[36..40], b"data");
        assert_eq!(le32(&out, 40), 4);
        assert_eq!(&out[44..48], &pcm);
    }

    #[test]
    fn mono_8bit_format_fields() {
        let format = PcmFormat {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 8,
        };
        let out = encode_wav(&[0; 16], &format).unwrap();

        assert_eq!(le16(&out, 22), 1);
        assert_eq!(le32(&out, 24), 8_000);
        assert_eq!(le32(&out, 28), 8_000);
        assert_eq!(le16(&out, 32), 1);
        assert_eq!(le16(&out, 34), 8);
    }

    #[test]
    fn deterministic() {
        let pcm: Vec<u8> = (0..255).collect();
        let a = encode_wav(&pcm, &PcmFormat::CD_STEREO).unwrap();
        let b = encode_wav(&pcm, &PcmFormat::CD_STEREO).unwrap();
        assert_eq!(a, b);
    }
}
