/// PCM format parameters for a capture session.
///
/// Immutable once constructed. Block alignment and byte rate are always
/// derived from the three stored fields, never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,

    /// Sample rate in samples per second.
    pub sample_rate: u32,

    /// Bits per sample (8 or 16).
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// CD-quality stereo: 2 channels, 44 100 Hz, 16 bits per sample.
    /// Yields 176 400 bytes per second of audio.
    pub const CD_STEREO: Self = Self {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
    };

    /// Minimum byte granularity of one complete multi-channel sample.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Bytes of PCM data per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Capture buffer size for `duration_secs` seconds at this format.
    pub fn buffer_len(&self, duration_secs: u32) -> usize {
        self.byte_rate() as usize * duration_secs as usize
    }

    pub fn validate(&self) -> Result<(), String> {
        if ![1, 2].contains(&self.channels) {
            return Err(format!("unsupported channel count: {}", self.channels));
        }
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if ![8, 16].contains(&self.bits_per_sample) {
            return Err(format!("unsupported bit depth: {}", self.bits_per_sample));
        }
        Ok(())
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::CD_STEREO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cd_stereo_constants() {
        let format = PcmFormat::CD_STEREO;
        assert_eq!(format.block_align(), 4);
        assert_eq!(format.byte_rate(), 176_400);
        assert_eq!(format.buffer_len(20), 3_528_000);
    }

    #[test]
    fn derived_fields_hold_by_construction() {
        let format = PcmFormat {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 8,
        };
        assert_eq!(format.block_align(), 1);
        assert_eq!(format.byte_rate(), 8_000);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(PcmFormat::CD_STEREO.validate().is_ok());

        let bad_channels = PcmFormat { channels: 3, ..PcmFormat::CD_STEREO };
        assert!(bad_channels.validate().is_err());

        let bad_depth = PcmFormat { bits_per_sample: 24, ..PcmFormat::CD_STEREO };
        assert!(bad_depth.validate().is_err());

        let bad_rate = PcmFormat { sample_rate: 0, ..PcmFormat::CD_STEREO };
        assert!(bad_rate.validate().is_err());
    }
}
