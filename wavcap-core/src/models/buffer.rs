use super::error::CaptureError;

/// A raw byte region sized for a fixed number of seconds of PCM audio,
/// plus the number of bytes the device actually filled.
///
/// The buffer has a single owner at every point in the transaction: the
/// session allocates it, hands it to the device backend for the duration
/// of the capture, and receives it back when the registration is undone.
#[derive(Debug)]
pub struct CaptureBuffer {
    data: Vec<u8>,
    bytes_recorded: u32,
}

impl CaptureBuffer {
    /// Allocate a zeroed buffer of `len` bytes.
    ///
    /// Allocation failure is reported as `OutOfMemory` rather than
    /// aborting the process.
    pub fn allocate(len: usize) -> Result<Self, CaptureError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| CaptureError::OutOfMemory)?;
        data.resize(len, 0);
        Ok(Self {
            data,
            bytes_recorded: 0,
        })
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Bytes the device reported filled before it was reset.
    pub fn bytes_recorded(&self) -> u32 {
        self.bytes_recorded
    }

    /// Record how many bytes the device filled. Counts beyond the
    /// buffer's capacity are clamped to it.
    pub fn set_bytes_recorded(&mut self, count: u32) {
        self.bytes_recorded = count.min(self.data.len() as u32);
    }

    /// Consume the buffer, returning the payload truncated to the
    /// recorded byte count.
    pub fn into_recorded(self) -> Vec<u8> {
        let mut data = self.data;
        data.truncate(self.bytes_recorded as usize);
        data
    }
}
