use crate::models::buffer::CaptureBuffer;
use crate::models::error::CaptureError;

/// Low-level primitives of a waveform-audio input device.
///
/// Mirrors the single-buffer transaction `OneShotSession` drives: the
/// session registers exactly one buffer, queues it, starts the device,
/// polls for completion, then resets and unregisters. The device owns the
/// buffer between `prepare` and `unprepare`; at no point is it aliased.
///
/// Implemented by:
/// - `WaveInDevice` (Windows waveform-audio API)
/// - `MockDevice` (session tests)
pub trait InputDevice {
    /// Register `buffer` with the device subsystem, transferring
    /// ownership of it to the device.
    ///
    /// On failure the buffer is released before the error is returned;
    /// no partial registration remains.
    fn prepare(&mut self, buffer: CaptureBuffer) -> Result<(), CaptureError>;

    /// Submit the prepared buffer to the device's capture queue.
    fn queue(&mut self) -> Result<(), CaptureError>;

    /// Start the device capturing into queued buffers.
    fn start(&mut self) -> Result<(), CaptureError>;

    /// Whether the device has marked the in-flight buffer complete.
    ///
    /// Returns `false` when no buffer is registered.
    fn buffer_done(&self) -> bool;

    /// Force-stop the device, marking any queued buffer as done and
    /// returning the device to an idle state.
    ///
    /// Infallible by contract: driver-level complaints are logged by the
    /// implementation and otherwise ignored.
    fn reset(&mut self);

    /// Unregister the in-flight buffer and hand it back with its
    /// recorded-byte count filled in.
    ///
    /// # Panics
    ///
    /// Panics if no buffer is registered.
    fn unprepare(&mut self) -> CaptureBuffer;
}
