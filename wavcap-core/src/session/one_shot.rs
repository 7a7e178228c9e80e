use std::thread;
use std::time::{Duration, Instant};

use crate::models::buffer::CaptureBuffer;
use crate::models::error::CaptureError;
use crate::models::format::PcmFormat;
use crate::models::state::SessionState;
use crate::traits::input_device::InputDevice;

/// How often the completion flag is re-checked while recording.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Blocking one-shot capture session.
///
/// Owns an opened input device and drives a single-buffer recording
/// transaction against it: allocate, prepare, queue, start, wait for the
/// device to mark the buffer done, reset, unregister, release. Exactly
/// one recording is in flight at a time; `record` blocks the calling
/// thread until the device signals completion.
///
/// Every exit path out of `record`, normal or error, releases the buffer
/// registration exactly once, and resets the device whenever it reached
/// the queued or started state.
pub struct OneShotSession<D: InputDevice> {
    device: D,
    format: PcmFormat,
    poll_interval: Duration,
    wait_timeout: Option<Duration>,
    state: SessionState,
}

impl<D: InputDevice> OneShotSession<D> {
    /// Wrap an already-opened device. The session starts at `DeviceOpen`.
    pub fn new(device: D, format: PcmFormat) -> Self {
        Self {
            device,
            format,
            poll_interval: DEFAULT_POLL_INTERVAL,
            wait_timeout: None,
            state: SessionState::DeviceOpen,
        }
    }

    /// Limit how long `record` waits for the device to fill the buffer.
    ///
    /// By default the wait has no limit: if the device never signals
    /// completion, `record` blocks indefinitely. With a timeout set, an
    /// unresponsive device yields `CaptureError::Timeout` after the
    /// device has been reset and the buffer released.
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = Some(timeout);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn format(&self) -> &PcmFormat {
        &self.format
    }

    /// Capture `duration_secs` seconds of PCM audio and return the raw
    /// bytes, truncated to the count the device actually recorded.
    ///
    /// The returned payload may be shorter than `duration_secs` worth of
    /// audio; the device only guarantees the count reflects what was
    /// filled before the reset.
    pub fn record(&mut self, duration_secs: u32) -> Result<Vec<u8>, CaptureError> {
        let result = self.run_transaction(duration_secs);
        if let Err(ref e) = result {
            log::debug!("capture failed: {e}");
            self.state = SessionState::Failed(e.clone());
        }
        result
    }

    fn run_transaction(&mut self, duration_secs: u32) -> Result<Vec<u8>, CaptureError> {
        let len = self.format.buffer_len(duration_secs);
        let buffer = CaptureBuffer::allocate(len)?;
        log::debug!("capturing {duration_secs}s into a {len}-byte buffer");

        self.device.prepare(buffer)?;
        self.state = SessionState::BufferPrepared;
        let mut in_flight = InFlight::new(&mut self.device);

        in_flight.device.queue()?;
        in_flight.reset_on_exit = true;
        self.state = SessionState::Queued;

        in_flight.device.start()?;
        self.state = SessionState::Recording;

        let deadline = self.wait_timeout.map(|t| Instant::now() + t);
        while !in_flight.device.buffer_done() {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Err(CaptureError::Timeout);
                }
            }
            thread::sleep(self.poll_interval);
        }

        let buffer = in_flight.finish();
        let bytes_recorded = buffer.bytes_recorded();
        log::debug!("device reported {bytes_recorded} bytes recorded");
        self.state = SessionState::Complete { bytes_recorded };

        let bytes = buffer.into_recorded();
        self.state = SessionState::BufferReleased;
        Ok(bytes)
    }
}

/// Scoped cleanup for a buffer registered with the device.
///
/// Dropping the guard unregisters the buffer, resetting the device first
/// once it has reached the queued state. Each exit path out of the
/// transaction releases the registration exactly once without repeating
/// cleanup at every failure branch.
struct InFlight<'a, D: InputDevice> {
    device: &'a mut D,
    reset_on_exit: bool,
    finished: bool,
}

impl<'a, D: InputDevice> InFlight<'a, D> {
    fn new(device: &'a mut D) -> Self {
        Self {
            device,
            reset_on_exit: false,
            finished: false,
        }
    }

    /// Normal completion: reset the device unconditionally, then reclaim
    /// the buffer with its recorded-byte count.
    fn finish(mut self) -> CaptureBuffer {
        self.finished = true;
        self.device.reset();
        self.device.unprepare()
    }
}

impl<D: InputDevice> Drop for InFlight<'_, D> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if self.reset_on_exit {
            self.device.reset();
        }
        drop(self.device.unprepare());
    }
}
