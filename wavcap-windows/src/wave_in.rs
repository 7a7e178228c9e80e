//! Waveform-audio input device binding.
//!
//! Wraps the winmm waveIn API in the single-buffer transaction shape
//! `OneShotSession` drives: one prepared `WAVEHDR` at a time, completion
//! signalled through the `WHDR_DONE` flag the driver sets on the header.

use std::mem;
use std::ptr;

use windows::core::PSTR;
use windows::Win32::Media::Audio::*;

use wavcap_core::models::buffer::CaptureBuffer;
use wavcap_core::models::error::CaptureError;
use wavcap_core::models::format::PcmFormat;
use wavcap_core::traits::input_device::InputDevice;

/// The `WAVEHDR` handed to the driver plus the buffer it records into.
///
/// The header is boxed so its address stays stable for as long as the
/// driver holds it, between prepare and unprepare.
struct InFlightHeader {
    header: Box<WAVEHDR>,
    buffer: CaptureBuffer,
}

/// Default waveform-audio input device, opened for a fixed PCM format.
///
/// Dropping the device resets it before closing the handle; the handle
/// cannot be closed while a queued buffer is still pending.
pub struct WaveInDevice {
    handle: HWAVEIN,
    in_flight: Option<InFlightHeader>,
}

impl WaveInDevice {
    /// Number of waveform-audio input devices present on the system.
    pub fn count() -> u32 {
        unsafe { waveInGetNumDevs() }
    }

    /// Whether at least one input device is present.
    pub fn is_available() -> bool {
        Self::count() > 0
    }

    /// Open the default input device (`WAVE_MAPPER`) for `format`.
    pub fn open(format: &PcmFormat) -> Result<Self, CaptureError> {
        let wfx = WAVEFORMATEX {
            wFormatTag: WAVE_FORMAT_PCM as u16,
            nChannels: format.channels,
            nSamplesPerSec: format.sample_rate,
            nAvgBytesPerSec: format.byte_rate(),
            nBlockAlign: format.block_align(),
            wBitsPerSample: format.bits_per_sample,
            cbSize: 0,
        };

        let mut handle = HWAVEIN::default();
        let rc = unsafe { waveInOpen(Some(&mut handle), WAVE_MAPPER, &wfx, 0, 0, CALLBACK_NULL) };
        if rc != MMSYSERR_NOERROR {
            log::error!("waveInOpen failed with code {rc}");
            return Err(CaptureError::DeviceUnavailable);
        }

        Ok(Self {
            handle,
            in_flight: None,
        })
    }
}

impl InputDevice for WaveInDevice {
    fn prepare(&mut self, buffer: CaptureBuffer) -> Result<(), CaptureError> {
        let len = u32::try_from(buffer.capacity()).map_err(|_| {
            CaptureError::PrepareFailed(format!(
                "buffer of {} bytes exceeds the device's 32-bit length field",
                buffer.capacity()
            ))
        })?;

        let mut entry = InFlightHeader {
            header: Box::new(WAVEHDR::default()),
            buffer,
        };
        entry.header.lpData = PSTR(entry.buffer.as_mut_slice().as_mut_ptr());
        entry.header.dwBufferLength = len;
        entry.header.dwFlags = 0;

        let rc = unsafe {
            waveInPrepareHeader(self.handle, &mut *entry.header, mem::size_of::<WAVEHDR>() as u32)
        };
        if rc != MMSYSERR_NOERROR {
            // `entry` drops here, releasing the buffer.
            return Err(CaptureError::PrepareFailed(format!(
                "waveInPrepareHeader failed with code {rc}"
            )));
        }

        self.in_flight = Some(entry);
        Ok(())
    }

    fn queue(&mut self) -> Result<(), CaptureError> {
        let entry = self
            .in_flight
            .as_mut()
            .expect("no capture buffer registered");
        let rc = unsafe {
            waveInAddBuffer(self.handle, &mut *entry.header, mem::size_of::<WAVEHDR>() as u32)
        };
        if rc != MMSYSERR_NOERROR {
            return Err(CaptureError::QueueFailed(format!(
                "waveInAddBuffer failed with code {rc}"
            )));
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), CaptureError> {
        let rc = unsafe { waveInStart(self.handle) };
        if rc != MMSYSERR_NOERROR {
            return Err(CaptureError::StartFailed(format!(
                "waveInStart failed with code {rc}"
            )));
        }
        Ok(())
    }

    fn buffer_done(&self) -> bool {
        let Some(entry) = self.in_flight.as_ref() else {
            return false;
        };
        // The driver updates dwFlags from its own thread.
        let flags = unsafe { ptr::read_volatile(&entry.header.dwFlags) };
        flags & WHDR_DONE != 0
    }

    fn reset(&mut self) {
        let rc = unsafe { waveInReset(self.handle) };
        if rc != MMSYSERR_NOERROR {
            log::warn!("waveInReset failed with code {rc}");
        }
    }

    fn unprepare(&mut self) -> CaptureBuffer {
        let mut entry = self
            .in_flight
            .take()
            .expect("no capture buffer registered");
        let rc = unsafe {
            waveInUnprepareHeader(self.handle, &mut *entry.header, mem::size_of::<WAVEHDR>() as u32)
        };
        if rc != MMSYSERR_NOERROR {
            log::warn!("waveInUnprepareHeader failed with code {rc}");
        }

        entry.buffer.set_bytes_recorded(entry.header.dwBytesRecorded);
        entry.buffer
    }
}

impl Drop for WaveInDevice {
    fn drop(&mut self) {
        // Reset first: the handle cannot close while a buffer is pending.
        unsafe {
            waveInReset(self.handle);
            waveInClose(self.handle);
        }
    }
}
