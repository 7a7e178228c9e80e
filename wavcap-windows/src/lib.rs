//! # wavcap-windows
//!
//! Windows waveform-audio (winmm) backend for wavcap.
//!
//! Provides:
//! - `WaveInDevice` — single-buffer capture on the default input device
//!   via `waveInOpen` / `waveInPrepareHeader` / `waveInAddBuffer` /
//!   `waveInStart` / `waveInReset`
//!
//! ## Usage
//! ```ignore
//! use wavcap_core::{OneShotSession, PcmFormat};
//! use wavcap_windows::WaveInDevice;
//!
//! let format = PcmFormat::CD_STEREO;
//! let device = WaveInDevice::open(&format)?;
//! let mut session = OneShotSession::new(device, format);
//! let pcm = session.record(20)?;
//! ```

#[cfg(target_os = "windows")]
pub mod wave_in;

#[cfg(target_os = "windows")]
pub use wave_in::WaveInDevice;
