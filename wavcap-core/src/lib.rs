//! # wavcap-core
//!
//! Platform-agnostic core for one-shot PCM audio capture.
//!
//! Drives a single-buffer blocking recording transaction against a device
//! backend and serializes the captured bytes as a RIFF/WAVE file.
//! Platform backends (Windows waveform-audio) implement the `InputDevice`
//! trait and plug into the generic `OneShotSession`.
//!
//! ## Architecture
//!
//! ```text
//! wavcap-core (this crate)
//! ├── traits/       ← InputDevice (prepare/queue/start/reset primitives)
//! ├── models/       ← CaptureError, SessionState, PcmFormat, CaptureBuffer
//! ├── processing/   ← WAV container encoding
//! └── session/      ← OneShotSession (blocking transaction driver)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::buffer::CaptureBuffer;
pub use models::error::CaptureError;
pub use models::format::PcmFormat;
pub use models::state::SessionState;
pub use processing::wav_format::{encode_wav, MAX_PAYLOAD_LEN, WAV_HEADER_SIZE};
pub use session::one_shot::OneShotSession;
pub use traits::input_device::InputDevice;
