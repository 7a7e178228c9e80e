//! Fixed-duration microphone recorder.
//!
//! Captures a compiled-in number of seconds from the default input device
//! and writes the result to `recording.wav` in the working directory.
//! Exits non-zero and reports the error kind if any capture stage fails.

use std::process::ExitCode;

/// Seconds of audio captured per run.
#[cfg(target_os = "windows")]
const DURATION_SECS: u32 = 20;

/// Output file, written into the working directory.
#[cfg(target_os = "windows")]
const OUTPUT_FILE: &str = "recording.wav";

#[cfg(target_os = "windows")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use wavcap_core::{encode_wav, CaptureError, OneShotSession, PcmFormat};
    use wavcap_windows::WaveInDevice;

    if !WaveInDevice::is_available() {
        return Err(CaptureError::DeviceUnavailable.into());
    }

    let format = PcmFormat::CD_STEREO;
    let device = WaveInDevice::open(&format)?;
    let mut session = OneShotSession::new(device, format);

    println!("Recording {DURATION_SECS} seconds of audio...");
    let pcm = session.record(DURATION_SECS)?;

    println!("Saving as {OUTPUT_FILE}...");
    let encoded = encode_wav(&pcm, &format)?;
    std::fs::write(OUTPUT_FILE, encoded)?;

    Ok(())
}

#[cfg(target_os = "windows")]
fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("recording failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn main() -> ExitCode {
    eprintln!("wavcap records through the Windows waveform-audio API and only runs on Windows");
    ExitCode::FAILURE
}
