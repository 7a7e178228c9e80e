use thiserror::Error;

/// Errors raised while driving a one-shot capture transaction.
///
/// Every kind is fatal to the recording attempt in progress; nothing is
/// retried internally. Failure paths release whatever the attempt had
/// acquired before the error propagates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No input device could be opened with the requested format.
    #[error("no input device available")]
    DeviceUnavailable,

    /// The device subsystem rejected buffer registration.
    #[error("buffer registration failed: {0}")]
    PrepareFailed(String),

    /// The prepared buffer could not be submitted to the device queue.
    #[error("buffer submission failed: {0}")]
    QueueFailed(String),

    /// The device refused to start capturing.
    #[error("capture start failed: {0}")]
    StartFailed(String),

    /// The capture buffer could not be allocated.
    #[error("capture buffer allocation failed")]
    OutOfMemory,

    /// The payload exceeds what the container's 32-bit size fields can
    /// describe.
    #[error("payload of {0} bytes exceeds the WAV size limit")]
    PayloadTooLarge(usize),

    /// The device never signalled buffer completion within the configured
    /// wait limit.
    #[error("timed out waiting for the device to fill the buffer")]
    Timeout,
}
