use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when parsing or decoding PEM data.
///
/// Parsing is deliberately permissive: envelope lines are discarded
/// wherever they appear and stray non-base64 bytes in the body are
/// skipped. The errors below cover what remains fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No body remained after discarding the envelope lines
    #[error("missing PEM data")]
    MissingData,

    /// The base64 body decoded to zero bytes
    #[error("PEM body decoded to zero bytes")]
    EmptyData,

    /// The label in the boundary marker is not recognized
    #[error("invalid label")]
    InvalidLabel,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
