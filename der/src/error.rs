use thiserror::Error;

/// Errors from the header stripper and the RSA key body parsers.
///
/// The stripper walks a fixed byte layout, so its errors carry the offset
/// it was inspecting and, where one was read, the observed byte.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key buffer is empty
    #[error("empty key")]
    EmptyKey,

    /// The outermost byte is not an ASN.1 SEQUENCE tag (0x30)
    #[error("not an ASN.1 SEQUENCE: byte {value:#04x} at offset {offset}")]
    NotSequence { offset: usize, value: u8 },

    /// The buffer is neither headerless nor a supported X.509 wrapping
    #[error("invalid X509 header: byte {value:#04x} at offset {offset}")]
    InvalidX509Header { offset: usize, value: u8 },

    /// The walk ran past the end of the buffer
    #[error("key data ends at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// PKCS#1 private keys must be two-prime version 0
    #[error("unsupported RSA private key version")]
    UnsupportedVersion,

    #[error("parser error {0:?}")]
    Parser(nom::error::ErrorKind),

    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::Parser(e.code),
        }
    }
}
