use thiserror::Error;

/// Errors raised while importing keys or framing cipher blocks.
///
/// Malformed input surfaces through the `Pem` and `Der` variants,
/// key-store trouble through `Store`/`Register`/`MissingReference`, and
/// primitive cipher failures through `Cipher`/`BlockLength` together with
/// the starting offset of the chunk that failed. All are terminal; no
/// operation retries internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("pem: {0}")]
    Pem(#[from] pem::error::Error),

    #[error("der: {0}")]
    Der(#[from] der::error::Error),

    #[error("key store: {0}")]
    Store(#[from] keystore::Error),

    /// The store refused to register the key bytes
    #[error("key-store registration rejected for tag {tag}")]
    Register { tag: String },

    /// The store registered the key but returned no handle for it
    #[error("no key reference found for tag {tag}")]
    MissingReference { tag: String },

    /// The key's block size leaves no room for the padding overhead
    #[error("block size {0} leaves no room for padding")]
    BlockSizeTooSmall(usize),

    /// The store reported a zero block size
    #[error("block size must be positive")]
    ZeroBlockSize,

    /// A primitive cipher call failed on the chunk starting at `offset`
    #[error("cipher failure on the chunk at offset {offset}: {source}")]
    Cipher {
        offset: usize,
        source: keystore::Error,
    },

    /// The primitive returned a block of the wrong size
    #[error("primitive returned {got} bytes for the chunk at offset {offset}, expected {expected}")]
    BlockLength {
        offset: usize,
        expected: usize,
        got: usize,
    },
}
