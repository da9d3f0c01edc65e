use thiserror::Error;

use crate::KeyClass;

/// Errors reported by a key store for handle queries and the block
/// primitives. Registration outcomes are reported separately through
/// [`RegisterStatus`](crate::RegisterStatus).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The handle does not refer to a registered key
    #[error("unknown key handle {0}")]
    UnknownHandle(u64),

    /// The input block does not fit the key
    #[error("block of {len} bytes exceeds the {max} byte capacity of this key")]
    BlockTooLarge { len: usize, max: usize },

    /// The operation needs the other half of the key pair
    #[error("operation requires a {expected:?} key")]
    WrongKeyClass { expected: KeyClass },

    /// The decrypted block does not carry a valid padding frame
    #[error("block padding is malformed")]
    BadPadding,
}
