//! The key-store capability seam.
//!
//! The cipher engine never touches key material directly: it registers
//! DER key bytes with a [`KeyStore`], receives an opaque [`KeyHandle`],
//! and drives the per-block primitives through it. Production deployments
//! back the trait with a platform keychain or an HSM; [`MemoryKeyStore`]
//! backs the tests and doubles as a reference implementation.

pub mod error;
pub mod memory;

pub use error::Error;
pub use memory::MemoryKeyStore;

/// Whether registered key bytes are the public or private half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    Public,
    Private,
}

/// Opaque reference to a key registered in a store.
///
/// Handles are minted by the store and are only meaningful to the store
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyHandle(u64);

impl KeyHandle {
    pub fn new(id: u64) -> Self {
        KeyHandle(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Outcome of registering key bytes under a tag.
///
/// `Duplicate` mirrors keychain-style stores where re-adding an existing
/// item is reported distinctly from failure; callers generally treat it
/// as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    Success,
    Duplicate,
    Rejected,
}

/// The key-store capability.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability so a single store can back several adapters.
pub trait KeyStore {
    /// Cipher block size of the key behind `handle`, in bytes.
    fn block_size_of(&self, handle: KeyHandle) -> Result<usize, Error>;

    /// Register DER `key` bytes under `tag`. Public keys are expected
    /// already stripped to `SEQUENCE{INTEGER, INTEGER}`.
    fn register(&self, tag: &str, key: &[u8], class: KeyClass) -> RegisterStatus;

    /// Fetch the handle for a previously registered tag.
    fn lookup(&self, tag: &str, class: KeyClass) -> Option<KeyHandle>;

    /// Remove the registration under `tag`. Missing tags are a no-op.
    fn remove(&self, tag: &str);

    /// One primitive encryption of at most `block_size - 11` bytes.
    /// Returns exactly `block_size` bytes.
    fn encrypt_block(&self, handle: KeyHandle, block: &[u8]) -> Result<Vec<u8>, Error>;

    /// One primitive decryption of up to `block_size` bytes. Returns only
    /// the recovered plaintext bytes.
    fn decrypt_block(&self, handle: KeyHandle, block: &[u8]) -> Result<Vec<u8>, Error>;
}

impl<S: KeyStore + ?Sized> KeyStore for &S {
    fn block_size_of(&self, handle: KeyHandle) -> Result<usize, Error> {
        (**self).block_size_of(handle)
    }

    fn register(&self, tag: &str, key: &[u8], class: KeyClass) -> RegisterStatus {
        (**self).register(tag, key, class)
    }

    fn lookup(&self, tag: &str, class: KeyClass) -> Option<KeyHandle> {
        (**self).lookup(tag, class)
    }

    fn remove(&self, tag: &str) {
        (**self).remove(tag)
    }

    fn encrypt_block(&self, handle: KeyHandle, block: &[u8]) -> Result<Vec<u8>, Error> {
        (**self).encrypt_block(handle, block)
    }

    fn decrypt_block(&self, handle: KeyHandle, block: &[u8]) -> Result<Vec<u8>, Error> {
        (**self).decrypt_block(handle, block)
    }
}
