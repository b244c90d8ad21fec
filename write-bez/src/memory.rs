//! Hooks for controlling output allocations.

use std::fmt;

/// Decides whether an allocation may proceed.
///
/// The manager is asked before a buffer is created and before every time it
/// grows. Refusing makes the write fail with [`Error::OutOfMemory`].
///
/// [`Error::OutOfMemory`]: crate::Error::OutOfMemory
pub trait MemoryManager: Send + Sync {
    /// Called before growing `what` from `current` to `requested` bytes.
    fn reserve(&self, what: &'static str, current: usize, requested: usize)
        -> Result<(), AllocError>;
}

/// An allocation that was refused or could not be satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocError {
    pub what: &'static str,
    pub requested: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to allocate {} bytes for {}",
            self.requested, self.what
        )
    }
}

impl std::error::Error for AllocError {}

/// Grants every request; storage comes from the global allocator.
#[derive(Clone, Copy, Default, Debug)]
pub struct SystemMemory;

impl MemoryManager for SystemMemory {
    fn reserve(&self, _: &'static str, _: usize, _: usize) -> Result<(), AllocError> {
        Ok(())
    }
}

/// Refuses any request above a fixed number of bytes.
#[derive(Clone, Copy, Debug)]
pub struct MemoryLimit(pub usize);

impl MemoryManager for MemoryLimit {
    fn reserve(
        &self,
        what: &'static str,
        _current: usize,
        requested: usize,
    ) -> Result<(), AllocError> {
        if requested > self.0 {
            log::error!("refusing {requested} bytes for {what}, limit is {}", self.0);
            return Err(AllocError { what, requested });
        }
        Ok(())
    }
}
