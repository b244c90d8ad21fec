//! Growable text accumulator for one serialized program.

use std::sync::Arc;

use crate::{
    memory::{AllocError, MemoryManager, SystemMemory},
    Error,
};

/// Growable byte buffer holding the program text of one invocation.
///
/// The buffer tracks its own capacity independently of the backing `Vec`.
/// One byte of capacity is always kept free for the terminating NUL that is
/// added when the text is handed to a caller, so `len() < capacity()` holds
/// at all times.
pub struct OutputBuffer {
    data: Vec<u8>,
    capacity: usize,
    memory: Arc<dyn MemoryManager>,
}

impl OutputBuffer {
    const WHAT: &'static str = "output bez data";

    /// Creates an empty buffer using the global allocator.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        Self::with_memory(capacity, Arc::new(SystemMemory))
    }

    /// Creates an empty buffer whose allocations are approved by `memory`.
    ///
    /// A zero capacity is refused.
    pub fn with_memory(capacity: usize, memory: Arc<dyn MemoryManager>) -> Result<Self, AllocError> {
        let refused = AllocError {
            what: "out buffer",
            requested: capacity,
        };
        if capacity == 0 {
            return Err(refused);
        }
        memory.reserve("out buffer", 0, capacity)?;
        let mut data = Vec::new();
        data.try_reserve_exact(capacity).map_err(|_| refused)?;
        Ok(Self {
            data,
            capacity,
            memory,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends text, growing the buffer if needed.
    ///
    /// Growth is to `max(capacity * 2, capacity + text.len())`. If the
    /// growth is refused, the buffer is left unchanged.
    pub fn append(&mut self, text: &str) -> Result<(), Error> {
        if self.data.len() + text.len() >= self.capacity {
            self.grow(text.len())?;
        }
        self.data.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn grow(&mut self, additional: usize) -> Result<(), AllocError> {
        let desired = self
            .capacity
            .saturating_mul(2)
            .max(self.capacity.saturating_add(additional));
        let refused = AllocError {
            what: Self::WHAT,
            requested: desired,
        };
        if let Err(e) = self.memory.reserve(Self::WHAT, self.capacity, desired) {
            log::error!("{e}");
            return Err(e);
        }
        if self
            .data
            .try_reserve_exact(desired - self.data.len())
            .is_err()
        {
            log::error!("{refused}");
            return Err(refused);
        }
        log::debug!("output buffer grew from {} to {desired}", self.capacity);
        self.capacity = desired;
        Ok(())
    }

    /// Returns the accumulated bytes, without a terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the accumulated text.
    pub fn as_str(&self) -> &str {
        // only whole `&str` values are ever appended
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    /// Copies the text into `dst` followed by a NUL byte.
    ///
    /// On entry `dst.len()` is the space the caller provides; it is grown
    /// when it cannot hold the text and terminator. Returns the number of
    /// bytes written, terminator included.
    pub fn copy_to(&self, dst: &mut Vec<u8>) -> Result<usize, AllocError> {
        let len = self.data.len();
        if len >= dst.len() {
            dst.try_reserve_exact(len + 1 - dst.len())
                .map_err(|_| AllocError {
                    what: "Output buffer",
                    requested: len + 1,
                })?;
            dst.resize(len + 1, 0);
        }
        dst[..len].copy_from_slice(&self.data);
        dst[len] = 0;
        Ok(len + 1)
    }

    pub fn into_string(self) -> String {
        String::from_utf8(self.data).unwrap_or_default()
    }
}

impl std::fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLimit;

    #[test]
    fn zero_capacity_is_refused() {
        assert!(OutputBuffer::new(0).is_err());
    }

    #[test]
    fn doubles_when_enough() {
        let mut buf = OutputBuffer::new(4).unwrap();
        buf.append("ab").unwrap();
        assert_eq!(buf.capacity(), 4);
        // 2 + 3 bytes does not leave room for the terminator
        buf.append("cde").unwrap();
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.as_str(), "abcde");
    }

    #[test]
    fn grows_to_fit_large_appends() {
        let mut buf = OutputBuffer::new(4).unwrap();
        buf.append("ab").unwrap();
        buf.append("cdefg").unwrap();
        assert_eq!(buf.capacity(), 9);
        buf.append(&"x".repeat(40)).unwrap();
        assert_eq!(buf.capacity(), 49);
        assert!(buf.len() < buf.capacity());
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut buf = OutputBuffer::new(1).unwrap();
        let mut last = buf.capacity();
        for i in 0..200 {
            buf.append(&format!("{i} ")).unwrap();
            assert!(buf.len() < buf.capacity());
            assert!(buf.capacity() >= last);
            last = buf.capacity();
        }
    }

    #[test]
    fn refused_growth_leaves_buffer_unchanged() {
        let mut buf = OutputBuffer::with_memory(4, Arc::new(MemoryLimit(6))).unwrap();
        buf.append("ab").unwrap();
        let err = buf.append("cde").unwrap_err();
        assert_eq!(
            err,
            Error::OutOfMemory(AllocError {
                what: "output bez data",
                requested: 8
            })
        );
        assert_eq!(buf.as_str(), "ab");
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn copy_to_caller() {
        let mut buf = OutputBuffer::new(16).unwrap();
        buf.append("sc\ned\n").unwrap();
        let mut roomy = vec![0xFF; 32];
        assert_eq!(buf.copy_to(&mut roomy), Ok(7));
        assert_eq!(roomy.len(), 32);
        assert_eq!(&roomy[..7], b"sc\ned\n\0");
        let mut small = vec![0; 6];
        assert_eq!(buf.copy_to(&mut small), Ok(7));
        assert_eq!(small, b"sc\ned\n\0");
    }
}
