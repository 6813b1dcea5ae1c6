//! Transmit buffer storage.

use heapless::Vec;

/// Fixed-capacity message storage.
///
/// Filled once during start-of-day, then frozen into a `'static` slice that
/// the DMA stream reads directly. Freezing consumes the `&'static mut`, so the
/// bytes cannot change while a transfer is reading them.
pub struct TxBuffer<const N: usize> {
    data: Vec<u8, N>,
}

impl<const N: usize> TxBuffer<N> {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Replace the content with `bytes`, truncated to the capacity.
    /// Returns the number of bytes stored.
    pub fn fill(&mut self, bytes: &[u8]) -> usize {
        let len = bytes.len().min(N);
        if bytes.len() > N {
            trace!(
                "[WARNING] message of {} bytes truncated to {} bytes",
                bytes.len(),
                N
            );
        }
        self.data.clear();
        // cannot fail: `len` never exceeds the capacity
        let _ = self.data.extend_from_slice(&bytes[..len]);
        len
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Give up write access for good and hand out the stored bytes.
    pub fn freeze(&'static mut self) -> &'static [u8] {
        let this: &'static Self = self;
        this.data.as_slice()
    }
}

impl<const N: usize> Default for TxBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
