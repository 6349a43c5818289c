//! Transfer buffer for host-driven byte counts.

use thiserror::Error;

/// Inline capacity; transfers up to one word stay off the heap.
pub const INLINE: usize = 4;

/// Failed to reserve memory for an oversized transfer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("failed to allocate a {0} byte transfer buffer")]
pub struct AllocError(pub usize);

/// Owned, zero-initialised byte buffer for one transfer.
///
/// Counts up to [`INLINE`] live on the stack; anything larger goes through
/// a fallible reservation so a hostile count surfaces as [`AllocError`]
/// instead of aborting the firmware. The storage is handed back when the
/// value drops, on every path out of the command that created it.
pub struct Scratch {
    repr: Repr,
}

enum Repr {
    Inline { buf: [u8; INLINE], len: usize },
    Heap(Vec<u8>),
}

impl Scratch {
    /// Buffer of exactly `len` zero bytes.
    pub fn with_len(len: usize) -> Result<Self, AllocError> {
        let repr = if len <= INLINE {
            Repr::Inline {
                buf: [0; INLINE],
                len,
            }
        } else {
            let mut heap = Vec::new();
            heap.try_reserve_exact(len).map_err(|_| AllocError(len))?;
            heap.resize(len, 0);
            Repr::Heap(heap)
        };
        Ok(Self { repr })
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Heap(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.repr {
            Repr::Inline { buf, len } => &buf[..*len],
            Repr::Heap(heap) => heap,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.repr {
            Repr::Inline { buf, len } => &mut buf[..*len],
            Repr::Heap(heap) => heap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_stay_inline() {
        let buf = Scratch::with_len(INLINE).unwrap();
        assert!(matches!(buf.repr, Repr::Inline { .. }));
        assert_eq!(buf.as_slice(), &[0; INLINE]);
    }

    #[test]
    fn larger_counts_move_to_the_heap() {
        let buf = Scratch::with_len(INLINE + 1).unwrap();
        assert!(matches!(buf.repr, Repr::Heap(_)));
        assert_eq!(buf.len(), INLINE + 1);
    }

    #[test]
    fn zero_length_is_a_valid_empty_buffer() {
        let buf = Scratch::with_len(0).unwrap();
        assert!(buf.is_empty());
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn writes_land_in_the_slice() {
        let mut buf = Scratch::with_len(3).unwrap();
        buf.as_mut_slice().copy_from_slice(&[1, 2, 3]);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }
}
