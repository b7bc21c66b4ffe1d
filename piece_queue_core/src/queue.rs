use crate::consts;
use crate::piece::Piece;
use derive_more::{Display, Error};
use std::fmt::Formatter;
use std::iter::FusedIterator;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[display("queue is full")]
    Full,
    #[display("queue is empty")]
    Empty,
}

/// Fixed-capacity FIFO backed by an owned ring of `N` slots.
///
/// Elements occupy the `len` slots starting at `front`, wrapping modulo `N`.
/// Slots outside that window are always `None`.
pub struct CircularQueue<T, const N: usize> {
    slots: [Option<T>; N],
    front: usize,
    len: usize,
}

/// The preview queue of upcoming pieces.
pub type PieceQueue = CircularQueue<Piece, { consts::QUEUE_CAPACITY }>;

impl<T, const N: usize> CircularQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            front: 0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Append `item` at the back. A full queue is left untouched.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        let back = self.slot_index(self.len);
        self.slots[back] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front element. An empty queue is left untouched.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let item = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % N;
        self.len -= 1;
        Ok(item)
    }

    /// Front-to-back view of the stored elements.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    fn slot_index(&self, offset: usize) -> usize {
        (self.front + offset) % N
    }
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Space separated listing, front first.
impl<T: std::fmt::Display, const N: usize> std::fmt::Display for CircularQueue<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T, const N: usize> {
    queue: &'a CircularQueue<T, N>,
    offset: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let idx = self.queue.slot_index(self.offset);
        self.offset += 1;
        self.queue.slots[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a CircularQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece::PieceType;
    use pretty_assertions::assert_eq;

    fn contents<const N: usize>(q: &CircularQueue<u32, N>) -> Vec<u32> {
        q.iter().copied().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let q = PieceQueue::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), consts::QUEUE_CAPACITY);
        assert_eq!(q.iter().next(), None);
    }

    #[test]
    fn test_fill_then_reject() {
        let mut q = CircularQueue::<u32, 5>::new();
        for i in 0..5 {
            q.enqueue(i).unwrap();
        }
        assert!(q.is_full());
        assert_eq!(q.enqueue(99), Err(QueueError::Full));
        assert_eq!(q.len(), 5);
        assert_eq!(contents(&q), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dequeue_empty_leaves_state() {
        let mut q = CircularQueue::<u32, 3>::new();
        q.enqueue(7).unwrap();
        assert_eq!(q.dequeue(), Ok(7));
        assert_eq!(q.dequeue(), Err(QueueError::Empty));
        assert_eq!(q.len(), 0);

        // Front keeps advancing normally after a rejected dequeue.
        q.enqueue(8).unwrap();
        assert_eq!(contents(&q), vec![8]);
    }

    #[test]
    fn test_fifo_across_wraparound() {
        let mut q = CircularQueue::<u32, 3>::new();
        let mut next_in = 0;
        let mut next_out = 0;
        for round in 0..10 {
            while q.enqueue(next_in).is_ok() {
                next_in += 1;
            }
            for _ in 0..(round % 3 + 1) {
                assert_eq!(q.dequeue(), Ok(next_out));
                next_out += 1;
            }
            assert_eq!(q.len() as u32, next_in - next_out);
            assert_eq!(contents(&q), (next_out..next_in).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_len_tracks_successful_ops() {
        let mut q = CircularQueue::<u32, 5>::new();
        // Fixed pattern of pushes (true) and pops (false) that hits both bounds.
        let ops = [
            true, true, false, false, false, true, true, true, true, true, true, true, false,
            true, false, false, false, false, false, false, true,
        ];
        let (mut enq, mut deq) = (0usize, 0usize);
        for (i, push) in ops.into_iter().enumerate() {
            if push {
                if q.enqueue(i as u32).is_ok() {
                    enq += 1;
                }
            } else if q.dequeue().is_ok() {
                deq += 1;
            }
            assert_eq!(q.len(), enq - deq);
            assert!(q.len() <= q.capacity());
        }
    }

    #[test]
    fn test_iter_is_restartable_and_exact() {
        let mut q = CircularQueue::<u32, 4>::new();
        for i in 0..4 {
            q.enqueue(i).unwrap();
        }
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        q.enqueue(4).unwrap();

        let it = q.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!((&q).into_iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_display_listing() {
        let mut q = PieceQueue::new();
        assert_eq!(q.to_string(), "");
        q.enqueue(Piece::new(PieceType::I, 0)).unwrap();
        q.enqueue(Piece::new(PieceType::L, 1)).unwrap();
        assert_eq!(q.to_string(), "[I 0] [L 1]");
    }
}
