//! Numeric ranges and max-heaps laid out in a plain slice.
//!
//! The children of index `i` live at `2i + 1` and `2i + 2`; no parent is
//! smaller than its children. `BinaryHeap::into_vec` produces the same layout,
//! but working on the slice directly shows each step: check, build, push, pop.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// `len` consecutive values starting at `start` (std::iota).
pub fn iota(len: usize, start: i32) -> Vec<i32> {
    (start..).take(len).collect()
}

pub fn shuffle<T, R: Rng + ?Sized>(seq: &mut [T], rng: &mut R) {
    seq.shuffle(rng);
}

pub fn is_heap<T: Ord>(seq: &[T]) -> bool {
    (1..seq.len()).all(|child| seq[(child - 1) / 2] >= seq[child])
}

/// Moves `seq[root]` down until both children are no larger. Only the first
/// `len` elements take part.
fn sift_down<T: Ord>(seq: &mut [T], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let larger = if right < len && seq[right] > seq[left] { right } else { left };
        if seq[root] >= seq[larger] {
            break;
        }
        seq.swap(root, larger);
        root = larger;
    }
}

fn sift_up<T: Ord>(seq: &mut [T], mut child: usize) {
    while child > 0 {
        let parent = (child - 1) / 2;
        if seq[parent] >= seq[child] {
            break;
        }
        seq.swap(parent, child);
        child = parent;
    }
}

/// Rearranges the slice into a max-heap in O(n).
pub fn make_heap<T: Ord>(seq: &mut [T]) {
    let len = seq.len();
    for root in (0..len / 2).rev() {
        sift_down(seq, root, len);
    }
    trace!(len, "heap built");
}

/// Restores the heap after a value was appended at the end.
pub fn push_heap<T: Ord>(seq: &mut [T]) {
    if let Some(last) = seq.len().checked_sub(1) {
        sift_up(seq, last);
    }
}

/// Moves the largest value to the end and restores the heap on the rest.
pub fn pop_heap<T: Ord>(seq: &mut [T]) {
    let len = seq.len();
    if len < 2 {
        return;
    }
    seq.swap(0, len - 1);
    sift_down(seq, 0, len - 1);
}

/// Turns a heap into an ascending sequence.
pub fn sort_heap<T: Ord>(seq: &mut [T]) {
    for end in (2..=seq.len()).rev() {
        pop_heap(&mut seq[..end]);
    }
}
