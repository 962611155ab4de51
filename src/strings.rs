//! String operations: stripping whitespace and walking permutations in
//! lexicographic order.

/// Copy of `text` without any whitespace.
pub fn remove_whitespace(text: &str) -> String {
    let mut stripped = text.to_string();
    stripped.retain(|c| !c.is_whitespace());
    stripped
}

/// Rearranges `seq` into the next permutation in lexicographic order and
/// returns `true`. On the last permutation it wraps around to the first
/// (ascending) one and returns `false`.
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = (0..seq.len() - 1).rev().find(|&i| seq[i] < seq[i + 1]) else {
        seq.reverse();
        return false;
    };

    // Rightmost element of the suffix greater than the pivot.
    let successor = (pivot + 1..seq.len())
        .rev()
        .find(|&j| seq[j] > seq[pivot])
        .unwrap_or(pivot + 1);

    seq.swap(pivot, successor);
    seq[pivot + 1..].reverse();
    true
}

/// Every distinct arrangement of `text`'s characters, in lexicographic order.
/// Repeated letters are treated as identical, so "aba" has three.
pub fn distinct_permutations(text: &str) -> Vec<String> {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable();

    let mut permutations = vec![chars.iter().collect::<String>()];
    while next_permutation(&mut chars) {
        permutations.push(chars.iter().collect());
    }
    permutations
}
