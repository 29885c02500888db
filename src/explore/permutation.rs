//! Lexicographic enumeration of multiset permutations.

/// Rearrange `items` into the next permutation in lexicographic order.
///
/// Equal items are never swapped with each other, so starting from a sorted
/// slice every distinct arrangement is visited exactly once. Returns false
/// after the last arrangement, leaving the slice sorted ascending again.
///
/// ```
/// use war_cycles::explore::next_permutation;
///
/// let mut cards = [1u8, 1, 2];
/// assert!(next_permutation(&mut cards));
/// assert_eq!(cards, [1, 2, 1]);
/// assert!(next_permutation(&mut cards));
/// assert_eq!(cards, [2, 1, 1]);
/// assert!(!next_permutation(&mut cards));
/// assert_eq!(cards, [1, 1, 2]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot`
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        items.reverse();
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}
