use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub(crate) fn drain_std_min(priorities: &[i64]) -> i64 {
    let mut heap = BinaryHeap::with_capacity(priorities.len());
    for &p in priorities {
        heap.push(Reverse(p));
    }
    let mut checksum = 0i64;
    while let Some(Reverse(p)) = heap.pop() {
        checksum = checksum.wrapping_add(p);
    }
    checksum
}

pub(crate) fn sort_std(priorities: &[i64]) -> Vec<i64> {
    BinaryHeap::from(priorities.to_vec()).into_sorted_vec()
}
