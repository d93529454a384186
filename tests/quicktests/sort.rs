use bst_sort::sort::{self, Algorithm};

/// Sorts a copy of `xs` with every algorithm and checks each against `slice::sort`.
fn sorts_like_std<T>(xs: &[T]) -> bool
where
    T: Ord + Clone,
{
    let mut expected = xs.to_vec();
    expected.sort();

    Algorithm::ALL.into_iter().all(|algorithm| {
        let mut actual = xs.to_vec();
        algorithm.sort(&mut actual);
        sort::is_sorted(&actual) && actual == expected
    })
}

/// Number of pairs `i < j` with `xs[i] > xs[j]`.
fn inversions<T: Ord>(xs: &[T]) -> u64 {
    let mut count = 0;
    for (i, x) in xs.iter().enumerate() {
        count += xs[i + 1..].iter().filter(|&y| x > y).count() as u64;
    }
    count
}

#[quickcheck]
fn all_sorts_match_std(xs: Vec<i32>) -> bool {
    sorts_like_std(&xs)
}

#[quickcheck]
fn all_sorts_match_std_with_many_duplicates(xs: Vec<u8>) -> bool {
    let xs: Vec<u8> = xs.into_iter().map(|x| x % 4).collect();
    sorts_like_std(&xs)
}

#[quickcheck]
fn all_sorts_match_std_on_sorted_input(mut xs: Vec<i16>) -> bool {
    xs.sort();
    let sorted = sorts_like_std(&xs);
    xs.reverse();
    sorted && sorts_like_std(&xs)
}

#[quickcheck]
fn bubble_and_insertion_swap_once_per_inversion(xs: Vec<i8>) -> bool {
    let expected = inversions(&xs);

    sort::bubble_sort(&mut xs.clone()).swaps == expected
        && sort::insertion_sort(&mut xs.clone()).swaps == expected
}

#[quickcheck]
fn selection_swaps_at_most_once_per_position(xs: Vec<i8>) -> bool {
    let len = xs.len() as u64;
    sort::selection_sort(&mut xs.clone()).swaps <= len.saturating_sub(1)
}

#[quickcheck]
fn merge_never_swaps(xs: Vec<i8>) -> bool {
    sort::merge_sort(&mut xs.clone()).swaps == 0
}

#[quickcheck]
fn compare_algorithms_leaves_input_alone(xs: Vec<i32>) -> bool {
    let before = xs.clone();
    let results = sort::compare_algorithms(&xs);

    xs == before && results.len() == Algorithm::ALL.len()
}
