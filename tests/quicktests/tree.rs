use bst_sort::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking after each one that both
/// agree on the outcome.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
        Op::Delete(x) => tree.delete(x) == set.remove(x),
        Op::Search(x) => tree.search(x) == set.contains(x),
        Op::Iter => tree.iter().eq(set.iter()),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.inorder() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn inorder_is_sorted_without_duplicates(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.inorder() == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn delete_shrinks_by_at_most_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let before = tree.len();
    let present = tree.search(&x);

    tree.delete(&x) == present && !tree.search(&x) && tree.len() == before - usize::from(present)
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let inorder = tree.inorder();

    [tree.preorder(), tree.postorder(), tree.level_order()]
        .into_iter()
        .all(|mut order| {
            order.sort_unstable();
            order == inorder
        })
}

#[quickcheck]
fn height_is_between_log_and_linear(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();
    let height = tree.height();

    if len == 0 {
        return height == -1;
    }
    // A tree of height `h` holds at most `2^(h + 1) - 1` values.
    let fits = height as u32 + 1 >= usize::BITS || len < 1usize << (height + 1);
    height >= 0 && (height as usize) < len && fits
}

#[quickcheck]
fn clear_empties(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.clear();

    tree.is_empty() && tree.len() == 0 && tree.height() == -1 && xs.iter().all(|x| !tree.search(x))
}
