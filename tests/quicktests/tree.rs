use generic_ds::tree::Tree;

use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(|a: &i8, b: &i8| a.cmp(b));
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new(|a: &i8, b: &i8| a.cmp(b));
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicates_overwrite(pairs: Vec<(i8, i8)>) -> bool {
    // Order by the first field only so the second field shows which insert won.
    let mut tree = Tree::new(|a: &(i8, i8), b: &(i8, i8)| a.0.cmp(&b.0));
    let mut map = BTreeMap::new();
    for (k, v) in &pairs {
        tree.insert((*k, *v));
        map.insert(*k, *v);
    }

    tree.len() == map.len()
        && map
            .iter()
            .all(|(k, v)| tree.get(&(*k, i8::MIN)) == Some(&(*k, *v)))
}

#[quickcheck]
fn height_bounded_by_len(xs: Vec<u16>) -> bool {
    let mut tree: Tree<u16> = Tree::default();
    for x in &xs {
        tree.insert(*x);
    }
    let distinct: HashSet<_> = xs.iter().collect();

    tree.len() == distinct.len() && tree.height() <= tree.len()
}
