use std::collections::HashSet;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use log::{debug, info};
use rbtree_structures::{LinkedList, MersenneTwister64, RBTree, TraversalOrder};

fn distinct_values(rng: &mut MersenneTwister64, count: usize) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(count);
    let mut values = Vec::with_capacity(count);

    while values.len() < count {
        let v = rng.between(0, u32::MAX as u64);
        if seen.insert(v) {
            values.push(v);
        }
    }

    values
}

pub fn run_tree(count: usize, seed: u64, order: TraversalOrder, print: bool) -> Result<()> {
    let mut rng = MersenneTwister64::new(seed);
    let mut tree = RBTree::with_traversal_order(order);
    let mut values = distinct_values(&mut rng, count);

    info!("inserting {} values (seed {:#x})", count, seed);
    let start = Instant::now();

    for (i, v) in values.iter().copied().enumerate() {
        ensure!(tree.insert(v), "value {} was reported as a duplicate", v);
        tree.validate()
            .with_context(|| format!("tree invalid after inserting {} (insert #{})", v, i + 1))?;
    }

    info!(
        "inserted {} values in {:?}: height {}, first {:?}, last {:?}",
        tree.len(),
        start.elapsed(),
        tree.height(),
        tree.first(),
        tree.last()
    );

    if print {
        println!("{}", tree);
    }

    rng.shuffle(&mut values);
    let start = Instant::now();

    for (i, v) in values.iter().enumerate() {
        ensure!(tree.remove(v) == Some(*v), "value {} went missing", v);
        tree.validate()
            .with_context(|| format!("tree invalid after removing {} (removal #{})", v, i + 1))?;

        if (i + 1) % 100 == 0 {
            debug!("{} values left", tree.len());
        }
    }

    ensure!(tree.is_empty(), "{} values left after removing all", tree.len());
    info!("removed {} values in {:?}", values.len(), start.elapsed());
    println!("{}", tree);

    Ok(())
}

pub fn run_list(count: usize, seed: u64) -> Result<()> {
    let mut rng = MersenneTwister64::new(seed);
    let mut list = LinkedList::new();

    for i in 1..=count as u64 {
        list.push_front(i);
    }

    info!("added {} elements to the list", list.len());
    debug!("list: {}", list);

    while !list.is_empty() {
        let idx = rng.below(list.len() as u64) as usize;
        let v = *list
            .get(idx)
            .with_context(|| format!("index {} out of range", idx))?;

        ensure!(list.remove(&v) == Some(v), "failed to remove {}", v);
        ensure!(!list.contains(&v), "{} still present after removal", v);
        debug!("removed {}, {} left", v, list.len());
    }

    info!("list emptied");
    println!("{}", list);

    Ok(())
}
