//! Post-operation invariant checkers for correctness validation.

use std::collections::HashMap;

use upforest_core::UnionFind;

/// Verifies that live set sizes sum to the universe.
pub fn check_conservation<T, D>(uf: &UnionFind<T, D>) -> Result<(), String> {
    let total: usize = uf.set_records().iter().map(|r| r.size()).sum();
    if total != uf.len() {
        return Err(format!(
            "size total mismatch: records={total}, universe={}",
            uf.len()
        ));
    }
    Ok(())
}

/// Verifies that exactly `len - successes` identifiers are live.
pub fn check_live_count<T, D>(uf: &UnionFind<T, D>, successes: usize) -> Result<(), String> {
    let expected = uf
        .len()
        .checked_sub(successes)
        .ok_or_else(|| format!("{successes} merges exceed universe of {}", uf.len()))?;
    let live = uf.live_sets().count();
    if live != expected || uf.set_count() != expected {
        return Err(format!(
            "live count mismatch: scanned={live}, reported={}, expected={expected}",
            uf.set_count()
        ));
    }
    Ok(())
}

/// Verifies that each up-tree root names a live record whose size equals
/// the number of elements under it, and that no two roots share a record.
pub fn check_roots_match_records<T, D>(uf: &UnionFind<T, D>) -> Result<(), String> {
    let mut per_root: HashMap<usize, usize> = HashMap::new();
    for i in 0..uf.len() {
        let root = uf.root(i).map_err(|e| e.to_string())?;
        *per_root.entry(root).or_default() += 1;
    }

    let mut seen = HashMap::new();
    for (&root, &count) in &per_root {
        let node = uf.node(root).map_err(|e| e.to_string())?;
        let set = node
            .set_id()
            .ok_or_else(|| format!("root {root} hides its identifier"))?;
        if let Some(other) = seen.insert(set, root) {
            return Err(format!("roots {other} and {root} both name {set}"));
        }
        let size = uf.set_size(set).map_err(|e| e.to_string())?;
        if size != count {
            return Err(format!(
                "root {root} names {set} of size {size} but holds {count} element(s)"
            ));
        }
    }
    if per_root.len() != uf.set_count() {
        return Err(format!(
            "{} up-trees but {} live identifiers",
            per_root.len(),
            uf.set_count()
        ));
    }
    Ok(())
}

/// Verifies that no element sits deeper than `log2(len)`.
///
/// The walk is capped at `len` hops, so a cycle is reported rather than
/// looping forever.
pub fn check_depth_bound<T, D>(uf: &UnionFind<T, D>) -> Result<(), String> {
    let n = uf.len();
    if n == 0 {
        return Ok(());
    }
    let bound = n.ilog2() as usize;
    for i in 0..n {
        let mut current = i;
        let mut depth = 0;
        while let Some(parent) = uf.nodes()[current].parent() {
            current = parent;
            depth += 1;
            if depth > n {
                return Err(format!("cycle reached from element {i}"));
            }
        }
        if depth > bound {
            return Err(format!(
                "element {i} at depth {depth} exceeds bound {bound}"
            ));
        }
    }
    Ok(())
}

/// Runs every checker above.
pub fn check_all<T, D>(uf: &UnionFind<T, D>, successes: usize) -> Result<(), String> {
    check_conservation(uf)?;
    check_live_count(uf, successes)?;
    check_roots_match_records(uf)?;
    check_depth_bound(uf)
}
