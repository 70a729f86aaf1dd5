//! Rotation map: a vertex's neighbors in counter-clockwise order.
//!
//! Neighbors split into three groups relative to the vertex's own corona:
//! `below`, `same` (always exactly two: the corona is a cycle) and `above`.
//! Reading `same[1]`, then `below` backwards, then `same[0]`, then `above`
//! walks once around the vertex, each step turning by `2π/q`.

use serde::Serialize;

use crate::error::LatticeError;
use crate::graph::LatticeGraph;

/// Neighbors of one vertex grouped by corona, each group in winding order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RingComponents {
    pub below: Vec<usize>,
    pub same: Vec<usize>,
    pub above: Vec<usize>,
}

/// Partition the winding of `v` by corona relative to `v`.
pub fn split_into_ring_components(graph: &LatticeGraph, v: usize) -> RingComponents {
    let ring_map = graph.ring_map();
    let mut components = RingComponents::default();
    let Some(&ring) = ring_map.get(v) else {
        return components;
    };
    for &n in graph.winding(v) {
        match ring_map[n].cmp(&ring) {
            std::cmp::Ordering::Less => components.below.push(n),
            std::cmp::Ordering::Equal => components.same.push(n),
            std::cmp::Ordering::Greater => components.above.push(n),
        }
    }
    components
}

/// Counter-clockwise neighbor order of `v`.
///
/// # Errors
///
/// [`LatticeError::MalformedRing`] when `v` does not have exactly two
/// neighbors in its own corona. That is always the case for the seed.
pub fn rotation_map(graph: &LatticeGraph, v: usize) -> Result<Vec<usize>, LatticeError> {
    let RingComponents { below, same, above } = split_into_ring_components(graph, v);
    let &[first, second] = same.as_slice() else {
        return Err(LatticeError::MalformedRing { vertex: v, same_ring: same.len() });
    };

    let mut map = Vec::with_capacity(below.len() + above.len() + 2);
    map.push(second);
    map.extend(below.iter().rev());
    map.push(first);
    map.extend(above);
    Ok(map)
}
