//! Ring-seam correction: derive each vertex's *winding* order.
//!
//! A descending adjacency list groups neighbors by corona (higher coronas
//! have higher indices) and, within a corona, lists them in the reverse of
//! the order they were created. Read group by group, that is the angular
//! order around the vertex except where a group straddles the seam of its
//! corona, the point where the last vertex of a corona meets the first:
//!
//! * on the seam itself (first or last vertex of a corona) the two
//!   same-corona neighbors come out swapped;
//! * a group in a neighboring corona that contains that corona's first
//!   vertex together with vertices from its far end is split across the
//!   wrap, so the run ending at the first vertex must move to the front.
//!
//! [`wind`] applies both fixes and returns new lists. The sorted adjacency
//! is left untouched.
//!
//! [`lead_neighbors`] picks the neighbor each vertex's drawn polygon is
//! turned towards: the highest-indexed one, except around corona seams.

use crate::adjacency::SortedAdjacency;

/// Per-vertex neighbor order in which ring groups read angularly.
///
/// Vertex 0 (the seed) keeps its sorted order. `ring_map[v]` is the corona
/// of `v` and `ring_start[k]` the first vertex of corona `k`.
pub(crate) fn wind(
    adjacency: &SortedAdjacency,
    ring_map: &[usize],
    ring_start: &[usize],
    ring_population: &[usize],
) -> Vec<Vec<usize>> {
    let mut winding = Vec::with_capacity(adjacency.len());
    winding.push(adjacency.neighbors(0).to_vec());

    for v in 1..adjacency.len() {
        let ring = ring_map[v];
        let mut out = Vec::with_capacity(adjacency.degree(v));

        for block in ring_blocks(adjacency.neighbors(v), ring_map) {
            let k = ring_map[block[0]];
            let first = ring_start[k];
            let last = first + ring_population[k] - 1;

            if k == ring {
                if v == first || v == last {
                    out.extend(block.iter().rev());
                } else {
                    out.extend_from_slice(block);
                }
            } else if wraps_at(block, first) {
                let split = wrap_split(block);
                out.extend_from_slice(&block[split..]);
                out.extend_from_slice(&block[..split]);
            } else {
                out.extend_from_slice(block);
            }
        }
        winding.push(out);
    }
    winding
}

/// Polygon anchor of every vertex in the open patch.
///
/// Starts from the highest-indexed neighbor and corrects the three seam
/// vertices of each corona `k` (first `s`, last `e`):
///
/// * `s` trades `s + 1` and `e`;
/// * `e` trades `e − 1` and `s`;
/// * `s − 1`, the last vertex of the corona below, leads with `s`.
///
/// Coronas are processed inside out, so the last rule wins when `e` of one
/// corona is `s − 1` of the next.
pub(crate) fn lead_neighbors(
    adjacency: &SortedAdjacency,
    ring_start: &[usize],
    ring_population: &[usize],
) -> Vec<Option<usize>> {
    let mut lead: Vec<Option<usize>> =
        adjacency.lists().iter().map(|list| list.first().copied()).collect();

    for (&s, &count) in ring_start.iter().zip(ring_population).skip(1) {
        if count == 0 {
            continue;
        }
        let e = s + count - 1;
        trade(&mut lead[s], s + 1, e);
        trade(&mut lead[e], e - 1, s);
        lead[s - 1] = Some(s);
    }
    lead
}

fn trade(slot: &mut Option<usize>, a: usize, b: usize) {
    if *slot == Some(a) {
        *slot = Some(b);
    } else if *slot == Some(b) {
        *slot = Some(a);
    }
}

/// Split a descending list into maximal runs of neighbors from one corona.
fn ring_blocks<'a>(neighbors: &'a [usize], ring_map: &'a [usize]) -> Vec<&'a [usize]> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for i in 1..=neighbors.len() {
        if i == neighbors.len() || ring_map[neighbors[i]] != ring_map[neighbors[start]] {
            blocks.push(&neighbors[start..i]);
            start = i;
        }
    }
    blocks
}

/// A descending block wraps when it ends on its corona's first vertex but is
/// not one consecutive run.
fn wraps_at(block: &[usize], ring_first: usize) -> bool {
    let last = block.len() - 1;
    block[last] == ring_first && block[0] - block[last] != last
}

/// Start of the trailing consecutive run (the one ending at the corona's
/// first vertex).
fn wrap_split(block: &[usize]) -> usize {
    let mut j = block.len() - 1;
    while j > 0 && block[j - 1] == block[j] + 1 {
        j -= 1;
    }
    j
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_group_by_ring() {
        let ring_map = [0, 1, 1, 1, 2, 2, 2, 2];
        let blocks = ring_blocks(&[7, 5, 3, 2, 0], &ring_map);
        let expected: Vec<&[usize]> = vec![&[7, 5], &[3, 2], &[0]];
        assert_eq!(blocks, expected);
        assert!(ring_blocks(&[], &ring_map).is_empty());
    }

    #[test]
    fn consecutive_block_does_not_wrap() {
        assert!(!wraps_at(&[9, 8, 7], 7));
        assert!(!wraps_at(&[9, 8], 7));
    }

    #[test]
    fn wrapped_block_moves_leading_run() {
        // Corona 1 of {3,7} spans 1..=7. Neighbors {7, 2, 1} straddle its
        // seam, so the run [2, 1] moves ahead of [7].
        let block = [7, 2, 1];
        assert!(wraps_at(&block, 1));
        let split = wrap_split(&block);
        assert_eq!(split, 1);
        let mut out = block[split..].to_vec();
        out.extend_from_slice(&block[..split]);
        assert_eq!(out, vec![2, 1, 7]);
    }

    #[test]
    fn seam_vertices_swap_same_ring_pair() {
        // {4,4} with two coronas: vertex 1 opens corona 1 and vertex 8
        // closes it.
        let grown = crate::growth::populate(4, 4, 2).unwrap();
        let ring_map: Vec<usize> = grown
            .ring_population
            .iter()
            .enumerate()
            .flat_map(|(k, &n)| std::iter::repeat(k).take(n))
            .collect();
        let ring_start = [0, 1, 9];
        let winding = wind(&grown.adjacency, &ring_map, &ring_start, &grown.ring_population);
        assert_eq!(winding[0], vec![7, 5, 3, 1]);
        assert_eq!(winding[1], vec![10, 2, 8, 0]);
        assert_eq!(winding[8], vec![9, 23, 1, 7]);
        assert_eq!(winding[9], vec![10, 24, 8]);
        assert_eq!(winding[24], vec![9, 23]);
    }

    fn leads(p: usize, q: usize, rings: usize) -> Vec<Option<usize>> {
        let grown = crate::growth::populate(p, q, rings).unwrap();
        let mut ring_start = Vec::new();
        let mut next = 0;
        for &n in &grown.ring_population {
            ring_start.push(next);
            next += n;
        }
        lead_neighbors(&grown.adjacency, &ring_start, &grown.ring_population)
    }

    #[test]
    fn lead_is_highest_neighbor_away_from_seams() {
        let grown = crate::growth::populate(3, 7, 3).unwrap();
        let lead = leads(3, 7, 3);
        let seams = [0, 7, 28, 29, 84];
        for (v, list) in grown.adjacency.lists().iter().enumerate() {
            if !seams.contains(&v) {
                assert_eq!(lead[v], list.first().copied(), "vertex {v}");
            }
        }
    }

    #[test]
    fn lead_corrects_seam_vertices() {
        let lead = leads(3, 7, 3);
        assert_eq!(lead[0], Some(1));
        assert_eq!(lead[7], Some(8));
        assert_eq!(lead[28], Some(29));
        assert_eq!(lead[29], Some(30));
        assert_eq!(lead[84], Some(29));

        let lead = leads(6, 3, 3);
        assert_eq!(lead[0], Some(1));
        assert_eq!(lead[1], Some(2));
        assert_eq!(lead[13], Some(14));
        assert_eq!(lead[37], Some(38));
        assert_eq!(lead[72], Some(37));

        let lead = leads(4, 4, 2);
        assert_eq!(lead[0], Some(1));
        assert_eq!(lead[8], Some(9));
        assert_eq!(lead[9], Some(10));
        assert_eq!(lead[24], Some(9));
    }

    #[test]
    fn lone_seed_has_no_lead() {
        assert_eq!(leads(4, 4, 0), vec![None]);
    }
}
