//! Connected component analysis
//!
//! Finds and labels connected TEXT components in a binary map using a
//! Union-Find (disjoint set) structure: one pass merging provisional
//! labels, one pass resolving roots to dense component indices.

use crate::RegionResult;
use offcell_core::BinaryMap;

/// Connectivity used when grouping TEXT pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// A connected TEXT component
#[derive(Debug, Clone)]
pub struct Component {
    /// Dense label, starting at 0
    pub label: u32,
    /// Number of TEXT pixels in this component
    pub pixel_count: usize,
}

/// Label map plus the components it describes
#[derive(Debug, Clone)]
pub struct Labeling {
    /// Per-pixel label, `None` for BACKGROUND pixels (row-major)
    pub labels: Vec<Option<u32>>,
    /// One entry per component, indexed by label
    pub components: Vec<Component>,
}

struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: Vec::new() }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            // Path halving
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra.max(rb) as usize] = ra.min(rb);
        }
    }
}

/// Find and label all connected TEXT components in a binary map.
///
/// Returns a [`Labeling`] whose `labels` vector parallels the map's
/// row-major data and whose `components` carry per-component pixel counts.
pub fn label_components(map: &BinaryMap, connectivity: Connectivity) -> RegionResult<Labeling> {
    let w = map.width() as usize;
    let h = map.height() as usize;
    let data = map.data();

    let mut uf = UnionFind::new();
    let mut provisional: Vec<Option<u32>> = vec![None; w * h];

    // First pass: assign provisional labels, merging with already-visited
    // neighbors (left, top, and for 8-way the two upper diagonals).
    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            if !data[idx] {
                continue;
            }

            let mut neighbor: Option<u32> = None;
            let mut merge = |uf: &mut UnionFind, cand: Option<u32>, current: &mut Option<u32>| {
                if let Some(c) = cand {
                    match *current {
                        None => *current = Some(c),
                        Some(existing) => uf.union(existing, c),
                    }
                }
            };

            if x > 0 {
                merge(&mut uf, provisional[idx - 1], &mut neighbor);
            }
            if y > 0 {
                merge(&mut uf, provisional[idx - w], &mut neighbor);
                if connectivity == Connectivity::EightWay {
                    if x > 0 {
                        merge(&mut uf, provisional[idx - w - 1], &mut neighbor);
                    }
                    if x + 1 < w {
                        merge(&mut uf, provisional[idx - w + 1], &mut neighbor);
                    }
                }
            }

            provisional[idx] = Some(match neighbor {
                Some(n) => n,
                None => uf.make_set(),
            });
        }
    }

    // Second pass: resolve roots to dense labels and count pixels.
    let mut root_to_dense: Vec<Option<u32>> = vec![None; uf.parent.len()];
    let mut components: Vec<Component> = Vec::new();
    let mut labels: Vec<Option<u32>> = vec![None; w * h];

    for idx in 0..w * h {
        if let Some(p) = provisional[idx] {
            let root = uf.find(p);
            let dense = match root_to_dense[root as usize] {
                Some(d) => d,
                None => {
                    let d = components.len() as u32;
                    root_to_dense[root as usize] = Some(d);
                    components.push(Component {
                        label: d,
                        pixel_count: 0,
                    });
                    d
                }
            };
            components[dense as usize].pixel_count += 1;
            labels[idx] = Some(dense);
        }
    }

    Ok(Labeling { labels, components })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_from_rows(rows: &[&[u8]]) -> BinaryMap {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let data = rows.iter().flat_map(|r| r.iter().map(|&v| v != 0)).collect();
        BinaryMap::from_data(w, h, data).unwrap()
    }

    #[test]
    fn test_empty_map_has_no_components() {
        let map = BinaryMap::new(8, 8).unwrap();
        let labeling = label_components(&map, Connectivity::FourWay).unwrap();
        assert!(labeling.components.is_empty());
        assert!(labeling.labels.iter().all(Option::is_none));
    }

    #[test]
    fn test_two_separate_blobs() {
        let map = map_from_rows(&[
            &[1, 1, 0, 0, 0],
            &[1, 0, 0, 0, 1],
            &[0, 0, 0, 1, 1],
        ]);
        let labeling = label_components(&map, Connectivity::FourWay).unwrap();
        assert_eq!(labeling.components.len(), 2);

        let mut counts: Vec<usize> = labeling.components.iter().map(|c| c.pixel_count).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![3, 3]);
    }

    #[test]
    fn test_diagonal_touch_depends_on_connectivity() {
        let map = map_from_rows(&[&[1, 0], &[0, 1]]);

        let four = label_components(&map, Connectivity::FourWay).unwrap();
        assert_eq!(four.components.len(), 2);

        let eight = label_components(&map, Connectivity::EightWay).unwrap();
        assert_eq!(eight.components.len(), 1);
        assert_eq!(eight.components[0].pixel_count, 2);
    }

    #[test]
    fn test_u_shape_merges_into_one_component() {
        // The two arms meet at the bottom; union-find must merge their
        // provisional labels.
        let map = map_from_rows(&[
            &[1, 0, 1],
            &[1, 0, 1],
            &[1, 1, 1],
        ]);
        let labeling = label_components(&map, Connectivity::FourWay).unwrap();
        assert_eq!(labeling.components.len(), 1);
        assert_eq!(labeling.components[0].pixel_count, 7);
    }

    #[test]
    fn test_labels_are_dense_and_consistent() {
        let map = map_from_rows(&[&[1, 0, 1, 0, 1]]);
        let labeling = label_components(&map, Connectivity::FourWay).unwrap();
        assert_eq!(labeling.components.len(), 3);
        for component in &labeling.components {
            assert_eq!(component.pixel_count, 1);
        }
        let seen: Vec<u32> = labeling.labels.iter().flatten().cloned().collect();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
