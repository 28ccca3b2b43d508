//! # Vertex Welding
//!
//! Tolerance-keyed deduplication of `(x, y, z, u, v)` vertices.
//!
//! Keys are bucketed by a spatial hash over all five components. A lookup
//! visits every cell that may hold a key within `epsilon` of the query on
//! each component, so two keys that differ by at most `epsilon` everywhere
//! always resolve to the same vertex. Tolerance equality is not transitive:
//! chains of keys each within `epsilon` of the next may still produce more
//! than one vertex.

use std::collections::HashMap;

use config::constants::WELD_EPSILON;
use glam::{Vec2, Vec3};

/// Number of components in a weld key.
const KEY_LEN: usize = 5;

/// Cell size as a multiple of epsilon. Must stay above 2 so a query interval
/// `[c - eps, c + eps]` spans at most two cells per component.
const CELL_SIZE_FACTOR: f64 = 4.0;

/// Position and texture coordinate packed as `[x, y, z, u, v]`.
pub type WeldKey = [f32; KEY_LEN];

/// Packs a position and texture coordinate into a [`WeldKey`].
#[inline]
pub fn weld_key(position: Vec3, uv: Vec2) -> WeldKey {
    [position.x, position.y, position.z, uv.x, uv.y]
}

/// Quantized 5D cell coordinate.
type CellCoord = [i64; KEY_LEN];

/// Helper for welding duplicate vertices during mesh construction.
///
/// The first key inserted for a neighbourhood wins: later keys within
/// `epsilon` on every component map to its index.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::weld::VertexWelder;
///
/// let mut welder = VertexWelder::new();
/// let (a, inserted_a) = welder.insert([0.5, 0.0, 0.0, 0.25, 0.5]);
/// let (b, inserted_b) = welder.insert([0.500_001, 0.0, 0.0, 0.25, 0.5]);
/// assert!(inserted_a && !inserted_b);
/// assert_eq!(a, b);
/// assert_eq!(welder.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct VertexWelder {
    /// Per-component tolerance
    epsilon: f32,
    /// Cell edge length
    cell_size: f64,
    /// Spatial hash: cell -> indices of keys stored in that cell
    cells: HashMap<CellCoord, Vec<u32>>,
    /// Keys in insertion order; a key's position is its index
    keys: Vec<WeldKey>,
}

impl Default for VertexWelder {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexWelder {
    /// Creates a welder using [`WELD_EPSILON`].
    pub fn new() -> Self {
        Self::with_epsilon(WELD_EPSILON)
    }

    /// Creates a welder with a custom tolerance.
    pub fn with_epsilon(epsilon: f32) -> Self {
        Self {
            epsilon,
            cell_size: f64::from(epsilon) * CELL_SIZE_FACTOR,
            cells: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Number of distinct vertices emitted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if nothing has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys in emission order.
    #[inline]
    pub fn keys(&self) -> &[WeldKey] {
        &self.keys
    }

    /// Returns the earliest stored index whose key is within epsilon of
    /// `key` on every component.
    pub fn find(&self, key: &WeldKey) -> Option<u32> {
        self.candidate_cells(key)
            .iter()
            .filter_map(|cell| self.cells.get(cell))
            .flatten()
            .copied()
            .filter(|&index| self.matches(&self.keys[index as usize], key))
            .min()
    }

    /// Returns the index for `key`, inserting it if no stored key matches.
    ///
    /// The boolean is true when a new vertex was emitted.
    pub fn insert(&mut self, key: WeldKey) -> (u32, bool) {
        if let Some(index) = self.find(&key) {
            return (index, false);
        }

        let index = self.keys.len() as u32;
        let cell = self.cell_of(&key);
        self.keys.push(key);
        self.cells.entry(cell).or_default().push(index);
        (index, true)
    }

    fn matches(&self, stored: &WeldKey, key: &WeldKey) -> bool {
        stored
            .iter()
            .zip(key)
            .all(|(a, b)| (a - b).abs() <= self.epsilon)
    }

    fn quantize(&self, value: f64) -> i64 {
        (value / self.cell_size).floor() as i64
    }

    fn cell_of(&self, key: &WeldKey) -> CellCoord {
        key.map(|c| self.quantize(f64::from(c)))
    }

    /// Cells overlapping the box `key ± epsilon` (between 1 and 32).
    fn candidate_cells(&self, key: &WeldKey) -> Vec<CellCoord> {
        let epsilon = f64::from(self.epsilon);
        let ranges = key.map(|c| {
            let c = f64::from(c);
            (self.quantize(c - epsilon), self.quantize(c + epsilon))
        });

        let mut cells = Vec::with_capacity(1 << KEY_LEN);
        'masks: for mask in 0..(1u32 << KEY_LEN) {
            let mut cell = [0; KEY_LEN];
            for (axis, &(low, high)) in ranges.iter().enumerate() {
                if mask & (1 << axis) == 0 {
                    cell[axis] = low;
                } else if high != low {
                    cell[axis] = high;
                } else {
                    continue 'masks;
                }
            }
            cells.push(cell);
        }
        cells
    }
}
