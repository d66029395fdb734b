//! Uniform-cell occupancy grid: the world's spatial index.
//!
//! Each cell holds the ids of every model whose world-frame bounding box
//! touches it. Ray traversals walk cells instead of testing every model.

use blobfinder_core::types::ModelId;
use std::collections::HashMap;

pub struct OccupancyGrid {
    cell_size: f64,
    /// Maps cell key (ix, iy) to the models overlapping that cell.
    cells: HashMap<(i32, i32), Vec<ModelId>>,
}

impl OccupancyGrid {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Cell key containing world point (x, y).
    pub fn key(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// Register a model in every cell its axis-aligned bounding box
    /// touches.
    pub fn insert_aabb(&mut self, id: ModelId, min: (f64, f64), max: (f64, f64)) {
        let (ix0, iy0) = self.key(min.0, min.1);
        let (ix1, iy1) = self.key(max.0, max.1);
        for ix in ix0..=ix1 {
            for iy in iy0..=iy1 {
                let cell = self.cells.entry((ix, iy)).or_default();
                if !cell.contains(&id) {
                    cell.push(id);
                }
            }
        }
    }

    /// Models registered in one cell, if any.
    pub fn cell(&self, key: (i32, i32)) -> Option<&[ModelId]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
