//! Rectangular grid field with static obstacles.
//!
//! The field is the shared world every robot moves through: a `width` ×
//! `height` rectangle of unit cells, each either open or blocked.  Blocked
//! cells are static for the lifetime of the field — robots are *not*
//! obstacles here; dynamic robot-robot interference is handled by the
//! conflict machinery in `swarm-sim`, not by mutating the field.
//!
//! Storage is a dense `Vec<bool>` mask indexed row-major, so passability
//! checks are a bounds test plus one load.

use swarm_core::GridPoint;

/// A rectangular grid of unit cells with a static blocked-cell mask.
#[derive(Clone, Debug)]
pub struct GridField {
    width:   i32,
    height:  i32,
    blocked: Vec<bool>,
}

impl GridField {
    /// Create an all-open field of `width` × `height` cells.
    ///
    /// Valid coordinates are `0..width` × `0..height`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "field dimensions must be positive");
        Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` if `p` lies inside the field rectangle (blocked or not).
    #[inline]
    pub fn in_bounds(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// `true` if `p` is inside the field and not blocked.
    #[inline]
    pub fn is_open(&self, p: GridPoint) -> bool {
        self.in_bounds(p) && !self.blocked[self.cell_index(p)]
    }

    /// Mark a cell impassable.  Out-of-bounds cells are ignored — they are
    /// already impassable by the bounds check.
    pub fn block(&mut self, p: GridPoint) {
        if self.in_bounds(p) {
            let idx = self.cell_index(p);
            self.blocked[idx] = true;
        }
    }

    /// Mark every cell in `cells` impassable.
    pub fn block_all<I: IntoIterator<Item = GridPoint>>(&mut self, cells: I) {
        for p in cells {
            self.block(p);
        }
    }

    /// Open 4-connected neighbors of `p`, in the fixed
    /// [`GridPoint::ORTHO_STEPS`] order so every caller expands candidates
    /// identically.
    pub fn open_neighbors(&self, p: GridPoint) -> Vec<GridPoint> {
        GridPoint::ORTHO_STEPS
            .iter()
            .map(|&(dx, dy)| p.offset(dx, dy))
            .filter(|&n| self.is_open(n))
            .collect()
    }

    #[inline]
    fn cell_index(&self, p: GridPoint) -> usize {
        (p.y * self.width + p.x) as usize
    }
}
