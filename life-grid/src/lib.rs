#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;

pub use error::GridError;

use log::trace;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::mem;
use std::ops::{Index, IndexMut};

pub trait World {
    fn grid(&self) -> &WorldGrid<impl GridCell>;

    /// Advances one generation and returns the locations whose cells changed, in row-major order.
    fn update(&mut self) -> Vec<Loc>;
}

/// A world the user can edit between (or during) generations.
pub trait EditableWorld: World {
    /// Sets the cell at `loc` alive or dead. Returns whether the cell changed.
    fn paint(&mut self, loc: Loc, alive: bool) -> Result<bool, GridError>;
    fn randomize(&mut self);
    fn clear(&mut self);
    /// Sets every cell in `pattern` alive, or nothing at all if any of them is off the grid.
    fn apply_pattern(&mut self, pattern: &[Loc]) -> Result<(), GridError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.row < self.height && loc.col < self.width
    }
}

#[derive(Clone, Debug)]
pub struct WorldGrid<C>
where
    C: Clone + GridCell,
{
    size: GridSize,
    cells: WorldGridCells<C>,
    next_cells: WorldGridCells<C>,
}

impl<C> WorldGrid<C>
where
    C: Clone + GridCell,
{
    pub fn new(size: GridSize) -> Self {
        assert!(!size.is_empty());
        Self {
            size,
            cells: WorldGridCells::new(size),
            next_cells: WorldGridCells::new(size),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.cells_iter()
    }

    pub fn cells_iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut C> {
        self.cells.cells_iter_mut()
    }

    pub fn cell(&self, loc: Loc) -> Result<&C, GridError> {
        self.cells
            .cell(loc)
            .ok_or_else(|| GridError::out_of_bounds(loc, self.size))
    }

    pub fn set_cell(&mut self, loc: Loc, cell: C) -> Result<(), GridError> {
        let size = self.size;
        let target = self
            .cells
            .cell_mut(loc)
            .ok_or_else(|| GridError::out_of_bounds(loc, size))?;
        *target = cell;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(C::default());
    }

    pub fn stamp(&mut self, locs: &[Loc], cell: C) -> Result<(), GridError> {
        if let Some(&outside) = locs.iter().find(|loc| !self.size.contains(**loc)) {
            return Err(GridError::out_of_bounds(outside, self.size));
        }
        for &loc in locs {
            self.cells[loc] = cell;
        }
        trace!("Stamped {} cells", locs.len());
        Ok(())
    }

    pub fn update(&mut self) -> Vec<Loc> {
        self.next_cells.copy_from(&self.cells);
        self.update_cells();
        let changed = self.changed_locs();
        mem::swap(&mut self.next_cells, &mut self.cells);
        changed
    }

    fn update_cells(&mut self) {
        for row in 0..self.size.height {
            for col in 0..self.size.width {
                self.update_cell(Loc::new(row, col));
            }
        }
    }

    fn update_cell(&mut self, loc: Loc) {
        let cell = &self.cells[loc];
        let neighborhood = Neighborhood::new(&self.cells, loc);
        let next_cell = &mut self.next_cells[loc];
        cell.update(&neighborhood, next_cell);
    }

    fn changed_locs(&self) -> Vec<Loc> {
        self.cells
            .cells_iter()
            .zip(self.next_cells.cells_iter())
            .enumerate()
            .filter(|(_, (cell, next_cell))| cell != next_cell)
            .map(|(index, _)| Loc::from_grid_index(index, self.size.width))
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct WorldGridCells<C>
where
    C: Clone + GridCell,
{
    cells: Vec<C>,
    size: GridSize,
}

impl<C> WorldGridCells<C>
where
    C: Clone + Copy + Default + GridCell,
{
    pub fn new(size: GridSize) -> Self {
        assert!(!size.is_empty());
        Self {
            cells: vec![C::default(); size.num_cells()],
            size,
        }
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.iter()
    }

    pub fn cells_iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut C> {
        self.cells.iter_mut()
    }

    pub fn cell(&self, loc: Loc) -> Option<&C> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    pub fn cell_mut(&mut self, loc: Loc) -> Option<&mut C> {
        loc.grid_index(self.size).map(|index| &mut self.cells[index])
    }

    pub fn fill(&mut self, cell: C) {
        self.cells.fill(cell);
    }

    pub fn copy_from(&mut self, source: &Self) {
        self.cells.copy_from_slice(&source.cells);
    }
}

impl<C> Index<Loc> for WorldGridCells<C>
where
    C: Clone + Copy + Default + GridCell,
{
    type Output = C;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl<C> IndexMut<Loc> for WorldGridCells<C>
where
    C: Clone + Copy + Default + GridCell,
{
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

pub trait GridCell
where
    Self: Copy + Default + PartialEq,
{
    fn color_rgba(&self) -> [u8; 4];

    /// Writes this cell's next state into `next_cell`, which starts as a copy of `self`.
    fn update(&self, neighborhood: &Neighborhood<Self>, next_cell: &mut Self);
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight cells around a center cell. Positions past the grid edge are skipped, so they
/// count as dead; the grid does not wrap.
pub struct Neighborhood<'a, C>
where
    C: Clone + Copy + Default + GridCell,
{
    cells: &'a WorldGridCells<C>,
    center: Loc,
}

impl<'a, C> Neighborhood<'a, C>
where
    C: Clone + Copy + Default + GridCell,
{
    pub fn new(cells: &'a WorldGridCells<C>, center: Loc) -> Self {
        Self { cells, center }
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&C),
    {
        for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
            if let Some(loc) = self.center.offset(row_offset, col_offset)
                && let Some(cell) = self.cells.cell(loc)
            {
                f(cell);
            }
        }
    }

    pub fn count_neighbors<P>(&self, mut predicate: P) -> u32
    where
        P: FnMut(&C) -> bool,
    {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if predicate(neighbor) {
                result += 1;
            }
        });
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if size.contains(*self) {
            Some(self.row as usize * size.width as usize + self.col as usize)
        } else {
            None
        }
    }

    pub fn from_grid_index(index: usize, width: u32) -> Self {
        let width = width as usize;
        Self::new((index / width) as u32, (index % width) as u32)
    }

    pub fn offset(&self, row_offset: i32, col_offset: i32) -> Option<Loc> {
        Some(Loc::new(
            self.row.checked_add_signed(row_offset)?,
            self.col.checked_add_signed(col_offset)?,
        ))
    }
}

impl From<(u32, u32)> for Loc {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
