// grid.rs - Bounded grid and B3/S23 transition for Conway's Game of Life

use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::error::{LifeError, Result};

/// A fixed-size grid of cells addressed by `(x, y)`, `0 <= x < width`, `0 <= y < height`.
///
/// There is no wraparound: cells past an edge do not exist, so border cells
/// have 5 possible neighbours and corner cells have 3.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    width:      usize,
    height:     usize,
    cells:      Vec<bool>,  // column-major, every column is `height` long
    next_cells: Vec<bool>,  // scratch buffer the next generation is built into
    generation: u64,
}

impl LifeGrid {
    /// Creates a grid where each cell is alive with probability 1/3.
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Self::empty(width, height)?;
        grid.randomize(rng);
        Ok(grid)
    }

    /// Creates a grid with every cell dead.
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(LifeError::InvalidDimension { width, height }),
        };

        Ok(Self {
            width,
            height,
            cells: vec![false; len],
            next_cells: vec![false; len],
            generation: 0,
        })
    }

    /// Creates an otherwise dead grid with the given cells alive.
    /// Coordinates outside the grid are ignored.
    pub fn with_alive<I>(width: usize, height: usize, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::empty(width, height)?;
        for (x, y) in alive {
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of steps taken since the grid was last seeded or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Reads a cell. Anything outside the grid reads as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[self.index(x, y)]
    }

    /// Writes a cell. Writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if self.contains(x, y) {
            let i = self.index(x, y);
            self.cells[i] = alive;
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        if self.contains(x, y) {
            let i = self.index(x, y);
            self.cells[i] = !self.cells[i];
        }
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Reseeds every cell: alive iff a draw from {0, 1, 2} comes up 1.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_range(0..3) == 1;  // ~33% density
        }
        self.generation = 0;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, `x` major then `y`.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / height, i % height))
    }

    /// Counts live cells in the Moore neighbourhood of `(x, y)`, clamped to the grid.
    ///
    /// The cell itself is never counted. Returns a value in `0..=8`.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        let min_x = x.saturating_sub(1);
        let max_x = x.saturating_add(1).min(self.width - 1);
        let min_y = y.saturating_sub(1);
        let max_y = y.saturating_add(1).min(self.height - 1);

        let mut count = 0;
        for i in min_x..=max_x {
            for j in min_y..=max_y {
                if (i, j) == (x, y) {
                    continue;
                }
                if self.cells[self.index(i, j)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation.
    ///
    /// Every neighbour count is taken from the current generation; the result
    /// is built in the scratch buffer and swapped in afterwards.
    pub fn step(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                let i = self.index(x, y);
                let next_state = match (self.cells[i], self.alive_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
                self.next_cells[i] = next_state;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
    }
}

/// Hashes the cell states only, so equal generations hash equally whatever their age.
impl Hash for LifeGrid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.cells.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn alive(grid: &LifeGrid) -> Vec<(usize, usize)> {
        grid.alive_cells().collect()
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            LifeGrid::empty(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            LifeGrid::empty(5, 0),
            Err(LifeError::InvalidDimension { width: 5, height: 0 })
        ));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(LifeGrid::new(0, 0, &mut rng).is_err());
    }

    #[test]
    fn random_seeding_is_about_one_in_three() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = LifeGrid::new(88, 66, &mut rng).unwrap();
        let density = grid.population() as f64 / (88.0 * 66.0);
        assert!((0.28..0.38).contains(&density), "density was {density}");
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn same_seed_gives_same_grid() {
        let a = LifeGrid::new(20, 10, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = LifeGrid::new(20, 10, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(alive(&a), alive(&b));
    }

    #[test]
    fn corner_of_full_grid_has_three_neighbors() {
        let mut grid = LifeGrid::empty(4, 3).unwrap();
        for x in 0..4 {
            for y in 0..3 {
                grid.set(x, y, true);
            }
        }
        assert_eq!(grid.alive_neighbors(0, 0), 3);
        assert_eq!(grid.alive_neighbors(3, 2), 3);
        assert_eq!(grid.alive_neighbors(0, 1), 5);
        assert_eq!(grid.alive_neighbors(1, 0), 5);
        assert_eq!(grid.alive_neighbors(1, 1), 8);
    }

    #[test]
    fn edge_cells_exclude_themselves_not_a_neighbor() {
        // Only (0,0) and (1,1) alive: each sees exactly the other.
        let grid = LifeGrid::with_alive(3, 3, [(0, 0), (1, 1)]).unwrap();
        assert_eq!(grid.alive_neighbors(0, 0), 1);
        assert_eq!(grid.alive_neighbors(1, 1), 1);
        assert_eq!(grid.alive_neighbors(0, 1), 2);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = LifeGrid::with_alive(1, 1, [(0, 0)]).unwrap();
        assert_eq!(grid.alive_neighbors(0, 0), 0);
    }

    #[test]
    fn out_of_range_access_is_harmless() {
        let mut grid = LifeGrid::empty(3, 3).unwrap();
        grid.set(10, 1, true);
        grid.toggle(1, 10);
        assert!(!grid.is_alive(10, 1));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_and_clear() {
        let mut grid = LifeGrid::empty(3, 3).unwrap();
        grid.toggle(1, 2);
        assert!(grid.is_alive(1, 2));
        grid.toggle(1, 2);
        assert!(!grid.is_alive(1, 2));

        grid.set(0, 0, true);
        grid.step();
        assert_eq!(grid.generation(), 1);
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn birth_survival_and_death() {
        // (1,1) dead with neighbours (0,0),(2,0),(0,2) -> birth.
        let mut grid = LifeGrid::with_alive(5, 5, [(0, 0), (2, 0), (0, 2)]).unwrap();
        grid.step();
        assert!(grid.is_alive(1, 1));

        // (2,2) alive with 4 neighbours -> dies.
        let mut grid =
            LifeGrid::with_alive(5, 5, [(2, 2), (1, 1), (3, 1), (1, 3), (3, 3)]).unwrap();
        assert_eq!(grid.alive_neighbors(2, 2), 4);
        grid.step();
        assert!(!grid.is_alive(2, 2));

        // (2,2) alive with 2 neighbours -> survives.
        let mut grid = LifeGrid::with_alive(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        assert_eq!(grid.alive_neighbors(2, 2), 2);
        grid.step();
        assert!(grid.is_alive(2, 2));
    }

    #[test]
    fn alive_cells_are_column_major() {
        let grid = LifeGrid::with_alive(3, 3, [(2, 0), (0, 2), (1, 1)]).unwrap();
        assert_eq!(alive(&grid), vec![(0, 2), (1, 1), (2, 0)]);
    }
}
