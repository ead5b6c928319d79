// patterns.rs - Named seed patterns, stored as (x, y) offsets from their top-left corner

use crate::error::{LifeError, Result};
use crate::grid::LifeGrid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box of the pattern as `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (35, 2), (34, 3), (35, 3),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
}

/// Clears the grid and places the pattern in its centre.
/// Cells that land outside the grid are dropped.
pub fn apply_pattern(grid: &mut LifeGrid, pattern: &Pattern) {
    grid.clear();

    let (pattern_width, pattern_height) = pattern.extent();
    let offset_x = grid.width().saturating_sub(pattern_width) / 2;
    let offset_y = grid.height().saturating_sub(pattern_height) / 2;

    for &(x, y) in pattern.cells {
        grid.set(offset_x + x, offset_y + y, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_pattern("glider").unwrap().name, "Glider");
        assert_eq!(find_pattern("GOSPER GLIDER GUN").unwrap().cells.len(), 36);
        assert!(matches!(
            find_pattern("spaceship"),
            Err(LifeError::UnknownPattern(name)) if name == "spaceship"
        ));
    }

    #[test]
    fn extents() {
        assert_eq!(find_pattern("Blinker").unwrap().extent(), (3, 1));
        assert_eq!(find_pattern("Pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find_pattern("Gosper Glider Gun").unwrap().extent(), (36, 9));
    }

    #[test]
    fn pattern_is_centred() {
        let mut grid = LifeGrid::empty(7, 5).unwrap();
        apply_pattern(&mut grid, find_pattern("Blinker").unwrap());
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut grid = LifeGrid::empty(10, 10).unwrap();
        let gun = find_pattern("Gosper Glider Gun").unwrap();
        apply_pattern(&mut grid, gun);
        let inside = gun.cells.iter().filter(|&&(x, y)| x < 10 && y < 10).count();
        assert_eq!(grid.population(), inside);
    }

    #[test]
    fn applying_replaces_previous_state() {
        let mut grid = LifeGrid::with_alive(8, 8, [(0, 0), (7, 7)]).unwrap();
        grid.step();
        apply_pattern(&mut grid, find_pattern("Beacon").unwrap());
        assert_eq!(grid.population(), 8);
        assert_eq!(grid.generation(), 0);
        assert!(!grid.is_alive(0, 0));
    }

    #[test]
    fn every_pattern_has_unique_cells() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
