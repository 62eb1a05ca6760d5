// patterns.rs - Named starting patterns, stamped centred on the torus

use crate::grid::Grid;

/// Live cells as `(dx, dy)` offsets from the board centre.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(-1, 0), (0, 0), (1, 0)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    Pattern {
        name: "Toad",
        cells: &[(-1, 0), (0, 0), (1, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(-2, -2), (-1, -2), (-2, -1), (-1, -1), (0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            (-4, -6), (-3, -6), (-2, -6), (2, -6), (3, -6), (4, -6),
            (-6, -4), (-1, -4), (1, -4), (6, -4),
            (-6, -3), (-1, -3), (1, -3), (6, -3),
            (-6, -2), (-1, -2), (1, -2), (6, -2),
            (-4, -1), (-3, -1), (-2, -1), (2, -1), (3, -1), (4, -1),
            (-4, 1), (-3, 1), (-2, 1), (2, 1), (3, 1), (4, 1),
            (-6, 2), (-1, 2), (1, 2), (6, 2),
            (-6, 3), (-1, 3), (1, 3), (6, 3),
            (-6, 4), (-1, 4), (1, 4), (6, 4),
            (-4, 6), (-3, 6), (-2, 6), (2, 6), (3, 6), (4, 6),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
    },
    Pattern {
        name: "LWSS",
        cells: &[
            (-1, -2), (0, -2), (1, -2), (2, -2),
            (-2, -1), (2, -1),
            (2, 0),
            (-2, 1), (1, 1),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            // Left block
            (-18, 0), (-18, 1), (-17, 0), (-17, 1),
            // Left ship
            (-8, 0), (-8, 1), (-8, 2), (-7, -1), (-7, 3), (-6, -2), (-6, 4),
            (-5, -2), (-5, 4), (-4, 1), (-3, -1), (-3, 3), (-2, 0), (-2, 1),
            (-2, 2), (-1, 1),
            // Right ship
            (2, 0), (2, -1), (2, -2), (3, 0), (3, -1), (3, -2), (4, -3),
            (4, 1), (6, -4), (6, -3), (6, 1), (6, 2),
            // Right block
            (16, -1), (16, -2), (17, -1), (17, -2),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and stamps `pattern` around the centre, wrapping at the edges.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let (cx, cy) = ((grid.width() / 2) as isize, (grid.height() / 2) as isize);
    for &(dx, dy) in pattern.cells {
        grid.set_wrapped(cx + dx, cy + dy, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    fn advance(grid: &mut Grid, steps: usize) {
        for _ in 0..steps {
            let next = rules::step(grid).unwrap();
            grid.replace_all(next).unwrap();
        }
    }

    #[test]
    fn patterns_have_distinct_cells_on_reference_board() {
        for pattern in PATTERNS {
            let mut grid = Grid::new(48, 35).unwrap();
            apply_pattern(&mut grid, pattern);
            assert_eq!(grid.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn apply_clears_previous_cells() {
        let mut grid = Grid::new(48, 35).unwrap();
        grid.randomize(3);
        apply_pattern(&mut grid, &BLINKER);
        assert_eq!(grid.population(), 3);
        assert!(grid.get(24, 17).unwrap());
    }

    #[test]
    fn stamping_wraps_past_the_edges() {
        let corner = Pattern { name: "corner", cells: &[(-4, -4), (2, 1)] };
        let mut grid = Grid::new(6, 6).unwrap();
        apply_pattern(&mut grid, &corner);
        assert_eq!(grid.population(), 2);
        assert!(grid.get(5, 5).unwrap());
        assert!(grid.get(5, 4).unwrap());
    }

    #[test]
    fn stamping_on_a_single_cell_board_folds_everything_together() {
        let mut grid = Grid::new(1, 1).unwrap();
        apply_pattern(&mut grid, &GLIDER);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("beacon").map(|p| p.cells.len()), Some(8));
        assert!(find("no such pattern").is_none());
    }

    #[test]
    fn oscillators_return_to_start() {
        for (name, period) in [("Blinker", 2), ("Toad", 2), ("Beacon", 2), ("Pulsar", 3)] {
            let mut grid = Grid::new(48, 35).unwrap();
            apply_pattern(&mut grid, find(name).unwrap());
            let start = grid.clone();
            advance(&mut grid, 1);
            assert_ne!(grid, start, "{name} should change after one step");
            advance(&mut grid, period - 1);
            assert_eq!(grid, start, "{name} should have period {period}");
        }
    }

    #[test]
    fn lwss_moves_two_cells_every_four_steps() {
        let mut grid = Grid::new(48, 35).unwrap();
        apply_pattern(&mut grid, find("LWSS").unwrap());
        let start = grid.clone();
        advance(&mut grid, 4);

        for y in 0..35 {
            for x in 0..48 {
                let expected = start.get((x + 48 - 2) % 48, y).unwrap();
                assert_eq!(grid.get(x, y).unwrap(), expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn gosper_gun_emits_a_glider_each_period() {
        let mut grid = Grid::new(48, 35).unwrap();
        apply_pattern(&mut grid, find("Gosper Glider Gun").unwrap());
        advance(&mut grid, 30);
        assert_eq!(grid.population(), 36 + 5);
    }
}
