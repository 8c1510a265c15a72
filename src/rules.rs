//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the cell state representation, the transition rule
//! and a few well-known patterns for seeding a grid.

/// State of a single cell. The discriminant is the cell's numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// 0 for dead, 1 for alive.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Game of Life standard rules (B3/S23):
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Predefined patterns for seeding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A 2x2 still life
    Block,
    /// A period-2 oscillator, three cells along the j axis
    Blinker,
    /// A diagonal spaceship
    Glider,
}

impl Pattern {
    /// Offsets of the live cells relative to the pattern's top-left anchor.
    pub fn offsets(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survival_needs_two_or_three() {
        for n in 0..=8u8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Alive, n), expected, "alive with {} neighbors", n);
        }
    }

    #[test]
    fn birth_needs_exactly_three() {
        for n in 0..=8u8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Dead, n), expected, "dead with {} neighbors", n);
        }
    }

    #[test]
    fn cell_values() {
        assert_eq!(Cell::Dead.value(), 0);
        assert_eq!(Cell::Alive.value(), 1);
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
