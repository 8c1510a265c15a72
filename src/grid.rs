use crate::rules::{next_state, Cell, Pattern};
use rand::Rng;

/// Fixed-size grid of cells stored row-major along `i`.
///
/// `i` runs along the window's x axis (`0..rows`) and `j` along the y axis
/// (`0..cols`). Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Each cell is alive or dead with equal probability.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols).map(|_| Cell::from(rng.gen_bool(0.5))).collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.rows && j < self.cols).then(|| i * self.cols + j)
    }

    /// Cell at `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<Cell> {
        self.index(i, j).map(|idx| self.cells[idx])
    }

    /// Forces the cell alive. Returns `false` if `(i, j)` is outside the grid.
    pub fn set_alive(&mut self, i: usize, j: usize) -> bool {
        match self.index(i, j) {
            Some(idx) => {
                self.cells[idx] = Cell::Alive;
                true
            }
            None => false,
        }
    }

    /// Stamps a pattern with its top-left corner at `(i, j)`. Cells that fall
    /// outside the grid are dropped.
    pub fn place(&mut self, pattern: Pattern, i: usize, j: usize) {
        for &(di, dj) in pattern.offsets() {
            if let (Some(ci), Some(cj)) = (i.checked_add(di), j.checked_add(dj)) {
                self.set_alive(ci, cj);
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Yields `(i, j, cell)` for every cell.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Number of live cells among the eight neighbors of `(i, j)`.
    ///
    /// The boundary is not wrapped: neighbors outside the grid are absent, so
    /// edge and corner cells see fewer than eight candidates.
    pub fn alive_neighbors(&self, i: usize, j: usize) -> u8 {
        let mut count = 0;
        for di in -1isize..=1 {
            for dj in -1isize..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }
                let (Some(ni), Some(nj)) = (i.checked_add_signed(di), j.checked_add_signed(dj))
                else {
                    continue;
                };
                if let Some(cell) = self.get(ni, nj) {
                    count += cell.value();
                }
            }
        }
        count
    }

    /// Writes the next generation into `out`, reading only from `self`.
    ///
    /// `out` is resized to match if its dimensions differ.
    pub fn step_into(&self, out: &mut Grid) {
        if out.rows != self.rows || out.cols != self.cols {
            *out = Grid::new(self.rows, self.cols);
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                let idx = i * self.cols + j;
                out.cells[idx] = next_state(self.cells[idx], self.alive_neighbors(i, j));
            }
        }
    }

    /// Next generation as a new grid.
    pub fn step(&self) -> Grid {
        let mut next = Grid::new(self.rows, self.cols);
        self.step_into(&mut next);
        next
    }
}
