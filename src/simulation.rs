use crate::grid::Grid;

/// Everything the loop mutates between frames: the double-buffered grid,
/// the run/pause flag and a generation counter.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    // Output buffer for the next generation, swapped with `grid` after each step.
    scratch: Grid,
    running: bool,
    generation: u64,
}

impl Simulation {
    /// Starts paused.
    pub fn new(grid: Grid) -> Self {
        let scratch = Grid::new(grid.rows(), grid.cols());
        Self {
            grid,
            scratch,
            running: false,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flips between running and paused. Returns the new state.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        log::info!("Simulation {}", if self.running { "running" } else { "paused" });
        self.running
    }

    /// Forces a cell alive regardless of run state. Out-of-range indices are
    /// ignored and reported as `false`.
    pub fn paint(&mut self, i: usize, j: usize) -> bool {
        let painted = self.grid.set_alive(i, j);
        if painted {
            log::debug!("Painted cell ({}, {})", i, j);
        }
        painted
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.grid.step_into(&mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        log::debug!("Generation {}: {} live cells", self.generation, self.grid.live_count());
    }

    /// Steps only while running. Called once per frame.
    pub fn tick(&mut self) {
        if self.running {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Pattern;

    #[test]
    fn tick_is_noop_while_paused() {
        let mut grid = Grid::new(6, 6);
        grid.place(Pattern::Blinker, 2, 1);
        let mut sim = Simulation::new(grid.clone());
        sim.tick();
        assert_eq!(sim.grid(), &grid);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn tick_steps_while_running() {
        let mut grid = Grid::new(6, 6);
        grid.place(Pattern::Blinker, 2, 1);
        let mut sim = Simulation::new(grid.clone());
        sim.toggle_running();
        sim.tick();
        assert_eq!(sim.grid(), &grid.step());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn paint_works_in_both_states() {
        let mut sim = Simulation::new(Grid::new(4, 4));
        assert!(sim.paint(0, 0));
        sim.toggle_running();
        assert!(sim.paint(3, 3));
        assert!(!sim.paint(4, 0));
        assert_eq!(sim.grid().live_count(), 2);
    }
}
