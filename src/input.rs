use crate::render::Layout;
use crate::simulation::Simulation;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{Key, NamedKey},
};

/// What a window event asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    ToggleRunning,
    /// Force the cell under this logical pixel position alive.
    Paint { x: f64, y: f64 },
}

/// Tracks the pointer between events; winit reports button presses without a
/// position.
#[derive(Debug, Default)]
pub struct InputState {
    cursor_pos: Option<PhysicalPosition<f64>>,
}

impl InputState {
    /// Translates a window event into a command. `scale_factor` converts the
    /// physical cursor position into the logical pixels the grid is laid out in.
    pub fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        scale_factor: f64,
    ) -> Option<Command> {
        match event {
            WindowEvent::CloseRequested => Some(Command::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => Some(Command::ToggleRunning),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(*position);
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, .. } => {
                self.mouse_pressed(scale_factor)
            }
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_pos = Some(position);
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = None;
    }

    /// Paint command at the last known cursor position, if the cursor is
    /// inside the window.
    pub fn mouse_pressed(&self, scale_factor: f64) -> Option<Command> {
        let logical = self.cursor_pos?.to_logical::<f64>(scale_factor);
        Some(Command::Paint { x: logical.x, y: logical.y })
    }
}

/// Applies a command to the simulation. Returns `false` once the loop should stop.
pub fn apply(sim: &mut Simulation, layout: &Layout, command: Command) -> bool {
    match command {
        Command::Quit => return false,
        Command::ToggleRunning => {
            sim.toggle_running();
        }
        Command::Paint { x, y } => match layout.cell_at(x, y) {
            Some((i, j)) => {
                sim.paint(i, j);
            }
            None => log::trace!("Ignoring click outside grid at ({:.1}, {:.1})", x, y),
        },
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn paint_targets_offset_cell() {
        let layout = Layout::new(200, 200, 20);
        let mut sim = Simulation::new(Grid::new(layout.rows, layout.cols));
        assert!(apply(&mut sim, &layout, Command::Paint { x: 65.0, y: 105.0 }));
        assert_eq!(sim.grid().live_count(), 1);
        assert!(sim.grid().get(2, 4).is_some_and(|c| c.is_alive()));
    }

    #[test]
    fn extreme_click_is_ignored() {
        let layout = Layout::new(200, 200, 20);
        let mut sim = Simulation::new(Grid::new(layout.rows, layout.cols));
        assert!(apply(&mut sim, &layout, Command::Paint { x: f64::MIN, y: 100.0 }));
        assert!(apply(&mut sim, &layout, Command::Paint { x: 100.0, y: -1e300 }));
        assert_eq!(sim.grid().live_count(), 0);
    }

    #[test]
    fn quit_stops_loop() {
        let layout = Layout::new(200, 200, 20);
        let mut sim = Simulation::new(Grid::new(layout.rows, layout.cols));
        assert!(!apply(&mut sim, &layout, Command::Quit));
    }

    #[test]
    fn close_request_quits() {
        let mut input = InputState::default();
        let command = input.handle_window_event(&WindowEvent::CloseRequested, 1.0);
        assert_eq!(command, Some(Command::Quit));
    }

    #[test]
    fn press_uses_last_cursor_position() {
        let mut input = InputState::default();
        assert_eq!(input.mouse_pressed(1.0), None);

        input.cursor_moved(PhysicalPosition::new(90.0, 40.0));
        assert_eq!(input.mouse_pressed(2.0), Some(Command::Paint { x: 45.0, y: 20.0 }));
        assert_eq!(input.mouse_pressed(1.0), Some(Command::Paint { x: 90.0, y: 40.0 }));

        input.cursor_left();
        assert_eq!(input.mouse_pressed(2.0), None);
    }
}
