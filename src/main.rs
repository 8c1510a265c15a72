use cell_life::input::{self, InputState};
use cell_life::render::{frame_shapes, Layout};
use cell_life::state::State;
use cell_life::{Config, FrameClock, Grid, Simulation};

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let mut event_loop = EventLoop::new().context("Failed to create event loop")?;

    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .context("Failed to create window")?,
    );

    let mut state = pollster::block_on(State::new(window.clone()))?;

    let layout = Layout::new(config.window_width, config.window_height, config.cell_size);
    let seed = config.resolve_seed();
    log::info!(
        "Grid {}x{} (cell size {}), seed {}",
        layout.rows,
        layout.cols,
        layout.cell_size,
        seed
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::new(Grid::random(layout.rows, layout.cols, &mut rng));

    let clock = FrameClock::new(config.fps);
    let mut input_state = InputState::default();

    loop {
        let frame_start = Instant::now();

        // Drain everything queued without blocking.
        let mut commands = Vec::new();
        let mut resized = None;
        let status = event_loop.pump_events(Some(Duration::ZERO), |event, _| {
            if let Event::WindowEvent { window_id, event } = event {
                if window_id != window.id() {
                    return;
                }
                if let WindowEvent::Resized(size) = event {
                    resized = Some(size);
                }
                commands.extend(input_state.handle_window_event(&event, window.scale_factor()));
            }
        });
        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {}", code);
            break;
        }
        if let Some(size) = resized {
            state.resize(size);
        }
        if !commands.into_iter().all(|command| input::apply(&mut sim, &layout, command)) {
            break;
        }

        sim.tick();

        match state.render(frame_shapes(&layout, sim.grid())) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring and skipping frame.");
                state.resize(state.size);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Skipping frame due to surface timeout.");
            }
            Err(e @ wgpu::SurfaceError::OutOfMemory) => {
                return Err(e).context("Failed to acquire frame");
            }
        }

        clock.pace(frame_start);
    }

    log::info!("Quit after {} generations", sim.generation());
    drop(state);
    Ok(())
}
