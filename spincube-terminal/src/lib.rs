/// Terminal front end for the spinning ASCII cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use spincube_core::{Cube, Projector, Spin};

pub mod renderer;
pub mod surface;

pub use renderer::{render_frame, DrawMode, FILL_GLYPH};
pub use surface::CharGrid;

/// Fixed per-frame time budget, 25 frames per second
const FRAME_BUDGET: Duration = Duration::from_millis(40);

/// Main application struct for the terminal cube animation
pub struct TerminalApp {
    cube: Cube,
    spin: Spin,
    projector: Projector,
    grid: CharGrid,
    mode: DrawMode,
    /// Render this many frames then stop; None runs until a quit key
    frame_budget: Option<u64>,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(cube: Cube, mode: DrawMode, frame_budget: Option<u64>) -> Self {
        Self {
            cube,
            spin: Spin::default(),
            projector: Projector::default(),
            grid: CharGrid::default(),
            mode,
            frame_budget,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            if self.frame_budget == Some(0) {
                log::debug!("frame budget exhausted, stopping");
                break;
            }

            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render the current animation state, then move it forward
            self.render()?;
            self.spin.advance();

            if let Some(remaining) = self.frame_budget.as_mut() {
                *remaining -= 1;
            }

            // Frame pacing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_BUDGET {
                std::thread::sleep(FRAME_BUDGET - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let drawn = render_frame(
            &mut self.grid,
            &self.cube,
            &self.spin.angles(),
            &self.projector,
            self.mode,
        );
        log::trace!("frame at factor {:.1}: {} primitives", self.spin.factor(), drawn);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.grid.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Spincube | FPS: {:.1} | Mode: {} | Q/ESC=Quit",
                self.fps,
                match self.mode {
                    DrawMode::Filled => "filled",
                    DrawMode::Edges => "edges",
                }
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
