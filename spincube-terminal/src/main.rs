/// Spincube - Rotating ASCII Cube
///
/// Renders a tumbling cube as ASCII art, either wireframe or solid.
/// Controls:
///   - Q/ESC: Quit
use clap::{Parser, ValueEnum};
use spincube_core::Cube;
use spincube_terminal::{DrawMode, TerminalApp};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Scanline-filled faces
    Filled,
    /// Wireframe edges only
    Edges,
}

impl From<Mode> for DrawMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Filled => DrawMode::Filled,
            Mode::Edges => DrawMode::Edges,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spincube", version, about = "A tumbling ASCII cube for your terminal")]
struct Args {
    /// Display mode
    #[arg(long, value_enum, default_value = "filled")]
    mode: Mode,

    /// Render exactly this many frames, then exit
    #[arg(long)]
    frames: Option<u64>,

    /// Cube edge length
    #[arg(long, default_value_t = 4.0)]
    size: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("starting with {:?}", args);

    let cube = Cube::with_edge(args.size);
    let mut app = TerminalApp::new(cube, args.mode.into(), args.frames);
    app.run()?;

    Ok(())
}
