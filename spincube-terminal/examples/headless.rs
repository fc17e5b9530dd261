/// Example: render a handful of frames straight to stdout, no raw mode
///
/// Usage: cargo run --example headless -- [frame-count]
///
/// Useful for eyeballing the rasterizer output in a pipeline or a plain
/// dumb terminal where the interactive app can't take over the screen.
use std::env;
use std::io::{self, stdout, Write};

use spincube_core::{Cube, Projector, Spin};
use spincube_terminal::{render_frame, CharGrid, DrawMode};

fn main() -> io::Result<()> {
    let frames: u64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    let cube = Cube::default();
    let projector = Projector::default();
    let mut grid = CharGrid::default();
    let mut spin = Spin::default();

    let mut out = stdout();
    for frame in 0..frames {
        render_frame(&mut grid, &cube, &spin.angles(), &projector, DrawMode::Edges);
        writeln!(out, "--- frame {} (factor {:.1}) ---", frame, spin.factor())?;
        for row in 0..grid.rows() {
            let line: String = (0..grid.cols())
                .map(|col| grid.get(row, col).unwrap_or(' '))
                .collect();
            writeln!(out, "{}", line.trim_end())?;
        }
        spin.advance();
    }

    Ok(())
}
