use anyhow::Result;
use ascii_cube::core::{Rasterizer, RenderConfig};
use ascii_cube::input::{InterruptWatch, StopFlag};
use ascii_cube::term::{run_frames, TerminalMode, TerminalRenderer};

fn main() -> Result<()> {
    let config = RenderConfig::from_env();
    let mut rasterizer = Rasterizer::new(config)?;

    let flag = StopFlag::new();
    flag.install_signal_handler()?;

    let mut term = TerminalRenderer::new();
    let mode = match term.enter() {
        Ok(mode) => mode,
        Err(e) => {
            let _ = term.exit();
            return Err(e);
        }
    };

    let mut watch = InterruptWatch::new(flag, mode == TerminalMode::Raw);
    let result = run_frames(&mut rasterizer, &mut term, |timeout| watch.wait(timeout));

    // Always try to restore terminal state.
    let _ = term.exit();
    result.map(|_| ())
}
