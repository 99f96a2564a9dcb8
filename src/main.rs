use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::PathBuf;
use strokeboard::draw::{Primitive, RenderBackend, RenderError};
use strokeboard::input::{Command, parse_script};
use strokeboard::{Config, Whiteboard};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STROKEBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "strokeboard")]
#[command(
    version = VERSION,
    about = "Replay freehand drawing input and report the generated geometry"
)]
struct Cli {
    /// Replay script, one command per line (reads stdin when omitted or "-")
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Configuration file (default: ~/.config/strokeboard/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print every draw call, not only per-frame totals
    #[arg(long, action = ArgAction::SetTrue)]
    verbose_draws: bool,

    /// Write a documented config file to the default location and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["script", "config"])]
    init_config: bool,
}

/// Backend that reports draw calls on stdout instead of drawing them.
#[derive(Debug, Default)]
struct SummaryBackend {
    verbose: bool,
    frames: usize,
    calls: usize,
    vertices: usize,
}

impl SummaryBackend {
    fn finish_frame(&mut self) {
        self.frames += 1;
        println!(
            "frame {}: {} draw calls, {} vertices",
            self.frames, self.calls, self.vertices
        );
        self.calls = 0;
        self.vertices = 0;
    }
}

impl RenderBackend for SummaryBackend {
    fn upload_and_draw(
        &mut self,
        vertices: &[f32],
        stride: usize,
        primitive: Primitive,
    ) -> Result<(), RenderError> {
        if stride == 0 {
            return Err(RenderError::Backend("zero vertex stride".into()));
        }
        let count = vertices.len() / stride;
        if self.verbose {
            println!("  draw {:?}: {} vertices", primitive, count);
        }
        self.calls += 1;
        self.vertices += count;
        Ok(())
    }
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = read_script(cli.script.as_ref())?;
    let commands = parse_script(&source).context("Failed to parse script")?;
    log::info!("Replaying {} commands", commands.len());

    let mut board = Whiteboard::from_config(&config);
    let mut backend = SummaryBackend {
        verbose: cli.verbose_draws,
        ..SummaryBackend::default()
    };

    for command in commands {
        board
            .apply(command, &mut backend)
            .context("Rendering backend failed")?;
        if command == Command::Render {
            backend.finish_frame();
        }
    }

    // Final frame so the end state is always reported.
    board
        .render(&mut backend)
        .context("Rendering backend failed")?;
    backend.finish_frame();

    println!(
        "strokes: {}, undo: {}, redo: {}",
        board.committed_strokes().len(),
        board.undo_depth(),
        board.redo_depth()
    );

    Ok(())
}
