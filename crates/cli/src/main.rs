#![deny(unsafe_code)]
//! CLI binary for previewing the skyfx backdrop engine.
//!
//! Subcommands:
//! - `palettes`: print the built-in palette table
//! - `params`: print the tunable rates, their defaults and schema
//! - `trace`: tick the engine on a fixed-step clock, print each frame
//! - `strip`: record a run and write it as a PNG color timeline

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use serde_json::Value;
use skyfx_core::{Clock, FixedStepClock, PaletteTable, SkyEngine, SkyParams};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Parser)]
#[command(name = "skyfx", about = "Palette-cycling sky backdrop engine")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log engine diagnostics to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in palettes.
    Palettes,
    /// Show the tunable rates and their defaults.
    Params,
    /// Tick the engine on a fixed-step clock and print every frame.
    Trace {
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Number of frames to run.
        #[arg(short = 'n', long, default_value_t = 600)]
        frames: usize,

        /// Palette name, or "all" for the full cycling table.
        #[arg(short, long)]
        palette: Option<String>,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Record a run and write it as a PNG timeline, one column per frame.
    Strip {
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Length of the recording in seconds.
        #[arg(short, long, default_value_t = 120.0)]
        seconds: f64,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 64)]
        height: usize,

        /// Palette name, or "all" for the full cycling table.
        #[arg(short, long)]
        palette: Option<String>,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "strip.png")]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parses `--params` and folds `--palette` into it.
fn build_engine(params: &str, palette: Option<String>) -> Result<SkyEngine, CliError> {
    let mut params: Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    if let Some(name) = palette {
        params
            .as_object_mut()
            .ok_or_else(|| CliError::Input("--params must be a JSON object".into()))?
            .insert("palette".into(), Value::String(name));
    }
    Ok(SkyEngine::from_json(&params)?)
}

/// Frame count for a `strip` run, checked against PNG and buffer limits.
///
/// Both image dimensions must fit in `u32` and the RGBA buffer size
/// `count * height * 4` must fit in `usize`, so nothing is recorded or
/// allocated for a request that cannot be written.
fn strip_frame_count(seconds: f64, fps: u32, height: usize) -> Result<usize, CliError> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(CliError::Input(format!(
            "--seconds must be positive, got {seconds}"
        )));
    }
    if height == 0 || u32::try_from(height).is_err() {
        return Err(CliError::Input(format!(
            "--height must be between 1 and {}, got {height}",
            u32::MAX
        )));
    }
    let count = (seconds * f64::from(fps.max(1))).ceil();
    if count > f64::from(u32::MAX) {
        return Err(CliError::Input(format!(
            "{seconds}s at {fps} fps is {count} frames, more than a PNG can hold"
        )));
    }
    let count = count as usize;
    count
        .checked_mul(height)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(|| {
            CliError::Input(format!("{count} x {height} timeline is too large to allocate"))
        })?;
    Ok(count)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Palettes => {
            let table = PaletteTable::builtin();
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
            } else {
                for (i, p) in table.palettes().iter().enumerate() {
                    writeln!(
                        out,
                        "{i}  {:<16} {} {} {}",
                        p.name, p.primary, p.secondary, p.accent
                    )?;
                }
            }
        }
        Command::Params => {
            let defaults = SkyParams::default();
            if cli.json {
                let info = serde_json::json!({
                    "defaults": defaults.to_json(),
                    "schema": SkyParams::schema(),
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
            } else {
                let schema = SkyParams::schema();
                for (name, value) in [
                    ("frequency", defaults.frequency),
                    ("spin_rate", defaults.spin_rate),
                ] {
                    let desc = schema[name]["description"].as_str().unwrap_or_default();
                    writeln!(out, "{name:<10} {value:<6} {desc}")?;
                }
            }
        }
        Command::Trace {
            fps,
            frames,
            palette,
            params,
        } => {
            let mut engine = build_engine(&params, palette)?;
            let mut clock = FixedStepClock::from_fps(fps);
            for index in 0..frames {
                let sample = clock.sample();
                let cycle = engine.cycle_at(sample.elapsed);
                let frame = engine.tick(sample.elapsed, sample.delta);
                if cli.json {
                    let line = serde_json::json!({
                        "frame": index,
                        "elapsed": sample.elapsed,
                        "cycle": cycle,
                        "state": frame,
                    });
                    writeln!(out, "{line}")?;
                } else {
                    writeln!(
                        out,
                        "{index:>6} t={:>8.3}s  [{}->{} {:.3}]  {} {} {}  yaw={:+.4} pitch={:+.4} spin={:+.4}",
                        sample.elapsed,
                        cycle.current,
                        cycle.next,
                        cycle.blend,
                        frame.primary,
                        frame.secondary,
                        frame.accent,
                        frame.yaw,
                        frame.pitch,
                        frame.spin,
                    )?;
                }
            }
            info!(frames, spin = engine.spin(), "trace finished");
        }
        Command::Strip {
            fps,
            seconds,
            height,
            palette,
            params,
            output,
        } => {
            let count = strip_frame_count(seconds, fps, height)?;
            let mut engine = build_engine(&params, palette)?;
            let frames = skyfx_render::record(&mut engine, fps, count);

            skyfx_render::snapshot::write_png(&frames, height, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "frames": frames.len(),
                    "fps": fps,
                    "height": height,
                    "output": output.display().to_string(),
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
            } else {
                eprintln!(
                    "recorded {} frames at {fps} fps -> {}",
                    frames.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
