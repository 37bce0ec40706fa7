//! PocketPet simulator: the real engine and main loop on a host.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  ScriptedInput + FrameLogDisplay   LogEventSink   SimClock │
//! │  (HardwareAdapter)                 (EventSink)    (Clock)  │
//! │  FileSaveStore / MemorySaveStore (SavePort)                │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │  Engine (pure logic)                             │      │
//! │  │  Classifier · Navigator · Pet · Render           │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info, warn};

use pocketpet::adapters::console::{ConsoleLogger, FrameLogDisplay};
use pocketpet::adapters::hardware::HardwareAdapter;
use pocketpet::adapters::log_sink::LogEventSink;
use pocketpet::adapters::save_store::{FileSaveStore, MemorySaveStore};
use pocketpet::adapters::script::ScriptedInput;
use pocketpet::adapters::time::SimClock;
use pocketpet::app::ports::SavePort;
use pocketpet::app::runner;
use pocketpet::app::service::Engine;
use pocketpet::character::NeedKind;
use pocketpet::config::GameConfig;
use pocketpet::pins::{BoardId, DISPLAY_I2C_ADDR, I2C_FREQ_HZ};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Board {
    C6,
    C3,
}

impl From<Board> for BoardId {
    fn from(board: Board) -> Self {
        match board {
            Board::C6 => BoardId::Esp32C6,
            Board::C3 => BoardId::Esp32C3,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Run the PocketPet engine against scripted buttons on a virtual clock.
#[derive(Debug, Parser)]
#[command(name = "pocketpet-sim", version)]
struct Args {
    /// JSON game configuration; defaults are used if missing or invalid.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save file to restore from and write back to.
    #[arg(long)]
    save: Option<PathBuf>,

    /// JSON button script: a list of {at_ms, button, pressed}.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Ticks to run.  Defaults to one second past the end of the script.
    #[arg(long)]
    ticks: Option<u64>,

    /// Board whose pin map is reported at startup.
    #[arg(long, value_enum, default_value = "c6")]
    board: Board,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    ConsoleLogger::init(args.log_level.into());
    info!("PocketPet simulator v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Board ──────────────────────────────────────────────
    let board = BoardId::from(args.board);
    let pins = board.pins();
    info!(
        "Board {:?}: I2C sda={} scl={} (display 0x{:02x} @ {} kHz), buttons {:?}",
        board,
        pins.i2c_sda,
        pins.i2c_scl,
        DISPLAY_I2C_ADDR,
        I2C_FREQ_HZ / 1000,
        pins.buttons
    );

    // ── 2. Config ─────────────────────────────────────────────
    let config = match args.config.as_deref().map(load_config) {
        None => GameConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("Config rejected ({:#}), using defaults", e);
            GameConfig::default()
        }
    };

    // ── 3. Input script ───────────────────────────────────────
    let input = match &args.script {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading script {}", path.display()))?;
            ScriptedInput::from_json(&json)
                .with_context(|| format!("parsing script {}", path.display()))?
        }
        None => ScriptedInput::default(),
    };
    let ticks = args.ticks.unwrap_or_else(|| {
        let end = input.end_ms().unwrap_or(0) + 1000;
        end.div_ceil(u64::from(config.tick_period_ms.max(1)))
    });

    // ── 4. Run ────────────────────────────────────────────────
    match args.save {
        Some(path) => simulate(config, input, FileSaveStore::new(path), ticks),
        None => simulate(config, input, MemorySaveStore::new(), ticks),
    }
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: GameConfig =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn simulate(config: GameConfig, input: ScriptedInput, mut store: impl SavePort, ticks: u64) -> Result<()> {
    let mut clock = SimClock::default();
    let mut sink = LogEventSink::new();
    let mut hw = HardwareAdapter::new(input, FrameLogDisplay::new());

    let mut engine = Engine::boot(config, &mut store, &mut sink, 0);
    runner::run_for(&mut engine, &mut clock, &mut hw, &mut store, &mut sink, ticks)?;

    // ── 5. Report ─────────────────────────────────────────────
    let pet = engine.character();
    println!(
        "After {} ticks ({} ms): {}",
        engine.tick_count(),
        pet.age_ms(),
        pet.mood(&engine.config().mood).label()
    );
    for kind in NeedKind::ALL {
        println!("  {:<9} {:>3}", kind.label(), pet.need(kind));
    }
    let (_, display) = hw.into_parts();
    println!(
        "Frames: {} presented, {} distinct; last: {}",
        display.presented(),
        display.changes(),
        display.last_frame().texts().collect::<Vec<_>>().join(" | ")
    );
    Ok(())
}
