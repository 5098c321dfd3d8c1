use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{CpalOutput, SilentSink, ToneSink, TrainerService, TrainerSettings};
use swar_core::ParseError;
use swar_core::model::{BaseScale, Difficulty, GameMode};
use tracing::info;
use ui::{App, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue { flag: &'static str, source: ParseError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, source } => write!(f, "invalid {flag} value: {source}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_value<T>(raw: &str, flag: &'static str) -> Result<T, ArgsError>
where
    T: FromStr<Err = ParseError>,
{
    raw.parse()
        .map_err(|source| ArgsError::InvalidValue { flag, source })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--scale <key>] [--difficulty <easy|medium|hard>] \
         [--mode <classic|speed|sequence|interval>] [--mute]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --scale C");
    eprintln!("  --difficulty medium");
    eprintln!("  --mode classic");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SWAR_SCALE, SWAR_DIFFICULTY, SWAR_MODE, SWAR_MUTE");
    eprintln!("  RUST_LOG (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Args {
    settings: TrainerSettings,
    mute: bool,
}

impl Args {
    /// Flags override the environment; the environment overrides defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut parsed = Args::default();
        if let Some(raw) = env("SWAR_SCALE") {
            parsed.settings.scale = parse_value(&raw, "SWAR_SCALE")?;
        }
        if let Some(raw) = env("SWAR_DIFFICULTY") {
            parsed.settings.difficulty = parse_value(&raw, "SWAR_DIFFICULTY")?;
        }
        if let Some(raw) = env("SWAR_MODE") {
            parsed.settings.mode = parse_value(&raw, "SWAR_MODE")?;
        }
        parsed.mute = env("SWAR_MUTE").is_some_and(|raw| is_truthy(&raw));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scale" => {
                    let value = require_value(args, "--scale")?;
                    parsed.settings.scale = parse_value::<BaseScale>(&value, "--scale")?;
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    parsed.settings.difficulty =
                        parse_value::<Difficulty>(&value, "--difficulty")?;
                }
                "--mode" => {
                    let value = require_value(args, "--mode")?;
                    parsed.settings.mode = parse_value::<GameMode>(&value, "--mode")?;
                }
                "--mute" => parsed.mute = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn open_sink(mute: bool) -> Result<Arc<dyn ToneSink>, Box<dyn std::error::Error>> {
    if mute {
        info!("Audio muted");
        return Ok(Arc::new(SilentSink));
    }
    let output = CpalOutput::open()?;
    Ok(Arc::new(output))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let sink = open_sink(parsed.mute)?;
    let trainer = Arc::new(TrainerService::new(sink, parsed.settings));
    info!(
        scale = %parsed.settings.scale,
        mode = %parsed.settings.mode,
        difficulty = %parsed.settings.difficulty,
        "Trainer ready"
    );

    let context = build_app_context(trainer);

    // Keep the trainer window in normal stacking order.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Swar")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
