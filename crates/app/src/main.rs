use std::fmt;
use std::sync::{Arc, Mutex};

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::rng::{RandomSource, SeededRandom, ThreadRandom};
use services::{AppServices, Clock, DEFAULT_QUESTION_COUNT};
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "GSI & GATE Exam Prep";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionCount { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionCount { raw } => {
                write!(f, "invalid --questions value (expected a positive integer): {raw}")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
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

struct DesktopApp {
    services: Arc<Mutex<AppServices>>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn services(&self) -> Arc<Mutex<AppServices>> {
        Arc::clone(&self.services)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    question_count: usize,
    seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <n>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTION_COUNT}");
    eprintln!("  --seed      (random)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EXAM_PREP_QUESTIONS, EXAM_PREP_SEED, RUST_LOG");
}

impl Args {
    /// Parse flags, falling back to `env` lookups for anything not given.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut question_count = match env("EXAM_PREP_QUESTIONS") {
            Some(raw) => parse_question_count(raw)?,
            None => DEFAULT_QUESTION_COUNT,
        };
        let mut seed = env("EXAM_PREP_SEED").map(parse_seed).transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    question_count = parse_question_count(require_value(args, "--questions")?)?;
                }
                "--seed" => {
                    seed = Some(parse_seed(require_value(args, "--seed")?)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            question_count,
            seed,
        }))
    }
}

fn parse_question_count(raw: String) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ArgsError::InvalidQuestionCount { raw }),
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn build_services(args: &Args) -> AppServices {
    let random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    AppServices::new(Clock::system())
        .with_question_count(args.question_count)
        .with_random(random)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    log::info!(
        "launching {APP_NAME} ({} questions per session, seed {:?})",
        args.question_count,
        args.seed
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: Arc::new(Mutex::new(build_services(&args))),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
