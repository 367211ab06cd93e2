use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use services::{AppServices, BankSource, Clock, QuizConfig, QuizService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBankPath { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw:?}"),
            ArgsError::EmptyTitle => write!(f, "--title must not be empty"),
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
    quiz: Arc<QuizService>,
    auto_finish: bool,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn auto_finish(&self) -> bool {
        self.auto_finish
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <questions.json>] [--no-auto-finish] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question bank, auto-finish on the last answer, title \"Quiz\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_PATH, QUIZ_AUTO_FINISH, QUIZ_WINDOW_TITLE, RUST_LOG");
}

/// Apply command-line flags on top of the environment-derived config.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    mut config: QuizConfig,
) -> Result<QuizConfig, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bank" => {
                let value = require_value(args, "--bank")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidBankPath { raw: value });
                }
                config = config.with_bank_source(BankSource::File(PathBuf::from(value)));
            }
            "--title" => {
                let value = require_value(args, "--title")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::EmptyTitle);
                }
                config = config.with_window_title(value.trim());
            }
            "--no-auto-finish" => {
                config = config.with_auto_finish(false);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuizConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let config = parse_args(&mut argv, config).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let services = AppServices::from_config(config, Clock::system())?;
    let config = services.config();
    info!(
        "launching quiz: {} questions from {}, auto-finish {}",
        services.quiz().question_count(),
        config.bank_source(),
        config.auto_finish()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: services.quiz(),
        auto_finish: config.auto_finish(),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<QuizConfig, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        parse_args(&mut iter, QuizConfig::default())
    }

    #[test]
    fn no_args_keeps_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.bank_source(), &BankSource::Embedded);
        assert!(config.auto_finish());
    }

    #[test]
    fn flags_override_config() {
        let config = parse(&["--bank", "extra.json", "--no-auto-finish"]).unwrap();
        assert_eq!(
            config.bank_source(),
            &BankSource::File(PathBuf::from("extra.json"))
        );
        assert!(!config.auto_finish());
    }

    #[test]
    fn title_flag_sets_the_window_title() {
        let config = parse(&["--title", " Friday Trivia "]).unwrap();
        assert_eq!(config.window_title(), "Friday Trivia");

        let err = parse(&["--title", "  "]).unwrap_err();
        assert_eq!(err.to_string(), "--title must not be empty");
        assert!(matches!(
            parse(&["--title"]),
            Err(ArgsError::MissingValue { flag: "--title" })
        ));
    }

    #[test]
    fn bank_requires_a_value() {
        let err = parse(&["--bank"]).unwrap_err();
        assert_eq!(err.to_string(), "--bank requires a value");

        let err = parse(&["--bank", " "]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidBankPath { .. }));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --fast");
    }
}
