#![forbid(unsafe_code)]

pub mod app_services;
pub mod bank_loader;
pub mod config;
pub mod error;
pub mod quiz_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use bank_loader::{EMBEDDED_BANK, load_bank, parse_bank};
pub use config::{BankSource, QuizConfig};
pub use error::{AppServicesError, BankError, ConfigError};
pub use quiz_service::QuizService;
