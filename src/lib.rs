// src/lib.rs
pub mod cli;
pub mod config;
pub mod emails;
pub mod engine;
pub mod error;
pub mod report;
pub mod session;
pub mod sources;
pub mod types;
pub mod ui;
pub mod utils;

pub use cli::Args;
pub use engine::PhantomEyeEngine;
pub use types::{CollectError, Config, PhantomEyeError, ReportData};
pub use ui::Console;
