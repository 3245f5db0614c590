// The binary in main.rs drives the terminal; everything it renders and every
// state transition lives here so tests and benchmarks can reach it.
rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod clock;
pub mod config;
pub mod event;
pub mod quiz;
pub mod ui;
