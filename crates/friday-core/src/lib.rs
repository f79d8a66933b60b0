//! Core domain + application logic for the Friday assistant bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the Groq
//! completion API live behind ports (traits) implemented in adapter crates.

pub mod chat;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod history;
pub mod logging;
pub mod model;

pub use errors::{Error, Result};
