// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;
pub mod config;
pub mod core;
pub mod specs;

pub mod backend;
pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod sheet;
pub mod store;
pub mod workbook;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{ReportError, Result};
pub use sheet::{Cell, Sheet};
