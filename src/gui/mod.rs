// src/gui/mod.rs
pub mod app;
pub mod actions;
pub mod components;
pub mod router;
pub mod pages;
pub mod progress;
pub mod table_model;

pub use app::run;
