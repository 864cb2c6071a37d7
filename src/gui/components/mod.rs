// src/gui/components/mod.rs
pub mod action_bar;
pub mod data_table;
pub mod input_bar;
pub mod session_bar;
pub mod tabs;
