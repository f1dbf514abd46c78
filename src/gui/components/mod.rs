// src/gui/components/mod.rs
pub mod action_bar;
pub mod buffer_table;
