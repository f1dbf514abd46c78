// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod buffer;
pub mod csv;
pub mod snapshot;

pub mod cli;
pub mod file;
pub mod gui;
pub mod session;
pub mod store;

pub use buffer::Buffer;
pub use snapshot::Snapshot;
