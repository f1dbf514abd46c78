// src/core/mod.rs

pub mod id_map;
pub mod sanitize;

pub use id_map::IdMap;
