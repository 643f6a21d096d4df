// src/path/mod.rs
pub mod builder;
pub mod component;

pub use builder::PathBuilder;
pub use component::PathComponent;
