// src/input/mod.rs
pub mod normalize;

pub use normalize::{join_labels, normalize};
