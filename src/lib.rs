// src/lib.rs
pub mod analysis;
pub mod app;
pub mod config;
pub mod input;
pub mod state;
pub mod ui;
pub mod view;

pub use app::PenTrustApp;
