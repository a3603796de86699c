// src/ui/mod.rs
pub mod analysis;
pub mod dashboard;
pub mod sidebar;
pub mod widgets;
