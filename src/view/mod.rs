// src/view/mod.rs
pub mod detail;
pub mod overview;
pub mod table;

// Re-export commonly used types
pub use detail::{trend_bars, DetailCopy, DETAIL_COPY};
pub use overview::Overview;
pub use table::{table_rows, TableRow};
