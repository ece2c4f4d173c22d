//! Report module - terminal summaries, derived tables, exports and plots

pub mod eda_export;
pub mod overview;
pub mod plots;
pub mod summary;
pub mod tables;

pub use eda_export::*;
pub use overview::*;
pub use plots::*;
pub use summary::*;
pub use tables::*;
