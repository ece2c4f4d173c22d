//! Pipeline module - loading, analysis and cleaning steps

pub mod columns;
pub mod corrections;
pub mod correlation;
pub mod describe;
pub mod eda;
pub mod error;
pub mod loader;
pub mod missing;
pub mod normalize;
pub mod outcomes;

pub use columns::*;
pub use corrections::*;
pub use correlation::*;
pub use describe::*;
pub use eda::*;
pub use error::*;
pub use loader::*;
pub use missing::*;
pub use normalize::*;
pub use outcomes::*;
