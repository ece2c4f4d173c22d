//! Topflight: Football League Statistics Library
//!
//! Exploratory analysis, season-length normalisation and outcome
//! classification for Big 5 European league team statistics.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
