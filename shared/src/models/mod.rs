//! Domain models for the AgriSense advisory service

mod analysis;
mod location;
mod task;
mod verdict;

pub use analysis::*;
pub use location::*;
pub use task::*;
pub use verdict::*;
