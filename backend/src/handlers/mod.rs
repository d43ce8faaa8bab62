//! HTTP request handlers

pub mod analysis;
pub mod catalog;
pub mod health;
pub mod location;

pub use analysis::*;
pub use catalog::*;
pub use health::*;
pub use location::*;
