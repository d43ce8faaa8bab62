//! Business logic services for the AgriSense server

pub mod analysis;
pub mod location;

pub use analysis::{prepare_prompt, AnalysisResponse, AnalysisService};
pub use location::{LocationService, ResolveLocationInput};
