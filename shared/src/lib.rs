//! Shared types and logic for the AgriSense advisory service
//!
//! This crate contains everything that does not touch the network: models,
//! task catalog, text bundles, validation, the prompt builder and output
//! schema, the reply contract check, the result renderer and the form
//! session. It is used by the backend and compiled to WASM for the browser.

pub mod contract;
pub mod i18n;
pub mod models;
pub mod prompt;
pub mod render;
pub mod schema;
pub mod session;
pub mod types;
pub mod validation;

pub use contract::*;
pub use i18n::{texts, TextBundle};
pub use models::*;
pub use prompt::*;
pub use render::*;
pub use schema::*;
pub use session::*;
pub use types::*;
pub use validation::*;
