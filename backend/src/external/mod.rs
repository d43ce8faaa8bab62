//! External API integrations

pub mod gemini;
pub mod postal;

pub use gemini::{GeminiClient, GeminiError};
pub use postal::{PostalClient, PostalError};
