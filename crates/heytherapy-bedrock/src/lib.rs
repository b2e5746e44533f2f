//! heytherapy-bedrock
//!
//! Clinical summary generation through Bedrock: model discovery and
//! selection, prompt assembly, and the Converse call itself.

pub mod client;
pub mod error;
pub mod models;
pub mod prompt;
pub mod report;
pub mod tokens;
