//! heytherapy-core
//!
//! Pure domain types for the HeyTherapy check-in service: the fixed
//! question catalogue, wellness scoring, risk banding, and the projections
//! the clinician dashboard is built from. No AWS dependency.

pub mod error;
pub mod models;
pub mod questions;
pub mod safety;
pub mod scoring;
