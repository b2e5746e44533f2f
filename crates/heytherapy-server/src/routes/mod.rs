pub mod check_ins;
pub mod health;
pub mod patients;
pub mod questions;
pub mod reports;
