pub mod check_in;
pub mod dashboard;
pub mod patient;
pub mod report;
pub mod usage;
