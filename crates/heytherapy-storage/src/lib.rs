//! heytherapy-storage
//!
//! Patient record storage. The [`store::RecordStore`] trait is what the
//! server depends on; [`memory::InMemoryStore`] is the process-lifetime
//! implementation.

pub mod error;
pub mod memory;
pub mod store;
