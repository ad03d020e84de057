//! Supporting utilities
//!
//! Logging and the lightweight payload header probing used by inspection.

pub mod logger;
pub(crate) mod probe_utils;
