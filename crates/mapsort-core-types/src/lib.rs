//! Core types shared across mapsort facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   structured logging macros and by tests that assert on captured events

pub mod schema;
