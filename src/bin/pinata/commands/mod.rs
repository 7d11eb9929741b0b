//! Command implementations

pub mod pin;
