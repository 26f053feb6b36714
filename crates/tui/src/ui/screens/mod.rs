//! Screen-specific rendering functions.

pub mod sources;
