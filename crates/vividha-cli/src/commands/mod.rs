//! Command implementations.

pub mod datasets;
pub mod serve;
pub mod show;
pub mod submit;
