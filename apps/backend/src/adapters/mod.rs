//! Store implementations.

pub mod games_mem;
