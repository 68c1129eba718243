//! Store contracts for the persistence boundary.

pub mod games;
