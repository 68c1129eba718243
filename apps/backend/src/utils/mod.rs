//! Small shared utilities.

pub mod avatar;
pub mod join_code;
