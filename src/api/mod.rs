//! API layer - in-process client

pub mod native;
