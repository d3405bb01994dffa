//! Foundation utilities shared across the engine

pub mod logging;
