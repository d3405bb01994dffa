//! Core engine modules
//!
//! Contains the unified configuration system shared by the window bootstrap,
//! the GL context, and the render loop.

pub mod config;
