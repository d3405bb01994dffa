//! # Gold Engine
//!
//! A minimal OpenGL rendering bootstrap written in Rust with GLFW windowing.
//!
//! ## Features
//!
//! - **Window Bootstrap**: GLFW window creation with explicit version/profile requests
//! - **Function Loading**: OpenGL entry point loading with verification
//! - **Shader Build**: One-shot compile/link with driver diagnostics
//! - **Vertex Upload**: Static mesh upload with declared attribute layout
//! - **Render Loop**: Poll, clear, draw, present, handle events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gold_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn create(_engine: &mut Engine) -> Result<Self, EngineError> {
//!         // Build shaders and upload meshes here
//!         Ok(MyApp)
//!     }
//!
//!     fn render(&mut self, _ctx: &mut GlContext) {
//!         // Issue draw calls here; the engine clears and presents
//!     }
//! }
//!
//! fn main() -> Result<(), EngineError> {
//!     let config = AppConfig::default();
//!     Engine::run::<MyApp>(config)
//! }
//! ```

// Core engine modules
pub mod core;

pub mod foundation;
pub mod render;

mod application;
mod engine;

pub use application::Application;
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application,
        Engine, EngineError,
        core::config::{AppConfig, ContextConfig, RendererConfig, WindowConfig},
        render::{GlContext, GlWindow, ShaderProgram, ShaderStage, StaticMesh, Vertex, Viewport},
    };
}
