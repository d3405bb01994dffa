//! Rendering subsystem
//!
//! The three bootstrap units of the renderer, connected by plain data:
//!
//! - [`window`]: GLFW window creation with an explicit version/profile request
//! - [`context`]: OpenGL function loading and the current-context call wrapper
//! - [`shader`] and [`mesh`]: one-shot GPU resource setup consumed by the draw step
//!
//! Each unit takes explicit inputs (version, profile, size, title, source
//! strings, vertex slices) so it can be exercised independently of the others.

pub mod context;
pub mod mesh;
pub mod shader;
pub mod window;

pub use context::{ContextError, GlContext, Viewport};
pub use mesh::{StaticMesh, Vertex};
pub use shader::{Shader, ShaderError, ShaderProgram, ShaderStage};
pub use window::{GlWindow, WindowError, WindowResult};
