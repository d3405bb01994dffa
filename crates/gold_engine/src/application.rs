//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::render::GlContext;

/// Application lifecycle trait
///
/// Implement this trait to plug a scene into the engine's render loop. The
/// engine owns the window and context; the application owns the GPU
/// resources it creates, which are dropped before the engine tears the
/// context down.
pub trait Application: Sized {
    /// Build the application's GPU resources
    ///
    /// Called once after the context bootstrap. Compile shaders and upload
    /// vertex data here.
    fn create(engine: &mut Engine) -> Result<Self, EngineError>;

    /// Draw one frame
    ///
    /// Called each iteration between the clear and the buffer swap. The
    /// default implementation draws nothing, leaving the cleared frame.
    fn render(&mut self, ctx: &mut GlContext) {
        let _ = ctx;
    }
}
