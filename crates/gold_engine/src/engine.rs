//! Core engine implementation
//!
//! The engine drives the three bootstrap phases in order: create the window
//! with the requested context, load the OpenGL entry points, then run the
//! render loop until the window's close-flag is observed at the top of an
//! iteration. Each iteration runs to completion once entered: poll input,
//! clear, draw, present, process events.

use thiserror::Error;

use crate::application::Application;
use crate::core::config::AppConfig;
use crate::render::{ContextError, GlContext, GlWindow, Viewport, WindowError};

/// Engine-level errors
///
/// Every variant is a fatal bootstrap failure; nothing past bootstrap
/// reports errors (runtime graphics calls are unchecked).
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window creation or GLFW initialization failed
    #[error("Window bootstrap failed: {0}")]
    Window(#[from] WindowError),

    /// OpenGL entry point loading failed
    #[error("Context bootstrap failed: {0}")]
    Context(#[from] ContextError),

    /// Application resource setup failed
    #[error("Application setup failed: {0}")]
    Application(String),
}

/// Main engine struct
///
/// Owns the window and the loaded GL context. Field order matters for
/// teardown: the context handle is dropped before the window, and
/// application resources (owned by the caller of [`Engine::run`]) are
/// dropped before either.
pub struct Engine {
    context: GlContext,
    window: GlWindow,
}

impl Engine {
    /// Bootstrap the window and OpenGL context
    pub fn new(config: AppConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        let mut window = GlWindow::new(&config.window, &config.context)?;
        let mut context = GlContext::load(&mut window)?;
        context.set_clear_color(config.renderer.clear_color);

        Ok(Self { context, window })
    }

    /// Bootstrap and run the render loop with the given application type
    ///
    /// Returns when the window's close-flag is observed, after the
    /// application's GPU resources have been released.
    pub fn run<A: Application>(config: AppConfig) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;
        // Declared after the engine so its GPU resources drop first,
        // before the context and window are torn down
        let mut app = A::create(&mut engine)?;

        log::info!("Starting render loop...");
        while !engine.window.should_close() {
            engine.process_input();

            engine.context.clear();
            app.render(&mut engine.context);

            engine.window.swap_buffers();
            engine.window.poll_events();
            engine.handle_window_events();
        }
        log::info!("Render loop finished, shutting down");

        Ok(())
    }

    /// Level-triggered exit check, run once per iteration
    ///
    /// Setting the close-flag on every frame the key is held is harmless:
    /// the flag is idempotent.
    fn process_input(&mut self) {
        if close_requested(self.window.key_action(glfw::Key::Escape)) {
            log::debug!("Escape pressed, requesting close");
            self.window.set_should_close(true);
        }
    }

    /// React to the window events drained from the last poll
    fn handle_window_events(&mut self) {
        for (_, event) in self.window.flush_events() {
            if let glfw::WindowEvent::FramebufferSize(width, height) = event {
                self.context.set_viewport(Viewport::from_size(width, height));
            }
        }
    }

    /// The loaded graphics context
    pub fn context(&self) -> &GlContext {
        &self.context
    }
}

/// Whether the exit key's current action state should set the close-flag
fn close_requested(action: glfw::Action) -> bool {
    action == glfw::Action::Press
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_requested_on_press_only() {
        assert!(close_requested(glfw::Action::Press));
        assert!(!close_requested(glfw::Action::Release));
    }

    #[test]
    fn test_close_requested_is_level_triggered_and_idempotent() {
        // Held key: every frame reports Press; the answer never flips
        for _ in 0..3 {
            assert!(close_requested(glfw::Action::Press));
        }
    }

    #[test]
    fn test_engine_error_display() {
        let error = EngineError::Window(WindowError::InitializationFailed);
        assert_eq!(
            error.to_string(),
            "Window bootstrap failed: GLFW initialization failed"
        );

        let error = EngineError::Context(ContextError::LoaderFailed);
        assert_eq!(
            error.to_string(),
            "Context bootstrap failed: Failed to load required OpenGL entry points"
        );
    }
}
