//! GLFW-based window management for OpenGL rendering
//!
//! This module provides cross-platform window creation for an OpenGL
//! context. It owns the GLFW library handle, the window, and the window's
//! event receiver, and exposes the close-flag, key queries, buffer swapping,
//! and event polling consumed by the render loop.
//!
//! GLFW is initialized when the window is created and terminated exactly
//! once when the [`GlWindow`] is dropped, so a double-teardown of the
//! windowing library cannot occur.

use glfw::Context;
use thiserror::Error;

use crate::core::config::{ContextConfig, WindowConfig};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window creation failed, typically because the requested OpenGL
    /// version/profile combination is unsupported on this platform
    #[error("Window creation failed (requested OpenGL {major}.{minor}{profile})")]
    CreationFailed {
        /// Requested OpenGL major version
        major: u32,
        /// Requested OpenGL minor version
        minor: u32,
        /// Human-readable profile suffix for the message
        profile: &'static str,
    },
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Holds the one piece of process-wide state in the system: the window whose
/// OpenGL context is current on this thread. Created once at startup and
/// torn down at process exit.
pub struct GlWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlWindow {
    /// Create a window and make its OpenGL context current
    ///
    /// Requests the OpenGL version and profile from `context` before
    /// creating the window, so an unsupported combination surfaces as
    /// [`WindowError::CreationFailed`] rather than a crash.
    pub fn new(window: &WindowConfig, context: &ContextConfig) -> WindowResult<Self> {
        log::info!(
            "Creating {}x{} window \"{}\" with OpenGL {}.{}{}",
            window.width,
            window.height,
            window.title,
            context.major,
            context.minor,
            if context.core_profile { " core" } else { "" }
        );

        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(
            context.major,
            context.minor,
        ));
        if context.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(
                glfw::OpenGlProfileHint::Core,
            ));
        }
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut glfw_window, events) = glfw
            .create_window(
                window.width,
                window.height,
                &window.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed {
                major: context.major,
                minor: context.minor,
                profile: if context.core_profile { " core" } else { "" },
            })?;

        glfw_window.make_current();

        // Events consumed by the render loop
        glfw_window.set_key_polling(true);
        glfw_window.set_framebuffer_size_polling(true);

        log::info!("Window created successfully");

        Ok(Self {
            glfw,
            window: glfw_window,
            events,
        })
    }

    /// Whether the window has been signaled to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set the window's close-flag
    ///
    /// Idempotent; the render loop observes the flag at the top of each
    /// iteration.
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Current action state of `key` (level-triggered query)
    pub fn key_action(&self, key: glfw::Key) -> glfw::Action {
        self.window.get_key(key)
    }

    /// Swap the front and back buffers, presenting the rendered frame
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Process pending OS events, invoking registered callbacks
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the window events gathered by the last [`Self::poll_events`] call
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Current framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// Resolve the address of an OpenGL entry point for the current context
    pub(crate) fn proc_address(&mut self, procname: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(procname) as *const _
    }
}
