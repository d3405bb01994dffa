//! OpenGL function loading and the current-context call wrapper
//!
//! OpenGL's active-context-per-thread model is inherent to the API, so
//! rather than a true global this module provides [`GlContext`], an explicit
//! handle created from the window whose context is current. Every graphics
//! call the engine issues goes through a `GlContext` method, which keeps the
//! one piece of global state visible in the type system.
//!
//! Loading populates the OpenGL entry points through the platform's
//! address-resolution function and verifies that the entry points the
//! engine relies on actually resolved; a missing entry point is a fatal
//! bootstrap error.

use thiserror::Error;

use crate::render::window::GlWindow;

/// Context loading errors
#[derive(Error, Debug)]
pub enum ContextError {
    /// One or more required OpenGL entry points failed to resolve
    #[error("Failed to load required OpenGL entry points")]
    LoaderFailed,
}

/// A viewport rectangle in framebuffer pixels
///
/// Applying the same viewport twice is a no-op in effect; the mapping from a
/// framebuffer size to a viewport is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Left edge of the viewport
    pub x: i32,
    /// Bottom edge of the viewport
    pub y: i32,
    /// Viewport width in pixels
    pub width: i32,
    /// Viewport height in pixels
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a framebuffer of the given size, anchored at the origin
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Explicit handle to the thread's current OpenGL context
///
/// Valid only while the window it was loaded from is alive and current.
/// All GPU resources created through this context must be released before
/// the window is torn down; the engine's field ordering enforces that.
pub struct GlContext {
    viewport: Viewport,
    clear_color: [f32; 4],
}

impl GlContext {
    /// Load the OpenGL entry points for the window's current context
    ///
    /// The initial viewport is set to the window's framebuffer size, which
    /// on high-DPI platforms differs from the window size in screen
    /// coordinates.
    pub fn load(window: &mut GlWindow) -> Result<Self, ContextError> {
        log::info!("Loading OpenGL entry points...");
        gl::load_with(|procname| window.proc_address(procname));

        if !Self::required_entry_points_loaded() {
            return Err(ContextError::LoaderFailed);
        }

        let version = unsafe {
            let raw = gl::GetString(gl::VERSION);
            if raw.is_null() {
                "unknown".to_string()
            } else {
                std::ffi::CStr::from_ptr(raw.cast())
                    .to_string_lossy()
                    .into_owned()
            }
        };
        log::info!("OpenGL entry points loaded (version: {version})");

        let (width, height) = window.framebuffer_size();
        let mut context = Self {
            viewport: Viewport::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        };
        context.set_viewport(Viewport::from_size(width, height));
        Ok(context)
    }

    /// Whether every entry point the engine calls has been resolved
    fn required_entry_points_loaded() -> bool {
        gl::Viewport::is_loaded()
            && gl::GetString::is_loaded()
            && gl::ClearColor::is_loaded()
            && gl::Clear::is_loaded()
            && gl::CreateShader::is_loaded()
            && gl::CreateProgram::is_loaded()
            && gl::GenVertexArrays::is_loaded()
            && gl::GenBuffers::is_loaded()
            && gl::DrawArrays::is_loaded()
    }

    /// Resize the viewport, keeping rendered output aligned to the framebuffer
    pub fn set_viewport(&mut self, viewport: Viewport) {
        unsafe {
            gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
        self.viewport = viewport;
    }

    /// The viewport most recently applied to this context
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Set the color the framebuffer is filled with on [`Self::clear`]
    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        unsafe {
            gl::ClearColor(color[0], color[1], color[2], color[3]);
        }
        self.clear_color = color;
    }

    /// The configured clear color
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Fill the color buffer with the configured clear color
    pub fn clear(&self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    /// Issue one non-indexed triangle-list draw of `vertex_count` vertices
    ///
    /// Consumes vertices sequentially from the currently bound vertex array,
    /// starting at `first`. Runtime failures of the draw itself are not
    /// inspected; only the one-time bootstrap steps are checked.
    pub fn draw_triangles(&self, first: i32, vertex_count: i32) {
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, first, vertex_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_from_size_is_anchored_at_origin() {
        let viewport = Viewport::from_size(800, 600);

        assert_eq!(viewport.x, 0);
        assert_eq!(viewport.y, 0);
        assert_eq!(viewport.width, 800);
        assert_eq!(viewport.height, 600);
    }

    #[test]
    fn test_viewport_from_size_is_pure() {
        // Same input, same viewport; applying it twice cannot differ from once
        assert_eq!(Viewport::from_size(640, 480), Viewport::from_size(640, 480));
    }

    #[test]
    fn test_viewport_distinguishes_sizes() {
        assert_ne!(Viewport::from_size(800, 600), Viewport::from_size(600, 800));
    }
}
