//! Vertex data upload and attribute layout
//!
//! This module provides RAII-based GPU buffer management for static vertex
//! data: a host-side vertex slice is copied once into GPU-resident buffer
//! storage with a single-upload/many-draws usage hint, and the binding
//! layout is declared on a vertex array object. The uploaded data is
//! immutable; the objects are released on drop, before context teardown.

use crate::render::context::GlContext;

/// A single vertex: one tightly packed position attribute
///
/// Matches attribute index 0 of the demo shaders: 3 contiguous floats per
/// vertex, stride equal to the struct size, starting at the buffer's base
/// offset.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in normalized device coordinates
    pub position: [f32; 3],
}

// Implement Pod and Zeroable for the vertex upload type
unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

impl Vertex {
    /// Number of floats consumed per vertex by attribute 0
    pub const COMPONENTS: i32 = 3;

    /// Byte distance between consecutive vertices in the buffer
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Create a vertex from a position
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

/// GPU-resident copy of a fixed vertex array
///
/// Holds the vertex array object describing the attribute layout and the
/// buffer object holding the uploaded data. Both are singletons for the
/// demo's purposes: uploaded once at startup, drawn every frame, deleted
/// on drop.
pub struct StaticMesh {
    vao: u32,
    vbo: u32,
    vertex_count: i32,
}

impl StaticMesh {
    /// Upload a host-side vertex slice into GPU buffer storage
    ///
    /// Declares attribute 0 as [`Vertex::COMPONENTS`] tightly packed floats
    /// from the buffer's base offset and records the vertex count consumed
    /// by a non-indexed draw.
    pub fn upload(_ctx: &GlContext, vertices: &[Vertex]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        log::debug!(
            "[MESH] Uploading {} vertices ({} bytes)",
            vertices.len(),
            bytes.len()
        );

        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as isize,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                0,
                Vertex::COMPONENTS,
                gl::FLOAT,
                gl::FALSE,
                Vertex::STRIDE as i32,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Self {
            vao,
            vbo,
            vertex_count: vertices.len() as i32,
        }
    }

    /// Bind this mesh's vertex array for drawing
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
        }
    }

    /// Number of vertices consumed by a full non-indexed draw of this mesh
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

impl Drop for StaticMesh {
    fn drop(&mut self) {
        log::debug!("[MESH] Deleting vertex array {} and buffer {}", self.vao, self.vbo);
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_is_tightly_packed() {
        // 3 floats, no padding: the declared stride must match the data
        assert_eq!(Vertex::STRIDE, 12);
        assert_eq!(Vertex::COMPONENTS as usize * std::mem::size_of::<f32>(), Vertex::STRIDE);
    }

    #[test]
    fn test_vertex_byte_view_matches_layout() {
        let vertices = [Vertex::new(-0.9, -0.5, 0.0), Vertex::new(0.0, -0.5, 0.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);

        assert_eq!(bytes.len(), 2 * Vertex::STRIDE);

        // The first attribute starts at the buffer's base offset
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_relative_eq!(floats[0], -0.9);
        assert_relative_eq!(floats[3], 0.0);
    }

    #[test]
    fn test_vertex_constructor_round_trip() {
        let vertex = Vertex::new(0.45, 0.5, 0.0);
        assert_eq!(vertex.position, [0.45, 0.5, 0.0]);
    }

    #[test]
    fn test_vertex_is_pod_and_zeroable() {
        // Exercises the manual bytemuck impls backing cast_slice
        let zeroed: Vertex = bytemuck::Zeroable::zeroed();
        assert_eq!(zeroed.position, [0.0, 0.0, 0.0]);

        let vertex = Vertex::new(0.9, -0.5, 0.0);
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), Vertex::STRIDE);
        assert_eq!(*bytemuck::from_bytes::<Vertex>(bytes), vertex);
    }
}
