//! Shader compilation and program linking
//!
//! One-shot shader build for the OpenGL backend: compile each stage from
//! embedded source text, link the stages into a program object, and release
//! the stage objects once the program owns the linked result.
//!
//! # Failure semantics
//!
//! Compile and link failures are non-fatal. The driver's diagnostic log is
//! retrieved and logged, the status is recorded on the object, and execution
//! continues with a possibly-unusable program; there is no abort and no
//! retry. Each stage's status is queried against that same stage's object,
//! so a fragment-stage failure is reported as a fragment-stage failure.
//!
//! # Resource Management
//!
//! Shader and program objects clean themselves up on drop. A [`Shader`] is
//! consumed by [`ShaderProgram::link`], which drops both stage objects after
//! linking; ownership of the compiled code transfers to the program.

use std::ffi::CString;

use thiserror::Error;

use crate::render::context::GlContext;

/// Shader build errors
///
/// Only object-creation failures are errors; compile and link failures are
/// recorded as status on the built object instead (non-fatal by design).
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Shader source text contained an interior NUL byte
    #[error("Shader source for {stage} stage contains a NUL byte")]
    InvalidSource {
        /// The stage whose source was rejected
        stage: ShaderStage,
    },

    /// The driver refused to create a shader object
    #[error("Failed to create {stage} shader object")]
    CreateShaderFailed {
        /// The stage whose object creation failed
        stage: ShaderStage,
    },

    /// The driver refused to create a program object
    #[error("Failed to create program object")]
    CreateProgramFailed,
}

/// The pipeline point a shader stage runs at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Per-vertex stage: positions in
    Vertex,
    /// Per-fragment stage: pixel colors out
    Fragment,
}

impl ShaderStage {
    /// The OpenGL object kind for this stage
    const fn gl_kind(self) -> u32 {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// A compiled GPU program stage
///
/// Holds the driver-side shader object together with the recorded compile
/// status and diagnostic text. Deleted on drop unless consumed by
/// [`ShaderProgram::link`] first.
pub struct Shader {
    id: u32,
    stage: ShaderStage,
    compile_ok: bool,
    info_log: String,
}

impl Shader {
    /// Compile a shader stage from source text
    ///
    /// A compilation failure is logged and recorded but still yields a
    /// shader object, so the caller proceeds to the link step regardless.
    pub fn from_source(
        _ctx: &GlContext,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self, ShaderError> {
        let source =
            CString::new(source).map_err(|_| ShaderError::InvalidSource { stage })?;

        let id = unsafe { gl::CreateShader(stage.gl_kind()) };
        if id == 0 {
            return Err(ShaderError::CreateShaderFailed { stage });
        }
        log::debug!("[SHADER] Created {stage} shader object {id}");

        let (compile_ok, info_log) = unsafe {
            gl::ShaderSource(id, 1, &source.as_ptr(), std::ptr::null());
            gl::CompileShader(id);

            let mut status = 0;
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
            let ok = status == i32::from(gl::TRUE);

            let mut log_len = 0;
            gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut log_len);
            let mut buffer = vec![0u8; log_len.max(0) as usize];
            let mut written = 0;
            if log_len > 0 {
                gl::GetShaderInfoLog(
                    id,
                    log_len,
                    &mut written,
                    buffer.as_mut_ptr().cast(),
                );
            }
            buffer.truncate(written.max(0) as usize);
            (ok, decode_info_log(&buffer))
        };

        if compile_ok {
            log::debug!("[SHADER] Compiled {stage} shader successfully");
        } else {
            log::error!("[SHADER] {stage} shader compilation failed: {info_log}");
        }

        Ok(Self {
            id,
            stage,
            compile_ok,
            info_log,
        })
    }

    /// The stage this shader was compiled for
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Whether the driver reported a successful compile
    pub fn compile_ok(&self) -> bool {
        self.compile_ok
    }

    /// The driver's diagnostic text for the compile, empty on success
    pub fn info_log(&self) -> &str {
        &self.info_log
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        log::debug!("[SHADER] Deleting {} shader object {}", self.stage, self.id);
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// A linked vertex/fragment program object
///
/// Owned by the process for the render loop's duration and deleted on drop,
/// before the windowing context is torn down.
pub struct ShaderProgram {
    id: u32,
    link_ok: bool,
    info_log: String,
}

impl ShaderProgram {
    /// Link a vertex and a fragment stage into one program object
    ///
    /// Consumes both shaders; their objects are released after linking since
    /// the program owns the linked result. A link failure is logged and
    /// recorded without aborting.
    pub fn link(
        _ctx: &GlContext,
        vertex: Shader,
        fragment: Shader,
    ) -> Result<Self, ShaderError> {
        let id = unsafe { gl::CreateProgram() };
        if id == 0 {
            return Err(ShaderError::CreateProgramFailed);
        }
        log::debug!("[SHADER] Created program object {id}");

        let (link_ok, info_log) = unsafe {
            gl::AttachShader(id, vertex.id);
            gl::AttachShader(id, fragment.id);
            gl::LinkProgram(id);

            let mut status = 0;
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
            let ok = status == i32::from(gl::TRUE);

            let mut log_len = 0;
            gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut log_len);
            let mut buffer = vec![0u8; log_len.max(0) as usize];
            let mut written = 0;
            if log_len > 0 {
                gl::GetProgramInfoLog(
                    id,
                    log_len,
                    &mut written,
                    buffer.as_mut_ptr().cast(),
                );
            }
            buffer.truncate(written.max(0) as usize);
            (ok, decode_info_log(&buffer))
        };

        if link_ok {
            log::info!("[SHADER] Program {id} linked successfully");
        } else {
            log::error!("[SHADER] Program linking failed: {info_log}");
        }

        // The stage objects are released here; the program owns the result
        drop(vertex);
        drop(fragment);

        Ok(Self {
            id,
            link_ok,
            info_log,
        })
    }

    /// Bind this program for subsequent draw calls
    pub fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Whether the driver reported a successful link
    pub fn link_ok(&self) -> bool {
        self.link_ok
    }

    /// The driver's diagnostic text for the link, empty on success
    pub fn info_log(&self) -> &str {
        &self.info_log
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        log::debug!("[SHADER] Deleting program object {}", self.id);
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// Decode a driver info log buffer into trimmed text
///
/// Drivers hand back a NUL-terminated byte buffer, frequently with trailing
/// whitespace; the encoding is not guaranteed to be UTF-8.
fn decode_info_log(buffer: &[u8]) -> String {
    let end = buffer
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn test_stage_gl_kinds_differ() {
        assert_ne!(
            ShaderStage::Vertex.gl_kind(),
            ShaderStage::Fragment.gl_kind()
        );
    }

    #[test]
    fn test_decode_info_log_strips_nul_terminator() {
        let log = decode_info_log(b"0:1(1): error: syntax error\0");
        assert_eq!(log, "0:1(1): error: syntax error");
    }

    #[test]
    fn test_decode_info_log_trims_trailing_whitespace() {
        let log = decode_info_log(b"warning: unused varying\n\0");
        assert_eq!(log, "warning: unused varying");
    }

    #[test]
    fn test_decode_info_log_empty_buffer() {
        assert_eq!(decode_info_log(b""), "");
        assert_eq!(decode_info_log(b"\0"), "");
    }

    #[test]
    fn test_decode_info_log_tolerates_invalid_utf8() {
        let log = decode_info_log(&[0xff, 0xfe, b'o', b'k', 0]);
        assert!(log.ends_with("ok"));
    }

    #[test]
    fn test_shader_error_display() {
        let error = ShaderError::CreateShaderFailed {
            stage: ShaderStage::Fragment,
        };
        assert_eq!(error.to_string(), "Failed to create fragment shader object");
    }
}
