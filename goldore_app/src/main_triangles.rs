//! GoldOre two-triangle demo
//!
//! On top of the window bootstrap, compiles a minimal vertex/fragment
//! shader pair, uploads a fixed six-vertex array, and issues one
//! non-indexed triangle-list draw per frame, rendering two static
//! triangles over the teal clear color.

use gold_engine::prelude::*;
use gold_engine::render::Shader;

/// Pass-through vertex stage: positions are already in device coordinates
const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
"#;

/// Constant-color fragment stage
const FRAGMENT_SHADER_SOURCE: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

/// Two triangles, three floats per vertex, six vertices, tightly packed
const TRIANGLE_VERTICES: [Vertex; 6] = [
    // left triangle
    Vertex::new(-0.9, -0.5, 0.0),
    Vertex::new(0.0, -0.5, 0.0),
    Vertex::new(-0.45, 0.5, 0.0),
    // right triangle
    Vertex::new(0.0, -0.5, 0.0),
    Vertex::new(0.9, -0.5, 0.0),
    Vertex::new(0.45, 0.5, 0.0),
];

/// Shader program plus uploaded mesh, drawn once per frame
struct TrianglesApp {
    program: ShaderProgram,
    mesh: StaticMesh,
}

impl Application for TrianglesApp {
    fn create(engine: &mut Engine) -> Result<Self, EngineError> {
        let ctx = engine.context();

        let vertex = Shader::from_source(ctx, ShaderStage::Vertex, VERTEX_SHADER_SOURCE)
            .map_err(|e| EngineError::Application(e.to_string()))?;
        let fragment = Shader::from_source(ctx, ShaderStage::Fragment, FRAGMENT_SHADER_SOURCE)
            .map_err(|e| EngineError::Application(e.to_string()))?;
        let program = ShaderProgram::link(ctx, vertex, fragment)
            .map_err(|e| EngineError::Application(e.to_string()))?;

        let mesh = StaticMesh::upload(ctx, &TRIANGLE_VERTICES);

        Ok(Self { program, mesh })
    }

    fn render(&mut self, ctx: &mut GlContext) {
        self.program.use_program();
        self.mesh.bind();
        ctx.draw_triangles(0, self.mesh.vertex_count());
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting GoldOre two-triangle demo");

    if let Err(e) = Engine::run::<TrianglesApp>(AppConfig::default()) {
        log::error!("Fatal: {e}");
        std::process::exit(-1);
    }

    log::info!("GoldOre two-triangle demo finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_array_is_two_triangles() {
        assert_eq!(TRIANGLE_VERTICES.len(), 6);
        assert_eq!(TRIANGLE_VERTICES.len() % 3, 0);
    }

    #[test]
    fn test_vertex_array_matches_fixed_positions() {
        assert_eq!(TRIANGLE_VERTICES[0].position, [-0.9, -0.5, 0.0]);
        assert_eq!(TRIANGLE_VERTICES[2].position, [-0.45, 0.5, 0.0]);
        assert_eq!(TRIANGLE_VERTICES[4].position, [0.9, -0.5, 0.0]);
        assert_eq!(TRIANGLE_VERTICES[5].position, [0.45, 0.5, 0.0]);
    }

    #[test]
    fn test_triangles_share_one_vertex() {
        // The two triangles meet at (0, -0.5, 0) but are uploaded unindexed
        assert_eq!(TRIANGLE_VERTICES[1], TRIANGLE_VERTICES[3]);
    }

    #[test]
    fn test_shader_sources_target_gl33_core() {
        assert!(VERTEX_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SOURCE.starts_with("#version 330 core"));
    }

    #[test]
    fn test_vertex_shader_consumes_attribute_zero() {
        assert!(VERTEX_SHADER_SOURCE.contains("layout (location = 0) in vec3"));
    }
}
