//! The demo drawables.
//!
//! Each one loads a named shader set, uploads a fixed vertex array and draws
//! it with a single call.

mod rectangle;
mod triangle;

pub use rectangle::{ColorVertex, Rectangle, RECTANGLE_SHADER, RECTANGLE_VERTICES};
pub use triangle::{PositionVertex, Triangle, TRIANGLE_SHADER, TRIANGLE_VERTICES};

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::render::ShaderLibrary;

    fn workspace_shaders() -> ShaderLibrary {
        ShaderLibrary::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../shader"))
    }

    #[test]
    fn bundled_shader_sets_load() {
        let lib = workspace_shaders();
        for name in [TRIANGLE_SHADER, RECTANGLE_SHADER] {
            let src = lib.load(name).unwrap();
            assert!(src.vertex.contains("void main"), "{name} vertex");
            assert!(src.fragment.contains("void main"), "{name} fragment");
        }
    }

    #[test]
    fn rectangle_shader_declares_uniform_block() {
        let src = workspace_shaders().load(RECTANGLE_SHADER).unwrap();
        assert!(src.vertex.contains("layout(set = 0, binding = 0) uniform Transform"));
        for member in ["mat4 model;", "mat4 view;", "mat4 projection;", "float time;"] {
            assert!(src.vertex.contains(member), "missing {member}");
        }
    }
}
