//! GPU rendering.
//!
//! A drawable owns one vertex buffer, one compiled shader program and one
//! uniform block, and records exactly one draw call per frame. Drawables are
//! kept in a flat, append-only `Scene`.
//!
//! Renderers draw into the frame with `LoadOp::Load`; the runtime has already
//! cleared the target.

mod ctx;
mod drawable;
mod mesh;
mod scene;
mod shader;
mod uniforms;
mod vertex;

pub use ctx::{RenderCtx, RenderTarget};
pub use drawable::Drawable;
pub use mesh::Mesh;
pub use scene::Scene;
pub use shader::{ShaderLibrary, ShaderProgram, ShaderSources, FRAGMENT_FILE, VERTEX_FILE};
pub use uniforms::{MatrixSlot, ScalarSlot, UniformBlock, Uniforms};
pub use vertex::Vertex;
