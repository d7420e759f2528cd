use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the vertex stage inside a shader set directory.
pub const VERTEX_FILE: &str = "vertex.glsl";
/// File name of the fragment stage inside a shader set directory.
pub const FRAGMENT_FILE: &str = "fragment.glsl";

/// Resolves named shader sets to `<root>/<name>/{vertex,fragment}.glsl`.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    root: PathBuf,
}

impl Default for ShaderLibrary {
    fn default() -> Self {
        Self::new("shader")
    }
}

impl ShaderLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `(vertex, fragment)` paths for the set called `name`.
    pub fn paths(&self, name: &str) -> (PathBuf, PathBuf) {
        let dir = self.root.join(name);
        (dir.join(VERTEX_FILE), dir.join(FRAGMENT_FILE))
    }

    /// Reads both stages of `name`. Missing or empty files are errors.
    pub fn load(&self, name: &str) -> Result<ShaderSources> {
        let (vertex_path, fragment_path) = self.paths(name);

        let sources = ShaderSources {
            name: name.to_string(),
            vertex: read_stage(&vertex_path)?,
            fragment: read_stage(&fragment_path)?,
        };

        log::info!("loaded shader set '{name}' from {}", self.root.join(name).display());
        Ok(sources)
    }
}

fn read_stage(path: &Path) -> Result<String> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read shader source {}", path.display()))?;
    anyhow::ensure!(!src.trim().is_empty(), "shader source {} is empty", path.display());
    Ok(src)
}

/// GLSL text for both stages of one shader set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

/// Compiled vertex + fragment modules. Entry point for both stages is `main`.
#[derive(Debug)]
pub struct ShaderProgram {
    name: String,
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    pub const ENTRY_POINT: &'static str = "main";

    /// Compiles both stages through wgpu's GLSL frontend.
    ///
    /// Malformed source is reported by wgpu device validation.
    pub fn compile(device: &wgpu::Device, sources: &ShaderSources) -> Self {
        let vertex = compile_stage(
            device,
            &format!("lumen {} vertex", sources.name),
            &sources.vertex,
            wgpu::naga::ShaderStage::Vertex,
        );
        let fragment = compile_stage(
            device,
            &format!("lumen {} fragment", sources.name),
            &sources.fragment,
            wgpu::naga::ShaderStage::Fragment,
        );

        Self {
            name: sources.name.clone(),
            vertex,
            fragment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex(&self) -> &wgpu::ShaderModule {
        &self.vertex
    }

    pub fn fragment(&self) -> &wgpu::ShaderModule {
        &self.fragment
    }
}

fn compile_stage(
    device: &wgpu::Device,
    label: &str,
    source: &str,
    stage: wgpu::naga::ShaderStage,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Glsl {
            shader: Cow::Owned(source.to_string()),
            stage,
            defines: Default::default(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumen-shader-{}-{test}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn paths_follow_name_layout() {
        let lib = ShaderLibrary::default();
        let (v, f) = lib.paths("triangle");
        assert_eq!(v, Path::new("shader").join("triangle").join("vertex.glsl"));
        assert_eq!(f, Path::new("shader").join("triangle").join("fragment.glsl"));
    }

    #[test]
    fn load_reads_both_stages() {
        let root = scratch_dir("load");
        fs::create_dir_all(root.join("quad")).unwrap();
        fs::write(root.join("quad").join(VERTEX_FILE), "#version 450\nvoid main() {}\n").unwrap();
        fs::write(root.join("quad").join(FRAGMENT_FILE), "#version 450\nvoid main() {}\n").unwrap();

        let src = ShaderLibrary::new(&root).load("quad").unwrap();
        assert_eq!(src.name, "quad");
        assert!(src.vertex.starts_with("#version 450"));
        assert!(src.fragment.starts_with("#version 450"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_stage_names_the_file() {
        let root = scratch_dir("missing");
        fs::create_dir_all(root.join("quad")).unwrap();
        fs::write(root.join("quad").join(VERTEX_FILE), "#version 450\nvoid main() {}\n").unwrap();

        let err = ShaderLibrary::new(&root).load("quad").unwrap_err();
        assert!(format!("{err:#}").contains(FRAGMENT_FILE));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn empty_stage_is_rejected() {
        let root = scratch_dir("empty");
        fs::create_dir_all(root.join("quad")).unwrap();
        fs::write(root.join("quad").join(VERTEX_FILE), "  \n").unwrap();
        fs::write(root.join("quad").join(FRAGMENT_FILE), "#version 450\nvoid main() {}\n").unwrap();

        let err = ShaderLibrary::new(&root).load("quad").unwrap_err();
        assert!(err.to_string().contains("is empty"));

        fs::remove_dir_all(&root).unwrap();
    }
}
