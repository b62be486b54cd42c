//! WebGPU rendering module
//!
//! The scene adapter turns game state into instances; the pipeline draws
//! them as lit cubes and spheres.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{MeshKind, Renderable, SceneAdapter, SegmentHandles, view_projection};
