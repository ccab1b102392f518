//! Render adapter
//!
//! Produces backend-agnostic draw lists: sprite frame names where the assets
//! exist, generated shape vertices where they do not.

pub mod scene;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use scene::{Anchor, DrawItem, SceneRenderer};
pub use sprites::{AssetCatalog, NoAssets};
pub use vertex::Vertex;
