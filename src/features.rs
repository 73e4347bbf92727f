//! Feature modules - collaborators the HUD core consumes
//!
//! Features should not depend on UI components directly.

pub mod gif_assets;

pub use gif_assets::GifAssetLoader;
