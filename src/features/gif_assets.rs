//! Animated GIF asset bundle
//!
//! Loads HUD assets from two directories, one for caller-provided assets
//! and one for the built-in bundle. Embedded animations live in an
//! `animations/` subdirectory. Decoded assets are cached by key.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::widget::image::Handle as ImageHandle;
use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use parking_lot::Mutex;

use crate::hud::{AnimatedFrame, AssetError, AssetHandle, AssetKey, AssetKind, AssetLoader, AssetOrigin};

/// Frames faster than this are treated as unspecified, like browsers do
const MIN_FRAME_DELAY_MS: u32 = 20;
const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// GIF loader over a custom and a built-in directory
#[derive(Debug)]
pub struct GifAssetLoader {
    custom_dir: PathBuf,
    builtin_dir: PathBuf,
    cache: Mutex<HashMap<AssetKey, AssetHandle>>,
}

impl GifAssetLoader {
    pub fn new(custom_dir: impl Into<PathBuf>, builtin_dir: impl Into<PathBuf>) -> Self {
        Self {
            custom_dir: custom_dir.into(),
            builtin_dir: builtin_dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Custom assets from the user data directory, built-ins shipped next
    /// to the crate
    pub fn from_project_dirs() -> Self {
        let custom_dir = directories::ProjectDirs::from("com", "progress-hud", "ProgressHud")
            .map(|dirs| dirs.data_dir().join("assets"))
            .unwrap_or_else(|| PathBuf::from("assets"));
        let builtin_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("hud");
        Self::new(custom_dir, builtin_dir)
    }

    /// File an asset key maps to, `None` for names that try to leave the bundle
    pub fn path_for(&self, key: &AssetKey) -> Option<PathBuf> {
        if key.name.is_empty()
            || key.name.contains(['/', '\\'])
            || key.name.starts_with('.')
        {
            return None;
        }

        let root = match key.origin {
            AssetOrigin::Custom => &self.custom_dir,
            AssetOrigin::BuiltIn => &self.builtin_dir,
        };
        let dir = match key.kind {
            AssetKind::Image => root.clone(),
            AssetKind::Animation => root.join("animations"),
        };
        Some(dir.join(format!("{}.gif", key.name)))
    }

    /// Number of decoded assets held in memory
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }

    /// Forget decoded assets so the next load reads the files again
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl AssetLoader for GifAssetLoader {
    fn load(&self, key: &AssetKey) -> Result<AssetHandle, AssetError> {
        if let Some(handle) = self.cache.lock().get(key) {
            tracing::debug!("Cache hit for asset {:?}", key.name);
            return Ok(handle.clone());
        }

        let path = self
            .path_for(key)
            .ok_or_else(|| AssetError::NotFound(key.name.clone()))?;
        if !path.is_file() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let file = File::open(&path).map_err(|e| AssetError::Io(e.to_string()))?;
        let handle = decode_gif(key.clone(), BufReader::new(file))?;
        tracing::debug!(
            "Decoded {} frames from {}",
            handle.frames().len(),
            path.display()
        );

        self.cache.lock().insert(key.clone(), handle.clone());
        Ok(handle)
    }
}

/// Decode every frame of a GIF into RGBA image handles
pub fn decode_gif<R: BufRead + Seek>(key: AssetKey, reader: R) -> Result<AssetHandle, AssetError> {
    let decoder = GifDecoder::new(reader).map_err(|e| AssetError::Decode(e.to_string()))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| AssetError::Decode(e.to_string()))?;

    if frames.is_empty() {
        return Err(AssetError::Decode(format!("{} has no frames", key.name)));
    }

    let frames = frames
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let delay_ms = if denom == 0 { 0 } else { numer / denom };
            let delay_ms = if delay_ms < MIN_FRAME_DELAY_MS {
                DEFAULT_FRAME_DELAY_MS
            } else {
                delay_ms
            };

            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            AnimatedFrame {
                handle: ImageHandle::from_rgba(width, height, buffer.into_raw()),
                width,
                height,
                delay: Duration::from_millis(delay_ms as u64),
            }
        })
        .collect();

    Ok(AssetHandle::new(key, frames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, Rgba, RgbaImage};
    use std::io::Cursor;

    fn gif_bytes(delays_ms: &[u32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            let frames = delays_ms.iter().map(|&ms| {
                Frame::from_parts(
                    RgbaImage::from_pixel(4, 3, Rgba([255, 0, 0, 255])),
                    0,
                    0,
                    Delay::from_numer_denom_ms(ms, 1),
                )
            });
            encoder.encode_frames(frames).unwrap();
        }
        bytes
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("progress-hud-gif-{}", std::process::id()))
            .join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_decode_frames_and_delays() {
        let handle = decode_gif(
            AssetKey::builtin("dots"),
            Cursor::new(gif_bytes(&[50, 200, 0])),
        )
        .unwrap();

        assert_eq!(handle.frames().len(), 3);
        assert_eq!(handle.frames()[0].width, 4);
        assert_eq!(handle.frames()[0].height, 3);
        assert_eq!(handle.frames()[1].delay, Duration::from_millis(200));
        // Unspecified delay
        assert_eq!(
            handle.frames()[2].delay,
            Duration::from_millis(DEFAULT_FRAME_DELAY_MS as u64)
        );
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_gif(AssetKey::builtin("bad"), Cursor::new(b"not a gif".to_vec()));
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_load_from_directories_with_cache() {
        let custom = temp_dir("custom");
        let builtin = temp_dir("builtin");
        std::fs::create_dir_all(custom.join("animations")).unwrap();
        std::fs::write(custom.join("cat.gif"), gif_bytes(&[60])).unwrap();
        std::fs::write(custom.join("animations").join("tick.gif"), gif_bytes(&[60, 60])).unwrap();

        let loader = GifAssetLoader::new(&custom, &builtin);

        let image = loader.load(&AssetKey::custom("cat", AssetKind::Image)).unwrap();
        assert_eq!(image.frames().len(), 1);
        let animation = loader
            .load(&AssetKey::custom("tick", AssetKind::Animation))
            .unwrap();
        assert_eq!(animation.frames().len(), 2);
        assert_eq!(loader.cached(), 2);

        let again = loader.load(&AssetKey::custom("cat", AssetKind::Image)).unwrap();
        assert_eq!(again, image);

        // Same name, wrong directory
        assert!(matches!(
            loader.load(&AssetKey::builtin("cat")),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_cleared_cache_rereads_files() {
        let custom = temp_dir("reread");
        let builtin = temp_dir("reread-builtin");
        std::fs::write(custom.join("cat.gif"), gif_bytes(&[60])).unwrap();

        let loader = GifAssetLoader::new(&custom, &builtin);
        let key = AssetKey::custom("cat", AssetKind::Image);
        assert_eq!(loader.load(&key).unwrap().frames().len(), 1);

        std::fs::write(custom.join("cat.gif"), gif_bytes(&[60, 60, 60])).unwrap();
        assert_eq!(loader.load(&key).unwrap().frames().len(), 1);

        loader.clear_cache();
        assert_eq!(loader.cached(), 0);
        assert_eq!(loader.load(&key).unwrap().frames().len(), 3);
    }

    #[test]
    fn test_rejects_names_outside_bundle() {
        let loader = GifAssetLoader::new("custom", "builtin");
        assert!(loader.path_for(&AssetKey::custom("../secret", AssetKind::Image)).is_none());
        assert!(loader.path_for(&AssetKey::builtin("")).is_none());
        assert_eq!(
            loader.path_for(&AssetKey::builtin("spin")),
            Some(PathBuf::from("builtin").join("spin.gif"))
        );
    }
}
