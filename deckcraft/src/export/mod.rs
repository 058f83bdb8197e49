//! Deck export
//!
//! Clips an image to the skateboard deck outline and writes it out as PNG.
//! Exported files are identified by the SHA-256 of their bytes, so the same
//! seed always yields the same hash.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tiny_skia::{FillRule, Mask, PathBuilder, Transform};
use tracing::{debug, info};

use crate::render::{DeckImage, RenderError};

/// File name used when the subject is empty
pub const DEFAULT_STEM: &str = "deckcraft_design";
pub const FILE_SUFFIX: &str = "_deck.png";
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot build a deck mask for a {width}x{height} image")]
    Mask { width: u32, height: u32 },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The deck silhouette in unit coordinates: rounded nose and tail
pub fn deck_outline() -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(0.5, 0.0);
    pb.cubic_to(0.15, 0.0, 0.0, 0.05, 0.0, 0.15);
    pb.line_to(0.0, 0.85);
    pb.cubic_to(0.0, 0.95, 0.15, 1.0, 0.5, 1.0);
    // smooth curve, first control mirrors the previous one
    pb.cubic_to(0.85, 1.0, 1.0, 0.95, 1.0, 0.85);
    pb.line_to(1.0, 0.15);
    pb.cubic_to(1.0, 0.05, 0.85, 0.0, 0.5, 0.0);
    pb.close();
    pb.finish()
}

/// Make every pixel outside the deck outline transparent
pub fn apply_deck_mask(image: &mut DeckImage) -> Result<(), ExportError> {
    let (width, height) = (image.width(), image.height());
    let path = deck_outline().ok_or(ExportError::Mask { width, height })?;
    let mut mask = Mask::new(width, height).ok_or(ExportError::Mask { width, height })?;
    mask.fill_path(
        &path,
        FillRule::Winding,
        true,
        Transform::from_scale(width as f32, height as f32),
    );
    image.pixmap_mut().apply_mask(&mask);

    debug!("Applied deck mask to {}x{} image", width, height);
    Ok(())
}

/// File name for a subject's deck
pub fn export_file_name(subject: &str) -> String {
    let subject = subject.trim();
    if subject.is_empty() {
        format!("{DEFAULT_STEM}{FILE_SUFFIX}")
    } else {
        format!("{}{FILE_SUFFIX}", subject.replace(' ', "_"))
    }
}

/// SHA-256 of the data, lower-case hex
pub fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Inline PNG as a data URL
pub fn to_data_url(png: &[u8]) -> String {
    format!("{DATA_URL_PREFIX}{}", BASE64.encode(png))
}

/// A written deck file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDeck {
    pub path: PathBuf,
    pub hash: String,
    pub size_bytes: usize,
}

/// Encode an image and write it to `path`
pub fn write_png(image: &DeckImage, path: &Path) -> Result<ExportedDeck, ExportError> {
    let data = image.encode_png()?;
    std::fs::write(path, &data).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let hash = content_hash(&data);
    info!("Wrote {} ({} bytes, sha256 {})", path.display(), data.len(), hash);
    Ok(ExportedDeck {
        path: path.to_path_buf(),
        hash,
        size_bytes: data.len(),
    })
}
