//! Font faces shared by every render worker.
//!
//! Faces are parsed once when the [`LabelSystem`](crate::lifecycle::LabelSystem)
//! starts and handed out as `Arc`s; nothing mutates them afterwards.

use crate::config::{FontConfig, FontSpec};
use rusttype::{Font, Scale};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a font resource.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("Error loading font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a font rusttype can parse.
    #[error("Error loading font {path}: not a valid TrueType/OpenType font")]
    Invalid { path: PathBuf },
}

/// What a piece of text on the label is, which decides its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Header,
    Customer,
    Item,
}

/// A parsed font together with the size it is drawn at.
///
/// `size` is the em size in pixels (points at 72 DPI). `scale` is the same size
/// expressed the way rusttype wants it, which is ascent-to-descent height.
#[derive(Clone)]
pub struct FontFace {
    pub font: Arc<Font<'static>>,
    pub size: f32,
    pub scale: Scale,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("size", &self.size)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontFace {
    /// Reads and parses the face described by `spec` from `dir`.
    pub fn load(dir: &Path, spec: &FontSpec) -> Result<Self, FontError> {
        let path = dir.join(&spec.file);
        debug!(path = %path.display(), size = spec.size, "Loading font");
        let bytes = std::fs::read(&path).map_err(|source| FontError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_bytes(bytes, spec.size).ok_or(FontError::Invalid { path })
    }

    /// Parses a face from raw font bytes. Returns `None` if the bytes are not a font.
    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Option<Self> {
        let font = Font::try_from_vec(bytes)?;
        let scale = em_scale(&font, size);
        Some(Self {
            font: Arc::new(font),
            size,
            scale,
        })
    }
}

/// rusttype scales so that ascent minus descent spans `scale.y` pixels; convert
/// an em size to that.
fn em_scale(font: &Font<'_>, em_px: f32) -> Scale {
    let metrics = font.v_metrics_unscaled();
    let units_per_em = f32::from(font.units_per_em());
    let extent = metrics.ascent - metrics.descent;
    if units_per_em <= 0.0 || extent <= 0.0 {
        return Scale::uniform(em_px);
    }
    Scale::uniform(em_px * extent / units_per_em)
}

/// The three faces a label needs, keyed by [`FontRole`].
#[derive(Debug, Clone)]
pub struct FontSet {
    header: FontFace,
    customer: FontFace,
    item: FontFace,
}

impl FontSet {
    pub fn new(header: FontFace, customer: FontFace, item: FontFace) -> Self {
        Self {
            header,
            customer,
            item,
        }
    }

    /// Loads every face named in `config` from `dir`.
    ///
    /// Stops at the first face that fails; no fallback face is substituted.
    pub fn load(dir: &Path, config: &FontConfig) -> Result<Self, FontError> {
        let set = Self {
            header: FontFace::load(dir, &config.header)?,
            customer: FontFace::load(dir, &config.customer)?,
            item: FontFace::load(dir, &config.item)?,
        };
        info!(dir = %dir.display(), "Fonts loaded");
        Ok(set)
    }

    pub fn face(&self, role: FontRole) -> &FontFace {
        match role {
            FontRole::Header => &self.header,
            FontRole::Customer => &self.customer,
            FontRole::Item => &self.item,
        }
    }
}
