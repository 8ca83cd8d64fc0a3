//! Asset records and the fixed companion image catalog.

use std::fmt;

/// Sub-directory of the asset dir that holds the companion plant images.
pub const COMPANION_DIR: &str = "companion";

/// Where an asset's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Static buffer compiled into the binary.
    Embedded(&'static [u8]),
    /// Body of a successful GET of this URL.
    Remote(String),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Embedded(bytes) => write!(f, "embedded ({} bytes)", bytes.len()),
            AssetSource::Remote(url) => f.write_str(url),
        }
    }
}

/// A target filename paired with its byte source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub filename: String,
    pub source: AssetSource,
}

impl AssetRecord {
    pub fn embedded(filename: impl Into<String>, bytes: &'static [u8]) -> Self {
        Self {
            filename: filename.into(),
            source: AssetSource::Embedded(bytes),
        }
    }

    pub fn remote(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            source: AssetSource::Remote(url.into()),
        }
    }
}

/// Companion evolution stages and their photos, in stage order.
const COMPANION_IMAGES: [(&str, &str); 5] = [
    (
        "seed.png",
        "https://images.unsplash.com/photo-1516253593875-bd7ba052fbc5?w=400&h=400&fit=crop&auto=format",
    ),
    (
        "sprout.png",
        "https://images.unsplash.com/photo-1466692476868-aef1dfb1e735?w=400&h=400&fit=crop&auto=format",
    ),
    (
        "sapling.png",
        "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=400&h=400&fit=crop&auto=format",
    ),
    (
        "tree.png",
        "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=400&fit=crop&auto=format",
    ),
    (
        "ancient_tree.png",
        "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=400&fit=crop&auto=format",
    ),
];

/// The plant photos fetched for the companion, one per evolution stage.
pub fn companion_images() -> Vec<AssetRecord> {
    COMPANION_IMAGES
        .iter()
        .map(|(name, url)| AssetRecord::remote(*name, *url))
        .collect()
}
