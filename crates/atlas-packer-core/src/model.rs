use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
    /// Returns true if `r` is fully inside `self` (inclusive edges).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}

/// A sprite awaiting placement.
///
/// `width`/`height` are the trimmed dimensions used for packing. `source` and
/// `source_size` describe where the trim sits inside the original image; the
/// packer never interprets them, they round-trip unchanged so the caller can
/// map placements back to its own asset records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSprite<K = String> {
    /// User-specified key (e.g., filename or asset path).
    pub key: K,
    /// Trimmed width in pixels.
    pub width: u32,
    /// Trimmed height in pixels.
    pub height: u32,
    /// Trim sub-rect within the original image.
    pub source: Rect,
    /// Original (untrimmed) image size.
    pub source_size: (u32, u32),
}

impl<K> InputSprite<K> {
    /// Sprite with no trim metadata (trim covers the whole image).
    pub fn new(key: K, width: u32, height: u32) -> Self {
        Self {
            key,
            width,
            height,
            source: Rect::new(0, 0, width, height),
            source_size: (width, height),
        }
    }
}

/// A sprite placed within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedSprite<K = String> {
    pub key: K,
    /// Blit rectangle within the atlas. `x,y` include the padding/bleed
    /// margin; `w,h` are the trim dimensions after rotation.
    pub frame: Rect,
    /// True if the sprite was rotated 90° when placed.
    pub rotated: bool,
    /// Trim sub-rect within the original image (passed through).
    pub source: Rect,
    /// Original (untrimmed) image size (passed through).
    pub source_size: (u32, u32),
}

/// One packed atlas page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AtlasLayout<K = String> {
    pub id: usize,
    /// Final width, after force-square / power-of-two rounding.
    pub width: u32,
    /// Final height, after force-square / power-of-two rounding.
    pub height: u32,
    pub sprites: Vec<PlacedSprite<K>>,
}

/// Result of a packing run.
///
/// Every input sprite appears exactly once: either placed in exactly one
/// atlas, or in `unpacked` (zero-area trim, larger than the maximum bin, or
/// never placeable by the search).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackResult<K = String> {
    pub atlases: Vec<AtlasLayout<K>>,
    pub unpacked: Vec<InputSprite<K>>,
}

/// Statistics about atlas packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    pub num_atlases: usize,
    pub num_placed: usize,
    pub num_unpacked: usize,
    /// Sum of width * height over all atlases.
    pub total_atlas_area: u64,
    /// Sum of frame width * height over all placed sprites.
    pub used_sprite_area: u64,
    /// used_sprite_area / total_atlas_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
    pub num_rotated: usize,
}

impl<K> PackResult<K> {
    /// Computes packing statistics for this result.
    pub fn stats(&self) -> PackStats {
        let num_atlases = self.atlases.len();
        let mut num_placed = 0;
        let mut total_atlas_area = 0u64;
        let mut used_sprite_area = 0u64;
        let mut num_rotated = 0;

        for atlas in &self.atlases {
            total_atlas_area += atlas.width as u64 * atlas.height as u64;
            for sprite in &atlas.sprites {
                num_placed += 1;
                used_sprite_area += sprite.frame.area();
                if sprite.rotated {
                    num_rotated += 1;
                }
            }
        }

        let occupancy = if total_atlas_area > 0 {
            used_sprite_area as f64 / total_atlas_area as f64
        } else {
            0.0
        };

        PackStats {
            num_atlases,
            num_placed,
            num_unpacked: self.unpacked.len(),
            total_atlas_area,
            used_sprite_area,
            occupancy,
            num_rotated,
        }
    }
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Atlases: {}, Placed: {}, Unpacked: {}, Occupancy: {:.2}%, Atlas Area: {} px², Used Area: {} px², Rotated: {}",
            self.num_atlases,
            self.num_placed,
            self.num_unpacked,
            self.occupancy * 100.0,
            self.total_atlas_area,
            self.used_sprite_area,
            self.num_rotated,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.total_atlas_area.saturating_sub(self.used_sprite_area)
    }
}
