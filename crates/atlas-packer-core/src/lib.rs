//! Texture-atlas packing engine.
//!
//! Takes independently-sized sprites (trim dimensions plus opaque caller
//! payload) and arranges them without overlap into one or more fixed-size
//! atlas layouts, minimizing wasted space and the number of atlases.
//!
//! - Placement: free-rectangle bookkeeping with five scoring heuristics,
//!   optional 90° rotation, greedy globally-best-next-rectangle selection.
//! - Sizing: doubling search over candidate bin dimensions refined by area
//!   growth, repeated over leftovers until everything is placed or provably
//!   unplaceable.
//! - Output: placement rectangles only; compositing pixels into atlas
//!   bitmaps is the caller's job.
//!
//! Quick example:
//! ```
//! use atlas_packer_core::{pack, InputSprite, PackOptions};
//!
//! let sprites = vec![
//!     InputSprite::new("hero".to_string(), 40, 40),
//!     InputSprite::new("coin".to_string(), 12, 12),
//! ];
//! let opts = PackOptions::builder()
//!     .with_max_dimensions(256, 256)
//!     .padding(0)
//!     .build();
//! let result = pack(sprites, opts).unwrap();
//! assert_eq!(result.atlases.len(), 1);
//! assert!(result.unpacked.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packer;
pub mod pipeline;
mod solver;

pub use config::*;
pub use error::*;
pub use model::*;
pub use pipeline::pack;

/// Convenience prelude for common types and functions.
pub mod prelude {
    pub use crate::config::{Heuristic, PackOptions, PackOptionsBuilder};
    pub use crate::error::{PackError, Result};
    pub use crate::model::{
        AtlasLayout, InputSprite, PackResult, PackStats, PlacedSprite, Rect,
    };
    pub use crate::packer::{Placement, RectBin};
    pub use crate::pipeline::pack;
}
