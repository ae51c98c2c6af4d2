//! End-to-end packing driver.
//!
//! `pack` filters structurally unpackable sprites, hands the rest to the
//! bin-size solver at their margin-inflated dimensions, applies the
//! force-square / power-of-two constraints to each solved atlas, and derives
//! the final blit offsets. It performs no I/O and owns no state across calls.

use crate::config::PackOptions;
use crate::error::Result;
use crate::model::{AtlasLayout, InputSprite, PackResult, PlacedSprite, Rect};
use crate::solver;
use tracing::instrument;

#[instrument(skip_all)]
/// Packs `sprites` into as few atlases as the bounded size search finds,
/// within `options.max_width x options.max_height`.
///
/// Sprites with a zero-area trim, or larger than the maximum bin, end up in
/// [`PackResult::unpacked`]; an empty input yields an empty result. The run
/// is deterministic: identical ordered input and options produce identical
/// output.
pub fn pack<K: Clone>(sprites: Vec<InputSprite<K>>, options: PackOptions) -> Result<PackResult<K>> {
    options.validate()?;

    if sprites.is_empty() {
        return Ok(PackResult {
            atlases: Vec::new(),
            unpacked: Vec::new(),
        });
    }

    // Zero-area trims can never occupy bin space; report them as-is.
    let mut unpacked: Vec<InputSprite<K>> = Vec::new();
    let mut packable: Vec<InputSprite<K>> = Vec::new();
    for sprite in sprites {
        if sprite.width == 0 || sprite.height == 0 {
            unpacked.push(sprite);
        } else {
            packable.push(sprite);
        }
    }

    let margin = options.margin();
    let sizes: Vec<(u32, u32)> = packable
        .iter()
        .map(|s| (s.width + margin * 2, s.height + margin * 2))
        .collect();

    let (solved, leftover) = solver::solve(&sizes, &options);

    let mut atlases: Vec<AtlasLayout<K>> = Vec::new();
    for (id, atlas) in solved.into_iter().enumerate() {
        let (mut width, mut height) = (atlas.width, atlas.height);
        if options.force_squared {
            let side = width.max(height);
            width = side;
            height = side;
        }
        if options.power_of_two {
            width = next_pow2(width);
            height = next_pow2(height);
        }

        let mut placed: Vec<PlacedSprite<K>> = Vec::new();
        for (idx, placement) in &atlas.placements {
            let sprite = &packable[*idx];
            let (fw, fh) = if placement.rotated {
                (sprite.height, sprite.width)
            } else {
                (sprite.width, sprite.height)
            };
            placed.push(PlacedSprite {
                key: sprite.key.clone(),
                frame: Rect::new(placement.rect.x + margin, placement.rect.y + margin, fw, fh),
                rotated: placement.rotated,
                source: sprite.source,
                source_size: sprite.source_size,
            });
        }

        atlases.push(AtlasLayout {
            id,
            width,
            height,
            sprites: placed,
        });
    }

    for idx in leftover {
        unpacked.push(packable[idx].clone());
    }

    Ok(PackResult { atlases, unpacked })
}

/// Smallest power of two >= `v`; zero stays zero.
pub(crate) fn next_pow2(v: u32) -> u32 {
    if v == 0 {
        0
    } else {
        v.checked_next_power_of_two().unwrap_or(0)
    }
}
