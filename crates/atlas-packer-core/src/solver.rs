//! Bin-size search.
//!
//! For a batch of rectangles the solver scans candidate bin sizes (doubling
//! widths/heights from 4 px up to the configured maximum, then refining by
//! area growth) and runs the full heuristic set at every candidate, keeping
//! the run that packs the most area, with occupancy as the tie-break. The
//! search is a bounded heuristic grid, not optimal bin packing; its stepping
//! is part of the observable contract and two runs over identical input
//! produce identical dimensions and placements.

use crate::config::{Heuristic, PackOptions};
use crate::packer::{Placement, RectBin};
use tracing::{debug, trace};

/// One atlas produced by the solver, before constraint rounding.
pub(crate) struct SolvedAtlas {
    pub width: u32,
    pub height: u32,
    /// `(input index, placement)` pairs for everything this atlas holds.
    pub placements: Vec<(usize, Placement)>,
}

/// A single bin attempt: one size, one heuristic.
struct BinRun {
    width: u32,
    height: u32,
    heuristic: Heuristic,
    placements: Vec<Option<Placement>>,
    packed_area: u64,
}

impl BinRun {
    fn occupancy(&self) -> f64 {
        let bin_area = self.width as u64 * self.height as u64;
        if bin_area == 0 {
            0.0
        } else {
            self.packed_area as f64 / bin_area as f64
        }
    }

    /// More packed area wins; on a tie, the tighter bin. Strict comparisons
    /// keep the earliest attempt on full ties, which pins the search order
    /// into the output.
    fn better_than(&self, other: &BinRun) -> bool {
        self.packed_area > other.packed_area
            || (self.packed_area == other.packed_area && self.occupancy() > other.occupancy())
    }
}

/// Packs `sizes` (already margin-inflated) into as many atlases as needed.
///
/// Returns the solved atlases and the indices of rectangles that were never
/// placed. Rectangles larger than the maximum bin in an axis (in both
/// orientations when rotation is allowed) are set aside up front.
pub(crate) fn solve(sizes: &[(u32, u32)], opts: &PackOptions) -> (Vec<SolvedAtlas>, Vec<usize>) {
    let mut unpacked: Vec<usize> = Vec::new();
    let mut remaining: Vec<usize> = Vec::new();
    for (idx, &(w, h)) in sizes.iter().enumerate() {
        if fits_max_bin(w, h, opts) {
            remaining.push(idx);
        } else {
            unpacked.push(idx);
        }
    }

    let mut atlases: Vec<SolvedAtlas> = Vec::new();
    while !remaining.is_empty() {
        let batch: Vec<(u32, u32)> = remaining.iter().map(|&i| sizes[i]).collect();
        let Some(run) = solve_one(&batch, opts) else {
            unpacked.extend(remaining.drain(..));
            break;
        };

        let mut placements: Vec<(usize, Placement)> = Vec::new();
        let mut leftover: Vec<usize> = Vec::new();
        for (slot, placement) in run.placements.iter().enumerate() {
            match placement {
                Some(p) => placements.push((remaining[slot], *p)),
                None => leftover.push(remaining[slot]),
            }
        }

        if placements.is_empty() {
            // Bin too small for anything; the remainder is permanently unpacked.
            unpacked.extend(remaining.drain(..));
            break;
        }

        debug!(
            atlas = atlases.len(),
            width = run.width,
            height = run.height,
            heuristic = ?run.heuristic,
            placed = placements.len(),
            leftover = leftover.len(),
            "atlas solved"
        );

        atlases.push(SolvedAtlas {
            width: run.width,
            height: run.height,
            placements,
        });
        remaining = leftover;
    }

    (atlases, unpacked)
}

/// Finds the best single-bin run for `batch`, searching bin sizes per the
/// doubling/area-growth schedule.
fn solve_one(batch: &[(u32, u32)], opts: &PackOptions) -> Option<BinRun> {
    let total_area: u64 = batch.iter().map(|&(w, h)| w as u64 * h as u64).sum();
    let max_area = opts.max_width as u64 * opts.max_height as u64;

    let mut best: Option<BinRun> = None;
    if total_area < max_area {
        for test_w in doubled_sizes(opts.max_width) {
            for test_h in doubled_sizes(opts.max_height) {
                if test_w as u64 * (test_h as u64) < total_area {
                    continue;
                }
                grow_search(batch, test_w, test_h, total_area, opts, &mut best);
            }
        }
    } else {
        // Cannot possibly fit below the maximum size; pack straight at it.
        attempt(batch, opts.max_width, opts.max_height, opts, &mut best);
    }
    best
}

/// Area-growth refinement inside one `(test_w, test_h)` envelope: starting
/// from the batch area, try a square bin, then bins pinned to each test axis,
/// growing the target area by half the leftover until the envelope area is
/// reached or an attempt packs everything.
fn grow_search(
    batch: &[(u32, u32)],
    test_w: u32,
    test_h: u32,
    total_area: u64,
    opts: &PackOptions,
    best: &mut Option<BinRun>,
) {
    let test_area = test_w as f64 * test_h as f64;
    let mut grow_area = total_area as f64;

    loop {
        let mut round_best: Option<BinRun> = None;

        let side = grow_area.sqrt().ceil() as u32;
        if side <= test_w && side <= test_h {
            attempt(batch, side, side, opts, &mut round_best);
        }
        let w = ((grow_area / test_h as f64).ceil() as u32).min(test_w);
        attempt(batch, w, test_h, opts, &mut round_best);
        let h = ((grow_area / test_w as f64).ceil() as u32).min(test_h);
        attempt(batch, test_w, h, opts, &mut round_best);

        let leftover_area = match &round_best {
            Some(run) => total_area - run.packed_area.min(total_area),
            None => total_area,
        };
        if let Some(run) = round_best {
            merge_best(best, run);
        }
        if leftover_area == 0 {
            break;
        }
        grow_area += leftover_area as f64 / 2.0;
        if grow_area >= test_area {
            break;
        }
    }
}

/// Runs every heuristic of the search set (or the pinned one) at `w x h` and
/// merges the outcomes into both the round-local and global best.
fn attempt(batch: &[(u32, u32)], w: u32, h: u32, opts: &PackOptions, best: &mut Option<BinRun>) {
    if w == 0 || h == 0 {
        return;
    }
    let heuristics: &[Heuristic] = match &opts.algorithm {
        Some(pinned) => std::slice::from_ref(pinned),
        None => &Heuristic::AUTO,
    };
    for &heuristic in heuristics {
        let mut bin = RectBin::new(w, h, opts.allow_rotate);
        let placements = bin.insert_all(batch, heuristic);
        let packed_area: u64 = placements.iter().flatten().map(|p| p.rect.area()).sum();
        trace!(w, h, ?heuristic, packed_area, "bin attempt");
        merge_best(
            best,
            BinRun {
                width: w,
                height: h,
                heuristic,
                placements,
                packed_area,
            },
        );
    }
}

fn merge_best(best: &mut Option<BinRun>, run: BinRun) {
    match best {
        Some(current) if !run.better_than(current) => {}
        _ => *best = Some(run),
    }
}

/// Candidate dimensions: 4, 8, 16, ... doubling, clamped at `max`.
fn doubled_sizes(max: u32) -> Vec<u32> {
    let mut out = Vec::new();
    let mut v = 4u32;
    loop {
        out.push(v.min(max));
        if v >= max {
            break;
        }
        v = v.saturating_mul(2);
    }
    out
}

fn fits_max_bin(w: u32, h: u32, opts: &PackOptions) -> bool {
    let upright = w <= opts.max_width && h <= opts.max_height;
    let turned = opts.allow_rotate && h <= opts.max_width && w <= opts.max_height;
    upright || turned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    #[test]
    fn doubled_sizes_clamp_at_max() {
        assert_eq!(doubled_sizes(64), vec![4, 8, 16, 32, 64]);
        assert_eq!(doubled_sizes(100), vec![4, 8, 16, 32, 64, 100]);
        assert_eq!(doubled_sizes(3), vec![3]);
    }

    #[test]
    fn single_sprite_gets_a_tight_bin() {
        let opts = PackOptions::builder().with_max_dimensions(64, 64).build();
        let (atlases, unpacked) = solve(&[(40, 40)], &opts);
        assert!(unpacked.is_empty());
        assert_eq!(atlases.len(), 1);
        assert_eq!((atlases[0].width, atlases[0].height), (40, 40));
        assert_eq!(atlases[0].placements[0].1.rect, Rect::new(0, 0, 40, 40));
    }

    #[test]
    fn oversize_rects_are_set_aside() {
        let opts = PackOptions::builder().with_max_dimensions(100, 100).build();
        let (atlases, unpacked) = solve(&[(200, 50), (30, 30)], &opts);
        assert_eq!(unpacked, vec![0]);
        assert_eq!(atlases.len(), 1);
    }

    #[test]
    fn overflow_spills_to_second_atlas() {
        let opts = PackOptions::builder().with_max_dimensions(100, 100).build();
        let (atlases, unpacked) = solve(&[(100, 100), (100, 100)], &opts);
        assert!(unpacked.is_empty());
        assert_eq!(atlases.len(), 2);
        for atlas in &atlases {
            assert_eq!((atlas.width, atlas.height), (100, 100));
            assert_eq!(atlas.placements.len(), 1);
        }
    }
}
