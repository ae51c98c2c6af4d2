//! Single-bin free-rectangle packer.
//!
//! [`RectBin`] places a batch of rectangles into one fixed-size bin, one at a
//! time, picking on every step the globally best remaining candidate under the
//! chosen [`Heuristic`]. Free space is tracked as a list of possibly
//! overlapping rectangles; placements split every intersecting free rectangle
//! into up to four full-span remainders, and the list is pruned only for
//! strict containment. Adjacent free rectangles are never merged.

use crate::config::Heuristic;
use crate::model::Rect;

/// Score pair returned when a candidate fits nowhere in the bin.
const INFEASIBLE: (i64, i64) = (i64::MAX, i64::MAX);

/// A resolved placement inside a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Occupied rectangle (post-rotation dimensions).
    pub rect: Rect,
    /// True if the rectangle was placed with width/height swapped.
    pub rotated: bool,
}

/// Packs rectangles into a single `width x height` bin.
pub struct RectBin {
    width: u32,
    height: u32,
    allow_rotate: bool,
    free: Vec<Rect>,
    used: Vec<Rect>,
}

impl RectBin {
    pub fn new(width: u32, height: u32, allow_rotate: bool) -> Self {
        Self {
            width,
            height,
            allow_rotate,
            free: vec![Rect::new(0, 0, width, height)],
            used: Vec::new(),
        }
    }

    /// Places as many of `sizes` as possible, greedily taking on every step
    /// the candidate with the best score across all remaining candidates.
    ///
    /// Returns one entry per input, `None` for rectangles left unplaced.
    pub fn insert_all(&mut self, sizes: &[(u32, u32)], heuristic: Heuristic) -> Vec<Option<Placement>> {
        let mut placements: Vec<Option<Placement>> = vec![None; sizes.len()];
        let mut remaining: Vec<usize> = (0..sizes.len()).collect();

        while !remaining.is_empty() {
            let mut best_score = INFEASIBLE;
            let mut best: Option<(usize, Placement)> = None;

            for (slot, &idx) in remaining.iter().enumerate() {
                let (w, h) = sizes[idx];
                if let Some((placement, score)) = self.find_position(w, h, heuristic) {
                    if score < best_score {
                        best_score = score;
                        best = Some((slot, placement));
                    }
                }
            }

            // Nothing fits anymore; the caller surfaces the remainder.
            let Some((slot, placement)) = best else {
                break;
            };

            self.place(placement.rect);
            placements[remaining[slot]] = Some(placement);
            remaining.remove(slot);
        }

        placements
    }

    /// Best placement of a `w x h` rectangle over all free rectangles, trying
    /// the rotated orientation as well when allowed. `None` if it fits nowhere.
    fn find_position(&self, w: u32, h: u32, heuristic: Heuristic) -> Option<(Placement, (i64, i64))> {
        let mut best_score = INFEASIBLE;
        let mut best: Option<Placement> = None;

        for fr in &self.free {
            if fr.w >= w && fr.h >= h {
                let score = self.score(fr, w, h, heuristic);
                if score < best_score {
                    best_score = score;
                    best = Some(Placement {
                        rect: Rect::new(fr.x, fr.y, w, h),
                        rotated: false,
                    });
                }
            }
            if self.allow_rotate && fr.w >= h && fr.h >= w {
                let score = self.score(fr, h, w, heuristic);
                if score < best_score {
                    best_score = score;
                    best = Some(Placement {
                        rect: Rect::new(fr.x, fr.y, h, w),
                        rotated: true,
                    });
                }
            }
        }

        best.map(|p| (p, best_score))
    }

    /// `(primary, secondary)` score of placing a `w x h` rectangle at the
    /// top-left of free rectangle `fr`. Lower is better; the maximizing
    /// heuristics (`LeftoverArea`, the contact sum of `ContactPoint`) are
    /// negated so a single comparison direction serves all of them.
    fn score(&self, fr: &Rect, w: u32, h: u32, heuristic: Heuristic) -> (i64, i64) {
        let leftover_w = fr.w as i64 - w as i64;
        let leftover_h = fr.h as i64 - h as i64;
        let short_side = leftover_w.min(leftover_h);
        let long_side = leftover_w.max(leftover_h);
        let leftover_area = fr.area() as i64 - (w as i64 * h as i64);

        match heuristic {
            Heuristic::BestShortSideFit => (short_side, long_side),
            Heuristic::BestLongSideFit => (long_side, short_side),
            Heuristic::BestAreaFit => (leftover_area, short_side),
            Heuristic::BottomLeft => ((fr.y + h) as i64, fr.x as i64),
            Heuristic::LeftoverArea => (-leftover_area, -short_side),
            Heuristic::ContactPoint => {
                (-(self.contact_score(fr.x, fr.y, w, h) as i64), leftover_area)
            }
        }
    }

    /// Total edge length the rectangle would share with the bin borders and
    /// already used rectangles. Part of the historical `ContactPoint`
    /// heuristic; known to admit overlapping placements.
    fn contact_score(&self, x: u32, y: u32, w: u32, h: u32) -> u32 {
        let mut score = 0u32;
        if x == 0 {
            score += h;
        }
        if y == 0 {
            score += w;
        }
        if x + w == self.width {
            score += h;
        }
        if y + h == self.height {
            score += w;
        }
        for u in &self.used {
            if u.x + u.w == x || x + w == u.x {
                score += overlap_1d(y, y + h, u.y, u.y + u.h);
            }
            if u.y + u.h == y || y + h == u.y {
                score += overlap_1d(x, x + w, u.x, u.x + u.w);
            }
        }
        score
    }

    /// Commits `node`: splits every intersecting free rectangle into its
    /// top/bottom (full width) and left/right (full height) remainders, then
    /// prunes contained entries. Remainders may overlap each other.
    fn place(&mut self, node: Rect) {
        let mut split: Vec<Rect> = Vec::new();
        let mut i = 0usize;
        while i < self.free.len() {
            let fr = self.free[i];
            if !intersects(&fr, &node) {
                i += 1;
                continue;
            }
            self.free.swap_remove(i);

            let fr_x2 = fr.x + fr.w;
            let fr_y2 = fr.y + fr.h;
            let n_x2 = node.x + node.w;
            let n_y2 = node.y + node.h;

            if node.y > fr.y {
                split.push(Rect::new(fr.x, fr.y, fr.w, node.y - fr.y));
            }
            if n_y2 < fr_y2 {
                split.push(Rect::new(fr.x, n_y2, fr.w, fr_y2 - n_y2));
            }
            if node.x > fr.x {
                split.push(Rect::new(fr.x, fr.y, node.x - fr.x, fr.h));
            }
            if n_x2 < fr_x2 {
                split.push(Rect::new(n_x2, fr.y, fr_x2 - n_x2, fr.h));
            }
        }

        self.free.extend(split);
        self.prune_free_list();
        self.used.push(node);
    }

    /// Removes every free rectangle fully contained in another one. This is
    /// the only cleanup performed; partial overlaps are left alone.
    fn prune_free_list(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let a = self.free[i];
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn free_list_len(&self) -> usize {
        self.free.len()
    }
}

fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.x >= b.x + b.w || b.x >= a.x + a.w || a.y >= b.y + b.h || b.y >= a.y + a.h)
}

fn overlap_1d(a1: u32, a2: u32, b1: u32, b2: u32) -> u32 {
    a2.min(b2).saturating_sub(a1.max(b1))
}
