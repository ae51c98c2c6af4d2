use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Free-rectangle placement heuristics.
///
/// `ContactPoint` is excluded from the automatic search ([`Heuristic::AUTO`])
/// because its scoring can produce overlapping placements; it stays selectable
/// through [`PackOptions::algorithm`] for callers that depend on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    BestShortSideFit,
    BestLongSideFit,
    BestAreaFit,
    BottomLeft,
    LeftoverArea,
    ContactPoint,
}

impl Heuristic {
    /// Heuristics tried by the automatic bin-size search, in order.
    pub const AUTO: [Heuristic; 5] = [
        Heuristic::BestShortSideFit,
        Heuristic::BestLongSideFit,
        Heuristic::BestAreaFit,
        Heuristic::BottomLeft,
        Heuristic::LeftoverArea,
    ];
}

impl FromStr for Heuristic {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bssf" | "bestshortsidefit" => Ok(Self::BestShortSideFit),
            "blsf" | "bestlongsidefit" => Ok(Self::BestLongSideFit),
            "baf" | "bestareafit" => Ok(Self::BestAreaFit),
            "bl" | "bottomleft" => Ok(Self::BottomLeft),
            "la" | "leftoverarea" => Ok(Self::LeftoverArea),
            "cp" | "contactpoint" => Ok(Self::ContactPoint),
            _ => Err(()),
        }
    }
}

/// Packing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackOptions {
    /// Maximum atlas width in pixels.
    pub max_width: u32,
    /// Maximum atlas height in pixels.
    pub max_height: u32,
    /// Allow 90° rotation of sprites where beneficial.
    pub allow_rotate: bool,
    /// Force final atlas dimensions to be square (max of width/height).
    pub force_squared: bool,
    /// Round final atlas dimensions up to the next power of two.
    pub power_of_two: bool,
    /// Uniform spacing reserved around each sprite, in pixels.
    pub padding: u32,
    /// Uniform bleed margin reserved around each sprite, in pixels.
    pub bleed: u32,
    /// Pin a single placement heuristic instead of searching all of
    /// [`Heuristic::AUTO`]. This is the only way to select `ContactPoint`.
    #[serde(default)]
    pub algorithm: Option<Heuristic>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            max_width: 1024,
            max_height: 1024,
            allow_rotate: false,
            force_squared: false,
            power_of_two: false,
            padding: 2,
            bleed: 0,
            algorithm: None,
        }
    }
}

impl PackOptions {
    /// Validates the options.
    ///
    /// Fails when the maximum dimensions are zero or the per-sprite margin
    /// leaves no usable bin space; no search can proceed in either case.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackError;

        if self.max_width == 0 || self.max_height == 0 {
            return Err(PackError::InvalidDimensions {
                width: self.max_width,
                height: self.max_height,
            });
        }

        let margin = self.margin().saturating_mul(2);
        if margin >= self.max_width || margin >= self.max_height {
            return Err(PackError::InvalidOptions(format!(
                "(padding + bleed) * 2 = {} leaves no space in a {}x{} atlas",
                margin, self.max_width, self.max_height
            )));
        }

        Ok(())
    }

    /// Margin reserved on each side of a sprite.
    pub(crate) fn margin(&self) -> u32 {
        self.padding + self.bleed
    }

    /// Create a fluent builder for `PackOptions`.
    pub fn builder() -> PackOptionsBuilder {
        PackOptionsBuilder::new()
    }
}

/// Builder for `PackOptions` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackOptionsBuilder {
    opts: PackOptions,
}

impl PackOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: PackOptions::default(),
        }
    }
    pub fn with_max_dimensions(mut self, w: u32, h: u32) -> Self {
        self.opts.max_width = w;
        self.opts.max_height = h;
        self
    }
    pub fn allow_rotate(mut self, v: bool) -> Self {
        self.opts.allow_rotate = v;
        self
    }
    pub fn force_squared(mut self, v: bool) -> Self {
        self.opts.force_squared = v;
        self
    }
    pub fn power_of_two(mut self, v: bool) -> Self {
        self.opts.power_of_two = v;
        self
    }
    pub fn padding(mut self, v: u32) -> Self {
        self.opts.padding = v;
        self
    }
    pub fn bleed(mut self, v: u32) -> Self {
        self.opts.bleed = v;
        self
    }
    pub fn algorithm(mut self, v: Option<Heuristic>) -> Self {
        self.opts.algorithm = v;
        self
    }
    pub fn build(self) -> PackOptions {
        self.opts
    }
}
