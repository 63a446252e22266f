use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Page geometry and placement policy (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width: f64,
    pub page_height: f64,

    #[serde(default)]
    pub margin_top: f64,
    #[serde(default)]
    pub margin_right: f64,
    #[serde(default)]
    pub margin_bottom: f64,
    #[serde(default)]
    pub margin_left: f64,

    /// Minimum clearance to the right of and below each placed photo.
    /// One-sided by design (§9 design notes) — not a symmetric border.
    #[serde(default)]
    pub spacing: f64,

    /// If false, items that do not fit on page 0 are dropped with no error.
    #[serde(default = "default_multi_page")]
    pub multi_page: bool,
}

fn default_multi_page() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: 0.0,
            page_height: 0.0,
            margin_top: 0.0,
            margin_right: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            spacing: 0.0,
            multi_page: default_multi_page(),
        }
    }
}

impl PageConfig {
    /// Validates the geometry constraints named in §4.8's `InvalidGeometry`
    /// taxonomy entry: non-positive page dimensions, negative margins,
    /// negative spacing, or margins that leave no printable area.
    pub fn validate(&self) -> Result<()> {
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(PackError::InvalidGeometry(format!(
                "page dimensions must be positive (got {}x{})",
                self.page_width, self.page_height
            )));
        }
        for (name, v) in [
            ("margin_top", self.margin_top),
            ("margin_right", self.margin_right),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
            ("spacing", self.spacing),
        ] {
            if v < 0.0 {
                return Err(PackError::InvalidGeometry(format!(
                    "{name} must be non-negative (got {v})"
                )));
            }
        }

        let printable_w = self.page_width - self.margin_left - self.margin_right;
        let printable_h = self.page_height - self.margin_top - self.margin_bottom;
        if printable_w <= 0.0 || printable_h <= 0.0 {
            return Err(PackError::InvalidGeometry(format!(
                "margins leave no printable area: {printable_w}x{printable_h}"
            )));
        }

        Ok(())
    }

    /// Create a fluent builder for `PageConfig`.
    pub fn builder() -> PageConfigBuilder {
        PageConfigBuilder::new()
    }
}

/// Builder for `PageConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PageConfigBuilder {
    cfg: PageConfig,
}

impl PageConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PageConfig::default(),
        }
    }

    pub fn page_size(mut self, width: f64, height: f64) -> Self {
        self.cfg.page_width = width;
        self.cfg.page_height = height;
        self
    }

    pub fn margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.cfg.margin_top = top;
        self.cfg.margin_right = right;
        self.cfg.margin_bottom = bottom;
        self.cfg.margin_left = left;
        self
    }

    pub fn uniform_margin(mut self, v: f64) -> Self {
        self.cfg.margin_top = v;
        self.cfg.margin_right = v;
        self.cfg.margin_bottom = v;
        self.cfg.margin_left = v;
        self
    }

    pub fn spacing(mut self, v: f64) -> Self {
        self.cfg.spacing = v;
        self
    }

    pub fn multi_page(mut self, v: bool) -> Self {
        self.cfg.multi_page = v;
        self
    }

    pub fn build(self) -> PageConfig {
        self.cfg
    }
}
