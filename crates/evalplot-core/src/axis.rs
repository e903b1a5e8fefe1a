// File: crates/evalplot-core/src/axis.rs
// Summary: Axis model with label, range, and explicit tick positions.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit tick positions; empty means "subdivide the range evenly".
    pub ticks: Vec<f64>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: Vec::new(),
        }
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Epoch", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Average Loss", 0.0, 1.0)
    }

    /// Positions to place ticks and grid lines at.
    pub fn tick_positions(&self, fallback_steps: usize) -> Vec<f64> {
        if self.ticks.is_empty() {
            crate::grid::linspace(self.min, self.max, fallback_steps)
        } else {
            self.ticks.clone()
        }
    }
}
