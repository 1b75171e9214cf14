//! Performance tiers for the render loop.
//!
//! Every cutoff is its own field: the particle tiers, the low-power box, the
//! flowing-line cutoffs and the line-drawing cutoff are tuned independently
//! and do not share a breakpoint.

#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    /// Widths below this get `particles_small`.
    pub particle_tier_small_below: f64,
    /// Widths below this (and not small) get `particles_medium`.
    pub particle_tier_medium_below: f64,
    pub particles_small: usize,
    pub particles_medium: usize,
    pub particles_large: usize,

    pub low_power_width_below: f64,
    pub low_power_height_below: f64,
    /// Render every Nth scheduled frame.
    pub frame_skip_low_power: u64,
    pub frame_skip_default: u64,
    /// Particles are updated in `1/N` rotating slices.
    pub update_ratio_low_power: u64,
    pub update_ratio_default: u64,

    pub flow_two_lines_below: f64,
    pub flow_coarse_segments_below: f64,
    pub flow_coarse_segments: usize,
    pub flow_fine_segments: usize,
    pub flow_min_width: f64,

    pub resize_debounce_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            particle_tier_small_below: 400.0,
            particle_tier_medium_below: 800.0,
            particles_small: 20,
            particles_medium: 30,
            particles_large: 40,

            low_power_width_below: 500.0,
            low_power_height_below: 400.0,
            frame_skip_low_power: 2,
            frame_skip_default: 4,
            update_ratio_low_power: 3,
            update_ratio_default: 2,

            flow_two_lines_below: 400.0,
            flow_coarse_segments_below: 600.0,
            flow_coarse_segments: 6,
            flow_fine_segments: 10,
            flow_min_width: 200.0,

            resize_debounce_ms: 250,
        }
    }
}

impl Tuning {
    pub fn particle_count(&self, width: f64) -> usize {
        if width < self.particle_tier_small_below {
            self.particles_small
        } else if width < self.particle_tier_medium_below {
            self.particles_medium
        } else {
            self.particles_large
        }
    }

    pub fn is_low_power(&self, width: f64, height: f64) -> bool {
        width < self.low_power_width_below || height < self.low_power_height_below
    }

    pub fn frame_skip(&self, low_power: bool) -> u64 {
        let n = if low_power {
            self.frame_skip_low_power
        } else {
            self.frame_skip_default
        };
        n.max(1)
    }

    pub fn update_ratio(&self, low_power: bool) -> u64 {
        let n = if low_power {
            self.update_ratio_low_power
        } else {
            self.update_ratio_default
        };
        n.max(1)
    }

    pub fn flow_line_count(&self, width: f64) -> usize {
        if width < self.flow_two_lines_below {
            2
        } else {
            3
        }
    }

    pub fn flow_segment_count(&self, width: f64) -> usize {
        if width < self.flow_coarse_segments_below {
            self.flow_coarse_segments
        } else {
            self.flow_fine_segments
        }
    }
}
