// Shared visual tuning constants for the affirmation canvas.

// Frame pacing
pub const FRAME_BUDGET_MS: f64 = 16.0; // one frame tick at ~60 fps

// Soothing palette particles draw their color from
pub static PALETTE: [&str; 6] = [
    "#a8d8ea", // pale sky
    "#aa96da", // lavender
    "#fcbad3", // blush
    "#ffffd2", // cream
    "#b5ead7", // mint
    "#c7ceea", // periwinkle
];

// Particle spawn ranges
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 4.0;
pub const PARTICLE_SIZE_HEADROOM: f64 = 3.0; // max_size = size + [0, headroom)
pub const PARTICLE_SPEED: f64 = 0.5; // velocity components in [-speed, speed)
pub const PARTICLE_ALPHA_MIN: f64 = 0.2;
pub const PARTICLE_ALPHA_MAX: f64 = 0.6;
pub const PARTICLE_GROWTH_MAX: f64 = 0.05;
pub const PARTICLE_INTERVAL_MIN: u32 = 2; // frame ticks, inclusive
pub const PARTICLE_INTERVAL_MAX: u32 = 6; // frame ticks, inclusive
pub const PARTICLE_PULSE_RATE: f64 = 0.002; // rad per ms
pub const PARTICLE_MIN_VISIBLE: f64 = 0.8;

// Background drift
pub const BACKGROUND_GLOW_MIN_SIDE: f64 = 100.0;

// Breathing circle
pub const BREATH_RATE: f64 = 0.0008; // rad per ms
pub const BREATH_BASE_FRACTION: f64 = 0.12; // of min(w, h)
pub const BREATH_AMPLITUDE_FRACTION: f64 = 0.04; // of min(w, h)
pub const BREATH_RING_GAP: f64 = 8.0;
pub const BREATH_RING_WIDTH: f64 = 2.0;
pub const BREATH_CENTER: [f64; 2] = [0.5, 0.4];

// Flowing lines
pub const FLOW_BASELINE_FRACTION: f64 = 0.75;
pub const FLOW_SPACING: f64 = 20.0;
pub const FLOW_LINE_WIDTH: f64 = 1.5;
pub const FLOW_MAX_SEGMENTS: usize = 10;

// Text overlay
pub const TEXT_FONT: &str = "300 24px system-ui, -apple-system, sans-serif";
pub const TEXT_FILL: &str = "rgba(255, 255, 255, 0.92)";
pub const TEXT_SIDE_MARGIN: f64 = 60.0; // total horizontal inset
pub const TEXT_TOP_FRACTION: f64 = 0.4;
pub const TEXT_LINE_HEIGHT: f64 = 35.0;
pub const TEXT_SHADOW_BLUR: f64 = 6.0;
pub const TEXT_SHADOW_OFFSET: f64 = 2.0;
pub const TEXT_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.35)";
