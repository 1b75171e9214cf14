/// Browser-side wiring constants.
///
/// Visual tuning lives in `affirm_core::constants`; these only cover how the
/// canvas is found, sized and scheduled in the page.
// Element id looked up by `AffirmationCanvas::from_element_id` callers
pub const DEFAULT_CANVAS_ID: &str = "affirmation-canvas";

// Canvas context kind and window event names
pub const CONTEXT_KIND: &str = "2d";
pub const RESIZE_EVENT: &str = "resize";

// Device pixel ratio handling
pub const DPR_FALLBACK: f64 = 1.0; // used when the window reports 0 or NaN
pub const MAX_DPR: f64 = 3.0; // caps backing store size on very dense screens

// Elapsed time is handed to the layers in milliseconds
pub const MS_PER_SEC: f64 = 1000.0;
