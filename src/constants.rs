// Browser-side wiring constants

// Canvas mounted automatically at startup when present
pub const DEFAULT_CANVAS_ID: &str = "synapse-canvas";

// Wait this long after the last resize event before regenerating the field
pub const RESIZE_DEBOUNCE_MS: i32 = 200;

// Magnetic hover markup
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_STRENGTH_ATTR: &str = "data-magnetic-strength";
pub const MAGNETIC_RADIUS_ATTR: &str = "data-magnetic-radius";
