//! Constants shared by the scenes and the panel.

/// Rendering constants for the glitch visuals
pub mod glitch_constants {
    /// Glyphs stamped by the ASCII noise overlay.
    pub const GLYPH_PALETTE: [char; 14] = [
        '░', '▒', '▓', '█', '▄', '▀', '■', '□', '●', '○', '◆', '◇', '△', '▲',
    ];
    /// Width of the preview canvas the geometry constants were tuned against.
    pub const PREVIEW_WIDTH: f64 = 280.0;
    /// Height of the preview canvas the geometry constants were tuned against.
    pub const PREVIEW_HEIGHT: f64 = 200.0;
    /// Width of the large hallucination canvas.
    pub const FIELD_WIDTH: f64 = 700.0;
    /// Height of the large hallucination canvas.
    pub const FIELD_HEIGHT: f64 = 500.0;
    /// Per-frame chance of a strip glitch while the feedback loop is engaged.
    pub const DEFAULT_GLITCH_PROBABILITY: f64 = 0.15;
    /// Deepest fractalization the controls allow.
    pub const MAX_FRACTAL_DEPTH: u8 = 9;
    /// Shallowest fractalization the controls allow.
    pub const MIN_FRACTAL_DEPTH: u8 = 1;
    /// Used for angles (radians)
    pub const TAU: f64 = std::f64::consts::TAU;
}
