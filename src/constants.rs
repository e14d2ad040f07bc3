// Window and overlay settings
pub mod gui {
    pub const WINDOW_TITLE: &str = "Digit Capture";

    // Canvas size used until the viewport reports its real size
    pub const INITIAL_CANVAS_WIDTH: u32 = 1920;
    pub const INITIAL_CANVAS_HEIGHT: u32 = 1080;

    // Overlay text
    pub const INSTRUCTION_TEXT: &str =
        "Draw a digit (0-9) - Canvas resets every 30 seconds - Press ESC to exit";
    pub const INSTRUCTION_FONT_SIZE: f32 = 20.0;
    pub const TIMER_FONT_SIZE: f32 = 16.0;
    pub const TEXT_BASELINE_Y: f32 = 50.0;
    pub const TIMER_RIGHT_INSET: f32 = 100.0;
}

// Stroke rasterization
pub mod stroke {
    pub const LINE_WIDTH: f32 = 15.0;
    pub const BACKGROUND: u8 = 0;
    pub const FOREGROUND: u8 = 255;
}

// Capture loop timing
pub mod timing {
    pub const CAPTURE_INTERVAL_SECS: u64 = 30;
    pub const POLL_INTERVAL_MS: u64 = 100;
}

// MNIST-style output
pub mod digit {
    pub const SIZE: usize = 28;
    pub const MARGIN_RATIO: f64 = 0.2;
    pub const MAX_INTENSITY: f32 = 255.0;

    // Visualization thresholds
    pub const SOLID_THRESHOLD: f32 = 0.5;
    pub const SHADE_THRESHOLD: f32 = 0.1;
    pub const SOLID_GLYPH: char = '█';
    pub const SHADE_GLYPH: char = '▒';

    pub const SEPARATOR_WIDTH: usize = 50;
}
