pub mod constants;
pub mod gui;
pub mod normalize;
pub mod recorder;
pub mod report;
pub mod session;
pub mod timer;

pub use normalize::{BoundingBox, DigitMatrix, bounding_box, normalize};
pub use recorder::{Point, StrokeRecorder};
pub use session::{CaptureSession, PollOutcome};
pub use timer::{CaptureTimer, Tick};
