//! The periodic capture loop.
//!
//! A session owns the stroke recorder and the countdown. Each poll either
//! updates the countdown or, once the interval has elapsed, normalizes the
//! current drawing, reports it and starts over on a blank canvas.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::normalize::normalize;
use crate::recorder::StrokeRecorder;
use crate::report;
use crate::timer::{CaptureTimer, Tick};

/// What a poll did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Still counting down.
    Counting { remaining_secs: u64 },
    /// A capture was emitted and the canvas cleared.
    Reset { had_drawing: bool },
}

pub struct CaptureSession {
    recorder: StrokeRecorder,
    timer: CaptureTimer,
}

impl CaptureSession {
    pub fn new(width: u32, height: u32, interval: Duration, now: Instant) -> Self {
        Self {
            recorder: StrokeRecorder::new(width, height),
            timer: CaptureTimer::new(interval, now),
        }
    }

    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut StrokeRecorder {
        &mut self.recorder
    }

    /// Seconds shown on the countdown at `now`.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.timer.poll(now).remaining_secs
    }

    pub fn poll(&mut self, now: Instant, out: &mut impl Write) -> Result<PollOutcome> {
        let Tick {
            remaining_secs,
            due,
        } = self.timer.poll(now);

        if !due {
            return Ok(PollOutcome::Counting { remaining_secs });
        }

        let had_drawing = self.capture(now, out)?;
        Ok(PollOutcome::Reset { had_drawing })
    }

    /// Emits the current drawing, then clears the canvas and restarts the
    /// countdown. Returns whether anything had been drawn.
    ///
    /// The canvas is cleared even when writing the report fails.
    pub fn capture(&mut self, now: Instant, out: &mut impl Write) -> Result<bool> {
        let matrix = normalize(self.recorder.raster());
        let had_drawing = matrix.is_some();

        self.recorder.reset();
        self.timer.restart(now);

        match &matrix {
            Some(matrix) => {
                tracing::info!("Captured digit");
                report::write_digit(out, matrix)?;
            }
            None => {
                tracing::info!("Capture interval elapsed with an empty canvas");
                report::write_empty(out)?;
            }
        }
        report::write_reset(out)?;
        out.flush()?;

        Ok(had_drawing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::Point;

    const INTERVAL: Duration = Duration::from_secs(30);

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn counting_writes_nothing() {
        let start = Instant::now();
        let mut session = CaptureSession::new(200, 200, INTERVAL, start);
        let mut buf = Vec::new();

        let outcome = session
            .poll(start + Duration::from_millis(12_300), &mut buf)
            .expect("poll");
        assert_eq!(outcome, PollOutcome::Counting { remaining_secs: 18 });
        assert!(buf.is_empty());
    }

    #[test]
    fn empty_interval_reports_no_drawing() {
        let start = Instant::now();
        let mut session = CaptureSession::new(200, 200, INTERVAL, start);
        let mut buf = Vec::new();

        let outcome = session.poll(start + INTERVAL, &mut buf).expect("poll");
        assert_eq!(outcome, PollOutcome::Reset { had_drawing: false });

        let text = output(buf);
        assert!(text.contains("No drawing detected!"));
        assert!(!text.contains("Captured digit"));
        assert!(text.trim_end().ends_with("=".repeat(50).as_str()));
        assert!(text.contains("Canvas reset - Ready for new input"));
    }

    #[test]
    fn capture_prints_matrix_then_clears_canvas() {
        let start = Instant::now();
        let mut session = CaptureSession::new(200, 200, INTERVAL, start);
        {
            let recorder = session.recorder_mut();
            recorder.pointer_down(Point::new(60.0, 40.0));
            recorder.pointer_move(Point::new(60.0, 160.0));
        }
        assert!(session.recorder().has_origin());

        let fired_at = start + INTERVAL + Duration::from_millis(50);
        let mut buf = Vec::new();
        let outcome = session.poll(fired_at, &mut buf).expect("poll");
        assert_eq!(outcome, PollOutcome::Reset { had_drawing: true });

        let text = output(buf);
        let header = text.find("Captured digit").expect("matrix header");
        let reset = text.find("Canvas reset").expect("reset message");
        assert!(header < reset);

        // Raster and stroke origin are both gone after the reset
        let recorder = session.recorder_mut();
        assert!(recorder.raster().pixels().all(|p| p[0] == 0));
        assert!(!recorder.has_origin());
        assert!(!recorder.pointer_move(Point::new(100.0, 100.0)));
        assert!(session.recorder().raster().pixels().all(|p| p[0] == 0));

        assert_eq!(session.remaining_secs(fired_at), 30);
    }

    #[test]
    fn countdown_restarts_after_capture() {
        let start = Instant::now();
        let mut session = CaptureSession::new(50, 50, INTERVAL, start);
        let mut buf = Vec::new();

        let fired_at = start + Duration::from_millis(30_080);
        session.poll(fired_at, &mut buf).expect("poll");

        let outcome = session
            .poll(fired_at + Duration::from_secs(10), &mut buf)
            .expect("poll");
        assert_eq!(outcome, PollOutcome::Counting { remaining_secs: 20 });
    }
}
