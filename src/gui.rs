use eframe::egui;
use std::time::{Duration, Instant};

use crate::constants::{gui, timing};
use crate::recorder::Point;
use crate::session::{CaptureSession, PollOutcome};

/// Pointer input relevant to drawing, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
enum StrokeInput {
    Down(Point),
    Move(Point),
    Up,
}

/// Extracts primary-button stroke input from one frame's raw events.
///
/// Every intermediate move is kept so fast drags still produce one segment
/// per reported position.
fn stroke_inputs(events: &[egui::Event]) -> Vec<StrokeInput> {
    let to_point = |pos: egui::Pos2| Point::new(pos.x, pos.y);

    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } => Some(StrokeInput::Down(to_point(*pos))),
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => Some(StrokeInput::Up),
            egui::Event::PointerMoved(pos) => Some(StrokeInput::Move(to_point(*pos))),
            egui::Event::PointerGone => Some(StrokeInput::Up),
            _ => None,
        })
        .collect()
}

pub struct DigitCaptureApp {
    session: CaptureSession,
    canvas_texture: Option<egui::TextureHandle>,
    canvas_dirty: bool,
}

impl DigitCaptureApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: CaptureSession::new(
                gui::INITIAL_CANVAS_WIDTH,
                gui::INITIAL_CANVAS_HEIGHT,
                Duration::from_secs(timing::CAPTURE_INTERVAL_SECS),
                Instant::now(),
            ),
            canvas_texture: None,
            canvas_dirty: false,
        }
    }

    fn handle_keys(&self, ctx: &egui::Context) {
        let (escape, toggle_fullscreen, fullscreen) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F11),
                i.viewport().fullscreen.unwrap_or(false),
            )
        });

        if escape {
            tracing::info!("Exit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if toggle_fullscreen {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let inputs = ctx.input(|i| stroke_inputs(&i.events));
        let recorder = self.session.recorder_mut();

        for input in inputs {
            match input {
                StrokeInput::Down(pos) => recorder.pointer_down(pos),
                StrokeInput::Move(pos) => {
                    if recorder.pointer_move(pos) {
                        self.canvas_dirty = true;
                    }
                }
                StrokeInput::Up => recorder.pointer_up(),
            }
        }
    }

    fn poll_capture(&mut self) {
        let mut stdout = std::io::stdout().lock();
        match self.session.poll(Instant::now(), &mut stdout) {
            Ok(PollOutcome::Counting { .. }) => {}
            Ok(PollOutcome::Reset { .. }) => self.canvas_dirty = true,
            Err(e) => {
                tracing::warn!("Failed to write capture report: {:#}", e);
                self.canvas_dirty = true;
            }
        }
    }

    fn fit_canvas(&mut self, screen: egui::Rect) {
        let width = screen.width().round() as u32;
        let height = screen.height().round() as u32;
        if self.session.recorder_mut().fit(width, height) {
            self.canvas_dirty = true;
        }
    }

    fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let raster = self.session.recorder().raster();
        let size = [raster.width() as usize, raster.height() as usize];
        let upload = || egui::ColorImage::from_gray(size, raster.as_raw());

        let texture = self.canvas_texture.get_or_insert_with(|| {
            ctx.load_texture("canvas", upload(), egui::TextureOptions::NEAREST)
        });
        if self.canvas_dirty {
            texture.set(upload(), egui::TextureOptions::NEAREST);
            self.canvas_dirty = false;
        }

        texture.id()
    }
}

impl eframe::App for DigitCaptureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let screen = ctx.screen_rect();
        self.fit_canvas(screen);
        self.handle_pointer(ctx);
        self.poll_capture();

        let texture_id = self.canvas_texture(ctx);
        let remaining = self.session.remaining_secs(Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let painter = ui.painter();

                painter.image(
                    texture_id,
                    screen,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );

                painter.text(
                    egui::pos2(screen.center().x, gui::TEXT_BASELINE_Y),
                    egui::Align2::CENTER_CENTER,
                    gui::INSTRUCTION_TEXT,
                    egui::FontId::proportional(gui::INSTRUCTION_FONT_SIZE),
                    egui::Color32::WHITE,
                );

                painter.text(
                    egui::pos2(screen.right() - gui::TIMER_RIGHT_INSET, gui::TEXT_BASELINE_Y),
                    egui::Align2::CENTER_CENTER,
                    format!("Time: {}s", remaining),
                    egui::FontId::proportional(gui::TIMER_FONT_SIZE),
                    egui::Color32::WHITE,
                );
            });

        ctx.request_repaint_after(Duration::from_millis(timing::POLL_INTERVAL_MS));
    }
}

pub fn run_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(gui::WINDOW_TITLE)
            .with_fullscreen(true),
        ..Default::default()
    };

    eframe::run_native(
        gui::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DigitCaptureApp::new(cc)))),
    )
}
