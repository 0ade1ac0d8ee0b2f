use eframe::egui::{self, StrokeKind};

use crate::types::playback_state::{PlaybackState, Phase, TICK_INTERVAL};
use crate::types::view_model::{derive_view_model, ScrubberGeometry};

pub const HANDLE_DIAMETER: f32 = 25.0;
const TRACK_HEIGHT: f32 = 4.0;
const CONTROL_HEIGHT: f32 = 50.0;

/// Raw inputs the widget saw this frame. The host feeds these into the
/// `PlaybackState` handlers; the widget itself never mutates state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubberEvent {
    /// Pointer moved while dragging the handle. `pointer_x` is relative to
    /// the track's left edge.
    DragChanged {
        pointer_x: f64,
        geometry: ScrubberGeometry,
    },
    DragEnded,
    PlayPausePressed,
    SkipBackPressed,
    SkipForwardPressed,
}

/// The scrubber/timer control: a draggable handle on a track plus a row of
/// transport buttons and two time labels. Renders purely from the derived
/// view model and reports user input as events.
pub struct ScrubberWidget<'a> {
    state: &'a PlaybackState,
}

impl<'a> ScrubberWidget<'a> {
    pub fn new(state: &'a PlaybackState) -> Self {
        Self { state }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> Vec<ScrubberEvent> {
        let mut events = Vec::new();

        let desired = egui::vec2(ui.available_width(), CONTROL_HEIGHT);
        let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());

        let geometry = ScrubberGeometry {
            track_width: rect.width() as f64,
            handle_diameter: HANDLE_DIAMETER as f64,
        };
        let vm = derive_view_model(self.state, &geometry);

        // --- Track, fill, and handle ---
        let track_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left(), rect.top() + HANDLE_DIAMETER / 2.0 - TRACK_HEIGHT / 2.0),
            egui::vec2(rect.width(), TRACK_HEIGHT),
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(track_rect, TRACK_HEIGHT / 2.0, egui::Color32::GRAY);

        // Interpolate the handle over one tick interval while playing, so
        // renders at tick boundaries read as continuous motion. Drags and
        // jumps land instantly.
        let anim_id = ui.id().with("handle_x");
        let anim_time = match self.state.phase() {
            Phase::Playing => TICK_INTERVAL as f32,
            _ => 0.0,
        };
        let handle_x =
            ui.ctx()
                .animate_value_with_time(anim_id, vm.handle_offset as f32, anim_time);

        let fill_rect = egui::Rect::from_min_size(
            track_rect.left_top(),
            egui::vec2(handle_x, TRACK_HEIGHT),
        );
        painter.rect_filled(fill_rect, TRACK_HEIGHT / 2.0, egui::Color32::from_rgb(0, 122, 255));

        let handle_center = egui::pos2(
            rect.left() + handle_x + HANDLE_DIAMETER / 2.0,
            track_rect.center().y,
        );
        // Soft shadow under the handle.
        painter.circle_filled(
            handle_center + egui::vec2(0.0, 1.0),
            HANDLE_DIAMETER / 2.0 + 1.5,
            egui::Color32::from_black_alpha(100),
        );
        painter.circle_filled(handle_center, HANDLE_DIAMETER / 2.0, egui::Color32::WHITE);

        // --- Handle drag ---
        let handle_rect = egui::Rect::from_center_size(
            handle_center,
            egui::vec2(HANDLE_DIAMETER, HANDLE_DIAMETER),
        );
        let handle_id = ui.id().with("handle");
        let response = ui.interact(handle_rect, handle_id, egui::Sense::click_and_drag());
        if response.drag_started() || response.dragged() {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(ScrubberEvent::DragChanged {
                    pointer_x: (pointer_pos.x - rect.left()) as f64,
                    geometry,
                });
            }
        }
        if response.drag_stopped() {
            events.push(ScrubberEvent::DragEnded);
        }
        if response.hovered() {
            ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::Grab);
        }

        // --- Tools row: elapsed | transport buttons | total ---
        let tools_rect = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.top() + HANDLE_DIAMETER + 4.0),
            rect.right_bottom(),
        );
        let mut tools_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(tools_rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
        );
        tools_ui.columns(3, |columns| {
            columns[0].with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.label(&vm.elapsed_label);
            });
            columns[1].with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏪").clicked() {
                            events.push(ScrubberEvent::SkipBackPressed);
                        }
                        if ui
                            .button(if vm.is_playing { "⏸" } else { "▶" })
                            .clicked()
                        {
                            events.push(ScrubberEvent::PlayPausePressed);
                        }
                        if ui.button("⏩").clicked() {
                            events.push(ScrubberEvent::SkipForwardPressed);
                        }
                    });
                },
            );
            columns[2].with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&vm.total_label);
            });
        });

        // Outline the handle when a drag is in flight.
        if self.state.phase() == Phase::Scrubbing {
            painter.rect_stroke(
                handle_rect,
                HANDLE_DIAMETER / 2.0,
                egui::Stroke::new(1.0, egui::Color32::from_white_alpha(80)),
                StrokeKind::Outside,
            );
        }

        events
    }
}
