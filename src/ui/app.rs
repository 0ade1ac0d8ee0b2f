use std::time::{Duration, Instant};

use eframe::egui;
use tracing::{debug, info};

use crate::types::playback_state::{PlaybackState, TickOutcome, TICK_INTERVAL};
use crate::types::tick::TickSchedule;
use crate::ui::scrubber_widget::{ScrubberEvent, ScrubberWidget};

/// Hosts the scrubber control: delivers due ticks, routes widget events into
/// the state handlers, and keeps the tick schedule's lifetime locked to the
/// playing phase.
pub struct ScrubberApp {
    state: PlaybackState,
    tick_schedule: Option<TickSchedule>,
}

impl ScrubberApp {
    pub fn new(state: PlaybackState) -> Self {
        Self {
            state,
            tick_schedule: None,
        }
    }

    fn deliver_due_ticks(&mut self, now: Instant) {
        let due = self
            .tick_schedule
            .as_mut()
            .map(|schedule| schedule.due_ticks(now))
            .unwrap_or(0);
        for _ in 0..due {
            match self.state.tick(TICK_INTERVAL) {
                TickOutcome::Advanced => {}
                TickOutcome::Finished => {
                    info!(total = self.state.total_seconds(), "playback finished");
                    self.tick_schedule = None;
                    break;
                }
                TickOutcome::Stopped => {
                    // Stale tick from a schedule that should already be gone.
                    debug!("suppressed tick while paused, cancelling schedule");
                    self.tick_schedule = None;
                    break;
                }
            }
        }
    }

    fn apply(&mut self, event: ScrubberEvent) {
        match event {
            ScrubberEvent::DragChanged {
                pointer_x,
                geometry,
            } => self.state.on_drag_changed(pointer_x, &geometry),
            ScrubberEvent::DragEnded => self.state.on_drag_ended(),
            ScrubberEvent::PlayPausePressed => self.state.toggle_play_pause(),
            ScrubberEvent::SkipBackPressed => self.state.skip_back(),
            ScrubberEvent::SkipForwardPressed => self.state.skip_forward(),
        }
    }

    /// Creates or drops the schedule so that exactly one exists while
    /// playing and none otherwise. Rapid play/pause toggling therefore can
    /// never stack duplicate schedules or leak a cancelled one.
    fn reconcile_schedule(&mut self) {
        match (self.tick_schedule.is_some(), self.state.is_playing()) {
            (false, true) => {
                debug!("tick schedule armed");
                self.tick_schedule = Some(TickSchedule::new(Duration::from_secs_f64(TICK_INTERVAL)));
            }
            (true, false) => {
                debug!("tick schedule cancelled");
                self.tick_schedule = None;
            }
            _ => {}
        }
    }
}

impl eframe::App for ScrubberApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.deliver_due_ticks(Instant::now());

        // Dark full-window backdrop with the control docked at the bottom
        // in a rounded translucent panel.
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let panel_rect = egui::Rect::from_min_max(
                    egui::pos2(ui.max_rect().left() + 16.0, ui.max_rect().bottom() - 116.0),
                    egui::pos2(ui.max_rect().right() - 16.0, ui.max_rect().bottom() - 16.0),
                );
                let mut panel_ui = ui.new_child(egui::UiBuilder::new().max_rect(panel_rect));
                egui::Frame::new()
                    .fill(egui::Color32::from_white_alpha(16))
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::same(16))
                    .show(&mut panel_ui, |ui| {
                        ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);
                        let events = ScrubberWidget::new(&self.state).show(ui);
                        for event in events {
                            self.apply(event);
                        }
                    });
            });

        self.reconcile_schedule();

        // While playing, wake up again exactly when the next tick is due;
        // otherwise stay idle until the next input event.
        if let Some(schedule) = &self.tick_schedule {
            ctx.request_repaint_after(schedule.time_to_next(Instant::now()));
        }
    }
}
