use crate::types::playback_state::PlaybackState;

/// Layout of the track the handle slides on, in pixels.
///
/// Passed explicitly into the drag handler and the view-model derivation so
/// the position math never depends on captured widget layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubberGeometry {
    pub track_width: f64,
    pub handle_diameter: f64,
}

impl ScrubberGeometry {
    /// Usable travel of the handle's leading edge. Zero when the track is
    /// narrower than the handle itself.
    pub fn max_offset(&self) -> f64 {
        (self.track_width - self.handle_diameter).max(0.0)
    }
}

/// Everything the widget needs to paint one frame, derived from
/// `PlaybackState` by a pure function. State mutation and rendering never
/// touch each other directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubberViewModel {
    /// Width of the filled-in part of the track.
    pub fill_width: f64,
    /// Offset of the handle's leading edge from the track's left edge.
    pub handle_offset: f64,
    pub elapsed_label: String,
    pub total_label: String,
    pub is_playing: bool,
}

pub fn derive_view_model(state: &PlaybackState, geometry: &ScrubberGeometry) -> ScrubberViewModel {
    let handle_offset = state.fraction_complete() * geometry.max_offset();
    ScrubberViewModel {
        fill_width: handle_offset,
        handle_offset,
        elapsed_label: format_time(state.current_second()),
        total_label: format_time(state.total_seconds()),
        is_playing: state.is_playing(),
    }
}

/// Formats seconds as zero-padded `MM:SS`, truncating fractional seconds.
/// There is no hour component: durations of an hour or more show a raw
/// minute count (e.g. `75:00`), which is a known limitation.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds - minutes as f64 * 60.0) as u64;
    format!("{:02}:{:02}", minutes, secs)
}
