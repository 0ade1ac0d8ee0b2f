pub mod playback_state;
pub mod tick;
pub mod view_model;
