pub mod app;
pub mod scrubber_widget;
