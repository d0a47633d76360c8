mod odometer;
mod status_bar;

pub use odometer::OdometerView;
pub use status_bar::StatusBarWidget;
