pub mod app;
pub mod event;
pub mod input;
pub mod roll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use roll::Odometer;
pub use theme::Theme;
