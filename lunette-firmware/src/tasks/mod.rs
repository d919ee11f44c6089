//! Embassy async tasks

pub mod encoder;
pub mod ui;

pub use encoder::encoder_task;
pub use ui::ui_task;
