//! Custom widget components

mod auth_form;
mod dashboard;
mod header;
mod image_preview;
mod language_select;
pub mod modal_overlay;
mod notice;
mod results;
mod status_bar;

pub use auth_form::{AuthForm, AuthKind};
pub use dashboard::Dashboard;
pub use header::MainHeader;
pub use image_preview::ImagePreviewWidget;
pub use language_select::LanguageSelect;
pub use notice::NoticeModal;
pub use results::ResultsView;
pub use status_bar::StatusBar;

/// Braille spinner frames, one per tick
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
