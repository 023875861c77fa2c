pub mod debug_panel;
pub mod error_banner;
pub mod field;
pub mod report;
pub mod status_bar;
