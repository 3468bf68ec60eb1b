pub mod args;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod logging;
pub mod profile_image;
pub mod store;
pub mod ui;
