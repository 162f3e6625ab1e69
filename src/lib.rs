pub mod draw;
pub mod gui;
pub mod logging;
pub mod navigation;
pub mod plus_menu;
pub mod settings;
