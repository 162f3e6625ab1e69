pub mod canvas;
pub mod tab_bar;

use crate::draw::input::DrawingSurface;
use crate::draw::model::Color;
use crate::draw::render::{from_color32, to_color32};
use crate::draw::tool::{THICKNESS_MAX, THICKNESS_MIN};
use crate::navigation::NavigationState;
use crate::plus_menu::{ActionOutcome, PlaceholderActions, PlusAction, PlusMenuHandler};
use crate::settings::{sanitize_toast_duration, Settings};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

pub const APP_TITLE: &str = "Draw Together";
const BANNER: &str = "D R A W   T O G E T H E R";
const WELCOME: &str = "Welcome to Draw Together! A collective creative art map for everyone to collaborate and create together..";

pub struct DrawTogetherApp {
    pub surface: DrawingSurface,
    pub nav: NavigationState,
    quick_colors: Vec<Color>,
    actions: Box<dyn PlusMenuHandler>,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f32,
}

impl DrawTogetherApp {
    pub fn new(settings: &Settings) -> Self {
        Self::with_actions(settings, Box::new(PlaceholderActions))
    }

    pub fn with_actions(settings: &Settings, actions: Box<dyn PlusMenuHandler>) -> Self {
        let surface = DrawingSurface::new(settings.tool_settings(), settings.capture_mode)
            .with_thickness_clamp(settings.clamp_thickness);
        tracing::debug!(capture_mode = ?surface.capture_mode(), "drawing surface ready");
        Self {
            surface,
            nav: NavigationState::default(),
            quick_colors: settings.quick_colors.clone(),
            actions,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: sanitize_toast_duration(settings.toast_duration),
        }
    }

    /// Runs the popup action and returns the message shown to the user, if any.
    pub fn dispatch_action(&mut self, action: PlusAction) -> Option<String> {
        match self.actions.handle(action) {
            ActionOutcome::Done => None,
            ActionOutcome::Unavailable { message } => {
                if self.enable_toasts {
                    self.toasts.add(Toast {
                        text: message.clone().into(),
                        kind: ToastKind::Info,
                        options: ToastOptions::default()
                            .duration_in_seconds(self.toast_duration as f64),
                    });
                }
                Some(message)
            }
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(BANNER.to_uppercase())
                    .monospace()
                    .size(24.0)
                    .strong()
                    .color(egui::Color32::BLACK),
            );
            ui.label(egui::RichText::new(WELCOME).monospace());
        });
    }

    fn tool_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut thickness = self.surface.tools().thickness;
            let slider = egui::Slider::new(&mut thickness, THICKNESS_MIN..=THICKNESS_MAX)
                .text("Thickness");
            if ui.add_sized([200.0, 20.0], slider).changed() {
                self.surface.set_thickness(thickness);
            }
            ui.separator();

            let mut color = to_color32(self.surface.tools().color);
            if ui.color_edit_button_srgba(&mut color).changed() {
                self.surface.set_color(from_color32(color));
            }
            for color in self.quick_colors.clone() {
                let swatch = egui::Button::new("")
                    .fill(to_color32(color))
                    .min_size(egui::vec2(18.0, 18.0));
                if ui.add(swatch).clicked() {
                    self.surface.set_color(color);
                }
            }
            ui.separator();
            if ui.button("Clear").clicked() {
                self.surface.clear();
            }
        });
    }
}

impl eframe::App for DrawTogetherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| self.header(ui));

        let mut picked = None;
        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            picked = tab_bar::popup_menu(ui, &self.nav);
            tab_bar::show(ui, &mut self.nav);
        });
        if let Some(action) = picked {
            self.dispatch_action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.nav.current_page().label());
            });
            self.tool_row(ui);
            canvas::show(ui, &mut self.surface);
        });

        if self.enable_toasts {
            self.toasts.show(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Page;

    struct Wired;

    impl PlusMenuHandler for Wired {
        fn handle(&mut self, _action: PlusAction) -> ActionOutcome {
            ActionOutcome::Done
        }
    }

    #[test]
    fn app_seeds_surface_from_settings() {
        let settings = Settings {
            default_color: Color::BLUE,
            default_thickness: 6.0,
            ..Settings::default()
        };
        let app = DrawTogetherApp::new(&settings);
        assert_eq!(app.surface.tools().color, Color::BLUE);
        assert_eq!(app.surface.tools().thickness, 6.0);
        assert_eq!(app.nav.current_page(), Page::Home);
    }

    #[test]
    fn placeholder_action_returns_message_without_touching_navigation() {
        let settings = Settings {
            enable_toasts: false,
            ..Settings::default()
        };
        let mut app = DrawTogetherApp::new(&settings);
        app.nav.toggle_menu();
        let message = app.dispatch_action(PlusAction::Record);
        assert_eq!(message.as_deref(), Some("Record is not available yet"));
        assert!(app.nav.menu_visible());
        assert_eq!(app.nav.current_page(), Page::Home);
    }

    #[test]
    fn negative_toast_duration_does_not_break_placeholder_actions() {
        let settings: Settings = serde_json::from_str(r#"{"toast_duration": -1.0}"#).unwrap();
        let mut app = DrawTogetherApp::new(&settings);
        for action in PlusAction::ALL {
            assert!(app.dispatch_action(action).is_some());
        }
        assert_eq!(app.toast_duration, 3.0);
    }

    #[test]
    fn wired_handler_shows_no_message() {
        let mut app = DrawTogetherApp::with_actions(&Settings::default(), Box::new(Wired));
        assert_eq!(app.dispatch_action(PlusAction::OpenFolder), None);
    }
}
