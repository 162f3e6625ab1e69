use crate::navigation::{NavigationState, Page};
use crate::plus_menu::PlusAction;
use eframe::egui::{self, Color32, RichText};

const TAB_HIGHLIGHT: Color32 = Color32::from_rgb(178, 34, 34);
const PLUS_COLOR: Color32 = Color32::from_rgb(139, 0, 0);

fn tab_button(ui: &mut egui::Ui, nav: &mut NavigationState, page: Page) {
    let color = if nav.current_page() == page {
        TAB_HIGHLIGHT
    } else {
        Color32::GRAY
    };
    let text = RichText::new(format!("{}\n{}", page.icon(), page.label())).color(color);
    if ui.add(egui::Button::new(text).frame(false)).clicked() {
        nav.select_page(page);
    }
}

fn plus_button(ui: &mut egui::Ui, nav: &mut NavigationState) {
    // Open state shows the glyph turned a quarter, as a cross.
    let glyph = if nav.menu_visible() { "✖" } else { "✚" };
    let button = egui::Button::new(RichText::new(glyph).size(28.0).color(PLUS_COLOR))
        .rounding(24.0)
        .min_size(egui::vec2(48.0, 48.0));
    if ui.add(button).on_hover_text("More").clicked() {
        nav.toggle_menu();
    }
}

/// Record and folder buttons shown above the tab bar while the menu is open.
pub fn popup_menu(ui: &mut egui::Ui, nav: &NavigationState) -> Option<PlusAction> {
    if !nav.menu_visible() {
        return None;
    }
    let mut picked = None;
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            for action in PlusAction::ALL {
                let text =
                    RichText::new(format!("{} {}", action.icon(), action.label())).color(Color32::WHITE);
                if ui
                    .add(egui::Button::new(text).fill(PLUS_COLOR).rounding(16.0))
                    .clicked()
                {
                    picked = Some(action);
                }
                ui.add_space(50.0);
            }
        });
    });
    picked
}

/// Home, Liked, plus, Records, Account.
pub fn show(ui: &mut egui::Ui, nav: &mut NavigationState) {
    ui.columns(5, |columns| {
        columns[0].vertical_centered(|ui| tab_button(ui, nav, Page::Home));
        columns[1].vertical_centered(|ui| tab_button(ui, nav, Page::Liked));
        columns[2].vertical_centered(|ui| plus_button(ui, nav));
        columns[3].vertical_centered(|ui| tab_button(ui, nav, Page::Records));
        columns[4].vertical_centered(|ui| tab_button(ui, nav, Page::Account));
    });
}
