//! Small painting helpers shared by the panels.

use bevy_egui::egui;

use crate::constants::LIST_ROW_HEIGHT;
use crate::theme::ColorScheme;

/// Font size of list rows
const ROW_FONT_SIZE: f32 = 13.0;

/// Full-width heading strip ("Hierarchy", "Assets", "Inspector").
pub fn section_heading(ui: &mut egui::Ui, title: &str, colors: &ColorScheme) {
    egui::Frame::new()
        .fill(colors.panel_label_bg)
        .inner_margin(egui::Margin::symmetric(4, 2))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new(title).color(colors.label_fg));
        });
}

/// Allocate one list row and paint its background and text.
pub fn list_row(
    ui: &mut egui::Ui,
    text: &str,
    fill: egui::Color32,
    colors: &ColorScheme,
    sense: egui::Sense,
) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, LIST_ROW_HEIGHT), sense);
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, fill);
        painter.text(
            rect.left_center() + egui::vec2(4.0, 0.0),
            egui::Align2::LEFT_CENTER,
            text,
            egui::FontId::proportional(ROW_FONT_SIZE),
            colors.list_fg,
        );
    }
    response
}

/// Paint a floating label with a solid border at `min` on the tooltip layer.
pub fn paint_ghost_label(ctx: &egui::Context, min: egui::Pos2, text: &str, colors: &ColorScheme) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("drag_ghost"),
    ));
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(ROW_FONT_SIZE),
        colors.label_fg,
    );
    let rect = egui::Rect::from_min_size(min, galley.size() + egui::vec2(8.0, 4.0));
    painter.rect_filled(rect, 0.0, colors.drag_ghost_bg);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, colors.label_fg),
        egui::StrokeKind::Inside,
    );
    painter.galley(rect.min + egui::vec2(4.0, 2.0), galley, colors.label_fg);
}
