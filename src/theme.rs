//! Color schemes for the editor UI.
//!
//! Every color the panels paint comes from a [`ColorScheme`]. The active one
//! lives in the [`ActiveTheme`] resource and is switched through the settings
//! dialog (see `config::SetColorSchemeRequest`).

use bevy::prelude::*;
use bevy_egui::egui;
use serde::{Deserialize, Serialize};

/// Named color roles applied by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Window clear color behind the panels
    pub background: egui::Color32,
    /// Side panel fill
    pub panel_bg: egui::Color32,
    /// Fill behind the "Hierarchy", "Assets" and "Inspector" headings
    pub panel_label_bg: egui::Color32,
    /// Fill of the list areas
    pub list_bg: egui::Color32,
    /// Text color of list rows
    pub list_fg: egui::Color32,
    /// Text color of labels and headings
    pub label_fg: egui::Color32,
    /// Fill of selected and drop-target rows
    pub select_bg: egui::Color32,
    /// Fill of the floating drag ghost label
    pub drag_ghost_bg: egui::Color32,
}

impl ColorScheme {
    pub const DARK: Self = Self {
        background: egui::Color32::from_rgb(0x1e, 0x1e, 0x1e),
        panel_bg: egui::Color32::from_rgb(0x2b, 0x2b, 0x2b),
        panel_label_bg: egui::Color32::from_rgb(0x11, 0x11, 0x11),
        list_bg: egui::Color32::from_rgb(0x33, 0x33, 0x33),
        list_fg: egui::Color32::WHITE,
        label_fg: egui::Color32::WHITE,
        select_bg: egui::Color32::from_rgb(0x55, 0x55, 0x55),
        drag_ghost_bg: egui::Color32::from_rgb(0x44, 0x44, 0x44),
    };

    pub const LIGHT: Self = Self {
        background: egui::Color32::from_rgb(0xf0, 0xf0, 0xf0),
        panel_bg: egui::Color32::from_rgb(0xe0, 0xe0, 0xe0),
        panel_label_bg: egui::Color32::from_rgb(0xcc, 0xcc, 0xcc),
        list_bg: egui::Color32::from_rgb(0xdd, 0xdd, 0xdd),
        list_fg: egui::Color32::BLACK,
        label_fg: egui::Color32::BLACK,
        select_bg: egui::Color32::from_rgb(0xbb, 0xbb, 0xbb),
        drag_ghost_bg: egui::Color32::from_rgb(0x99, 0x99, 0x99),
    };

    pub const MIDNIGHT: Self = Self {
        background: egui::Color32::from_rgb(0x0d, 0x1b, 0x2a),
        panel_bg: egui::Color32::from_rgb(0x1b, 0x26, 0x3b),
        panel_label_bg: egui::Color32::from_rgb(0x41, 0x5a, 0x77),
        list_bg: egui::Color32::from_rgb(0x1e, 0x29, 0x3b),
        list_fg: egui::Color32::from_rgb(0xe0, 0xe1, 0xdd),
        label_fg: egui::Color32::from_rgb(0xe0, 0xe1, 0xdd),
        select_bg: egui::Color32::from_rgb(0x3a, 0x50, 0x6b),
        drag_ghost_bg: egui::Color32::from_rgb(0x27, 0x37, 0x4d),
    };

    /// Build egui visuals matching this scheme.
    pub fn visuals(&self, dark_base: bool) -> egui::Visuals {
        let mut visuals = if dark_base {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.panel_bg;
        visuals.window_fill = self.panel_bg;
        visuals.extreme_bg_color = self.list_bg;
        visuals.faint_bg_color = self.list_bg;
        visuals.selection.bg_fill = self.select_bg;
        visuals.override_text_color = Some(self.label_fg);
        visuals
    }
}

/// Identifier of a built-in color scheme, as stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeName {
    #[default]
    Dark,
    Light,
    Midnight,
}

impl ColorSchemeName {
    pub fn all() -> [ColorSchemeName; 3] {
        [
            ColorSchemeName::Dark,
            ColorSchemeName::Light,
            ColorSchemeName::Midnight,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColorSchemeName::Dark => "Dark",
            ColorSchemeName::Light => "Light",
            ColorSchemeName::Midnight => "Midnight",
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        match self {
            ColorSchemeName::Dark => ColorScheme::DARK,
            ColorSchemeName::Light => ColorScheme::LIGHT,
            ColorSchemeName::Midnight => ColorScheme::MIDNIGHT,
        }
    }

    /// Whether egui's dark widget visuals suit this scheme.
    pub fn is_dark(&self) -> bool {
        !matches!(self, ColorSchemeName::Light)
    }
}

/// The color scheme currently applied to the UI.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTheme {
    pub name: ColorSchemeName,
    pub colors: ColorScheme,
}

impl ActiveTheme {
    pub fn new(name: ColorSchemeName) -> Self {
        Self {
            name,
            colors: name.scheme(),
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        self.colors.visuals(self.name.is_dark())
    }

    /// Window clear color for this theme.
    pub fn clear_color(&self) -> Color {
        egui_to_bevy(self.colors.background)
    }
}

impl Default for ActiveTheme {
    fn default() -> Self {
        Self::new(ColorSchemeName::default())
    }
}

/// Convert an egui Color32 to Bevy Color
pub fn egui_to_bevy(color: egui::Color32) -> Color {
    Color::srgba(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
        color.a() as f32 / 255.0,
    )
}
