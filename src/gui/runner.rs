//! GUI runner - launches the codeshot window

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use egui::{FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

use super::app::CodeshotApp;
use super::settings_panel::SettingsPanel;
use super::store::SettingsStore;
use crate::config::Config;
use crate::format::CommandFormatter;

/// Run the main GUI application with the config stored at `config_path`
pub fn run_gui(config_path: &Path) -> Result<()> {
    let config = match Config::load_or_init(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(
                "[codeshot] Failed to load config ({}): {:#}. Falling back to defaults.",
                config_path.display(),
                e
            );
            Config::with_defaults()
        }
    };

    let formatter = CommandFormatter::from_settings(&config.formatter);
    info!(
        "[codeshot] Starting GUI (formatter: {}, config: {})",
        formatter.command(),
        config_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.gui.window_width, config.gui.window_height])
            .with_min_inner_size([480.0, 360.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let store = SettingsStore::new(config, Some(config_path.to_path_buf()));

    eframe::run_native(
        "codeshot",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            let panel = SettingsPanel::new(Arc::new(formatter))
                .with_repaint_context(cc.egui_ctx.clone());
            Ok(Box::new(CodeshotApp::new(store, panel)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Add system fallback fonts so the gear icon and other symbols render
fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    #[cfg(target_os = "macos")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
        ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
    ];

    #[cfg(target_os = "windows")]
    let font_fallbacks: &[(&str, &str)] = &[("symbols", "C:\\Windows\\Fonts\\seguisym.ttf")];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf"),
        ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    ];

    for (name, path) in font_fallbacks {
        if let Ok(font_data) = std::fs::read(path) {
            fonts
                .font_data
                .insert((*name).to_owned(), FontData::from_owned(font_data).into());

            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                if let Some(list) = fonts.families.get_mut(&family) {
                    list.push((*name).to_owned());
                }
            }

            info!("[codeshot] Loaded fallback font '{}' from: {}", name, path);
        }
    }

    ctx.set_fonts(fonts);
}
