mod components;
pub mod config;
mod events;
mod i18n;
mod state;

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use app_core::event::EventQueue;
use config::Config;
use events::{FilesRequested, LoadFiles, Rotate, SwitchLanguage, TogglePanel};
use i18n::TextId;

pub use state::AppState;

/// Poll interval while an event (e.g. an open file dialog) is pending.
const BUSY_POLL: Duration = Duration::from_millis(100);
const FALLBACK_FONT: &str = "fallback";

pub struct EguiApp {
    state: AppState,
    event_queue: EventQueue<AppState>,
    shortcuts_modal_open: bool,
    request_redraw: Option<()>,
}

impl EguiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        if let Some(path) = &config.font_path {
            install_fallback_font(&cc.egui_ctx, path);
        }
        Self {
            state: AppState::new(&config),
            event_queue: EventQueue::new(),
            shortcuts_modal_open: false,
            request_redraw: None,
        }
    }

    fn update_state(&mut self) {
        if self.state.handle(&mut self.event_queue) {
            self.request_redraw();
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }
}

fn install_fallback_font(ctx: &egui::Context, path: &Path) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("could not load font {:?}: {}", path, err);
            return;
        }
    };
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FALLBACK_FONT.to_owned(),
        egui::FontData::from_owned(bytes).into(),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FALLBACK_FONT.to_owned());
    }
    ctx.set_fonts(fonts);
    log::debug!("installed fallback font {:?}", path);
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }

        self.update_state();
        if !self.event_queue.is_empty() {
            ctx.request_repaint_after(BUSY_POLL);
        }

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            if i.key_pressed(egui::Key::O) && i.modifiers.ctrl {
                self.event_queue
                    .queue_event(Box::new(FilesRequested::new()));
            }
            if i.key_pressed(egui::Key::F2) {
                self.event_queue.queue_event(Box::new(TogglePanel));
            }
            if i.key_pressed(egui::Key::F3) {
                self.event_queue.queue_event(Box::new(Rotate));
            }
            if i.key_pressed(egui::Key::F4) {
                self.event_queue.queue_event(Box::new(SwitchLanguage));
            }
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }

            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect();
            if !dropped.is_empty() {
                log::debug!("{} file(s) dropped onto the window", dropped.len());
                self.event_queue.queue_event(Box::new(LoadFiles::new(dropped)));
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.state.notice.as_deref().unwrap_or_default());
        });

        if self.state.panel.is_expanded() {
            egui::SidePanel::right("control_panel")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading(self.state.language.t(TextId::PanelTitle));
                    ui.separator();
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.state.panel.show(ui, &mut self.event_queue);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.state.plotter.show(ui);
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl EguiApp {
    fn menu(&mut self, ui: &mut egui::Ui) {
        let language = self.state.language;
        egui::menu::bar(ui, |ui| {
            egui::widgets::global_theme_preference_buttons(ui);
            ui.separator();
            if ui.button(language.t(TextId::Help)).clicked() {
                self.shortcuts_modal_open = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = self.state.panel.toggle_label(language);
                if ui.button(label).clicked() {
                    self.event_queue.queue_event(Box::new(TogglePanel));
                }
            });
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        let language = self.state.language;
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading(language.t(TextId::Shortcuts));
                    ui.separator();
                    for id in [
                        TextId::ShortcutHelp,
                        TextId::ShortcutLoad,
                        TextId::ShortcutPanel,
                        TextId::ShortcutRotate,
                        TextId::ShortcutLanguage,
                        TextId::ShortcutQuit,
                    ] {
                        ui.label(language.t(id));
                        ui.separator();
                    }
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
