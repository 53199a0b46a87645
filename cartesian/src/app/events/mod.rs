use std::{path::PathBuf, thread::JoinHandle};

use derive_new::new;

use app_core::event::{AppEvent, EventState};

use crate::{
    app::{components::RenderMode, i18n::TextId, AppState},
    data::parse_index,
};

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Opens the file dialog on a helper thread and loads whatever was picked
/// once the thread is done.
#[derive(new)]
pub struct FilesRequested {
    #[new(default)]
    thread_handle: Option<JoinHandle<Option<Vec<PathBuf>>>>,
}

#[derive(new)]
pub struct LoadFiles {
    paths: Vec<PathBuf>,
}

/// Removes the file with the number typed into the file number input.
#[derive(new)]
pub struct RemoveSource {
    index_text: String,
}

#[derive(new)]
pub struct SetMode {
    index_text: String,
    mode: RenderMode,
}

#[derive(new)]
pub struct AddCustomPoint {
    text: String,
}

pub struct ClearAll;

pub struct Rotate;

pub struct SwitchLanguage;

pub struct TogglePanel;

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for FilesRequested {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let Some(handle) = self.thread_handle.as_ref() else {
            if app.dialog_open {
                log::debug!("file dialog already open, ignoring request");
                return Ok(EventState::Finished);
            }
            app.dialog_open = true;
            self.thread_handle = Some(spawn_dialog(app));
            return Ok(EventState::Busy);
        };
        if !handle.is_finished() {
            return Ok(EventState::Busy);
        }

        app.dialog_open = false;
        let Some(handle) = self.thread_handle.take() else {
            return Ok(EventState::Finished);
        };
        match handle.join() {
            Ok(Some(paths)) => app.load_files(&paths),
            Ok(None) => log::debug!("file dialog cancelled"),
            Err(err) => return Err(format!("file dialog thread panicked: {err:?}")),
        }
        Ok(EventState::Finished)
    }
}

fn spawn_dialog(app: &AppState) -> JoinHandle<Option<Vec<PathBuf>>> {
    let language = app.language;
    let initial_dir = app.initial_dir.clone();
    log::debug!("open dialog to select point files");
    std::thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .set_title(language.t(TextId::SelectFile))
            .add_filter(language.t(TextId::TextFiles), &["txt"])
            .add_filter(language.t(TextId::AllFiles), &["*"]);
        if let Some(dir) = initial_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_files()
    })
}

impl AppEvent for LoadFiles {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.load_files(&self.paths);
        Ok(EventState::Finished)
    }
}

impl AppEvent for RemoveSource {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(index) = selected_index(app, &self.index_text) {
            match app.store.remove(index) {
                Ok(source) => log::info!("removed {}", source.file_name()),
                Err(err) => app.report(TextId::InvalidIndex, err),
            }
        }
        Ok(EventState::Finished)
    }
}

impl AppEvent for SetMode {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(index) = selected_index(app, &self.index_text) {
            if let Err(err) = app.store.set_mode(index, self.mode) {
                app.report(TextId::InvalidIndex, err);
            }
        }
        Ok(EventState::Finished)
    }
}

/// Parses the file number input, reporting why it was rejected.
fn selected_index(app: &mut AppState, text: &str) -> Option<usize> {
    if text.trim().is_empty() {
        app.report(TextId::InputFileNo, "no file number given");
        return None;
    }
    parse_index(text)
        .inspect_err(|err| app.report(TextId::InvalidIndex, err))
        .ok()
}

impl AppEvent for AddCustomPoint {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        match app.custom_points.add_point(&self.text) {
            Ok(point) => log::debug!(
                "added custom point {point:?}, {} in total",
                app.custom_points.len()
            ),
            Err(err) => app.report(TextId::InputCoord, err),
        }
        Ok(EventState::Finished)
    }
}

impl AppEvent for ClearAll {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.store.clear_all();
        app.custom_points.clear();
        app.notice = None;
        log::debug!("cleared all files and custom points");
        Ok(EventState::Finished)
    }
}

impl AppEvent for Rotate {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.rotated = !app.rotated;
        log::debug!("rotated view: {}", app.rotated);
        Ok(EventState::Finished)
    }
}

impl AppEvent for SwitchLanguage {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        app.language = app.language.toggled();
        let view = app.panel_view();
        app.panel.rebuild(&view);
        log::debug!("switched language to {:?}", app.language);
        Ok(EventState::Finished)
    }
}

impl AppEvent for TogglePanel {
    type App = AppState;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let view = app.panel_view();
        app.panel.toggle(&view);
        Ok(EventState::Finished)
    }
}
