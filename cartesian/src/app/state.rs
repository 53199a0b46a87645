use std::{fmt::Display, path::PathBuf};

use app_core::event::EventQueue;

use super::{
    components::{ControlPanel, CustomPoints, MarkerStyle, PanelView, Plotter, PointSetStore},
    config::Config,
    i18n::{Language, TextId},
};

/// Everything the events operate on. Owned by the GUI and mutated only
/// from the GUI thread.
pub struct AppState {
    pub store: PointSetStore,
    pub custom_points: CustomPoints,
    pub rotated: bool,
    pub language: Language,
    pub panel: ControlPanel,
    pub plotter: Plotter,
    /// One-line message shown in the status bar.
    pub notice: Option<String>,
    /// Set while a file dialog is waiting for the user.
    pub dialog_open: bool,
    pub initial_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut state = Self {
            store: PointSetStore::default(),
            custom_points: CustomPoints::default(),
            rotated: false,
            language: config.language,
            panel: ControlPanel::default(),
            plotter: Plotter::new(MarkerStyle {
                radius: config.marker_radius,
                custom_radius: config.custom_marker_radius,
            }),
            notice: None,
            dialog_open: false,
            initial_dir: config.initial_dir.clone(),
        };
        state.render();
        state
    }

    /// Applies all queued events. Returns true if any of them finished, in
    /// which case the plot and the panel have been brought up to date.
    pub fn handle(&mut self, event_queue: &mut EventQueue<AppState>) -> bool {
        if event_queue.is_empty() {
            return false;
        }
        let finished = event_queue.run(self);
        if finished > 0 {
            self.refresh();
        }
        finished > 0
    }

    pub fn render(&mut self) {
        self.plotter.render(
            &self.store,
            &self.custom_points,
            self.rotated,
            self.language,
        );
    }

    /// Full render pass followed by a refresh of the panel readouts.
    pub fn refresh(&mut self) {
        self.render();
        let view = self.panel_view();
        self.panel.refresh(&view);
    }

    pub fn panel_view(&self) -> PanelView {
        PanelView {
            language: self.language,
            file_list: self.store.file_list_text(self.language),
        }
    }

    /// Shows a localized notice for rejected user input. State is left as
    /// it was.
    pub fn report(&mut self, id: TextId, detail: impl Display) {
        let message = format!("{}: {}", self.language.t(id), detail);
        log::warn!("{message}");
        self.notice = Some(message);
    }

    /// Loads a batch of files. Failures are reported one by one and do not
    /// stop the remaining files from loading.
    pub fn load_files(&mut self, paths: &[PathBuf]) {
        for (path, result) in paths.iter().zip(self.store.load(paths)) {
            match result {
                Ok(n_points) => {
                    let name = path
                        .file_name()
                        .map(|name| name.to_string_lossy())
                        .unwrap_or_default();
                    let message = self.language.loaded_message(n_points, &name);
                    log::info!("{message}");
                    self.notice = Some(message);
                }
                Err(err) => {
                    let message = format!("{}: {}", self.language.t(TextId::LoadFailed), err);
                    log::error!("{message}");
                    self.notice = Some(message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use app_core::event::{AppEvent, EventState};

    use crate::app::{components::RenderMode, events::ClearAll};

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct Fail;

    impl AppEvent for Fail {
        type App = AppState;

        fn apply(&mut self, _app: &mut Self::App) -> Result<EventState, String> {
            Err("failed on purpose".into())
        }
    }

    struct Wait;

    impl AppEvent for Wait {
        type App = AppState;

        fn apply(&mut self, _app: &mut Self::App) -> Result<EventState, String> {
            Ok(EventState::Busy)
        }
    }

    #[test]
    fn test_new_state_is_empty() {
        init();
        let config = Config {
            language: Language::Chinese,
            ..Default::default()
        };
        let app = AppState::new(&config);
        assert!(app.store.is_empty());
        assert!(app.custom_points.is_empty());
        assert!(!app.rotated);
        assert!(!app.panel.is_expanded());
        assert_eq!(app.plotter.scene().title, "笛卡尔坐标系（支持旋转）");
        assert_eq!(app.panel_view().file_list, "无已加载文件");
    }

    #[test]
    fn test_handle_refreshes_after_finished_events() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "1,1\n2,2\n").unwrap();

        let mut app = AppState::new(&Config::default());
        let mut queue = EventQueue::new();
        assert!(!app.handle(&mut queue));

        app.load_files(&[path]);
        app.store.set_mode(1, RenderMode::Line).unwrap();
        // Scene is stale until the next refresh.
        assert!(app.plotter.scene().series.is_empty());

        queue.queue_event(Box::new(Fail));
        assert!(app.handle(&mut queue));
        assert_eq!(app.plotter.scene().series.len(), 1);
        assert_eq!(app.plotter.scene().series[0].label, "a.txt (Line)");

        queue.queue_event(Box::new(Wait));
        assert!(!app.handle(&mut queue));
        assert_eq!(queue.len(), 1);

        queue.discard_events();
        queue.queue_event(Box::new(ClearAll));
        assert!(app.handle(&mut queue));
        assert!(app.plotter.scene().series.is_empty());
        assert_eq!(app.plotter.scene().bounds, None);
    }

    #[test]
    fn test_load_files_reports_each_file() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, "\n  \n").unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "1,2\n").unwrap();

        let mut app = AppState::new(&Config::default());
        app.load_files(&[good, empty]);
        assert_eq!(app.store.len(), 1);
        assert!(app
            .notice
            .as_deref()
            .is_some_and(|notice| notice.starts_with("Error loading file")));

        app.load_files(&[dir.path().join("missing.txt")]);
        assert_eq!(app.store.len(), 1);

        app.load_files(&[]);
        assert_eq!(app.store.len(), 1);
    }
}
