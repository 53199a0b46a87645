//! The collapsible control panel.
//!
//! While expanded the panel owns one instance of every control, built from
//! the current app state. Collapsing disposes all of them, expanding again
//! builds them from scratch.

mod ui;

use std::{cell::RefCell, rc::Rc};

use app_core::{
    event::EventQueue,
    frontend::{Dispose, WidgetRegistry},
};

use crate::app::{
    components::RenderMode,
    i18n::{Language, TextId, LANGUAGE_SWITCH_LABEL},
    AppState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    FileList,
    LoadFile,
    AddPoint,
    FileIndex,
    RemoveSelected,
    DisplayMode,
    Rotate,
    ClearAll,
    SwitchLanguage,
}

/// A widget living in the control panel.
pub trait Control: Dispose {
    fn kind(&self) -> ControlKind;

    fn show(&mut self, ui: &mut egui::Ui, event_queue: &mut EventQueue<AppState>);

    /// Called after every state change while the panel is expanded.
    fn refresh(&mut self, _view: &PanelView) {}
}

/// The part of the app state the panel is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub language: Language,
    pub file_list: String,
}

/// Text of the file number input, shared by the controls acting on it.
type SharedText = Rc<RefCell<String>>;

pub struct ControlPanel {
    state: PanelState,
    controls: WidgetRegistry<dyn Control>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            state: PanelState::Collapsed,
            controls: WidgetRegistry::new(),
        }
    }
}

impl ControlPanel {
    pub fn is_expanded(&self) -> bool {
        self.state == PanelState::Expanded
    }

    pub fn toggle(&mut self, view: &PanelView) -> PanelState {
        match self.state {
            PanelState::Collapsed => {
                self.state = PanelState::Expanded;
                self.build(view);
            }
            PanelState::Expanded => {
                self.state = PanelState::Collapsed;
                self.teardown();
            }
        }
        log::debug!("control panel {:?}", self.state);
        self.state
    }

    /// Rebuilds all controls, e.g. to relabel them after a language switch.
    pub fn rebuild(&mut self, view: &PanelView) {
        if self.is_expanded() {
            self.teardown();
            self.build(view);
        }
    }

    pub fn refresh(&mut self, view: &PanelView) {
        for control in self.controls.iter_mut() {
            control.refresh(view);
        }
    }

    pub fn kinds(&self) -> Vec<ControlKind> {
        self.controls.iter().map(|c| c.kind()).collect()
    }

    /// Label of the button that expands/collapses the panel.
    pub fn toggle_label(&self, language: Language) -> &'static str {
        match self.state {
            PanelState::Expanded => language.t(TextId::PanelExpand),
            PanelState::Collapsed => language.t(TextId::PanelCollapse),
        }
    }

    fn teardown(&mut self) {
        log::trace!("disposing panel controls {:?}", self.kinds());
        self.controls.teardown();
    }

    fn build(&mut self, view: &PanelView) {
        let t = |id| view.language.t(id);
        let selected_file = SharedText::default();

        self.controls.register(Box::new(FileList {
            title: t(TextId::FileList),
            text: view.file_list.clone(),
        }));
        self.controls.register(Box::new(Button {
            kind: ControlKind::LoadFile,
            label: t(TextId::LoadFile),
        }));
        self.controls.register(Box::new(AddPointInput {
            label: t(TextId::AddPoint),
            submit_label: t(TextId::Add),
            buffer: String::new(),
        }));
        self.controls.register(Box::new(FileIndexInput {
            label: t(TextId::FileNo),
            text: selected_file.clone(),
        }));
        self.controls.register(Box::new(RemoveSelected {
            label: t(TextId::ClearSelected),
            selected_file: selected_file.clone(),
        }));
        self.controls.register(Box::new(ModeSelector {
            title: t(TextId::DisplayMode),
            options: RenderMode::ALL.map(|mode| (mode, t(mode.option_label()))),
            current: RenderMode::default(),
            selected_file,
        }));
        self.controls.register(Box::new(Button {
            kind: ControlKind::Rotate,
            label: t(TextId::Rotate),
        }));
        self.controls.register(Box::new(Button {
            kind: ControlKind::ClearAll,
            label: t(TextId::ClearAll),
        }));
        self.controls.register(Box::new(Button {
            kind: ControlKind::SwitchLanguage,
            label: LANGUAGE_SWITCH_LABEL,
        }));
    }
}

struct FileList {
    title: &'static str,
    text: String,
}

/// Plain buttons, the kind decides which event a click queues.
struct Button {
    kind: ControlKind,
    label: &'static str,
}

struct AddPointInput {
    label: &'static str,
    submit_label: &'static str,
    buffer: String,
}

struct FileIndexInput {
    label: &'static str,
    text: SharedText,
}

struct RemoveSelected {
    label: &'static str,
    selected_file: SharedText,
}

struct ModeSelector {
    title: &'static str,
    options: [(RenderMode, &'static str); 3],
    current: RenderMode,
    selected_file: SharedText,
}
