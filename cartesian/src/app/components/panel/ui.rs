use app_core::{event::EventQueue, frontend::Dispose};

use crate::app::{
    events::{AddCustomPoint, ClearAll, FilesRequested, RemoveSource, Rotate, SetMode, SwitchLanguage},
    AppState,
};

use super::{
    AddPointInput, Button, Control, ControlKind, FileIndexInput, FileList, ModeSelector,
    PanelView, RemoveSelected,
};

const CONTROL_WIDTH: f32 = 180.0;

impl super::ControlPanel {
    pub fn show(&mut self, ui: &mut egui::Ui, event_queue: &mut EventQueue<AppState>) {
        for control in self.controls.iter_mut() {
            control.show(ui, event_queue);
            ui.add_space(6.0);
        }
    }
}

impl Control for FileList {
    fn kind(&self) -> ControlKind {
        ControlKind::FileList
    }

    fn show(&mut self, ui: &mut egui::Ui, _event_queue: &mut EventQueue<AppState>) {
        ui.label(egui::RichText::new(self.title).strong());
        egui::ScrollArea::vertical()
            .id_salt("file_list")
            .max_height(160.0)
            .show(ui, |ui| {
                for line in self.text.lines() {
                    ui.add(egui::Label::new(line).truncate());
                }
            });
    }

    fn refresh(&mut self, view: &PanelView) {
        view.file_list.clone_into(&mut self.text);
    }
}

impl Control for Button {
    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn show(&mut self, ui: &mut egui::Ui, event_queue: &mut EventQueue<AppState>) {
        let button = egui::Button::new(self.label).min_size(egui::vec2(CONTROL_WIDTH, 0.0));
        if !ui.add(button).clicked() {
            return;
        }
        match self.kind {
            ControlKind::LoadFile => event_queue.queue_event(Box::new(FilesRequested::new())),
            ControlKind::Rotate => event_queue.queue_event(Box::new(Rotate)),
            ControlKind::ClearAll => event_queue.queue_event(Box::new(ClearAll)),
            ControlKind::SwitchLanguage => event_queue.queue_event(Box::new(SwitchLanguage)),
            kind => log::warn!("button of kind {kind:?} has no action"),
        }
    }
}

impl Control for AddPointInput {
    fn kind(&self) -> ControlKind {
        ControlKind::AddPoint
    }

    fn show(&mut self, ui: &mut egui::Ui, event_queue: &mut EventQueue<AppState>) {
        let label = ui.label(self.label);
        ui.horizontal(|ui| {
            let input = ui
                .add(
                    egui::TextEdit::singleline(&mut self.buffer)
                        .hint_text("3.5,-2.1")
                        .desired_width(CONTROL_WIDTH - 50.0),
                )
                .labelled_by(label.id);
            let submitted =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.small_button(self.submit_label).clicked() {
                event_queue.queue_event(Box::new(AddCustomPoint::new(self.buffer.clone())));
            }
        });
    }
}

impl Control for FileIndexInput {
    fn kind(&self) -> ControlKind {
        ControlKind::FileIndex
    }

    fn show(&mut self, ui: &mut egui::Ui, _event_queue: &mut EventQueue<AppState>) {
        ui.horizontal(|ui| {
            let label = ui.label(self.label);
            let mut text = self.text.borrow_mut();
            ui.add(egui::TextEdit::singleline(&mut *text).desired_width(50.0))
                .labelled_by(label.id);
        });
    }
}

impl Control for RemoveSelected {
    fn kind(&self) -> ControlKind {
        ControlKind::RemoveSelected
    }

    fn show(&mut self, ui: &mut egui::Ui, event_queue: &mut EventQueue<AppState>) {
        let button = egui::Button::new(self.label).min_size(egui::vec2(CONTROL_WIDTH, 0.0));
        if ui.add(button).clicked() {
            let index_text = self.selected_file.borrow().clone();
            event_queue.queue_event(Box::new(RemoveSource::new(index_text)));
        }
    }
}

impl Control for ModeSelector {
    fn kind(&self) -> ControlKind {
        ControlKind::DisplayMode
    }

    fn show(&mut self, ui: &mut egui::Ui, event_queue: &mut EventQueue<AppState>) {
        ui.label(egui::RichText::new(self.title).strong());
        for (mode, label) in self.options {
            if ui.radio_value(&mut self.current, mode, label).clicked() {
                let index_text = self.selected_file.borrow().clone();
                event_queue.queue_event(Box::new(SetMode::new(index_text, mode)));
            }
        }
    }
}

// Disposing drops buffered input, a rebuilt panel starts out empty.

impl Dispose for FileList {
    fn dispose(&mut self) {
        log::trace!("dispose file list");
        self.text.clear();
    }
}

impl Dispose for Button {
    fn dispose(&mut self) {
        log::trace!("dispose {:?} button", self.kind);
    }
}

impl Dispose for AddPointInput {
    fn dispose(&mut self) {
        log::trace!("dispose add point input");
        self.buffer.clear();
    }
}

impl Dispose for FileIndexInput {
    fn dispose(&mut self) {
        log::trace!("dispose file number input");
        self.text.borrow_mut().clear();
    }
}

impl Dispose for RemoveSelected {
    fn dispose(&mut self) {
        log::trace!("dispose remove button");
    }
}

impl Dispose for ModeSelector {
    fn dispose(&mut self) {
        log::trace!("dispose display mode selector");
    }
}
