use std::time::Duration;

use client_core::{CatalogEvent, CatalogState, StoreCommand, TransportError};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::controller::{events::UiEvent, orchestration::dispatch_store_commands};

pub struct CatalogApp {
    state: CatalogState,
    cmd_tx: Sender<StoreCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl CatalogApp {
    /// Creates the screen and issues the initial catalog load.
    pub fn new(cmd_tx: Sender<StoreCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            state: CatalogState::new(),
            cmd_tx,
            ui_rx,
            status: "Loading catalog...".to_string(),
        };
        app.send(CatalogEvent::Mounted);
        app
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn send(&mut self, event: CatalogEvent) {
        let commands = self.state.apply(event);
        let undelivered = dispatch_store_commands(&self.cmd_tx, commands, &mut self.status);
        for command in undelivered {
            // A failure completion never yields further commands.
            self.state.apply(CatalogEvent::CallFailed {
                request: command.request(),
                error: TransportError::new(command.op(), "backend queue unavailable"),
            });
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(status) = event.status_text() {
                self.status = status;
            }
            if let UiEvent::Catalog(event) = event {
                if let CatalogEvent::ListLoaded { records, .. } = &event {
                    self.status = format!("{} book(s) in catalog", records.len());
                }
                self.send(event);
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let form = self.state.form();
        let mut title = form.title.clone();
        let mut author = form.author.clone();
        let submit_label = form.submit_label();
        let shows_cancel = form.shows_cancel();
        let submit_enabled = !self.state.submit_in_flight();

        ui.heading(form.heading());
        let mut submitted = false;
        egui::Grid::new("book_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Title:");
                let response = ui.text_edit_singleline(&mut title);
                submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();

                ui.label("Author:");
                let response = ui.text_edit_singleline(&mut author);
                submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();
            });

        let mut cancelled = false;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(submit_enabled, egui::Button::new(submit_label))
                .clicked()
            {
                submitted = true;
            }
            if shows_cancel && ui.button("Cancel").clicked() {
                cancelled = true;
            }
        });

        if title != self.state.form().title {
            self.send(CatalogEvent::TitleEdited(title));
        }
        if author != self.state.form().author {
            self.send(CatalogEvent::AuthorEdited(author));
        }
        if submitted && submit_enabled {
            self.send(CatalogEvent::Submitted);
        }
        if cancelled {
            self.send(CatalogEvent::Cancelled);
        }
    }

    fn show_table(&mut self, ui: &mut egui::Ui) {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.heading("Book table");
            if ui.button("Reload").clicked() {
                action = Some(CatalogEvent::Mounted);
            }
        });

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("book_table")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("ID");
                    ui.strong("Title");
                    ui.strong("Author");
                    ui.strong("Actions");
                    ui.end_row();

                    for book in self.state.books() {
                        ui.label(book.id.to_string());
                        ui.label(book.title.as_str());
                        ui.label(book.author.as_str());
                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                action = Some(CatalogEvent::BeginEdit(book.clone()));
                            }
                            if ui.button("Delete").clicked() {
                                action = Some(CatalogEvent::DeletePressed(book.id.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        if let Some(event) = action {
            self.send(event);
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_form(ui);
            ui.separator();
            self.show_table(ui);
        });

        // Completions arrive from the worker thread without waking egui.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
