use eframe::egui;
use label_sheet::{SheetContext, SheetOptions, export_filename_today};
use label_sheet_runtime::{SheetCommand, SheetUpdate, WorkerHandle, channel};
use std::path::PathBuf;

use crate::form::show_form;
use crate::logger::AppLogger;
use crate::preview::show_sheet;

pub struct LabelSheetApp {
    options: SheetOptions,
    context: SheetContext,
    status: String,
    show_guides: bool,
    show_log: bool,
    /// Export or print page in flight
    busy: bool,

    worker: WorkerHandle,
    logger: AppLogger,

    // Keeps the worker's runtime reachable for the app's lifetime
    _tokio_handle: tokio::runtime::Handle,
}

impl LabelSheetApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let context = SheetContext::default();
        let (worker, endpoints) = channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(endpoints, context.clone()));

        let today = chrono::Local::now().date_naive();

        Self {
            options: context.initial_options(today),
            context,
            status: String::new(),
            show_guides: false,
            show_log: false,
            busy: false,
            worker,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn default_file_name(&self, extension: &str) -> String {
        let name = export_filename_today(self.options.label.mfd_date());
        PathBuf::from(name)
            .with_extension(extension)
            .display()
            .to_string()
    }

    fn send(&mut self, command: SheetCommand, status: &str) {
        match self.worker.send(command) {
            Ok(()) => {
                self.busy = true;
                self.status = status.to_string();
            }
            Err(e) => self.status = format!("Error: {e}"),
        }
    }

    fn save_pdf(&mut self) {
        if let Err(e) = self.options.validate(&self.context) {
            self.status = format!("Error: {e}");
            return;
        }
        if let Some(output_path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(self.default_file_name("pdf"))
            .save_file()
        {
            let options = self.options.clone();
            self.send(
                SheetCommand::ExportPdf {
                    options,
                    output_path,
                },
                "Exporting PDF...",
            );
        }
    }

    /// Save the printable page; printing happens from the browser
    fn print(&mut self) {
        if let Some(output_path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(self.default_file_name("html"))
            .save_file()
        {
            let options = self.options.clone();
            self.send(
                SheetCommand::WritePrintPage {
                    options,
                    output_path,
                },
                "Writing print page...",
            );
        }
    }

    fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            self.send(SheetCommand::LoadConfig { path }, "Loading options...");
        }
    }

    fn save_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("e248.json")
            .save_file()
        {
            let options = self.options.clone();
            self.send(SheetCommand::SaveConfig { options, path }, "Saving options...");
        }
    }

    fn process_updates(&mut self) {
        while let Some(update) = self.worker.try_recv() {
            self.busy = false;
            match update {
                SheetUpdate::PdfSaved { path, label_count } => {
                    self.status = format!("Saved {} labels → {}", label_count, path.display());
                }
                SheetUpdate::PrintPageWritten { path } => {
                    self.status = format!(
                        "Print page saved → {} (open it in a browser to print)",
                        path.display()
                    );
                }
                SheetUpdate::ConfigLoaded { options } => {
                    self.options = options;
                    self.status = "Options loaded".to_string();
                }
                SheetUpdate::ConfigSaved { path } => {
                    self.status = format!("Options saved → {}", path.display());
                }
                SheetUpdate::Error { message } => {
                    log::warn!("{message}");
                    self.status = format!("Error: {message}");
                }
            }
        }
    }
}

impl eframe::App for LabelSheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_updates();

        // Ctrl/Cmd+Enter prints unless a text field has focus
        let print_shortcut = !ctx.wants_keyboard_input()
            && ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        if print_shortcut {
            self.print();
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🖨 Print").clicked() {
                    self.print();
                }
                if ui.button("💾 Save PDF").clicked() {
                    self.save_pdf();
                }
                ui.separator();
                if ui.button("Open options...").clicked() {
                    self.load_config();
                }
                if ui.button("Save options...").clicked() {
                    self.save_config();
                }
                ui.separator();
                ui.checkbox(&mut self.show_guides, "Cell guides");
                ui.checkbox(&mut self.show_log, "Log");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.busy {
                    ui.spinner();
                }
                if !self.status.is_empty() {
                    ui.label(&self.status);
                } else if let Some(message) = self.logger.latest_message() {
                    ui.weak(message);
                }
            });

            if self.show_log {
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(120.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.get_entries() {
                            ui.monospace(entry.display_line());
                        }
                    });
                if ui.small_button("Clear").clicked() {
                    self.logger.clear();
                }
            }
        });

        egui::SidePanel::left("form")
            .min_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    show_form(ui, &mut self.options);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let plan = self.context.plan(&self.options.label);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let transform = show_sheet(ui, &plan, &self.context, self.show_guides);
                ui.weak(format!(
                    "{} labels · scale {:.2} · {:.1} px/cm",
                    plan.non_empty().count(),
                    transform.scale,
                    transform.px_per_cm
                ));
            });
        });

        if self.busy {
            ctx.request_repaint(); // Keep polling for worker updates
        }
    }
}
