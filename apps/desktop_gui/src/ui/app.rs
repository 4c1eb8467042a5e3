use std::{collections::HashMap, fs, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::domain::{ArtifactKind, BellState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::ControllerState;

const MIN_SHOTS: u32 = 1;
const MAX_SHOTS_UI: u32 = 8192;

pub struct BellSimApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    server_url: String,
    selected_state: BellState,
    shots: u32,

    controller: ControllerState,

    // Lazily decoded per artifact; dropped whenever the result slot changes.
    textures: HashMap<ArtifactKind, TextureHandle>,
    textures_revision: u64,
}

impl BellSimApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: String,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url,
            selected_state: BellState::PhiPlus,
            shots: shared::protocol::DEFAULT_SHOTS,
            controller: ControllerState::new(),
            textures: HashMap::new(),
            textures_revision: 0,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.apply(event);
        }
        if self.textures_revision != self.controller.result_revision() {
            self.textures.clear();
            self.textures_revision = self.controller.result_revision();
        }
    }

    fn start_run(&mut self) {
        let request_id = self.controller.begin_run();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::RunSimulation {
                request_id,
                server_url: self.server_url.clone(),
                bell_state: self.selected_state,
                shots: self.shots,
            },
            &mut self.controller.status,
        );
    }

    fn texture_for(&mut self, ctx: &egui::Context, kind: ArtifactKind) -> Option<TextureHandle> {
        if let Some(texture) = self.textures.get(&kind) {
            return Some(texture.clone());
        }
        let bytes = self.controller.result()?.artifacts.bytes(kind);
        let decoded = match image::load_from_memory(bytes) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(artifact = kind.key(), "failed to decode artifact png: {err}");
                return None;
            }
        };
        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture(
            format!("artifact:{}:{}", kind.key(), self.textures_revision),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(kind, texture.clone());
        Some(texture)
    }

    fn download_all(&mut self) {
        let files = self.controller.download_files();
        if files.is_empty() {
            return;
        }
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };
        let mut written = 0usize;
        for (file_name, kind) in files {
            let path = dir.join(&file_name);
            let bytes = match self.controller.result() {
                Some(outcome) => outcome.artifacts.bytes(kind),
                None => continue,
            };
            match fs::write(&path, bytes) {
                Ok(()) => written += 1,
                Err(err) => {
                    self.controller.status = format!("Failed to save {file_name}: {err}");
                    return;
                }
            }
        }
        self.controller.status = format!("Saved {written} images to {}", dir.display());
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Bell-State Simulator");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Bell state");
            egui::ComboBox::from_id_salt("bell_state_picker")
                .selected_text(self.selected_state.label())
                .show_ui(ui, |ui| {
                    for &state in BellState::ALL.iter() {
                        ui.selectable_value(&mut self.selected_state, state, state.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Shots");
            ui.add(egui::DragValue::new(&mut self.shots).range(MIN_SHOTS..=MAX_SHOTS_UI));
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Run simulation").clicked() {
                self.start_run();
            }
            if self.controller.is_busy() {
                ui.spinner();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            ui.small("Status:");
            ui.small(egui::RichText::new(&self.controller.status).weak());
        });
        ui.small(egui::RichText::new(format!("Server: {}", self.server_url)).weak());
    }

    fn show_error_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.error_notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Simulation error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&message).color(egui::Color32::LIGHT_RED));
                ui.add_space(6.0);
                if ui.button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.controller.error_notice = None;
        }
    }

    fn show_result_window(&mut self, ctx: &egui::Context) {
        if self.controller.result().is_none() || !self.controller.modal_open {
            return;
        }

        let mut open = true;
        let mut switch_to = None;
        let mut download_requested = false;
        let selected = self.controller.selected_artifact;
        let texture = self.texture_for(ctx, selected);

        egui::Window::new("Simulation result")
            .open(&mut open)
            .resizable(true)
            .default_width(560.0)
            .show(ctx, |ui| {
                let Some(outcome) = self.controller.result() else {
                    return;
                };

                ui.label(egui::RichText::new(&outcome.bell_label).strong());
                ui.label(&outcome.description);
                ui.label(egui::RichText::new(&outcome.phase_info).weak());
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label("Statevector:");
                    ui.monospace(&outcome.statevector);
                });
                ui.small(format!("Shots: {}", outcome.shots));
                ui.separator();

                ui.horizontal(|ui| {
                    for &kind in ArtifactKind::ALL.iter() {
                        if ui
                            .selectable_label(selected == kind, kind.button_label())
                            .clicked()
                        {
                            switch_to = Some(kind);
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Download all").clicked() {
                            download_requested = true;
                        }
                    });
                });
                ui.add_space(6.0);

                match &texture {
                    Some(texture) => {
                        let available = ui.available_width();
                        let size = texture.size_vec2();
                        let scale = (available / size.x).min(1.0);
                        ui.image((texture.id(), size * scale));
                    }
                    None => {
                        ui.label("Image unavailable");
                    }
                }
            });

        if let Some(kind) = switch_to {
            self.controller.switch_view(kind);
        }
        if download_requested {
            self.download_all();
        }
        if !open {
            self.controller.dismiss_modal();
        }
    }
}

impl eframe::App for BellSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if self.controller.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_controls(ui);
        });

        self.show_result_window(ctx);
        self.show_error_notice(ctx);
    }
}
