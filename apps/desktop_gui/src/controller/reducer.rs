//! Reducer for the result view: owns the single result slot and applies
//! worker events to it. Responses carry the generation they were issued
//! under; anything but the latest in-flight generation is dropped so an
//! overlapping run can never clobber newer state.

use client_core::SimulationOutcome;
use shared::domain::ArtifactKind;

use crate::controller::events::UiEvent;

pub struct ControllerState {
    next_request_id: u64,
    in_flight: Option<u64>,
    result: Option<SimulationOutcome>,
    /// Bumped whenever the result slot is replaced, so the view can drop
    /// textures built from the previous slot.
    result_revision: u64,
    pub selected_artifact: ArtifactKind,
    pub modal_open: bool,
    pub error_notice: Option<String>,
    pub status: String,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            next_request_id: 0,
            in_flight: None,
            result: None,
            result_revision: 0,
            selected_artifact: ArtifactKind::Circuit,
            modal_open: false,
            error_notice: None,
            status: "Backend worker starting...".to_string(),
        }
    }

    /// Starts a new generation. The busy indicator follows `is_busy`; the
    /// controls stay interactive, so overlapping runs are possible and the
    /// generation returned here decides which response wins.
    pub fn begin_run(&mut self) -> u64 {
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.status = "Running simulation...".to_string();
        self.next_request_id
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn result(&self) -> Option<&SimulationOutcome> {
        self.result.as_ref()
    }

    pub fn result_revision(&self) -> u64 {
        self.result_revision
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::WorkerReady => {
                self.status = "Ready".to_string();
            }
            UiEvent::WorkerStartupFailed(message) => {
                self.status = message.clone();
                self.error_notice = Some(message);
            }
            UiEvent::SimulationCompleted {
                request_id,
                outcome,
            } => {
                if self.in_flight != Some(request_id) {
                    tracing::debug!(request_id, "dropping stale simulation response");
                    return;
                }
                self.in_flight = None;
                self.result = Some(*outcome);
                self.result_revision += 1;
                self.modal_open = true;
                self.status = "Simulation complete".to_string();
            }
            UiEvent::SimulationFailed {
                request_id,
                message,
            } => {
                if self.in_flight != Some(request_id) {
                    tracing::debug!(request_id, "dropping stale simulation failure");
                    return;
                }
                self.in_flight = None;
                self.status = message.clone();
                self.error_notice = Some(message);
            }
        }
    }

    /// View-switch action: a no-op until a result exists.
    pub fn switch_view(&mut self, kind: ArtifactKind) {
        if self.result.is_some() {
            self.selected_artifact = kind;
        }
    }

    /// Files the download action writes, one per artifact. Empty until a
    /// result exists, making the action a silent no-op.
    pub fn download_files(&self) -> Vec<(String, ArtifactKind)> {
        if self.result.is_none() {
            return Vec::new();
        }
        ArtifactKind::ALL
            .iter()
            .map(|&kind| (kind.file_name(), kind))
            .collect()
    }

    pub fn dismiss_modal(&mut self) {
        self.modal_open = false;
    }
}
