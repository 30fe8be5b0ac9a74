use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::mpsc;

// Re-export types from library crate
pub use label_sheet::{LabelError, SheetContext, SheetOptions};

/// Commands sent from UI to worker
#[derive(Debug, Clone)]
pub enum SheetCommand {
    /// Render the sheet and write it as a PDF
    ExportPdf {
        options: SheetOptions,
        output_path: PathBuf,
    },
    /// Write the printable HTML page
    WritePrintPage {
        options: SheetOptions,
        output_path: PathBuf,
    },
    LoadConfig {
        path: PathBuf,
    },
    SaveConfig {
        options: SheetOptions,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum SheetUpdate {
    PdfSaved {
        path: PathBuf,
        label_count: usize,
    },
    PrintPageWritten {
        path: PathBuf,
    },
    ConfigLoaded {
        options: SheetOptions,
    },
    ConfigSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

impl SheetUpdate {
    /// Error update carrying a context prefix, e.g. `Failed to export PDF: ...`
    pub fn error(context: &str, err: impl std::fmt::Display) -> Self {
        SheetUpdate::Error {
            message: format!("{context}: {err}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Worker is no longer running")]
    WorkerStopped,
}

/// UI side of the worker channels
pub struct WorkerHandle {
    command_tx: mpsc::UnboundedSender<SheetCommand>,
    update_rx: mpsc::UnboundedReceiver<SheetUpdate>,
}

/// Worker side of the channels
pub struct WorkerEndpoints {
    pub command_rx: mpsc::UnboundedReceiver<SheetCommand>,
    pub update_tx: mpsc::UnboundedSender<SheetUpdate>,
}

/// Create a connected pair of UI and worker endpoints
pub fn channel() -> (WorkerHandle, WorkerEndpoints) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    (
        WorkerHandle {
            command_tx,
            update_rx,
        },
        WorkerEndpoints {
            command_rx,
            update_tx,
        },
    )
}

impl WorkerHandle {
    pub fn send(&self, command: SheetCommand) -> Result<(), ChannelError> {
        self.command_tx
            .send(command)
            .map_err(|_| ChannelError::WorkerStopped)
    }

    /// Next pending update, without waiting
    pub fn try_recv(&mut self) -> Option<SheetUpdate> {
        self.update_rx.try_recv().ok()
    }

    /// Wait for the next update; `None` once the worker has exited
    pub async fn recv(&mut self) -> Option<SheetUpdate> {
        self.update_rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_fails_after_worker_drops() {
        let (handle, endpoints) = channel();
        drop(endpoints);
        let result = handle.send(SheetCommand::LoadConfig {
            path: PathBuf::from("sheet.json"),
        });
        assert!(matches!(result, Err(ChannelError::WorkerStopped)));
    }

    #[test]
    fn test_updates_arrive_in_order() {
        let (mut handle, endpoints) = channel();
        endpoints
            .update_tx
            .send(SheetUpdate::ConfigSaved {
                path: PathBuf::from("a.json"),
            })
            .unwrap();
        endpoints
            .update_tx
            .send(SheetUpdate::error("Failed to export PDF", "disk full"))
            .unwrap();

        assert!(matches!(
            handle.try_recv(),
            Some(SheetUpdate::ConfigSaved { .. })
        ));
        match handle.try_recv() {
            Some(SheetUpdate::Error { message }) => {
                assert_eq!(message, "Failed to export PDF: disk full")
            }
            other => panic!("Expected error update, got {other:?}"),
        }
        assert!(handle.try_recv().is_none());
    }
}
