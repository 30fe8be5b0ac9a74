use label_sheet::SheetContext;
use label_sheet_runtime::{SheetCommand, SheetUpdate, WorkerEndpoints};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes sheet commands in arrival order and
/// sends one update per command
pub async fn worker_task(endpoints: WorkerEndpoints, context: SheetContext) {
    let WorkerEndpoints {
        mut command_rx,
        update_tx,
    } = endpoints;

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &context, &update_tx).await;
    }
    log::debug!("Worker stopped");
}

async fn process_command(
    cmd: SheetCommand,
    context: &SheetContext,
    update_tx: &mpsc::UnboundedSender<SheetUpdate>,
) {
    match cmd {
        SheetCommand::ExportPdf {
            options,
            output_path,
        } => {
            handlers::handle_export_pdf(options, output_path, context, update_tx).await;
        }
        SheetCommand::WritePrintPage {
            options,
            output_path,
        } => {
            handlers::handle_write_print_page(options, output_path, context, update_tx).await;
        }
        SheetCommand::LoadConfig { path } => {
            handlers::handle_load_config(path, update_tx).await;
        }
        SheetCommand::SaveConfig { options, path } => {
            handlers::handle_save_config(options, path, update_tx).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_sheet::{LabelMode, SheetOptions};
    use label_sheet_runtime::channel;

    fn options_with_mfd(mfd: &str) -> SheetOptions {
        let mut options = SheetOptions::default();
        options.label.mode = LabelMode::MfdExp;
        options.label.mfd = mfd.to_string();
        options
    }

    #[tokio::test]
    async fn test_every_queued_export_is_written_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.pdf");
        let second = dir.path().join("second.pdf");
        let page = dir.path().join("print.html");

        let (mut handle, endpoints) = channel();
        handle
            .send(SheetCommand::ExportPdf {
                options: options_with_mfd("2026-02-03"),
                output_path: first.clone(),
            })
            .unwrap();
        handle
            .send(SheetCommand::WritePrintPage {
                options: options_with_mfd("2026-02-03"),
                output_path: page.clone(),
            })
            .unwrap();
        handle
            .send(SheetCommand::ExportPdf {
                options: options_with_mfd("2026-03-04"),
                output_path: second.clone(),
            })
            .unwrap();

        tokio::spawn(worker_task(endpoints, SheetContext::default()));

        match handle.recv().await {
            Some(SheetUpdate::PdfSaved { path, label_count }) => {
                assert_eq!(path, first);
                assert_eq!(label_count, 248);
            }
            other => panic!("Expected first PDF update, got {other:?}"),
        }
        match handle.recv().await {
            Some(SheetUpdate::PrintPageWritten { path }) => assert_eq!(path, page),
            other => panic!("Expected print page update, got {other:?}"),
        }
        match handle.recv().await {
            Some(SheetUpdate::PdfSaved { path, .. }) => assert_eq!(path, second),
            other => panic!("Expected second PDF update, got {other:?}"),
        }

        assert!(first.exists());
        assert!(page.exists());
        assert!(second.exists());
    }

    #[tokio::test]
    async fn test_invalid_options_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("labels.pdf");

        let mut options = SheetOptions::default();
        options.label.custom_lines[0] = "X".repeat(30);

        let (mut handle, endpoints) = channel();
        tokio::spawn(worker_task(endpoints, SheetContext::default()));
        handle
            .send(SheetCommand::ExportPdf {
                options,
                output_path: output.clone(),
            })
            .unwrap();

        match handle.recv().await {
            Some(SheetUpdate::Error { message }) => {
                assert!(message.starts_with("Invalid options"), "{message}")
            }
            other => panic!("Expected error update, got {other:?}"),
        }
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_config_round_trip_through_worker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");

        let (mut handle, endpoints) = channel();
        tokio::spawn(worker_task(endpoints, SheetContext::default()));

        let options = options_with_mfd("2025-12-31");
        handle
            .send(SheetCommand::SaveConfig {
                options: options.clone(),
                path: path.clone(),
            })
            .unwrap();
        assert!(matches!(
            handle.recv().await,
            Some(SheetUpdate::ConfigSaved { .. })
        ));

        handle.send(SheetCommand::LoadConfig { path }).unwrap();
        match handle.recv().await {
            Some(SheetUpdate::ConfigLoaded { options: loaded }) => assert_eq!(loaded, options),
            other => panic!("Expected loaded config, got {other:?}"),
        }
    }
}
