use label_sheet::{SheetContext, SheetOptions, export_pdf, html};
use label_sheet_runtime::SheetUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_export_pdf(
    options: SheetOptions,
    output_path: PathBuf,
    context: &SheetContext,
    update_tx: &mpsc::UnboundedSender<SheetUpdate>,
) {
    if let Err(e) = options.validate(context) {
        let _ = update_tx.send(SheetUpdate::error("Invalid options", e));
        return;
    }

    let plan = context.plan(&options.label);
    let label_count = plan.non_empty().count();

    match export_pdf(&plan, &options.render, context, &output_path).await {
        Ok(()) => {
            let _ = update_tx.send(SheetUpdate::PdfSaved {
                path: output_path,
                label_count,
            });
        }
        Err(e) => {
            log::error!("PDF export failed: {e}");
            let _ = update_tx.send(SheetUpdate::error("Failed to export PDF", e));
        }
    }
}

pub async fn handle_write_print_page(
    options: SheetOptions,
    output_path: PathBuf,
    context: &SheetContext,
    update_tx: &mpsc::UnboundedSender<SheetUpdate>,
) {
    let plan = context.plan(&options.label);
    let document = html::render_document(&plan, &options.render, None);

    match tokio::fs::write(&output_path, document).await {
        Ok(()) => {
            log::info!("Wrote print page to {}", output_path.display());
            let _ = update_tx.send(SheetUpdate::PrintPageWritten { path: output_path });
        }
        Err(e) => {
            let _ = update_tx.send(SheetUpdate::error("Failed to write print page", e));
        }
    }
}

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<SheetUpdate>) {
    match SheetOptions::load(&path).await {
        Ok(options) => {
            log::info!("Loaded options from {}", path.display());
            let _ = update_tx.send(SheetUpdate::ConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(SheetUpdate::error("Failed to load config", e));
        }
    }
}

pub async fn handle_save_config(
    options: SheetOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<SheetUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => {
            let _ = update_tx.send(SheetUpdate::ConfigSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(SheetUpdate::error("Failed to save config", e));
        }
    }
}
