use eframe::egui;
use label_sheet::constants::{MAX_CHARS, MAX_EXPIRY_YEARS};
use label_sheet::content::parse_date;
use label_sheet::{FontFamily, FontWeight, LabelMode, SheetOptions, sanitize_lot_field};

/// Input form for the label content and typeface
pub fn show_form(ui: &mut egui::Ui, options: &mut SheetOptions) {
    let label = &mut options.label;

    ui.heading("Labels");
    ui.separator();

    ui.label("Content:");
    egui::ComboBox::from_id_salt("label_mode")
        .selected_text(label.mode.name())
        .show_ui(ui, |ui| {
            for mode in LabelMode::ALL {
                ui.selectable_value(&mut label.mode, mode, mode.name());
            }
        });

    ui.add_space(8.0);

    if label.mode.is_custom() {
        for (i, line) in label.custom_lines.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.label(format!("Line {}:", i + 1));
                ui.add(
                    egui::TextEdit::singleline(line)
                        .char_limit(MAX_CHARS)
                        .desired_width(180.0),
                );
                ui.weak(format!("{}/{}", line.chars().count(), MAX_CHARS));
            });
        }
    } else {
        ui.horizontal(|ui| {
            ui.label("Manufactured:");
            ui.add(
                egui::TextEdit::singleline(&mut label.mfd)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );
            if ui.small_button("Today").clicked() {
                label.mfd = chrono::Local::now().format("%Y-%m-%d").to_string();
            }
        });
        if !label.mfd.trim().is_empty() && parse_date(&label.mfd).is_none() {
            let warn = ui.visuals().warn_fg_color;
            ui.colored_label(warn, "Not a valid date");
        }

        if label.mode.includes_exp() {
            ui.horizontal(|ui| {
                ui.label("Expires after:");
                ui.add(
                    egui::DragValue::new(&mut label.expiry_years)
                        .range(0..=MAX_EXPIRY_YEARS)
                        .suffix(" years"),
                );
            });
        }

        if label.mode.includes_lot() {
            ui.horizontal(|ui| {
                ui.label("Lot:");
                let response = ui.add(egui::TextEdit::singleline(&mut label.lot).desired_width(40.0));
                if response.changed() {
                    label.lot = sanitize_lot_field(&label.lot);
                }
            });
        }
    }

    ui.add_space(10.0);
    ui.separator();

    ui.label("Font:");
    let render = &mut options.render;
    egui::ComboBox::from_id_salt("font_family")
        .selected_text(render.font.name())
        .show_ui(ui, |ui| {
            for font in FontFamily::ALL {
                ui.selectable_value(&mut render.font, font, font.name());
            }
        });

    ui.label("Weight:");
    ui.horizontal(|ui| {
        for weight in FontWeight::ALL {
            ui.radio_value(&mut render.weight, weight, weight.name());
        }
    });
}
