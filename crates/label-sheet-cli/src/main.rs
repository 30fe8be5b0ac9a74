use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use label_sheet::constants::MAX_CUSTOM_LINES;
use label_sheet::{
    FixedMetrics, FontFamily, FontWeight, LabelMode, PreviewTransform, SheetContext, SheetOptions,
    export_filename_today, export_pdf, html,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "e248", about = "E248 label sheet generator", version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the label sheet as a PDF
    Pdf {
        #[command(flatten)]
        label: LabelArgs,

        /// Output PDF file (defaults to the dated download name)
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Directory for the default-named output file
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Write the printable HTML page
    Html {
        #[command(flatten)]
        label: LabelArgs,

        /// Output HTML file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bake a preview scale for a container this many pixels wide
        #[arg(long)]
        width: Option<f32>,

        /// Device pixel ratio used with --width
        #[arg(long, default_value = "1.0")]
        dpr: f32,
    },

    /// Print the label content and sheet geometry
    Show {
        #[command(flatten)]
        label: LabelArgs,

        /// Container width in pixels for the preview scale
        #[arg(long, default_value = "800")]
        width: f32,

        /// Device pixel ratio
        #[arg(long, default_value = "1.0")]
        dpr: f32,
    },

    /// Write a default options file
    InitConfig {
        /// Options file to create
        #[arg(default_value = "e248.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Label inputs shared by the rendering subcommands
#[derive(Args, Debug, Default)]
struct LabelArgs {
    /// JSON options file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What each label shows
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Manufacture date (YYYY-MM-DD)
    #[arg(long)]
    mfd: Option<String>,

    /// Years from manufacture to expiry (0-50)
    #[arg(long)]
    years: Option<u32>,

    /// Lot number (clamped to 1-99)
    #[arg(long, allow_hyphen_values = true)]
    lot: Option<String>,

    /// Custom text line; repeat up to three times. Implies --mode custom
    #[arg(long = "line")]
    lines: Vec<String>,

    /// Font family
    #[arg(long, value_enum)]
    font: Option<FontArg>,

    /// Font weight
    #[arg(long, value_enum)]
    weight: Option<WeightArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    MfdOnly,
    MfdExp,
    MfdExpLot,
    Custom,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FontArg {
    Helvetica,
    Arial,
    Inter,
    Roboto,
    Sf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WeightArg {
    Regular,
    Semibold,
    Bold,
}

impl From<ModeArg> for LabelMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::MfdOnly => Self::MfdOnly,
            ModeArg::MfdExp => Self::MfdExp,
            ModeArg::MfdExpLot => Self::MfdExpLot,
            ModeArg::Custom => Self::Custom,
        }
    }
}

impl From<FontArg> for FontFamily {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::Helvetica => Self::Helvetica,
            FontArg::Arial => Self::Arial,
            FontArg::Inter => Self::Inter,
            FontArg::Roboto => Self::Roboto,
            FontArg::Sf => Self::Sf,
        }
    }
}

impl From<WeightArg> for FontWeight {
    fn from(arg: WeightArg) -> Self {
        match arg {
            WeightArg::Regular => Self::Regular,
            WeightArg::Semibold => Self::Semibold,
            WeightArg::Bold => Self::Bold,
        }
    }
}

impl LabelArgs {
    /// Options from the config file (or defaults) with the flags applied
    async fn resolve(&self, context: &SheetContext) -> Result<SheetOptions> {
        let mut options = match &self.config {
            Some(path) => SheetOptions::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => SheetOptions::default(),
        };
        self.apply(&mut options)?;
        options.validate(context)?;
        Ok(options)
    }

    fn apply(&self, options: &mut SheetOptions) -> Result<()> {
        if self.lines.len() > MAX_CUSTOM_LINES {
            bail!(
                "At most {} custom lines are allowed, got {}",
                MAX_CUSTOM_LINES,
                self.lines.len()
            );
        }

        if !self.lines.is_empty() {
            options.label.custom_lines = Default::default();
            for (slot, line) in options.label.custom_lines.iter_mut().zip(&self.lines) {
                *slot = line.clone();
            }
            options.label.mode = LabelMode::Custom;
        }
        if let Some(mode) = self.mode {
            options.label.mode = mode.into();
        }
        if let Some(mfd) = &self.mfd {
            options.label.mfd = mfd.clone();
        }
        if let Some(years) = self.years {
            options.label.expiry_years = years;
        }
        if let Some(lot) = &self.lot {
            options.label.lot = lot.clone();
        }
        if let Some(font) = self.font {
            options.render.font = font.into();
        }
        if let Some(weight) = self.weight {
            options.render.weight = weight.into();
        }
        Ok(())
    }
}

/// Output path for a PDF export
fn pdf_output_path(
    options: &SheetOptions,
    output: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(output) = output {
        return output;
    }
    let name = export_filename_today(options.label.mfd_date());
    match out_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn html_output_path(options: &SheetOptions, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| {
        PathBuf::from(export_filename_today(options.label.mfd_date())).with_extension("html")
    })
}

async fn write_html(
    options: &SheetOptions,
    context: &SheetContext,
    transform: Option<&PreviewTransform>,
    output: &Path,
) -> Result<usize> {
    let plan = context.plan(&options.label);
    let document = html::render_document(&plan, &options.render, transform);
    tokio::fs::write(output, document)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(plan.non_empty().count())
}

fn print_summary(options: &SheetOptions, context: &SheetContext, transform: &PreviewTransform) {
    let plan = context.plan(&options.label);
    let geometry = &plan.geometry;

    println!("Label content ({}):", options.label.mode.name());
    if plan.content.is_empty() {
        println!("  (empty)");
    }
    for line in plan.content.lines() {
        println!("  {}", line);
    }

    println!("Sheet:");
    println!(
        "  Page: {} × {} cm",
        geometry.page_width_cm, geometry.page_height_cm
    );
    println!(
        "  Grid: {} rows × {} columns = {} labels",
        geometry.rows,
        geometry.columns,
        geometry.total_cells()
    );
    println!(
        "  Cell: {} × {} cm, column gap {} cm",
        geometry.col_width_cm, geometry.row_height_cm, geometry.col_gap_cm
    );
    println!(
        "  Grid width: {:.2} cm of {:.2} cm content width",
        geometry.grid_width_cm(),
        geometry.content_width_cm()
    );
    println!(
        "  Font: {} {} {} pt",
        options.render.font.name(),
        options.render.weight.name(),
        context.font_size_pt
    );

    println!("Preview:");
    println!("  Pixels per cm: {:.2}", transform.px_per_cm);
    println!("  Scale: {:.3}", transform.scale);
    println!("  Bottom margin: {:.1} px", transform.margin_bottom_px);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let context = SheetContext::default();

    match cli.command {
        Commands::Pdf {
            label,
            output,
            out_dir,
        } => {
            let options = label.resolve(&context).await?;
            let output = pdf_output_path(&options, output, out_dir);

            let plan = context.plan(&options.label);
            if plan.content.is_empty() {
                log::warn!("Label content is empty, writing a blank sheet");
            }
            export_pdf(&plan, &options.render, &context, &output).await?;
            println!(
                "Generated {} labels → {}",
                plan.non_empty().count(),
                output.display()
            );
        }

        Commands::Html {
            label,
            output,
            width,
            dpr,
        } => {
            let options = label.resolve(&context).await?;
            let output = html_output_path(&options, output);
            let transform =
                width.map(|width| context.preview_transform(width, &FixedMetrics::new(dpr)));

            let count = write_html(&options, &context, transform.as_ref(), &output).await?;
            println!("Wrote print page with {} labels → {}", count, output.display());
        }

        Commands::Show { label, width, dpr } => {
            let options = label.resolve(&context).await?;
            let transform = context.preview_transform(width, &FixedMetrics::new(dpr));
            print_summary(&options, &context, &transform);
        }

        Commands::InitConfig { path, force } => {
            if !force && tokio::fs::try_exists(&path).await.unwrap_or(false) {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            SheetOptions::default().save(&path).await?;
            println!("Wrote default options → {}", path.display());
        }
    }

    Ok(())
}
