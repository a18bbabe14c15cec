use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_duplex::encoder::RecordingEncoder;
use pdf_duplex::{DuplexError, FailureKind, ImageAsset, MarginSide, PrintConfig, PrintPreview};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfdx", about = "Double-sided print preparation", version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a PDF with the front image on odd pages and the back image on even pages
    Generate {
        /// Front page image
        #[arg(long)]
        front: PathBuf,

        /// Back page image
        #[arg(long)]
        back: PathBuf,

        /// Output PDF file (defaults to a name derived from paper size and copies)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the encoder calls instead of writing a PDF
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show the page layout without generating anything
    Preview {
        /// Front page image
        #[arg(long)]
        front: Option<PathBuf>,

        /// Back page image
        #[arg(long)]
        back: Option<PathBuf>,

        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Args)]
struct SettingsArgs {
    /// Start from a saved JSON configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the resulting configuration as JSON
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Number of copies (clamped to 1-100)
    #[arg(long, allow_negative_numbers = true)]
    copies: Option<i64>,

    /// Top margin in whole mm (clamped to 0-50)
    #[arg(long)]
    margin_top: Option<f32>,

    /// Right margin in whole mm (clamped to 0-50)
    #[arg(long)]
    margin_right: Option<f32>,

    /// Bottom margin in whole mm (clamped to 0-50)
    #[arg(long)]
    margin_bottom: Option<f32>,

    /// Left margin in whole mm (clamped to 0-50)
    #[arg(long)]
    margin_left: Option<f32>,

    /// Fit to printable area (pins all margins to 10mm)
    #[arg(long)]
    fit: bool,

    /// Use manual margins even if the loaded configuration fits to the printable area
    #[arg(long, conflicts_with = "fit")]
    no_fit: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A3,
}

impl From<PaperArg> for pdf_duplex::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A3 => Self::A3,
        }
    }
}

impl SettingsArgs {
    /// Apply every flag through the configuration reducer
    async fn resolve(&self) -> Result<PrintConfig> {
        let base = match &self.config {
            Some(path) => PrintConfig::load(path).await?,
            None => PrintConfig::default(),
        };
        let config = self.apply(base);

        if let Some(path) = &self.save_config {
            config.save(path).await?;
            println!("Saved configuration → {}", path.display());
        }

        Ok(config)
    }

    fn apply(&self, mut config: PrintConfig) -> PrintConfig {
        if let Some(paper) = self.paper {
            config = config.apply_paper_size_change(paper.into());
        }
        if let Some(copies) = self.copies {
            config = config.apply_copies_change(copies);
        }

        // Fit mode decides whether margin flags take effect, so settle it first
        if self.fit {
            config = config.apply_fit_toggle(true);
        } else if self.no_fit {
            config = config.apply_fit_toggle(false);
        }

        let margin_edits = [
            (MarginSide::Top, self.margin_top),
            (MarginSide::Right, self.margin_right),
            (MarginSide::Bottom, self.margin_bottom),
            (MarginSide::Left, self.margin_left),
        ];
        if config.fit_to_printable_area && margin_edits.iter().any(|(_, value)| value.is_some()) {
            log::warn!("Fit to printable area pins margins to 10mm; margin flags are ignored");
        }
        for (side, value) in margin_edits {
            if let Some(value) = value {
                config = config.apply_margin_edit(side, value);
            }
        }

        config
    }
}

async fn load_optional(path: Option<&Path>) -> pdf_duplex::Result<Option<ImageAsset>> {
    match path {
        Some(path) => {
            let asset = pdf_duplex::load_image(path).await?;
            if asset.is_none() {
                log::warn!("Ignoring {}: not an image file", path.display());
            }
            Ok(asset)
        }
        None => Ok(None),
    }
}

async fn run_generate(
    front: &Path,
    back: &Path,
    output: Option<PathBuf>,
    dry_run: bool,
    config: &PrintConfig,
) -> pdf_duplex::Result<()> {
    let front = load_optional(Some(front)).await?;
    let back = load_optional(Some(back)).await?;

    if dry_run {
        let mut encoder = RecordingEncoder::new();
        pdf_duplex::generate_document(front.as_ref(), back.as_ref(), config, &mut encoder)?;
        for call in encoder.calls() {
            println!("{}", call);
        }
        return Ok(());
    }

    let bytes = pdf_duplex::generate_pdf(front, back, config).await?;
    let output = output.unwrap_or_else(|| PathBuf::from(config.output_filename()));
    pdf_duplex::save_pdf(&bytes, &output).await?;
    println!(
        "Generated {} pages ({} copies, {}) → {}",
        config.total_pages(),
        config.copies,
        config.paper_size,
        output.display()
    );
    Ok(())
}

fn print_preview(preview: &PrintPreview) {
    println!("Print Preview:");
    println!("  Paper size: {}", preview.paper_size);
    println!("  Copies: {}", preview.copies);
    println!("  Total pages: {}", preview.total_pages);

    let margins = &preview.margin_box;
    if preview.fit_to_printable_area {
        println!("  Margins: printable area (10mm all sides)");
    } else {
        println!(
            "  Margin box: T{:.0}% R{:.0}% B{:.0}% L{:.0}% of the 50mm range",
            margins.top_pct, margins.right_pct, margins.bottom_pct, margins.left_pct
        );
    }

    for (label, placement) in [
        ("Front", preview.front_placement),
        ("Back", preview.back_placement),
    ] {
        match placement {
            Some(rect) => println!(
                "  {} image: x={:.2}mm y={:.2}mm, {:.2}x{:.2}mm",
                label, rect.x, rect.y, rect.width, rect.height
            ),
            None => println!("  {} image: not loaded", label),
        }
    }

    println!("Page layout:");
    for entry in preview.listed_pages() {
        let status = if entry.placement.is_some() {
            "image loaded"
        } else {
            "no image"
        };
        println!("  {:>3}  {:<5}  {}", entry.page_index, entry.side, status);
    }
    if preview.remaining_pages > 0 {
        println!("  ... and {} more pages", preview.remaining_pages);
    }

    if !preview.ready_to_generate {
        println!("Load both front and back images to generate the PDF");
    }
}

fn report(err: DuplexError) -> anyhow::Error {
    match err.failure_kind() {
        FailureKind::MissingInput => anyhow::anyhow!(
            "Missing images: both a front and a back image are required ({})",
            err
        ),
        FailureKind::GenerationFailed => anyhow::anyhow!("Generation failed: {}", err),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Generate {
            front,
            back,
            output,
            dry_run,
            settings,
        } => {
            let config = settings.resolve().await?;
            if let Err(err) = run_generate(&front, &back, output, dry_run, &config).await {
                return Err(report(err));
            }
        }

        Commands::Preview {
            front,
            back,
            settings,
        } => {
            let config = settings.resolve().await?;
            let front = load_optional(front.as_deref()).await?;
            let back = load_optional(back.as_deref()).await?;
            let preview = pdf_duplex::generate_preview(front.as_ref(), back.as_ref(), &config)?;
            print_preview(&preview);
        }
    }

    Ok(())
}
