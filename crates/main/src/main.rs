use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use formpdf::{
    DirectorySink, FileImageSource, FormCapture, FormExport, GalleryExport, LayoutStyle,
    PageGeometry, PaginatedDocumentBuilder, SheetRows,
};
use log::debug;
use serde::de::DeserializeOwned;

/// Builds paginated PDF exports from files on disk.
///
/// Set `RUST_LOG=debug` to trace page breaks and skipped blocks.
#[derive(Parser)]
#[command(author, version, about = "Paginated PDF exports for captured forms")]
struct Cli {
    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LayoutArgs {
    /// JSON file with layout style overrides (font sizes, spacing).
    #[arg(long, global = true, value_name = "JSON_FILE")]
    layout: Option<PathBuf>,

    /// JSON file with page geometry (`width`, `height`, `margin` in mm). Defaults to A4.
    #[arg(long, global = true, value_name = "JSON_FILE")]
    geometry: Option<PathBuf>,

    /// Add a bookmark for every heading.
    #[arg(long, global = true)]
    outline: bool,

    /// Directory the PDF is written to.
    #[arg(long, global = true, env = "FORMPDF_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the capture form with photographs and spreadsheet rows.
    #[command(name = "form")]
    Form {
        #[arg(long)]
        name: String,

        #[arg(long = "father-name")]
        father_name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Image file to include; repeat for several images.
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,

        /// JSON array of row objects, one file per spreadsheet.
        #[arg(long = "rows", value_name = "JSON_FILE")]
        rows: Vec<PathBuf>,
    },

    /// Export picked images one per page.
    #[command(name = "gallery", aliases = ["selected-images"])]
    Gallery {
        /// Image file to include; repeat for several images.
        #[arg(long = "image", value_name = "PATH", required = true)]
        images: Vec<PathBuf>,

        #[arg(long, default_value = "")]
        description: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let builder = document_builder(&cli.layout)?;
    let mut sink = DirectorySink::new(&cli.layout.out_dir);

    let (document, delivery) = match cli.command {
        Commands::Form {
            name,
            father_name,
            description,
            images,
            rows,
        } => {
            let sheets = rows
                .iter()
                .map(|path| read_json::<SheetRows>(path))
                .collect::<Result<Vec<_>, _>>()?;
            let form = FormCapture {
                name,
                father_name,
                description,
            };
            let export = FormExport::capture(form, &mut FileImageSource::new(images), sheets)?;
            export.run(&builder, &mut sink)?
        }
        Commands::Gallery {
            images,
            description,
        } => {
            let export = GalleryExport::capture(&mut FileImageSource::new(images), description)?;
            export.run(&builder, &mut sink)?
        }
    };

    for warning in document.warnings() {
        eprintln!("Warning: {}", warning);
    }
    println!(
        "Wrote {} ({} page(s))",
        delivery.location,
        document.page_count()
    );
    Ok(())
}

fn document_builder(args: &LayoutArgs) -> Result<PaginatedDocumentBuilder, Box<dyn Error>> {
    let geometry = match &args.geometry {
        Some(path) => read_json::<PageGeometry>(path)?,
        None => PageGeometry::a4(),
    };
    let style = match &args.layout {
        Some(path) => read_json::<LayoutStyle>(path)?,
        None => LayoutStyle::default(),
    };
    debug!("using geometry {:?} and style {:?}", geometry, style);

    Ok(PaginatedDocumentBuilder::new()
        .with_geometry(geometry)
        .with_style(style)
        .with_outline(args.outline))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|err| format!("failed to open {}: {}", path.display(), err))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("failed to parse {}: {}", path.display(), err).into())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
