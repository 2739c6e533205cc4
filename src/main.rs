//! Command-line front end: reads one booking record as JSON and writes its itinerary.
//!
//! ```bash
//! itinerary-pdf booking.json --out-dir pdfs
//! cat booking.json | itinerary-pdf - --config branding.json
//! ```

use clap::Parser;
use itinerary_pdf::{error_response, Booking, Config, FontPaths, ItineraryGenerator, Result};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "itinerary-pdf")]
#[command(about = "Generate a branded travel itinerary PDF from a booking record", version)]
struct Cli {
    /// Booking record as JSON, or `-` for standard input
    input: PathBuf,

    /// JSON config file with branding, output and font settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the document is written to
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Public location of the output directory, used to report the document's URL
    #[arg(long, default_value = "http://localhost:3002/pdfs")]
    base_url: String,

    /// TrueType face for regular text; needs --font-bold too
    #[arg(long, requires = "font_bold")]
    font_regular: Option<PathBuf>,

    /// TrueType face for bold text; needs --font-regular too
    #[arg(long, requires = "font_regular")]
    font_bold: Option<PathBuf>,

    /// Remove earlier PDFs from the output directory first
    #[arg(long)]
    purge: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(dir) = &self.out_dir {
            config.output.dir = dir.clone();
        }
        if self.purge {
            config.output.purge_existing = true;
        }
        if let (Some(regular), Some(bold)) = (&self.font_regular, &self.font_bold) {
            config.fonts = Some(FontPaths {
                regular: regular.clone(),
                bold: bold.clone(),
            });
        }
        Ok(config)
    }

    fn booking(&self) -> Result<Booking> {
        if self.input.as_os_str() == "-" {
            Booking::from_reader(std::io::stdin().lock())
        } else {
            Booking::from_reader(std::fs::File::open(&self.input)?)
        }
    }
}

fn run(cli: &Cli) -> Result<serde_json::Value> {
    let generator = ItineraryGenerator::new(cli.config()?);
    let booking = cli.booking()?;
    let generated = generator.generate(&booking)?;
    Ok(generated.success_response(&cli.base_url))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            println!("{}", error_response(&e));
            ExitCode::FAILURE
        }
    }
}
