use std::path::PathBuf;
use std::process;

use clap::Parser;

use framemark_core::filter::infrastructure::filter_factory::create_filter;
use framemark_core::io::domain::image_reader::ImageReader;
use framemark_core::io::domain::image_writer::ImageWriter;
use framemark_core::io::infrastructure::image_file_reader::ImageFileReader;
use framemark_core::io::infrastructure::image_file_writer::ImageFileWriter;
use framemark_core::shared::color::Color;

/// Apply a crosshair overlay filter to an image.
#[derive(Parser)]
#[command(name = "framemark")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Line color as 6-digit hex, RGB order (the CLI decodes to RGB).
    #[arg(long, default_value = "ff0000")]
    color: String,

    /// Line thickness in pixels.
    #[arg(long, default_value = "3")]
    thickness: u32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let color: Color = cli.color.parse()?;
    let filter = create_filter(color, cli.thickness);

    let mut frame = ImageFileReader::new().read(&cli.input)?;
    filter.process(&mut frame)?;
    ImageFileWriter::new().write(&cli.output, &frame)?;

    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.thickness == 0 {
        return Err("Thickness must be at least 1".into());
    }
    Ok(())
}
