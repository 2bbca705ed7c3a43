use clap::Parser;
use syft_report::commands::execute_report;
use syft_report::commands::report::ReportOptions;
use syft_report::console;
use syft_report::error::AppError;

fn main() {
    if let Err(err) = run() {
        console::error(&format!("Error: {}", err));
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let options = ReportOptions { image_id: cli.image_id, image_name: cli.image_name };
    execute_report(options)?;
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "syft-report",
    version,
    about = "Run Syft against a container image and write its components to Excel."
)]
struct Cli {
    /// The image identifier to scan.
    #[arg(short = 'i', long = "image-id", value_name = "IMAGE_ID")]
    image_id: String,

    /// The image name used for the report filename.
    #[arg(short = 'n', long = "image-name", value_name = "IMAGE_NAME")]
    image_name: String,
}
