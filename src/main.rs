use clap::Parser;
use log::{error, info};

use anno2csv::{convert_to_csv, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting the conversion process...");

    match convert_to_csv(&args.input_annotation, &args.output_path) {
        Ok(count) => {
            info!(
                "Wrote {} bounding box record(s) to {}.",
                count,
                args.output_path.display()
            );
            info!("Successfully converted to csv.");
        }
        Err(e) => {
            error!(
                "Failed to convert {}: {}",
                args.input_annotation.display(),
                e
            );
            std::process::exit(1);
        }
    }
}
