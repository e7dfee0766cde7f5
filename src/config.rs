use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments parser for generating a ground-truth bounding box
/// table from annotation files.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Path to the input annotation file
    #[arg(value_name = "annotation_file.[xml|json]")]
    pub input_annotation: PathBuf,

    /// Path of the CSV file to write
    #[arg(long = "output_path", default_value = "bboxes.csv")]
    pub output_path: PathBuf,
}
