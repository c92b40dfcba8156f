use bitmap_sdf::config::{load_config, SdfToolConfig};
use bitmap_sdf::io::{load_grayscale_image, save_grayscale, write_json_file};
use bitmap_sdf::mask::BinaryMask;
use bitmap_sdf::sdf::compute_sdf;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let input = PathBuf::from(env::args().nth(1).ok_or_else(usage)?);
    let config = match env::args().nth(2) {
        Some(path) => load_config(Path::new(&path))?,
        None => SdfToolConfig::default(),
    };

    let gray = load_grayscale_image(&input)?;
    let mask = BinaryMask::from_grayscale(&gray.as_view(), config.threshold);
    let result = compute_sdf(&mask, &config.sdf)?;

    let output = config
        .output
        .clone()
        .unwrap_or_else(|| sdf_output_path(&input));
    save_grayscale(&result.gray, &output)?;
    println!(
        "Saved {}x{} signed distance field to {} ({:.3} ms)",
        result.summary.width,
        result.summary.height,
        output.display(),
        result.summary.timing.total_ms
    );

    if let Some(report) = &config.report_json {
        write_json_file(report, &result.summary)?;
        println!("Saved summary to {}", report.display());
    }

    Ok(())
}

fn sdf_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}-sdf.png"))
}

fn usage() -> String {
    "Usage: bitmap-sdf <image> [config.json]".to_string()
}
