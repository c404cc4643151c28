use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use itemfix::{run, ImageChange, PatchReport, PatcherConfig, Reporter};

/// Fill in default image filenames for a Minecraft item manifest
#[derive(Parser, Debug)]
#[command(name = "itemfix", version, about)]
struct Cli {
    /// Manifest to read
    #[arg(long, default_value = "data.json")]
    input: PathBuf,

    /// Where to write the patched manifest
    #[arg(long, default_value = "data_updated.json")]
    output: PathBuf,
}

/// Reporter that prints the tool's conventional console output
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn image_updated(&mut self, change: &ImageChange) {
        println!("Updated {}: image set to '{}'", change.item, change.image);
    }

    fn finished(&mut self, report: &PatchReport, output: &Path) {
        println!();
        println!("Processing complete!");
        println!("Total items processed: {}", report.total_items);
        println!("Images updated: {}", report.changed());
        println!("Output saved to: {}", output.display());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("Minecraft Items Image Processor");
    println!("{}", "=".repeat(40));

    let config = PatcherConfig {
        input: cli.input,
        output: cli.output,
    };
    match run(&config, &mut ConsoleReporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
