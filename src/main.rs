use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process;

use locheck::{
    run_verify, VerifyQuery, VerifyRun, DEFAULT_LOCALES_DIR, DEFAULT_REFERENCE, DEFAULT_SEPARATOR,
};

/// Locale Check - Audit JSON locale files for missing and extra translation keys
#[derive(Parser, Debug)]
#[command(name = "locheck")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Directory containing one JSON file per locale
    #[arg(value_name = "LOCALES_DIR", default_value = DEFAULT_LOCALES_DIR)]
    locales_dir: PathBuf,

    /// Reference locale filename that every other locale is compared against
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_REFERENCE)]
    reference: String,

    /// Separator joining nested keys into flat paths
    #[arg(long, value_name = "SEP", default_value = DEFAULT_SEPARATOR)]
    separator: String,
}

fn main() {
    let cli = Cli::parse();

    let query = VerifyQuery::new(cli.locales_dir)
        .with_reference(cli.reference.clone())
        .with_separator(cli.separator);

    let run = match run_verify(query) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Skip lines and the report go to stdout; the summary stays on stderr so
    // piped output remains valid JSON.
    for skipped in &run.skipped {
        println!("Error processing {}: {}", skipped.filename, skipped.error);
    }

    match run.report.to_pretty_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    print_summary(&run, &cli.reference);
}

/// One-line run summary on stderr
fn print_summary(run: &VerifyRun, reference: &str) {
    let findings = if run.report.is_empty() {
        "no key differences".green().to_string()
    } else {
        let text = format!("{} locale(s) with key differences", run.report.len());
        text.as_str().yellow().to_string()
    };

    let mut summary = format!(
        "Checked {} locale file(s) against {}: {}",
        run.checked, reference, findings
    );
    if !run.skipped.is_empty() {
        let skipped = format!("{} skipped", run.skipped.len());
        summary.push_str(&format!(", {}", skipped.as_str().red()));
    }
    eprintln!("{}", summary);
}
