use std::process;

use clap::Parser;
use colored::Colorize;
use kmertab::{
    cli::Args,
    config::Config,
    run::{run, RunReport},
};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let config = Config::try_from(args).unwrap_or_else(|e| {
        eprintln!(
            "{}\n {}",
            "Problem parsing arguments:".blue().bold(),
            e.to_string().blue()
        );
        eprintln!(
            "{}\n {}",
            "Help menu:".blue().bold(),
            "$ kmertab --help".bold()
        );
        process::exit(1);
    });

    if !config.quiet {
        eprintln!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        eprintln!(
            "{}: {}",
            "input".bold(),
            config.input.display().to_string().underline().bold().blue()
        );
        eprintln!(
            "{}: {}",
            "output".bold(),
            config.output.display().to_string().underline().bold().blue()
        );
    }

    match run(&config) {
        Ok(report) => {
            if !config.quiet {
                print_report(&report);
            }
        }
        Err(e) => {
            eprintln!(
                "{}\n {}",
                format!("Application error ({}):", e.kind()).blue().bold(),
                e.to_string().blue()
            );
            process::exit(1);
        }
    }
}

fn print_report(report: &RunReport) {
    eprintln!("{}: {}", "records".bold(), report.summary.records);
    eprintln!("{}: {}", "bases".bold(), report.summary.bases);
    eprintln!("{}: {}", "k-mers counted".bold(), report.summary.kmers_counted);
    eprintln!("{}: {}", "distinct k-mers".bold(), report.stats.distinct_kmers);
    eprintln!(
        "{}: {:.2}",
        "mean count".bold(),
        report.stats.mean_count
    );
}
