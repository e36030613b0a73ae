use crate::cli::args::Cli;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::processors::Pipeline;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;
use tracing::info;

/// Merge the settings file and environment with command line overrides
pub fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::load(cli.config.as_deref())?;

    if let Some(path) = &cli.origin_destination {
        config.origin_destination = path.clone();
    }
    if let Some(path) = &cli.load_factor {
        config.load_factor = path.clone();
    }
    if let Some(path) = &cli.output {
        config.output = path.clone();
    }
    if let Some(rows) = cli.sample {
        config.head_rows = rows;
    }
    if let Some(workers) = cli.max_workers {
        config.max_workers = workers.max(1);
    }

    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    println!("Building flight training table...");
    println!("Flight files: {}", cli.finaldata_train.display());
    println!("Airport reference: {}", config.origin_destination.display());
    println!("Load factors: {}", config.load_factor.display());
    info!("Using {} workers", config.max_workers);

    let pipeline = Pipeline::new(config)?;

    let progress = ProgressReporter::new(0, "Reading flight files...", cli.quiet);
    let (table, report) = pipeline.run(&cli.finaldata_train, Some(&progress))?;
    progress.finish_with_message(&format!("Read {} flight files", report.files_read.len()));

    println!("\n{}", report.summary());

    if cli.validate_only {
        println!("Validation complete - no output file written");
        return Ok(());
    }

    let output = &pipeline.config().output;
    println!("Writing {} rows to {}", table.height(), output.display());
    CsvWriter::new().write_table(&table, output)?;

    let head_rows = pipeline.config().head_rows;
    if head_rows > 0 {
        println!("\n{}", table.head(Some(head_rows)));
    }

    Ok(())
}
