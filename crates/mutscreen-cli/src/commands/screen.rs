use crate::cli::ScreenArgs;
use crate::config::PartialScreenConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use mutscreen::engine::progress::ProgressReporter;
use mutscreen::workflows;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

pub fn run(args: ScreenArgs) -> Result<()> {
    // An empty position list and the literal '0' both stand for
    // whole-sequence screening in upstream submission forms.
    if matches!(args.positions.as_deref().map(str::trim), Some("" | "0")) {
        return Err(CliError::Config(
            "an empty position list or '0' selects whole-sequence screening, which this tool \
             does not perform; list explicit 1-based positions instead"
                .to_string(),
        ));
    }

    let partial = match &args.config {
        Some(path) => PartialScreenConfig::from_file(path)?,
        None => PartialScreenConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the screening workflow...");
    let result = workflows::screen::run(&config, &args.sequence, &reporter)?;

    println!(
        "Generated {} mutant(s) over {} position(s).",
        result.catalog.len(),
        config.positions.len()
    );

    if let Some(path) = &args.names_out {
        result.catalog.write_names(path)?;
        info!("Wrote name list to {:?}", path);
        println!("Name list written to {}", path.display());
    }
    if let Some(path) = &args.catalog_out {
        let file = File::create(path)?;
        result.catalog.write_tsv(BufWriter::new(file))?;
        info!("Wrote catalog to {:?}", path);
        println!("Catalog written to {}", path.display());
    }
    if args.names_out.is_none() && args.catalog_out.is_none() {
        for mutant in result.catalog.mutants() {
            println!("{}", mutant.name);
        }
    }

    Ok(())
}
