use crate::cli::UngapArgs;
use crate::error::Result;
use mutscreen::core::io::{fasta, msa};
use mutscreen::engine::error::EngineError;
use tracing::info;

pub fn run(args: UngapArgs) -> Result<()> {
    let records = fasta::read_file(&args.input).map_err(EngineError::from)?;
    info!("Read {} aligned record(s) from {:?}", records.len(), args.input);

    let ungapped = msa::ungap_against_query(&records)?;
    fasta::write_file(&args.output, &ungapped).map_err(EngineError::from)?;

    println!(
        "Ungapped {} record(s) into {}",
        ungapped.len(),
        args.output.display()
    );
    Ok(())
}
