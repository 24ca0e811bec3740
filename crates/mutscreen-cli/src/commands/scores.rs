use crate::cli::ScoresArgs;
use crate::error::Result;
use mutscreen::core::io::scores::{MutantScores, ScreenMatrix};

pub fn run(args: ScoresArgs) -> Result<()> {
    if args.screening {
        let matrix = ScreenMatrix::read_file(&args.input)?;
        println!(
            "Screening grid: {} residue(s) x {} position(s)",
            matrix.residues().len(),
            matrix.positions()
        );
    } else {
        let scores = MutantScores::read_file(&args.input)?;
        for (name, score) in scores.entries() {
            println!("{}\t{}", name, score);
        }
    }
    Ok(())
}
