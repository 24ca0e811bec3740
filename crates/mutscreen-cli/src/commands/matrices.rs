use crate::error::Result;
use mutscreen::core::matrices::{MatrixName, SubstitutionMatrix};
use mutscreen::engine::error::EngineError;

pub fn run() -> Result<()> {
    println!("Supported substitution matrices:");
    for name in MatrixName::ALL {
        let matrix = SubstitutionMatrix::load(name).map_err(EngineError::from)?;
        println!("  {:<10} {} symbols", name.to_string(), matrix.alphabet().len());
    }
    Ok(())
}
