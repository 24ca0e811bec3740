//! The mutant catalog: enumeration-ordered storage and export.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::EngineError;
use crate::core::models::mutant::Mutant;
use crate::core::models::sequence::{DnaSequence, ProteinSequence};

/// All mutants of one screening run, in enumeration order, with a name
/// index for lookups. Names are unique: the selection policy is a pure
/// function of the wild type, so a colliding name means the run is broken
/// and insertion fails instead of overwriting.
#[derive(Debug, Default)]
pub struct MutantCatalog {
    mutants: Vec<Mutant>,
    index: HashMap<String, usize>,
}

impl MutantCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mutant: Mutant) -> Result<(), EngineError> {
        if self.index.contains_key(&mutant.name) {
            return Err(EngineError::DuplicateMutantName(mutant.name.clone()));
        }
        self.index.insert(mutant.name.clone(), self.mutants.len());
        self.mutants.push(mutant);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Mutant> {
        self.index.get(name).map(|&i| &self.mutants[i])
    }

    /// Mutants in enumeration order.
    pub fn mutants(&self) -> &[Mutant] {
        &self.mutants
    }

    pub fn len(&self) -> usize {
        self.mutants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutants.is_empty()
    }

    /// Name-to-protein view, enumeration order.
    pub fn protein_sequences(&self) -> impl Iterator<Item = (&str, &ProteinSequence)> {
        self.mutants.iter().map(|m| (m.name.as_str(), &m.protein))
    }

    /// Name-to-nucleotide view; empty for protein-input runs.
    pub fn nucleotide_sequences(&self) -> impl Iterator<Item = (&str, &DnaSequence)> {
        self.mutants
            .iter()
            .filter_map(|m| m.nucleotide.as_ref().map(|n| (m.name.as_str(), n)))
    }

    /// Writes the newline-joined name list consumed by the external scorer:
    /// one name per line, no header, enumeration order.
    pub fn write_names(&self, path: &Path) -> Result<(), EngineError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let names: Vec<&str> = self.mutants.iter().map(|m| m.name.as_str()).collect();
        writer.write_all(names.join("\n").as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes a tab-separated export with name, protein and nucleotide
    /// columns; the nucleotide column is empty for protein-input runs.
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), EngineError> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        tsv.write_record(["name", "protein", "nucleotide"])?;
        for mutant in &self.mutants {
            let nucleotide = mutant
                .nucleotide
                .as_ref()
                .map(DnaSequence::to_string)
                .unwrap_or_default();
            tsv.write_record([
                mutant.name.as_str(),
                &mutant.protein.to_string(),
                &nucleotide,
            ])?;
        }
        tsv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mutant(name: &str, protein: &str) -> Mutant {
        Mutant {
            name: name.to_string(),
            edits: Mutant::parse_name(name).unwrap(),
            protein: protein.parse().unwrap(),
            nucleotide: None,
        }
    }

    mod insert_tests {
        use super::*;

        #[test]
        fn preserves_enumeration_order() {
            let mut catalog = MutantCatalog::new();
            catalog.insert(mutant("M1L", "LAVLSK")).unwrap();
            catalog.insert(mutant("V3I", "MAILSK")).unwrap();
            let names: Vec<&str> = catalog.mutants().iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names, ["M1L", "V3I"]);
        }

        #[test]
        fn looks_up_by_name() {
            let mut catalog = MutantCatalog::new();
            catalog.insert(mutant("M1L", "LAVLSK")).unwrap();
            assert_eq!(catalog.get("M1L").unwrap().protein.to_string(), "LAVLSK");
            assert!(catalog.get("V3I").is_none());
        }

        #[test]
        fn rejects_duplicate_names() {
            let mut catalog = MutantCatalog::new();
            catalog.insert(mutant("M1L", "LAVLSK")).unwrap();
            let err = catalog.insert(mutant("M1L", "LAVLSK")).unwrap_err();
            assert!(matches!(err, EngineError::DuplicateMutantName(name) if name == "M1L"));
            assert_eq!(catalog.len(), 1);
        }
    }

    mod export_tests {
        use super::*;

        #[test]
        fn name_list_is_newline_joined_without_a_header() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("names.txt");
            let mut catalog = MutantCatalog::new();
            catalog.insert(mutant("M1L", "LAVLSK")).unwrap();
            catalog.insert(mutant("M1L,V3I", "LAILSK")).unwrap();
            catalog.write_names(&path).unwrap();
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "M1L\nM1L,V3I");
        }

        #[test]
        fn tsv_export_carries_all_columns() {
            let mut catalog = MutantCatalog::new();
            catalog.insert(mutant("M1L", "LAVLSK")).unwrap();
            let mut buffer = Vec::new();
            catalog.write_tsv(&mut buffer).unwrap();
            let text = String::from_utf8(buffer).unwrap();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines[0], "name\tprotein\tnucleotide");
            assert_eq!(lines[1], "M1L\tLAVLSK\t");
        }

        #[test]
        fn sequence_views_split_by_kind() {
            let mut catalog = MutantCatalog::new();
            catalog.insert(mutant("M1L", "LAVLSK")).unwrap();
            assert_eq!(catalog.protein_sequences().count(), 1);
            assert_eq!(catalog.nucleotide_sequences().count(), 0);
        }
    }
}
