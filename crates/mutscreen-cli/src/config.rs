use crate::cli::ScreenArgs;
use crate::error::{CliError, Result};
use mutscreen::core::codon::backtranslate::CodonPolicy;
use mutscreen::core::matrices::MatrixName;
use mutscreen::engine::config::{self as core_config, InputKind, ScreenConfig};
use mutscreen::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Screen parameters loaded from a TOML file. Every field is optional;
/// CLI arguments override whatever the file provides.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialScreenConfig {
    #[serde(rename = "input-kind")]
    pub input_kind: Option<String>,
    pub matrix: Option<String>,
    pub preserve: Option<String>,
    pub positions: Option<String>,
    pub mandatory: Option<String>,
    #[serde(rename = "max-mutations")]
    pub max_mutations: Option<usize>,
    #[serde(rename = "max-combinations")]
    pub max_combinations: Option<u64>,
    #[serde(rename = "legacy-codons")]
    pub legacy_codons: Option<bool>,
}

impl PartialScreenConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!(e),
        })?;
        debug!("Loaded partial configuration from {:?}", path);
        Ok(config)
    }

    /// Merges file values under CLI overrides into a validated core config.
    pub fn merge_with_cli(self, args: &ScreenArgs) -> Result<ScreenConfig> {
        let mut builder = ScreenConfig::builder();

        if let Some(kind) = args.input_kind.as_deref().or(self.input_kind.as_deref()) {
            builder = builder.input(kind.parse::<InputKind>()?);
        }
        if let Some(matrix) = args.matrix.as_deref().or(self.matrix.as_deref()) {
            builder = builder.matrix(
                matrix
                    .parse::<MatrixName>()
                    .map_err(EngineError::from)?,
            );
        }
        if let Some(preserve) = args.preserve.as_deref().or(self.preserve.as_deref()) {
            builder = builder.direction(core_config::parse_preserve_flag(preserve)?);
        }
        if let Some(positions) = args.positions.as_deref().or(self.positions.as_deref()) {
            builder = builder.positions(core_config::parse_positions(positions)?);
        }
        if let Some(mandatory) = args.mandatory.as_deref().or(self.mandatory.as_deref()) {
            builder = builder.mandatory(core_config::parse_positions(mandatory)?);
        }
        if let Some(max) = args.max_mutations.or(self.max_mutations) {
            builder = builder.max_mutations(max);
        }
        if let Some(ceiling) = args.max_combinations.or(self.max_combinations) {
            builder = builder.max_combinations(ceiling);
        }
        if args.legacy_codons || self.legacy_codons.unwrap_or(false) {
            builder = builder.codon_policy(CodonPolicy::LegacyLastEntry);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutscreen::core::matrices::ranking::RankDirection;

    fn bare_args() -> ScreenArgs {
        ScreenArgs {
            sequence: ">WT\nMAVLSK".to_string(),
            input_kind: None,
            positions: None,
            mandatory: None,
            max_mutations: None,
            matrix: None,
            preserve: None,
            legacy_codons: false,
            max_combinations: None,
            names_out: None,
            catalog_out: None,
            config: None,
        }
    }

    #[test]
    fn file_values_fill_unset_arguments() {
        let partial: PartialScreenConfig = toml::from_str(
            r#"
            input-kind = "protein"
            matrix = "Blosum62"
            positions = "1,3,5"
            preserve = "True"
            max-mutations = 2
            "#,
        )
        .unwrap();

        let config = partial.merge_with_cli(&bare_args()).unwrap();
        assert_eq!(config.input, InputKind::Protein);
        assert_eq!(config.matrix, MatrixName::Blosum62);
        assert_eq!(config.positions, vec![0, 2, 4]);
        assert_eq!(config.direction, RankDirection::Descending);
        assert_eq!(config.max_mutations, Some(2));
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let partial: PartialScreenConfig = toml::from_str(
            r#"
            input-kind = "protein"
            matrix = "Blosum62"
            positions = "1,3,5"
            "#,
        )
        .unwrap();

        let mut args = bare_args();
        args.matrix = Some("Pam250".to_string());
        args.positions = Some("2,4".to_string());

        let config = partial.merge_with_cli(&args).unwrap();
        assert_eq!(config.matrix, MatrixName::Pam250);
        assert_eq!(config.positions, vec![1, 3]);
    }

    #[test]
    fn legacy_codons_flag_switches_the_policy() {
        let partial: PartialScreenConfig = toml::from_str(
            r#"
            input-kind = "nucleotide"
            matrix = "Blosum62"
            positions = "1"
            legacy-codons = true
            "#,
        )
        .unwrap();

        let config = partial.merge_with_cli(&bare_args()).unwrap();
        assert_eq!(config.codon_policy, CodonPolicy::LegacyLastEntry);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let result: std::result::Result<PartialScreenConfig, _> =
            toml::from_str("matrx = \"Blosum62\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_values_surface_from_the_builder() {
        let err = PartialScreenConfig::default()
            .merge_with_cli(&bare_args())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::MissingParameter(_))
        ));
    }

    #[test]
    fn reads_a_partial_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        std::fs::write(&path, "matrix = \"Blosum80\"\n").unwrap();
        let partial = PartialScreenConfig::from_file(&path).unwrap();
        assert_eq!(partial.matrix.as_deref(), Some("Blosum80"));
    }

    #[test]
    fn a_broken_config_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screen.toml");
        std::fs::write(&path, "positions = [1,\n").unwrap();
        let err = PartialScreenConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }
}
