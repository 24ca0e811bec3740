use super::error::EngineError;
use crate::core::codon::backtranslate::CodonPolicy;
use crate::core::matrices::MatrixName;
use crate::core::matrices::ranking::RankDirection;

/// Default ceiling on the number of position subsets a single screen may
/// enumerate. Past this, the run is refused before anything is allocated.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1_000_000;

/// Kind of wild-type sequence supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Protein,
    Nucleotide,
}

impl std::str::FromStr for InputKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protein" => Ok(InputKind::Protein),
            "nucleotide" => Ok(InputKind::Nucleotide),
            other => Err(EngineError::UnknownInputKind(other.to_string())),
        }
    }
}

/// Maps the external preserve flag onto a ranking direction. Only the
/// exact strings `"True"` and `"False"` are accepted.
pub fn parse_preserve_flag(flag: &str) -> Result<RankDirection, EngineError> {
    match flag {
        "True" => Ok(RankDirection::Descending),
        "False" => Ok(RankDirection::Ascending),
        other => Err(EngineError::InvalidPolicy(other.to_string())),
    }
}

/// Parses a comma-separated list of 1-based positions into 0-based indices.
pub fn parse_positions(spec: &str) -> Result<Vec<usize>, EngineError> {
    spec.split(',')
        .map(str::trim)
        .map(|token| {
            let value: usize = token.parse().map_err(|_| EngineError::InvalidPosition {
                value: token.to_string(),
                reason: "not a positive integer".to_string(),
            })?;
            if value == 0 {
                return Err(EngineError::InvalidPosition {
                    value: token.to_string(),
                    reason: "positions are 1-based".to_string(),
                });
            }
            Ok(value - 1)
        })
        .collect()
}

/// Fully validated parameters for one screening run. Positions are stored
/// 0-based in caller order; `mandatory` is a subset of `positions`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub input: InputKind,
    pub matrix: MatrixName,
    pub direction: RankDirection,
    pub codon_policy: CodonPolicy,
    pub positions: Vec<usize>,
    pub mandatory: Vec<usize>,
    pub max_mutations: Option<usize>,
    pub max_combinations: u64,
}

impl ScreenConfig {
    pub fn builder() -> ScreenConfigBuilder {
        ScreenConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ScreenConfigBuilder {
    input: Option<InputKind>,
    matrix: Option<MatrixName>,
    direction: Option<RankDirection>,
    codon_policy: Option<CodonPolicy>,
    positions: Option<Vec<usize>>,
    mandatory: Vec<usize>,
    max_mutations: Option<usize>,
    max_combinations: Option<u64>,
}

impl ScreenConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, input: InputKind) -> Self {
        self.input = Some(input);
        self
    }
    pub fn matrix(mut self, matrix: MatrixName) -> Self {
        self.matrix = Some(matrix);
        self
    }
    pub fn direction(mut self, direction: RankDirection) -> Self {
        self.direction = Some(direction);
        self
    }
    pub fn codon_policy(mut self, policy: CodonPolicy) -> Self {
        self.codon_policy = Some(policy);
        self
    }
    /// Positions to mutate, 0-based.
    pub fn positions(mut self, positions: Vec<usize>) -> Self {
        self.positions = Some(positions);
        self
    }
    /// Positions every mutant must include, 0-based.
    pub fn mandatory(mut self, mandatory: Vec<usize>) -> Self {
        self.mandatory = mandatory;
        self
    }
    pub fn max_mutations(mut self, max: usize) -> Self {
        self.max_mutations = Some(max);
        self
    }
    pub fn max_combinations(mut self, ceiling: u64) -> Self {
        self.max_combinations = Some(ceiling);
        self
    }

    pub fn build(self) -> Result<ScreenConfig, EngineError> {
        let input = self.input.ok_or(EngineError::MissingParameter("input"))?;
        let matrix = self.matrix.ok_or(EngineError::MissingParameter("matrix"))?;
        let positions = self
            .positions
            .ok_or(EngineError::MissingParameter("positions"))?;
        if positions.is_empty() {
            return Err(EngineError::MissingParameter("positions"));
        }

        for (i, &position) in positions.iter().enumerate() {
            if positions[..i].contains(&position) {
                return Err(EngineError::InvalidPosition {
                    value: (position + 1).to_string(),
                    reason: "listed more than once".to_string(),
                });
            }
        }
        for (i, &position) in self.mandatory.iter().enumerate() {
            if self.mandatory[..i].contains(&position) {
                return Err(EngineError::InvalidPosition {
                    value: (position + 1).to_string(),
                    reason: "listed more than once as mandatory".to_string(),
                });
            }
            if !positions.contains(&position) {
                return Err(EngineError::InvalidPosition {
                    value: (position + 1).to_string(),
                    reason: "mandatory position is not among the positions to mutate".to_string(),
                });
            }
        }

        Ok(ScreenConfig {
            input,
            matrix,
            direction: self.direction.unwrap_or_default(),
            codon_policy: self.codon_policy.unwrap_or_default(),
            positions,
            mandatory: self.mandatory,
            max_mutations: self.max_mutations,
            max_combinations: self.max_combinations.unwrap_or(DEFAULT_MAX_COMBINATIONS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> ScreenConfigBuilder {
        ScreenConfig::builder()
            .input(InputKind::Protein)
            .matrix(MatrixName::Blosum62)
            .positions(vec![0, 2, 4])
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn positions_are_one_based_externally() {
            assert_eq!(parse_positions("1,3,5").unwrap(), vec![0, 2, 4]);
            assert_eq!(parse_positions(" 2 , 4 ").unwrap(), vec![1, 3]);
        }

        #[test]
        fn rejects_zero_and_garbage_positions() {
            assert!(matches!(
                parse_positions("0"),
                Err(EngineError::InvalidPosition { .. })
            ));
            assert!(matches!(
                parse_positions("1,x"),
                Err(EngineError::InvalidPosition { .. })
            ));
            assert!(matches!(
                parse_positions(""),
                Err(EngineError::InvalidPosition { .. })
            ));
        }

        #[test]
        fn preserve_flag_accepts_exactly_true_and_false() {
            assert_eq!(parse_preserve_flag("True").unwrap(), RankDirection::Descending);
            assert_eq!(parse_preserve_flag("False").unwrap(), RankDirection::Ascending);
            assert!(matches!(
                parse_preserve_flag("true"),
                Err(EngineError::InvalidPolicy(_))
            ));
            assert!(matches!(
                parse_preserve_flag("yes"),
                Err(EngineError::InvalidPolicy(_))
            ));
        }

        #[test]
        fn input_kind_parses_strictly() {
            assert_eq!("protein".parse::<InputKind>().unwrap(), InputKind::Protein);
            assert_eq!(
                "nucleotide".parse::<InputKind>().unwrap(),
                InputKind::Nucleotide
            );
            assert!(matches!(
                "dna".parse::<InputKind>(),
                Err(EngineError::UnknownInputKind(_))
            ));
        }
    }

    mod builder_tests {
        use super::*;
        use crate::core::codon::backtranslate::CodonPolicy;

        #[test]
        fn builds_with_defaults() {
            let config = minimal_builder().build().unwrap();
            assert_eq!(config.direction, RankDirection::Descending);
            assert_eq!(config.codon_policy, CodonPolicy::MinimumEditDistance);
            assert_eq!(config.max_combinations, DEFAULT_MAX_COMBINATIONS);
            assert_eq!(config.max_mutations, None);
            assert!(config.mandatory.is_empty());
        }

        #[test]
        fn reports_missing_required_parameters() {
            let err = ScreenConfig::builder()
                .input(InputKind::Protein)
                .matrix(MatrixName::Blosum62)
                .build()
                .unwrap_err();
            assert!(matches!(err, EngineError::MissingParameter("positions")));
        }

        #[test]
        fn rejects_empty_positions() {
            let err = ScreenConfig::builder()
                .input(InputKind::Protein)
                .matrix(MatrixName::Blosum62)
                .positions(Vec::new())
                .build()
                .unwrap_err();
            assert!(matches!(err, EngineError::MissingParameter("positions")));
        }

        #[test]
        fn rejects_duplicate_positions() {
            let err = minimal_builder().positions(vec![0, 2, 0]).build().unwrap_err();
            assert!(matches!(err, EngineError::InvalidPosition { .. }));
        }

        #[test]
        fn mandatory_must_be_a_subset_of_positions() {
            let err = minimal_builder().mandatory(vec![1]).build().unwrap_err();
            assert!(matches!(err, EngineError::InvalidPosition { .. }));

            let config = minimal_builder().mandatory(vec![2]).build().unwrap();
            assert_eq!(config.mandatory, vec![2]);
        }
    }
}
