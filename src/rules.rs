use fixed_map::Map;

use crate::error::ConfigError;
use crate::terms::{AcOutput, Occupancy, Temperature};

/// One rule: the two antecedent terms are combined by fuzzy AND (minimum)
/// and imply the consequent output term.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rule {
    pub temperature: Temperature,
    pub occupancy: Occupancy,
    pub consequent: AcOutput,
}

impl Rule {
    pub const fn new(temperature: Temperature, occupancy: Occupancy, consequent: AcOutput) -> Self {
        Self {
            temperature,
            occupancy,
            consequent,
        }
    }
}

/// The production firing table: one rule per antecedent pair.
pub const RULES: [Rule; 9] = [
    Rule::new(Temperature::Cold, Occupancy::Empty, AcOutput::High),
    Rule::new(Temperature::Cold, Occupancy::Medium, AcOutput::Medium),
    Rule::new(Temperature::Cold, Occupancy::Crowded, AcOutput::Medium),
    Rule::new(Temperature::Medium, Occupancy::Crowded, AcOutput::Medium),
    Rule::new(Temperature::Medium, Occupancy::Empty, AcOutput::High),
    Rule::new(Temperature::Medium, Occupancy::Medium, AcOutput::Medium),
    Rule::new(Temperature::Hot, Occupancy::Empty, AcOutput::Medium),
    Rule::new(Temperature::Hot, Occupancy::Medium, AcOutput::Low),
    Rule::new(Temperature::Hot, Occupancy::Crowded, AcOutput::Low),
];

/// Total mapping from (temperature term, occupancy term) to an output
/// term. Construction proves totality over the 3x3 grid, so lookups never
/// fall through.
pub struct RuleTable(Map<Temperature, Map<Occupancy, AcOutput>>);

impl RuleTable {
    /// Fails if any antecedent pair is covered twice or not at all.
    pub fn from_rules(rules: &[Rule]) -> Result<Self, ConfigError> {
        let mut table: Map<Temperature, Map<Occupancy, AcOutput>> = Map::new();

        for rule in rules {
            if table.get(rule.temperature).is_none() {
                table.insert(rule.temperature, Map::new());
            }

            let row = table
                .get_mut(rule.temperature)
                .expect("row was just inserted");

            if row.insert(rule.occupancy, rule.consequent).is_some() {
                return Err(ConfigError::DuplicateRule {
                    temperature: rule.temperature,
                    occupancy: rule.occupancy,
                });
            }
        }

        for temperature in Temperature::ALL {
            for occupancy in Occupancy::ALL {
                if table.get(temperature).and_then(|row| row.get(occupancy)).is_none() {
                    return Err(ConfigError::MissingRule {
                        temperature,
                        occupancy,
                    });
                }
            }
        }

        Ok(Self(table))
    }

    pub fn consequent(&self, temperature: Temperature, occupancy: Occupancy) -> AcOutput {
        *self
            .0
            .get(temperature)
            .and_then(|row| row.get(occupancy))
            .expect("rule table is total over the term grid")
    }

    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.0.iter().flat_map(|(temperature, row)| {
            row.iter()
                .map(move |(occupancy, consequent)| Rule::new(temperature, occupancy, *consequent))
        })
    }
}

#[test]
fn test_production_table_is_total() {
    let table = RuleTable::from_rules(&RULES).unwrap();

    assert_eq!(table.iter().count(), 9);
    assert_eq!(
        table.consequent(Temperature::Cold, Occupancy::Empty),
        AcOutput::High
    );
    assert_eq!(
        table.consequent(Temperature::Hot, Occupancy::Crowded),
        AcOutput::Low
    );
    assert_eq!(
        table.consequent(Temperature::Medium, Occupancy::Medium),
        AcOutput::Medium
    );
    assert_eq!(
        table.consequent(Temperature::Hot, Occupancy::Empty),
        AcOutput::Medium
    );
}

#[test]
fn test_missing_rule_rejected() {
    assert_eq!(
        RuleTable::from_rules(&RULES[..8]).err(),
        Some(ConfigError::MissingRule {
            temperature: Temperature::Hot,
            occupancy: Occupancy::Crowded,
        })
    );
}

#[test]
fn test_duplicate_rule_rejected() {
    let mut rules = RULES.to_vec();

    rules.push(Rule::new(
        Temperature::Cold,
        Occupancy::Empty,
        AcOutput::Low,
    ));

    assert_eq!(
        RuleTable::from_rules(&rules).err(),
        Some(ConfigError::DuplicateRule {
            temperature: Temperature::Cold,
            occupancy: Occupancy::Empty,
        })
    );
}
