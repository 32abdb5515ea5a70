//! Text rendering of a rule set, in the layout of the printed manual.

use std::fmt;

use crate::core::{Color, STAGE_COUNT};

use super::seed::RuleSeedConfig;

/// Display adapter for a rule set's manual page.
pub struct Manual<'a>(pub &'a RuleSeedConfig);

impl fmt::Display for Manual<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;

        writeln!(f, "Rule seed {}", config.seed)?;
        writeln!(f)?;

        writeln!(f, "Table 1 rows (use the first that applies):")?;
        for (row, description) in config.criterion_descriptions().iter().enumerate() {
            writeln!(f, "  {}. {}", row + 1, description)?;
        }
        writeln!(f)?;

        writeln!(f, "Table 1 column (color of the flash at this position):")?;
        for stage in 0..STAGE_COUNT {
            writeln!(
                f,
                "  Stage {}: flash {}",
                stage + 1,
                config.stage_column_positions[stage] + 1
            )?;
        }
        writeln!(f)?;

        write!(f, "{:>4}", "")?;
        for color in Color::ALL {
            write!(f, " {:>6}", color.to_string())?;
        }
        writeln!(f)?;
        for (row, cells) in config.cross_ref_table.iter().enumerate() {
            write!(f, "{:>4}", row + 1)?;
            for code in cells {
                write!(f, " {:>6}", code.to_string())?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Table 2 rows (press the color of every row that applies):")?;
        for (row, description) in config.environment_descriptions().iter().enumerate() {
            writeln!(f, "  {}. {}", row + 1, description)?;
        }
        writeln!(f)?;

        write!(f, "{:>4}", "")?;
        for letter in config.second_table_alphabet {
            write!(f, " {:>6}", letter)?;
        }
        writeln!(f)?;
        for (row, cells) in config.second_table.iter().enumerate() {
            write!(f, "{:>4}", row + 1)?;
            for color in cells {
                write!(f, " {:>6}", color.to_string())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Render the manual page for a rule set.
#[must_use]
pub fn render_manual(config: &RuleSeedConfig) -> String {
    Manual(config).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSeedGenerator;

    #[test]
    fn test_canonical_manual() {
        let manual = render_manual(&RuleSeedConfig::canonical());

        assert!(manual.starts_with("Rule seed 1\n"));
        assert!(manual.contains("  1. If two opposite colors didn't flash\n"));
        assert!(manual.contains("  6. Otherwise\n"));
        assert!(manual.contains("  Stage 3: flash 3\n"));
        assert!(manual.contains("  2. at least 3 batteries\n"));
        assert!(manual.contains("   1    ECA    DDD    FEF    AFC    HAE    CHH\n"));
        assert!(manual.contains("   1 Orange  Green   Blue Purple Yellow    Red\n"));
    }

    #[test]
    fn test_manual_lists_every_row() {
        let config = RuleSeedGenerator::new().generate(2024);
        let manual = render_manual(&config);

        for description in config.criterion_descriptions() {
            assert!(manual.contains(&description), "missing {description}");
        }
        for description in config.environment_descriptions() {
            assert!(manual.contains(&description), "missing {description}");
        }
    }
}
