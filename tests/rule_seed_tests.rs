//! Rule-seed integration tests.
//!
//! These tests pin the canonical rule set and check that generated rule sets
//! are reproducible and well-formed across the whole seed range.

use simon_screams::core::{Color, PuzzleRng, COLOR_COUNT, STAGE_COUNT};
use simon_screams::criteria::catalog::{
    AT_MOST_ONE_OF_PIVOTS, FLASH_ADJACENT_RETURN, THREE_ADJACENT_CLOCKWISE, TWO_ADJACENT_CLOCKWISE,
    TWO_OPPOSITE_MISSING,
};
use simon_screams::criteria::{
    Criterion, CriterionId, EnvironmentFeature, ThresholdMode, CATALOG, CATALOG_SIZE,
};
use simon_screams::rules::{
    cross_ref_is_well_formed, render_manual, CrossRefCode, RuleSeedConfig, RuleSeedGenerator,
    ACTIVE_CRITERIA, CANONICAL_CROSS_REF, CANONICAL_SECOND_TABLE, COLUMN_POSITION_LIMITS,
    SECOND_TABLE_ALPHABET,
};

const SAMPLE_SEEDS: [i64; 8] = [0, 2, 3, 42, -1, -9000, i64::MAX, i64::MIN];

// =============================================================================
// Canonical Fixture Tests
// =============================================================================

/// Test the canonical first table, row by row.
#[test]
fn test_canonical_first_table() {
    let config = RuleSeedGenerator::new().generate(1);
    let ids: Vec<CriterionId> = config.active_criteria.iter().map(|a| a.id()).collect();
    assert_eq!(
        ids,
        vec![
            TWO_OPPOSITE_MISSING,
            AT_MOST_ONE_OF_PIVOTS,
            THREE_ADJACENT_CLOCKWISE,
            FLASH_ADJACENT_RETURN,
            TWO_ADJACENT_CLOCKWISE,
            CriterionId::OTHERWISE,
        ]
    );
    assert_eq!(
        config.active_criteria[1].pivots,
        Some([Color::Red, Color::Green, Color::Blue])
    );
}

/// Test the canonical second-table predicates.
#[test]
fn test_canonical_environment_order() {
    let config = RuleSeedGenerator::new().generate(1);
    let features: Vec<EnvironmentFeature> = config.environment_order.iter().map(|p| p.feature).collect();
    assert_eq!(features, EnvironmentFeature::CANONICAL_ORDER.to_vec());
    assert!(config
        .environment_order
        .iter()
        .all(|p| p.mode == ThresholdMode::AtLeast));
}

/// Test a few pinned cells of the canonical tables.
#[test]
fn test_canonical_table_cells() {
    assert_eq!(CANONICAL_CROSS_REF[0][0], CrossRefCode::from_ascii("ECA"));
    assert_eq!(CANONICAL_CROSS_REF[2][0], CrossRefCode::from_ascii("HHF"));
    assert_eq!(CANONICAL_CROSS_REF[5][5], CrossRefCode::from_ascii("AFC"));
    assert_eq!(CANONICAL_SECOND_TABLE[0][0], Color::Orange);
    assert_eq!(CANONICAL_SECOND_TABLE[5][5], Color::Yellow);
    assert_eq!(SECOND_TABLE_ALPHABET, ['A', 'C', 'D', 'E', 'F', 'H']);
}

/// Test that seed 1 serializes identically on every run.
#[test]
fn test_canonical_serialization_is_stable() {
    let generated = serde_json::to_value(RuleSeedGenerator::new().generate(1)).unwrap();
    let fixture = serde_json::to_value(RuleSeedConfig::canonical()).unwrap();
    assert_eq!(generated, fixture);
    assert_eq!(generated["seed"], 1);
    assert_eq!(generated["stage_column_positions"], serde_json::json!([0, 1, 2]));
}

/// Test the canonical manual header and first rule.
#[test]
fn test_canonical_manual() {
    let manual = render_manual(&RuleSeedConfig::canonical());
    assert!(manual.starts_with("Rule seed 1\n"));
    assert!(manual.contains("  Stage 3: flash 3\n"));
    assert!(manual.contains("  1. at least 3 indicators\n"));
}

// =============================================================================
// Generated Rule Set Tests
// =============================================================================

/// Test that generation is a pure function of the seed.
#[test]
fn test_generation_is_deterministic() {
    let a = RuleSeedGenerator::new();
    let b = RuleSeedGenerator::new();
    for seed in SAMPLE_SEEDS {
        assert_eq!(a.generate(seed), b.generate(seed), "seed {seed}");
        assert_eq!(
            render_manual(&a.generate(seed)),
            render_manual(&b.generate(seed)),
            "seed {seed}"
        );
    }
}

/// Test the structural invariants of generated rule sets.
#[test]
fn test_generated_rule_sets_are_well_formed() {
    let generator = RuleSeedGenerator::new();
    for seed in SAMPLE_SEEDS {
        let config = generator.generate(seed);

        assert!(config.active_criteria[COLOR_COUNT - 1].criterion.is_otherwise());
        assert!(config.active_criteria[..COLOR_COUNT - 1]
            .iter()
            .all(|a| !a.criterion.is_otherwise()));
        assert!(cross_ref_is_well_formed(&config.cross_ref_table));

        let mut features: Vec<EnvironmentFeature> =
            config.environment_order.iter().map(|p| p.feature).collect();
        features.sort_by_key(|f| *f as usize);
        features.dedup();
        assert_eq!(features.len(), COLOR_COUNT);

        let positions = config.stage_column_positions;
        for (stage, &position) in positions.iter().enumerate() {
            assert!(position <= COLUMN_POSITION_LIMITS[stage]);
            if stage > 0 {
                assert!(position > positions[stage - 1]);
            }
        }
    }
}

/// Test that the extreme seeds are accepted and differ from the canonical set.
#[test]
fn test_extreme_seeds() {
    let generator = RuleSeedGenerator::new();
    let canonical = RuleSeedConfig::canonical();
    for seed in [i64::MIN, i64::MAX, 0, -1] {
        let config = generator.generate(seed);
        assert_eq!(config.seed, seed);
        assert!(!config.is_canonical());
        assert_ne!(config, canonical);
    }
}

/// Test that selection is uniform over the catalog: weight only orders rows,
/// so even the heaviest criteria get drawn.
#[test]
fn test_every_criterion_is_selectable() {
    let generator = RuleSeedGenerator::new();
    let mut drawn = [0usize; CATALOG_SIZE];
    let mut at_least = 0;
    let mut at_most = 0;

    for seed in 0..2000 {
        if seed == 1 {
            continue;
        }
        let config = generator.generate(seed);
        for active in &config.active_criteria[..ACTIVE_CRITERIA] {
            drawn[active.id().raw() as usize] += 1;
        }
        match config.threshold_mode {
            ThresholdMode::AtLeast => at_least += 1,
            ThresholdMode::AtMost => at_most += 1,
        }
    }

    for (criterion, count) in CATALOG.iter().zip(drawn) {
        assert!(count > 0, "never drawn: {} (weight {})", criterion.name, criterion.weight);
    }
    // ids 12 and 13 carry the largest weights
    assert!(drawn[12] > 0 && drawn[13] > 0);
    assert!(at_least > 0 && at_most > 0);
}

/// Test that non-canonical seeds really permute both tables.
#[test]
fn test_generated_tables_differ_from_canonical() {
    let generator = RuleSeedGenerator::new();
    for seed in [0, 2, 3, 42, -1] {
        let config = generator.generate(seed);
        assert_ne!(config.cross_ref_table, CANONICAL_CROSS_REF, "seed {seed}");
        assert_ne!(config.second_table, CANONICAL_SECOND_TABLE, "seed {seed}");
    }
}

/// Test every generated cell against the canonical cell picked by the
/// permutations drawn, in order, from the seed's stream.
#[test]
fn test_generated_tables_follow_drawn_permutations() {
    let generator = RuleSeedGenerator::new();
    for seed in [0, 2, -7, 4242, i64::MIN] {
        let config = generator.generate(seed);

        let mut rng = PuzzleRng::from_rule_seed(seed);
        rng.warm_up();

        // criteria: shuffle the catalog, keep five, order by weight
        let mut candidates: Vec<&Criterion> = CATALOG.iter().collect();
        rng.shuffle(&mut candidates);
        candidates.truncate(ACTIVE_CRITERIA);
        candidates.sort_by_key(|c| c.weight);
        for (active, expected) in config.active_criteria.iter().zip(&candidates) {
            assert_eq!(active.id(), expected.id, "seed {seed}");
        }
        for criterion in &candidates {
            if criterion.requires_pivots {
                let mut colors = Color::ALL;
                rng.shuffle(&mut colors);
            }
        }

        // threshold mode, then the environment row order
        let expected_mode = if rng.gen_bool(0.5) {
            ThresholdMode::AtLeast
        } else {
            ThresholdMode::AtMost
        };
        assert_eq!(config.threshold_mode, expected_mode, "seed {seed}");
        let mut order = EnvironmentFeature::CANONICAL_ORDER;
        rng.shuffle(&mut order);
        let features: Vec<EnvironmentFeature> = config.environment_order.iter().map(|p| p.feature).collect();
        assert_eq!(features, order.to_vec(), "seed {seed}");

        // one row and one column permutation per stage
        let mut row_perms = [[0usize; COLOR_COUNT]; STAGE_COUNT];
        let mut col_perms = [[0usize; COLOR_COUNT]; STAGE_COUNT];
        for stage in 0..STAGE_COUNT {
            row_perms[stage] = rng.permutation();
            col_perms[stage] = rng.permutation();
        }
        for r in 0..COLOR_COUNT {
            for c in 0..COLOR_COUNT {
                for s in 0..STAGE_COUNT {
                    let canonical = CANONICAL_CROSS_REF[row_perms[s][r]][col_perms[s][c]];
                    assert_eq!(
                        config.cross_ref_table[r][c].letter(s),
                        canonical.letter(s),
                        "seed {seed}, cell ({r}, {c}), stage {s}"
                    );
                }
            }
        }

        let mut lowest = 0;
        for (stage, &limit) in COLUMN_POSITION_LIMITS.iter().enumerate() {
            let position = rng.gen_range_inclusive(lowest..=limit);
            assert_eq!(config.stage_column_positions[stage], position, "seed {seed}");
            lowest = position + 1;
        }

        let row_perm: [usize; COLOR_COUNT] = rng.permutation();
        let col_perm: [usize; COLOR_COUNT] = rng.permutation();
        for r in 0..COLOR_COUNT {
            for c in 0..COLOR_COUNT {
                assert_eq!(
                    config.second_table[r][c],
                    CANONICAL_SECOND_TABLE[row_perm[r]][col_perm[c]],
                    "seed {seed}, cell ({r}, {c})"
                );
            }
        }
    }
}
