//! Environment predicates over read-only host state.
//!
//! The host exposes six counts (ports, indicators, batteries, serial-number
//! digits and letters, battery holders). Each environment predicate compares
//! one count against [`ENVIRONMENT_THRESHOLD`], either "at least" or "at
//! most" depending on the rule seed's [`ThresholdMode`].

use serde::{Deserialize, Serialize};

/// Threshold every environment predicate compares against.
pub const ENVIRONMENT_THRESHOLD: u32 = 3;

/// Host accessors for the environment counts.
///
/// Queried exactly once per session, when it activates.
pub trait EnvironmentSource {
    fn port_count(&self) -> u32;
    fn indicator_count(&self) -> u32;
    fn battery_count(&self) -> u32;
    fn serial_digit_count(&self) -> u32;
    fn serial_letter_count(&self) -> u32;
    fn battery_holder_count(&self) -> u32;
}

/// Captured environment counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub port_count: u32,
    pub indicator_count: u32,
    pub battery_count: u32,
    pub serial_digit_count: u32,
    pub serial_letter_count: u32,
    pub battery_holder_count: u32,
}

impl EnvironmentSnapshot {
    /// Read every count from a host source once.
    pub fn capture<S: EnvironmentSource + ?Sized>(source: &S) -> Self {
        Self {
            port_count: source.port_count(),
            indicator_count: source.indicator_count(),
            battery_count: source.battery_count(),
            serial_digit_count: source.serial_digit_count(),
            serial_letter_count: source.serial_letter_count(),
            battery_holder_count: source.battery_holder_count(),
        }
    }

    /// Count for a feature.
    #[must_use]
    pub fn get(&self, feature: EnvironmentFeature) -> u32 {
        match feature {
            EnvironmentFeature::Ports => self.port_count,
            EnvironmentFeature::Indicators => self.indicator_count,
            EnvironmentFeature::Batteries => self.battery_count,
            EnvironmentFeature::SerialDigits => self.serial_digit_count,
            EnvironmentFeature::SerialLetters => self.serial_letter_count,
            EnvironmentFeature::BatteryHolders => self.battery_holder_count,
        }
    }
}

impl EnvironmentSource for EnvironmentSnapshot {
    fn port_count(&self) -> u32 {
        self.port_count
    }

    fn indicator_count(&self) -> u32 {
        self.indicator_count
    }

    fn battery_count(&self) -> u32 {
        self.battery_count
    }

    fn serial_digit_count(&self) -> u32 {
        self.serial_digit_count
    }

    fn serial_letter_count(&self) -> u32 {
        self.serial_letter_count
    }

    fn battery_holder_count(&self) -> u32 {
        self.battery_holder_count
    }
}

/// One of the six host counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentFeature {
    Ports,
    Indicators,
    Batteries,
    SerialDigits,
    SerialLetters,
    BatteryHolders,
}

impl EnvironmentFeature {
    /// Canonical row order of the second table.
    pub const CANONICAL_ORDER: [EnvironmentFeature; 6] = [
        EnvironmentFeature::Indicators,
        EnvironmentFeature::Batteries,
        EnvironmentFeature::Ports,
        EnvironmentFeature::SerialDigits,
        EnvironmentFeature::SerialLetters,
        EnvironmentFeature::BatteryHolders,
    ];

    /// Plural noun used in rule text.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            EnvironmentFeature::Ports => "ports",
            EnvironmentFeature::Indicators => "indicators",
            EnvironmentFeature::Batteries => "batteries",
            EnvironmentFeature::SerialDigits => "digits in the serial number",
            EnvironmentFeature::SerialLetters => "letters in the serial number",
            EnvironmentFeature::BatteryHolders => "battery holders",
        }
    }
}

/// Comparison direction shared by all six predicates of a rule seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMode {
    /// Count ≥ threshold.
    AtLeast,
    /// Count ≤ threshold.
    AtMost,
}

impl ThresholdMode {
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            ThresholdMode::AtLeast => "at least",
            ThresholdMode::AtMost => "at most",
        }
    }
}

/// A threshold test over one host count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentPredicate {
    pub feature: EnvironmentFeature,
    pub mode: ThresholdMode,
}

impl EnvironmentPredicate {
    #[must_use]
    pub const fn new(feature: EnvironmentFeature, mode: ThresholdMode) -> Self {
        Self { feature, mode }
    }

    /// The six predicates for a mode, in canonical order.
    #[must_use]
    pub fn all(mode: ThresholdMode) -> [EnvironmentPredicate; 6] {
        EnvironmentFeature::CANONICAL_ORDER.map(|feature| Self::new(feature, mode))
    }

    /// Evaluate against a snapshot.
    #[must_use]
    pub fn holds(&self, snapshot: &EnvironmentSnapshot) -> bool {
        let value = snapshot.get(self.feature);
        match self.mode {
            ThresholdMode::AtLeast => value >= ENVIRONMENT_THRESHOLD,
            ThresholdMode::AtMost => value <= ENVIRONMENT_THRESHOLD,
        }
    }
}

impl std::fmt::Display for EnvironmentPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.mode.phrase(),
            ENVIRONMENT_THRESHOLD,
            self.feature.noun()
        )
    }
}
