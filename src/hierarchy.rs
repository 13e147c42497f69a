//! Unit hierarchy - tier tables, the ×3 scaling law, and formula text.
//!
//! Two built-in schemes share one table-driven implementation; they differ
//! only in tier names, accent color, and how the tree expands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{BASE_POPULATION, TIER_FACTOR};
use crate::expansion::ExpansionMode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("tier index {index} out of range (scheme has {count} tiers)")]
    OutOfRange { index: usize, count: usize },
}

// ============================================================================
// SCHEMES
// ============================================================================

/// Identifies one of the built-in unit schemes. Persisted in user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemeId {
    /// 排 → 连 → 团 → 旅 → 师 → 军, cascading expansion.
    #[default]
    Pla,
    /// squad → company → … → army, one tier open at a time.
    Field,
}

impl SchemeId {
    pub const ALL: [SchemeId; 2] = [SchemeId::Pla, SchemeId::Field];

    pub fn scheme(self) -> &'static UnitScheme {
        match self {
            SchemeId::Pla => &PLA,
            SchemeId::Field => &FIELD,
        }
    }
}

/// One configurable unit-naming scheme. All scaling comes from the shared
/// constants; the table only carries presentation.
pub struct UnitScheme {
    pub id: SchemeId,
    pub label: &'static str,
    /// Tier names ordered smallest to largest. Index 0 is the base tier.
    pub tiers: &'static [&'static str],
    /// Word appended after headcounts ("人" / "people").
    pub people_word: &'static str,
    /// Expression the algebra input starts with.
    pub default_expr: &'static str,
    pub expansion: ExpansionMode,
    /// Accent color for node highlights and marker boxes.
    pub accent: (u8, u8, u8),
}

pub static PLA: UnitScheme = UnitScheme {
    id: SchemeId::Pla,
    label: "排…军 (PLA)",
    tiers: &["排", "连", "团", "旅", "师", "军"],
    people_word: "人",
    default_expr: "2 团 + 1 连",
    expansion: ExpansionMode::Cascade,
    accent: (214, 138, 60),
};

pub static FIELD: UnitScheme = UnitScheme {
    id: SchemeId::Field,
    label: "squad…army",
    tiers: &["squad", "company", "battalion", "regiment", "brigade", "division", "army"],
    people_word: "people",
    default_expr: "2 battalion + 1 company",
    expansion: ExpansionMode::Single,
    accent: (80, 140, 220),
};

// ============================================================================
// TABLE OPERATIONS
// ============================================================================

impl UnitScheme {
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    fn check(&self, index: usize) -> Result<(), HierarchyError> {
        if index < self.tiers.len() {
            Ok(())
        } else {
            Err(HierarchyError::OutOfRange { index, count: self.tiers.len() })
        }
    }

    /// Base-unit multiples of tier `index`: 3^index.
    pub fn scale_at(&self, index: usize) -> Result<i64, HierarchyError> {
        self.check(index)?;
        Ok(TIER_FACTOR.pow(index as u32))
    }

    /// Headcount of one unit of tier `index`: 10 * 3^index.
    pub fn population_at(&self, index: usize) -> Result<i64, HierarchyError> {
        Ok(BASE_POPULATION * self.scale_at(index)?)
    }

    /// Short per-node annotation: the base headcount for tier 0, "×3" above.
    pub fn factor_label(&self, index: usize) -> String {
        if index == 0 {
            format!("{} {}", BASE_POPULATION, self.people_word)
        } else {
            format!("×{}", TIER_FACTOR)
        }
    }

    /// The multiplication chain for one tier, with the ×3 factors written out
    /// rather than collapsed into a power:
    /// `1 团 = 3 连 = 3 × 3 × 10 = 90 人`.
    pub fn formula_line(&self, index: usize) -> Result<String, HierarchyError> {
        let total = self.population_at(index)?;
        if index == 0 {
            return Ok(format!("1 {} = {} {}", self.tiers[0], BASE_POPULATION, self.people_word));
        }
        let chain = vec![TIER_FACTOR.to_string(); index].join(" × ");
        Ok(format!(
            "1 {} = {} {} = {} × {} = {} {}",
            self.tiers[index],
            TIER_FACTOR,
            self.tiers[index - 1],
            chain,
            BASE_POPULATION,
            total,
            self.people_word,
        ))
    }

    /// Identity line for the algebra panel: `X = 1 排 = 10 人` / `1 连 = 3X`.
    pub fn equation_line(&self, index: usize) -> Result<String, HierarchyError> {
        let scale = self.scale_at(index)?;
        if index == 0 {
            Ok(format!("X = 1 {} = {} {}", self.tiers[0], BASE_POPULATION, self.people_word))
        } else {
            Ok(format!("1 {} = {}X", self.tiers[index], scale))
        }
    }

    /// Badge under the deepest tier with the fully multiplied headcount.
    pub fn summary_line(&self) -> String {
        let top = self.tiers.len() - 1;
        let total = BASE_POPULATION * TIER_FACTOR.pow(top as u32);
        format!("✓ 1 {} = {} {}", self.tiers[top], format_thousands(total), self.people_word)
    }

    /// `排 → 连 → 团 → …` for the recap panel.
    pub fn structure_chain(&self) -> String {
        self.tiers.join(" → ")
    }

    /// `X → 3X → 9X → …` for the recap panel.
    pub fn algebra_chain(&self) -> String {
        (0..self.tiers.len())
            .map(|i| {
                let scale = TIER_FACTOR.pow(i as u32);
                if scale == 1 { "X".to_string() } else { format!("{}X", scale) }
            })
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Groups digits in threes: 2430 → "2,430".
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 { format!("-{grouped}") } else { grouped }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10)]
    #[case(1, 30)]
    #[case(2, 90)]
    #[case(3, 270)]
    #[case(4, 810)]
    #[case(5, 2430)]
    fn population_follows_scaling_law(#[case] index: usize, #[case] expected: i64) {
        assert_eq!(PLA.population_at(index), Ok(expected));
        assert_eq!(FIELD.population_at(index), Ok(expected));
    }

    #[test]
    fn seven_tier_scheme_tops_out_at_7290() {
        assert_eq!(FIELD.tier_count(), 7);
        assert_eq!(FIELD.population_at(6), Ok(7290));
    }

    #[test]
    fn population_out_of_range_errors() {
        assert_eq!(
            PLA.population_at(6),
            Err(HierarchyError::OutOfRange { index: 6, count: 6 })
        );
        assert_eq!(
            FIELD.scale_at(99),
            Err(HierarchyError::OutOfRange { index: 99, count: 7 })
        );
    }

    #[test]
    fn factor_labels() {
        assert_eq!(PLA.factor_label(0), "10 人");
        assert_eq!(PLA.factor_label(3), "×3");
        assert_eq!(FIELD.factor_label(0), "10 people");
    }

    #[test]
    fn formula_identity_at_base_tier() {
        assert_eq!(PLA.formula_line(0).unwrap(), "1 排 = 10 人");
        assert_eq!(FIELD.formula_line(0).unwrap(), "1 squad = 10 people");
    }

    #[test]
    fn formula_expands_factor_chain_textually() {
        assert_eq!(PLA.formula_line(1).unwrap(), "1 连 = 3 排 = 3 × 10 = 30 人");
        assert_eq!(
            PLA.formula_line(3).unwrap(),
            "1 旅 = 3 团 = 3 × 3 × 3 × 10 = 270 人"
        );
        assert_eq!(
            FIELD.formula_line(2).unwrap(),
            "1 battalion = 3 company = 3 × 3 × 10 = 90 people"
        );
    }

    #[test]
    fn equation_lines() {
        assert_eq!(PLA.equation_line(0).unwrap(), "X = 1 排 = 10 人");
        assert_eq!(PLA.equation_line(2).unwrap(), "1 团 = 9X");
        assert_eq!(FIELD.equation_line(6).unwrap(), "1 army = 729X");
    }

    #[test]
    fn summary_uses_thousands_separator() {
        assert_eq!(PLA.summary_line(), "✓ 1 军 = 2,430 人");
        assert_eq!(FIELD.summary_line(), "✓ 1 army = 7,290 people");
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(2430, "2,430")]
    #[case(1234567, "1,234,567")]
    #[case(-1000, "-1,000")]
    fn thousands_grouping(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(format_thousands(n), expected);
    }

    #[test]
    fn chains_follow_tier_order() {
        assert_eq!(PLA.structure_chain(), "排 → 连 → 团 → 旅 → 师 → 军");
        assert_eq!(PLA.algebra_chain(), "X → 3X → 9X → 27X → 81X → 243X");
    }
}
