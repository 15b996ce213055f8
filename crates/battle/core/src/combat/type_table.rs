//! Type-advantage multipliers between skill categories.

use crate::skill::SkillCategory;

/// Damage multiplier keyed by (attacking category, category the defender
/// acted with last turn).
///
/// Rows and columns follow [`SkillCategory::index`]:
/// `Attack, Defense, Seal, Field, Recovery`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeAdvantageTable {
    rows: [[f64; SkillCategory::COUNT]; SkillCategory::COUNT],
}

impl TypeAdvantageTable {
    /// Standard matrix. Same-category pairs are always 1.0.
    pub const STANDARD: Self = Self {
        rows: [
            //  atk  def  seal field rec
            [1.0, 0.6, 1.2, 1.0, 1.4], // attack
            [1.4, 1.0, 0.7, 1.0, 1.0], // defense
            [0.7, 1.3, 1.0, 1.5, 0.8], // seal
            [1.0, 1.0, 0.6, 1.0, 1.2], // field
            [0.6, 1.0, 1.2, 0.8, 1.0], // recovery
        ],
    };

    pub const fn from_rows(rows: [[f64; SkillCategory::COUNT]; SkillCategory::COUNT]) -> Self {
        Self { rows }
    }

    /// Multiplier for a defined pair.
    pub fn get(&self, attacker: SkillCategory, defender_last: SkillCategory) -> f64 {
        self.rows[attacker.index()][defender_last.index()]
    }

    /// Multiplier against a defender that may not have acted yet.
    ///
    /// A defender with no previous action is treated as having attacked.
    pub fn multiplier(&self, attacker: SkillCategory, defender_last: Option<SkillCategory>) -> f64 {
        self.get(attacker, defender_last.unwrap_or(SkillCategory::Attack))
    }
}

impl Default for TypeAdvantageTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
