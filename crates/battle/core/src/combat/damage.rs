//! Damage calculation.

use crate::config::DamageParams;

/// Inputs to a single damage calculation, after the hit check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageInput {
    pub power: u32,
    /// Attacker's effective attack stat.
    pub attack: i32,
    /// Defender's effective defense stat.
    pub defense: i32,
    /// Defender's defense buffer for this turn.
    pub defense_buffer: u32,
    pub type_multiplier: f64,
    /// Variance factor drawn from `[random_min, random_max)`.
    pub random_factor: f64,
    pub is_critical: bool,
}

/// Every intermediate value of a damage calculation, kept for reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DamageBreakdown {
    pub raw_damage: f64,
    pub random_factor: f64,
    pub type_multiplier: f64,
    pub total_defense: i64,
    pub defense_reduction: f64,
    pub is_critical: bool,
    pub final_damage: u32,
}

/// Damage dealt by one attack. `breakdown` is absent on a miss.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    pub damage: u32,
    pub breakdown: Option<DamageBreakdown>,
}

impl DamageOutcome {
    pub const MISS: Self = Self {
        damage: 0,
        breakdown: None,
    };
}

/// Calculate damage for a landed hit.
///
/// # Formula
///
/// ```text
/// raw_damage    = power × (1 + attack / 100) × random_factor
/// adjusted      = raw_damage × type_multiplier
/// total_defense = defense + defense_buffer
/// reduction     = adjusted × total_defense / (total_defense + k)
/// final_damage  = max(minimum, adjusted − reduction)
///
/// if critical:
///     final_damage *= critical_multiplier
///
/// final_damage = floor(final_damage)
/// ```
///
/// The type multiplier scales both the damage and the mitigation, so a
/// countered attack loses more in absolute terms.
pub fn calculate_damage(input: &DamageInput, params: &DamageParams) -> DamageBreakdown {
    let raw_damage =
        f64::from(input.power) * (1.0 + f64::from(input.attack) / 100.0) * input.random_factor;
    let adjusted = raw_damage * input.type_multiplier;

    let total_defense = i64::from(input.defense) + i64::from(input.defense_buffer);
    let mitigated = total_defense.max(0) as f64;
    let defense_reduction = adjusted * mitigated / (mitigated + params.defense_constant);

    let mut final_damage = (adjusted - defense_reduction).max(params.minimum);
    if input.is_critical {
        final_damage *= params.critical_multiplier;
    }

    DamageBreakdown {
        raw_damage,
        random_factor: input.random_factor,
        type_multiplier: input.type_multiplier,
        total_defense,
        defense_reduction,
        is_critical: input.is_critical,
        final_damage: final_damage.floor().max(params.minimum) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(defense: i32, defense_buffer: u32) -> DamageInput {
        DamageInput {
            power: 70,
            attack: 50,
            defense,
            defense_buffer,
            type_multiplier: 1.0,
            random_factor: 1.0,
            is_critical: false,
        }
    }

    #[test]
    fn mitigation_halves_damage_at_one_hundred_total_defense() {
        let breakdown = calculate_damage(&input(50, 50), &DamageParams::default());

        assert_eq!(breakdown.raw_damage, 105.0);
        assert_eq!(breakdown.total_defense, 100);
        assert_eq!(breakdown.defense_reduction, 52.5);
        assert_eq!(breakdown.final_damage, 52);
    }

    #[test]
    fn base_defense_alone_mitigates_a_third() {
        let breakdown = calculate_damage(&input(50, 0), &DamageParams::default());

        assert_eq!(breakdown.defense_reduction, 35.0);
        assert_eq!(breakdown.final_damage, 70);
    }

    #[test]
    fn critical_multiplies_after_mitigation() {
        let mut critical = input(50, 50);
        critical.is_critical = true;

        let breakdown = calculate_damage(&critical, &DamageParams::default());
        assert_eq!(breakdown.final_damage, 78); // 52.5 × 1.5
    }

    #[test]
    fn type_multiplier_scales_mitigation_too() {
        let mut countered = input(50, 50);
        countered.type_multiplier = 0.6;

        let breakdown = calculate_damage(&countered, &DamageParams::default());
        assert!((breakdown.defense_reduction - 31.5).abs() < 1e-9);
        assert_eq!(breakdown.final_damage, 31);
    }

    #[test]
    fn landed_hit_deals_at_least_one() {
        let params = DamageParams::default();
        for defense in [1, 100, 10_000, i32::MAX] {
            let weak = DamageInput {
                power: 5,
                attack: 1,
                defense,
                defense_buffer: u32::MAX,
                type_multiplier: 0.6,
                random_factor: 0.9,
                is_critical: false,
            };
            assert!(calculate_damage(&weak, &params).final_damage >= 1);
        }
    }

    #[test]
    fn miss_outcome_carries_no_damage() {
        assert_eq!(DamageOutcome::MISS.damage, 0);
        assert!(DamageOutcome::MISS.breakdown.is_none());
    }
}
