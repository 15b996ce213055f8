//! Hit chance, hit roll and critical determination.

use crate::config::HitParams;
use crate::rng::RngSource;

/// Result of a hit check.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    pub is_hit: bool,
    /// Always false when `is_hit` is false.
    pub is_critical: bool,
    /// Clamped hit chance in percent.
    pub hit_chance: f64,
    /// The roll in `[0, 100)` that decided the check.
    pub roll: f64,
}

/// Calculate hit chance from skill accuracy and relative agility.
///
/// # Formula
///
/// ```text
/// hit_chance = accuracy × (1 + (attacker_agility − defender_agility) / divisor)
/// clamped to [min, max]
/// ```
pub fn calculate_hit_chance(
    accuracy: u32,
    attacker_agility: i32,
    defender_agility: i32,
    params: &HitParams,
) -> f64 {
    let agility_diff = f64::from(attacker_agility) - f64::from(defender_agility);
    let chance = f64::from(accuracy) * (1.0 + agility_diff / params.agility_divisor);
    chance.clamp(params.min_chance, params.max_chance)
}

/// Decide hit and critical from a single roll.
///
/// The critical check reuses the hit roll against `hit_chance × ratio`, so a
/// critical is always also a hit.
pub fn check_hit(hit_chance: f64, roll: f64, params: &HitParams) -> HitOutcome {
    let is_hit = roll < hit_chance;
    let is_critical = is_hit && roll < hit_chance * params.critical_ratio;

    HitOutcome {
        is_hit,
        is_critical,
        hit_chance,
        roll,
    }
}

/// Draw one roll and resolve the hit check.
pub fn resolve_hit<R: RngSource + ?Sized>(
    accuracy: u32,
    attacker_agility: i32,
    defender_agility: i32,
    params: &HitParams,
    rng: &mut R,
) -> HitOutcome {
    let hit_chance = calculate_hit_chance(accuracy, attacker_agility, defender_agility, params);
    let roll = rng.roll_percent();
    let outcome = check_hit(hit_chance, roll, params);

    tracing::trace!(
        hit_chance,
        roll,
        is_hit = outcome.is_hit,
        is_critical = outcome.is_critical,
        "hit check"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn hit_chance_scales_with_agility_gap() {
        let params = HitParams::default();
        assert_eq!(calculate_hit_chance(80, 50, 50, &params), 80.0);
        assert_eq!(calculate_hit_chance(80, 70, 50, &params), 88.0);
        assert_eq!(calculate_hit_chance(80, 30, 50, &params), 72.0);
    }

    #[test]
    fn hit_chance_is_clamped_for_extreme_gaps() {
        let params = HitParams::default();
        for gap in [10_000, 1_000, 200, -200, -1_000, -10_000] {
            let chance = calculate_hit_chance(100, 50 + gap, 50, &params);
            assert!((10.0..=100.0).contains(&chance), "gap {gap} gave {chance}");
        }
        assert_eq!(calculate_hit_chance(100, 10_050, 50, &params), 100.0);
        assert_eq!(calculate_hit_chance(50, 50, 10_050, &params), 10.0);
    }

    #[test]
    fn critical_uses_the_same_roll() {
        let params = HitParams::default();

        let crit = check_hit(80.0, 7.9, &params);
        assert!(crit.is_hit && crit.is_critical);

        let plain = check_hit(80.0, 8.0, &params);
        assert!(plain.is_hit && !plain.is_critical);

        let miss = check_hit(80.0, 80.0, &params);
        assert!(!miss.is_hit && !miss.is_critical);
    }

    #[test]
    fn critical_implies_hit_over_many_rolls() {
        let params = HitParams::default();
        let mut rng = PcgRng::seeded(11);
        for accuracy in [50, 75, 100] {
            for _ in 0..500 {
                let outcome = resolve_hit(accuracy, 40, 60, &params, &mut rng);
                assert!(!outcome.is_critical || outcome.is_hit);
            }
        }
    }
}
