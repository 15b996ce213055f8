//! Combat math.
//!
//! Pure functions over explicit inputs. Anything random (the hit roll, the
//! damage variance) is either passed in as a value or drawn from the
//! [`RngSource`](crate::RngSource) handed to the `resolve_*` helpers, so the
//! same inputs always give the same numbers.
//!
//! - [`TypeAdvantageTable`]: category-vs-category multipliers
//! - [`calculate_hit_chance`] / [`check_hit`]: hit and critical
//! - [`calculate_damage`]: raw → type-adjusted → mitigated → critical

pub mod damage;
pub mod hit;
pub mod type_table;

pub use damage::{DamageBreakdown, DamageInput, DamageOutcome, calculate_damage};
pub use hit::{HitOutcome, calculate_hit_chance, check_hit, resolve_hit};
pub use type_table::TypeAdvantageTable;
