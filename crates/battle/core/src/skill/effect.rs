//! Declared effects carried by a skill.

/// Who an effect applies to, relative to the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    /// The caster.
    #[default]
    #[strum(serialize = "self")]
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,
    /// The caster's opponent.
    #[strum(serialize = "enemy")]
    #[cfg_attr(feature = "serde", serde(rename = "enemy"))]
    Opponent,
}

/// Resource restored by a heal effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealResource {
    #[default]
    Hp,
    Mp,
}

/// One declared effect of a skill, tagged by kind.
///
/// Resolvers read the fields relevant to their category (durations, heal
/// resource and target, field kind); the category itself decides which
/// resolver runs.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[strum_discriminants(name(EffectKind), derive(Hash))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectSpec {
    Damage {
        value: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        target: EffectTarget,
    },
    Defense {
        value: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        duration: Option<u32>,
    },
    Heal {
        #[cfg_attr(feature = "serde", serde(default))]
        resource: HealResource,
        #[cfg_attr(feature = "serde", serde(default))]
        target: EffectTarget,
    },
    Seal {
        #[cfg_attr(feature = "serde", serde(default))]
        duration: Option<u32>,
    },
    Field {
        kind: String,
        #[cfg_attr(feature = "serde", serde(default))]
        duration: Option<u32>,
    },
}

impl EffectSpec {
    pub fn kind(&self) -> EffectKind {
        EffectKind::from(self)
    }

    /// Declared duration in turns, if this kind carries one.
    pub fn duration(&self) -> Option<u32> {
        match self {
            Self::Defense { duration, .. }
            | Self::Seal { duration }
            | Self::Field { duration, .. } => *duration,
            Self::Damage { .. } | Self::Heal { .. } => None,
        }
    }
}
