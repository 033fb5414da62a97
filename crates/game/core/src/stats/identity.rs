//! Character identity values stored in stats: profession, breed and
//! expansion access.

use bitflags::bitflags;

use super::id::StatId;

/// Character profession as encoded in the [`StatId::PROFESSION`](super::StatId::PROFESSION) stat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Profession {
    Soldier,
    MartialArtist,
    Engineer,
    Fixer,
    Agent,
    Adventurer,
    Trader,
    Bureaucrat,
    Enforcer,
    Doctor,
    NanoTechnician,
    MetaPhysicist,
    Keeper,
    Shade,
}

impl Profession {
    /// Catalog value of this profession.
    pub const fn code(self) -> i32 {
        match self {
            Self::Soldier => 1,
            Self::MartialArtist => 2,
            Self::Engineer => 3,
            Self::Fixer => 4,
            Self::Agent => 5,
            Self::Adventurer => 6,
            Self::Trader => 7,
            Self::Bureaucrat => 8,
            Self::Enforcer => 9,
            Self::Doctor => 10,
            Self::NanoTechnician => 11,
            Self::MetaPhysicist => 12,
            Self::Keeper => 14,
            Self::Shade => 15,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|p| p.code() == code)
    }
}

/// Character breed as encoded in the [`StatId::BREED`](super::StatId::BREED) stat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Breed {
    Solitus,
    Opifex,
    Nanomage,
    Atrox,
}

impl Breed {
    /// Catalog value of this breed.
    pub const fn code(self) -> i32 {
        match self {
            Self::Solitus => 1,
            Self::Opifex => 2,
            Self::Nanomage => 3,
            Self::Atrox => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|b| b.code() == code)
    }
}

bitflags! {
    /// Expansion access bits held in the [`StatId::EXPANSION`](super::StatId::EXPANSION) stat.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ExpansionFlags: u32 {
        const NOTUM_WARS            = 1 << 0;
        const SHADOWLANDS           = 1 << 1;
        const SHADOWLANDS_PREORDER  = 1 << 2;
        const ALIEN_INVASION        = 1 << 3;
        const ALIEN_INVASION_PREORDER = 1 << 4;
        const LOST_EDEN             = 1 << 5;
        const LOST_EDEN_PREORDER    = 1 << 6;
        const LEGACY_OF_XAN         = 1 << 7;
        const LEGACY_OF_XAN_PREORDER = 1 << 8;
    }
}

impl ExpansionFlags {
    /// Stat value carrying these flags.
    pub const fn stat_value(self) -> i32 {
        self.bits() as i32
    }

    /// Builds flags from a stat value, dropping unknown bits.
    pub const fn from_stat_value(value: i32) -> Self {
        Self::from_bits_truncate(value as u32)
    }
}

/// Renders `value` of `stat` for people: identity stats get their name next
/// to the raw number (`nano_technician(11)`, `notum_wars|alien_invasion(9)`),
/// anything else prints as the number alone.
pub fn describe_value(stat: StatId, value: i32) -> String {
    let name = match stat {
        StatId::PROFESSION => Profession::from_code(value).map(|p| p.to_string()),
        StatId::BREED => Breed::from_code(value).map(|b| b.to_string()),
        StatId::EXPANSION => {
            let names: Vec<String> = ExpansionFlags::from_stat_value(value)
                .iter_names()
                .map(|(name, _)| name.to_ascii_lowercase())
                .collect();
            (!names.is_empty()).then(|| names.join("|"))
        }
        _ => None,
    };

    match name {
        Some(name) => format!("{}({})", name, value),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profession_codes_follow_catalog_values() {
        assert_eq!(Profession::NanoTechnician.code(), 11);
        assert_eq!(Profession::from_code(14), Some(Profession::Keeper));
        assert_eq!(Profession::from_code(13), None);
        assert_eq!(
            "nano_technician".parse::<Profession>().ok(),
            Some(Profession::NanoTechnician)
        );
        assert_eq!(Breed::from_code(3), Some(Breed::Nanomage));
    }

    #[test]
    fn expansion_flags_map_to_stat_value() {
        let flags = ExpansionFlags::NOTUM_WARS | ExpansionFlags::SHADOWLANDS_PREORDER;
        assert_eq!(flags.stat_value(), 5);
        assert_eq!(ExpansionFlags::from_stat_value(5), flags);
    }

    #[test]
    fn identity_values_render_with_names() {
        assert_eq!(
            describe_value(StatId::PROFESSION, 11),
            "nano_technician(11)"
        );
        assert_eq!(describe_value(StatId::BREED, 2), "opifex(2)");
        assert_eq!(
            describe_value(StatId::EXPANSION, 9),
            "notum_wars|alien_invasion(9)"
        );
        assert_eq!(describe_value(StatId::EXPANSION, 0), "0");
        assert_eq!(describe_value(StatId::PROFESSION, 13), "13");
        assert_eq!(describe_value(StatId::LEVEL, 200), "200");
    }
}
