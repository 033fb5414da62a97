//! Stat identifiers.
//!
//! Every quantity a requirement can test is addressed by a numeric [`StatId`]:
//! skills, level, profession, breed, side, expansion access and so on. The
//! engine never validates ids against a fixed list; the constants below only
//! name the ones the planner itself refers to.

/// Numeric identifier of a character stat as used by the item catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatId(pub i32);

impl StatId {
    // ===== character identity =====
    pub const BREED: Self = Self(4);
    pub const SIDE: Self = Self(33);
    pub const LEVEL: Self = Self(54);
    pub const PROFESSION: Self = Self(60);
    pub const EXPANSION: Self = Self(389);

    // ===== abilities =====
    pub const STRENGTH: Self = Self(16);
    pub const AGILITY: Self = Self(17);
    pub const STAMINA: Self = Self(18);
    pub const INTELLIGENCE: Self = Self(19);
    pub const SENSE: Self = Self(20);
    pub const PSYCHIC: Self = Self(21);

    // ===== resources =====
    pub const MAX_HEALTH: Self = Self(1);
    pub const MAX_NANO_ENERGY: Self = Self(221);

    // ===== nano skills =====
    pub const SENSORY_IMPROVEMENT: Self = Self(122);
    pub const MATTER_METAMORPHOSIS: Self = Self(127);
    pub const BIOLOGICAL_METAMORPHOSIS: Self = Self(128);
    pub const PSYCHOLOGICAL_MODIFICATIONS: Self = Self(129);
    pub const MATTER_CREATION: Self = Self(130);
    pub const TIME_AND_SPACE: Self = Self(131);
    pub const NANO_PROGRAMMING: Self = Self(160);
    pub const COMPUTER_LITERACY: Self = Self(161);

    const NAMES: &'static [(Self, &'static str)] = &[
        (Self::MAX_HEALTH, "max_health"),
        (Self::BREED, "breed"),
        (Self::STRENGTH, "strength"),
        (Self::AGILITY, "agility"),
        (Self::STAMINA, "stamina"),
        (Self::INTELLIGENCE, "intelligence"),
        (Self::SENSE, "sense"),
        (Self::PSYCHIC, "psychic"),
        (Self::SIDE, "side"),
        (Self::LEVEL, "level"),
        (Self::PROFESSION, "profession"),
        (Self::SENSORY_IMPROVEMENT, "sensory_improvement"),
        (Self::MATTER_METAMORPHOSIS, "matter_metamorphosis"),
        (Self::BIOLOGICAL_METAMORPHOSIS, "biological_metamorphosis"),
        (Self::PSYCHOLOGICAL_MODIFICATIONS, "psychological_modifications"),
        (Self::MATTER_CREATION, "matter_creation"),
        (Self::TIME_AND_SPACE, "time_and_space"),
        (Self::NANO_PROGRAMMING, "nano_programming"),
        (Self::COMPUTER_LITERACY, "computer_literacy"),
        (Self::MAX_NANO_ENERGY, "max_nano_energy"),
        (Self::EXPANSION, "expansion"),
    ];

    /// Returns the snake_case name of a well-known stat.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }

    /// Resolves a well-known stat name, or a bare numeric id.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Ok(raw) = name.parse::<i32>() {
            return Some(Self(raw));
        }
        Self::NAMES
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }
}

impl core::fmt::Display for StatId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}({})", name, self.0),
            None => write!(f, "stat({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_names_resolve_both_ways() {
        assert_eq!(StatId::from_name("Profession"), Some(StatId::PROFESSION));
        assert_eq!(StatId::from_name("389"), Some(StatId::EXPANSION));
        assert_eq!(StatId::from_name("not_a_stat"), None);
        assert_eq!(StatId::MATTER_CREATION.name(), Some("matter_creation"));
        assert_eq!(StatId(7777).to_string(), "stat(7777)");
    }
}
