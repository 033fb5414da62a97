//! Command implementations for aoplan
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod bonuses;
mod check;
mod eligible;
mod profiles;
mod skills;

pub use bonuses::Bonuses;
pub use check::Check;
pub use eligible::Eligible;
pub use profiles::Profiles;
pub use skills::Skills;

use anyhow::Result;
use aoplan_content::{ContentFactory, PlannerContent, Profile};
use aoplan_core::{
    ActionKind, ActorStats, BonusBreakdown, Catalog, CatalogEntry, Criterion, EntryId, StatId,
    describe_value,
};

/// Catalog action selected on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ActionArg {
    Use,
    Wear,
    Wield,
    Cast,
}

impl From<ActionArg> for ActionKind {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Use => ActionKind::Use,
            ActionArg::Wear => ActionKind::Wear,
            ActionArg::Wield => ActionKind::Wield,
            ActionArg::Cast => ActionKind::Cast,
        }
    }
}

/// A profile together with the content it is planned against.
struct PlannedProfile {
    content: PlannerContent,
    profile: Profile,
    breakdown: BonusBreakdown,
    /// Raw stats with effective skill totals.
    stats: ActorStats,
}

impl PlannedProfile {
    fn load(factory: &ContentFactory, name: &str) -> Result<Self> {
        let content = factory.load_content()?;
        let profile = factory.load_profile(name)?;
        let breakdown = profile.breakdown(&content.catalog, &content.rules.aggregator());
        let stats = profile.actor_stats(&breakdown);

        Ok(Self {
            content,
            profile,
            breakdown,
            stats,
        })
    }
}

/// Parses a stat given by well-known name or numeric id.
fn parse_stat(value: &str) -> Result<StatId, String> {
    StatId::from_name(value).ok_or_else(|| format!("unknown stat '{}'", value))
}

/// Renders a comparison with identity values spelled out.
fn describe_criterion(criterion: &Criterion) -> String {
    format!(
        "{} {} {}",
        criterion.stat,
        criterion.operator.symbol(),
        describe_value(criterion.stat, criterion.operand)
    )
}

/// One-line identity summary of an actor.
fn describe_identity(stats: &ActorStats) -> String {
    [StatId::PROFESSION, StatId::BREED, StatId::EXPANSION]
        .into_iter()
        .map(|stat| {
            format!(
                "{}: {}",
                stat.name().unwrap_or("stat"),
                describe_value(stat, stats.get(stat))
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bundled data directory of the content crate, with plain output.
#[cfg(test)]
fn bundled_data() -> ContentFactory {
    console::set_colors_enabled(false);
    ContentFactory::new(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../game/content/data"),
    )
}

/// Finds an entry by numeric id or by name (case-insensitive).
fn resolve_entry<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a CatalogEntry> {
    if let Ok(id) = key.parse::<u32>() {
        return Ok(catalog.entry(EntryId(id))?);
    }

    catalog
        .entries()
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| anyhow::anyhow!("No catalog entry named '{}'", key))
}
