//! Filter the catalog down to what a profile may use.

use std::fmt::Write;

use anyhow::Result;
use aoplan_content::ContentFactory;
use aoplan_core::{ActionKind, StatId};
use clap::Parser;
use console::style;

use super::{ActionArg, PlannedProfile, describe_identity, parse_stat};

/// List catalog entries a profile is eligible for
#[derive(Parser)]
pub struct Eligible {
    /// Profile name (file name under profiles/ without .ron)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Action the entries must define
    #[arg(short, long, value_enum, default_value = "cast")]
    action: ActionArg,

    /// Stat to filter on, by name or id; repeatable
    /// (defaults to the rules' eligibility stats)
    #[arg(short, long = "stat", value_name = "STAT", value_parser = parse_stat)]
    stats: Vec<StatId>,
}

impl Eligible {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        print!("{}", self.report(factory)?);
        Ok(())
    }

    fn report(&self, factory: &ContentFactory) -> Result<String> {
        let planned = PlannedProfile::load(factory, &self.profile)?;
        let action = ActionKind::from(self.action);
        let filter = if self.stats.is_empty() {
            planned.content.rules.eligibility_stats.clone()
        } else {
            self.stats.iter().copied().collect()
        };
        let evaluator = planned.content.rules.evaluator();

        let mut out = String::new();
        let filter_names: Vec<_> = filter.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "{} {} [{}] by {}",
            style("Eligible for").bold().cyan(),
            planned.profile.name,
            action,
            filter_names.join(", ")
        )?;
        writeln!(out, "  {}", describe_identity(&planned.stats))?;
        writeln!(out)?;

        let mut count = 0;
        for entry in planned
            .content
            .catalog
            .filter_eligible(action, &planned.stats, &filter)
        {
            let ready = entry.check(action, &planned.stats, &evaluator).satisfied;
            let marker = if ready {
                style("ready").green()
            } else {
                style("needs more").yellow()
            };
            writeln!(
                out,
                "  {:>6}  {:<36} {:<5} {}",
                entry.id.0, entry.name, entry.kind, marker
            )?;
            count += 1;
        }

        writeln!(out)?;
        writeln!(out, "{} of {} entries", count, planned.content.catalog.len())?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::bundled_data;

    fn run(args: &[&str]) -> String {
        Eligible::try_parse_from(args)
            .expect("valid arguments")
            .report(&bundled_data())
            .expect("eligible runs")
    }

    #[test]
    fn profession_filter_keeps_other_professions_target_buffs() {
        let report = run(&["eligible", "doctor", "--stat", "profession"]);

        assert!(report.contains("by profession(60)"));
        assert!(report.contains("profession: doctor(10), breed: opifex(2)"));
        for name in [
            "Team Improved Heal",
            "Notum Overflow",
            "Alien Sensory Link",
        ] {
            assert!(report.contains(name), "missing {name}");
        }
        assert!(!report.contains("Izgimmer's Ultimatum"));
        assert!(report.contains("4 of 11 entries"));
    }

    #[test]
    fn default_filter_applies_expansion_and_side() {
        let report = run(&["eligible", "doctor", "--action", "wear"]);
        assert!(report.contains("Cyborg Eye"));
        assert!(report.contains("Pre-Shadowlands Ring"));
        assert!(!report.contains("Belt"));
        assert!(report.contains("3 of 11 entries"));
    }

    #[test]
    fn unknown_stat_is_rejected_by_the_parser() {
        assert!(Eligible::try_parse_from(["eligible", "doctor", "--stat", "charisma"]).is_err());
    }
}
