//! Check one entry's requirements against a profile.

use std::fmt::Write;

use anyhow::Result;
use aoplan_content::ContentFactory;
use aoplan_core::{ActionKind, describe_value};
use clap::Parser;
use console::style;

use super::{ActionArg, PlannedProfile, describe_criterion, resolve_entry};

/// Check whether a profile meets an entry's requirements
#[derive(Parser)]
pub struct Check {
    /// Profile name (file name under profiles/ without .ron)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Catalog entry id or name
    #[arg(value_name = "ENTRY")]
    entry: String,

    /// Action to check (defaults to the entry's first action)
    #[arg(short, long, value_enum)]
    action: Option<ActionArg>,
}

impl Check {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        print!("{}", self.report(factory)?);
        Ok(())
    }

    fn report(&self, factory: &ContentFactory) -> Result<String> {
        let planned = PlannedProfile::load(factory, &self.profile)?;
        let entry = resolve_entry(&planned.content.catalog, &self.entry)?;

        let action = match self.action {
            Some(action) => ActionKind::from(action),
            None => entry
                .actions
                .first()
                .map(|action| action.kind)
                .unwrap_or(ActionKind::Use),
        };
        if entry.requirements(action).is_none() {
            tracing::warn!(
                "{} {} defines no {} action; nothing to check",
                entry.id,
                entry.name,
                action
            );
        }

        let evaluation = entry.check(action, &planned.stats, &planned.content.rules.evaluator());

        let mut out = String::new();
        writeln!(
            out,
            "{} {} {} [{}]",
            style("Entry:").bold().cyan(),
            entry.name,
            style(entry.id).dim(),
            action
        )?;
        writeln!(out, "{} {}", style("Profile:").bold().cyan(), planned.profile.name)?;
        writeln!(out)?;

        if evaluation.satisfied {
            writeln!(out, "{}", style("Requirements met").bold().green())?;
        } else {
            writeln!(out, "{}", style("Requirements not met").bold().red())?;
            for criterion in &evaluation.failed_criteria {
                writeln!(
                    out,
                    "  {} {} (have {})",
                    style("x").red(),
                    describe_criterion(criterion),
                    describe_value(criterion.stat, planned.stats.get(criterion.stat))
                )?;
            }
        }

        if let Some(criteria) = entry.requirements(action) {
            let target: Vec<_> = criteria.target_criteria().collect();
            if !target.is_empty() {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    style("Target requirements (not checked):").bold().yellow()
                )?;
                for criterion in target {
                    writeln!(out, "  {}", describe_criterion(criterion))?;
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::bundled_data;

    fn run(args: &[&str]) -> String {
        Check::try_parse_from(args)
            .expect("valid arguments")
            .report(&bundled_data())
            .expect("check runs")
    }

    #[test]
    fn target_profession_is_listed_but_not_held_against_the_caster() {
        let report = run(&["check", "doctor", "Notum Overflow"]);

        assert!(report.contains("Requirements not met"));
        assert!(report.contains("nano_programming(160) > 300 (have 115)"));
        assert!(!report.contains("x profession"));
        assert!(report.contains("Target requirements (not checked):"));
        assert!(report.contains("  profession(60) == nano_technician(11)"));
    }

    #[test]
    fn buffed_nanotech_meets_requirements() {
        let report = run(&["check", "nanotech", "100", "--action", "cast"]);
        assert!(report.contains("Izgimmer's Ultimatum"));
        assert!(report.contains("Requirements met"));
        assert!(!report.contains("Target requirements"));
    }

    #[test]
    fn failed_identity_requirements_show_names() {
        let report = run(&["check", "nanotech", "101"]);
        assert!(report.contains("profession(60) == doctor(10) (have nano_technician(11))"));
    }

    #[test]
    fn unknown_entry_is_an_error() {
        let result = Check::try_parse_from(["check", "doctor", "9999"])
            .expect("valid arguments")
            .report(&bundled_data());
        assert!(result.is_err());
    }
}
