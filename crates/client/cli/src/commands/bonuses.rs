//! Stat bonus breakdown of a profile.

use std::fmt::Write;

use anyhow::Result;
use aoplan_content::ContentFactory;
use aoplan_core::SourceKind;
use clap::Parser;
use console::style;

use super::PlannedProfile;

/// Show stat bonuses from equipment, perks and buffs
#[derive(Parser)]
pub struct Bonuses {
    /// Profile name (file name under profiles/ without .ron)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Also list the active bonus sources
    #[arg(short, long)]
    sources: bool,
}

impl Bonuses {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        print!("{}", self.report(factory)?);
        Ok(())
    }

    fn report(&self, factory: &ContentFactory) -> Result<String> {
        let planned = PlannedProfile::load(factory, &self.profile)?;
        let breakdown = &planned.breakdown;

        let mut out = String::new();
        writeln!(
            out,
            "{} {}",
            style("Bonuses for").bold().cyan(),
            planned.profile.name
        )?;
        writeln!(out)?;

        if self.sources {
            writeln!(out, "{}", style("Active sources:").bold().yellow())?;
            for source in planned.profile.bonus_sources(&planned.content.catalog) {
                writeln!(out, "  {:<10} {}", source.kind, source.name)?;
            }
            writeln!(out)?;
        }

        let total = breakdown.total();
        if total.is_empty() {
            writeln!(out, "No stat bonuses")?;
            return Ok(out);
        }

        writeln!(
            out,
            "  {:<34} {:>9} {:>6} {:>6} {:>6}",
            "stat", "equipment", "perks", "buffs", "total"
        )?;
        for (stat, amount) in total.iter() {
            writeln!(
                out,
                "  {:<34} {:>9} {:>6} {:>6} {:>6}",
                stat.to_string(),
                breakdown.for_kind(SourceKind::Equipment).get(stat),
                breakdown.for_kind(SourceKind::Perk).get(stat),
                breakdown.for_kind(SourceKind::Buff).get(stat),
                style(amount).bold()
            )?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::bundled_data;

    #[test]
    fn breakdown_splits_nano_programming_by_source_kind() {
        let report = Bonuses::try_parse_from(["bonuses", "nanotech", "--sources"])
            .expect("valid arguments")
            .report(&bundled_data())
            .expect("bonuses run");

        assert!(report.contains("Active sources:"));
        assert!(report.contains("Notum Overflow"));
        let row = report
            .lines()
            .find(|line| line.trim_start().starts_with("nano_programming(160)"))
            .expect("nano programming row");
        let columns: Vec<_> = row.split_whitespace().skip(1).collect();
        assert_eq!(columns, vec!["50", "0", "20", "70"]);
    }
}
