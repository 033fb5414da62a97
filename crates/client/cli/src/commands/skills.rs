//! Skill sheet of a profile.

use std::fmt::Write;

use anyhow::Result;
use aoplan_content::ContentFactory;
use clap::Parser;
use console::style;

use super::PlannedProfile;

/// Show effective skill totals with their parts
#[derive(Parser)]
pub struct Skills {
    /// Profile name (file name under profiles/ without .ron)
    #[arg(value_name = "PROFILE")]
    profile: String,
}

impl Skills {
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
            style("Skills for").bold().cyan(),
            planned.profile.name
        )?;
        writeln!(out)?;

        if planned.profile.skills.is_empty() {
            writeln!(out, "No invested skills")?;
            return Ok(out);
        }

        writeln!(
            out,
            "  {:<34} {:>5} {:>7} {:>5} {:>5} {:>5} {:>5} {:>6}",
            "skill", "base", "trickle", "ip", "equip", "perks", "buffs", "total"
        )?;
        for (&stat, components) in &planned.profile.skills {
            writeln!(
                out,
                "  {:<34} {:>5} {:>7} {:>5} {:>5} {:>5} {:>5} {:>6}",
                stat.to_string(),
                components.base,
                components.trickle,
                components.ip,
                breakdown.equipment.get(stat),
                breakdown.perks.get(stat),
                breakdown.buffs.get(stat),
                style(components.total_with(stat, breakdown)).bold()
            )?;
        }

        Ok(out)
    }
}
