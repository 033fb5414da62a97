//! List profiles in the data directory.

use std::fmt::Write;

use anyhow::Result;
use aoplan_content::ContentFactory;
use clap::Parser;
use console::style;

use super::describe_identity;

/// List available profiles
#[derive(Parser)]
pub struct Profiles {}

impl Profiles {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        print!("{}", self.report(factory)?);
        Ok(())
    }

    fn report(&self, factory: &ContentFactory) -> Result<String> {
        let mut out = String::new();
        let names = factory.profile_names()?;
        if names.is_empty() {
            writeln!(
                out,
                "No profiles in {}",
                factory.data_dir().join("profiles").display()
            )?;
            return Ok(out);
        }

        for name in names {
            match factory.load_profile(&name) {
                Ok(profile) => writeln!(
                    out,
                    "  {:<16} {:<28} {}",
                    style(&name).bold(),
                    profile.name,
                    style(describe_identity(&profile.stats)).dim()
                )?,
                Err(e) => {
                    tracing::warn!("{}", e);
                    writeln!(
                        out,
                        "  {:<16} {}",
                        style(&name).bold(),
                        style("(unreadable)").red()
                    )?;
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::commands::bundled_data;

    #[test]
    fn bundled_profiles_are_listed_with_identity() {
        let report = Profiles {}.report(&bundled_data()).expect("profiles run");
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("doctor") && lines[0].contains("Opifex Doctor"));
        assert!(lines[0].contains("profession: doctor(10)"));
        assert!(lines[1].contains("nanotech") && lines[1].contains("nano_technician(11)"));
    }

    #[test]
    fn broken_profile_is_marked_unreadable() {
        console::set_colors_enabled(false);
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir(dir.path().join("profiles")).expect("profiles dir");
        fs::write(dir.path().join("profiles").join("broken.ron"), "(name: ").expect("write");

        let report = Profiles {}
            .report(&ContentFactory::new(dir.path()))
            .expect("listing still succeeds");
        assert!(report.contains("broken"));
        assert!(report.contains("(unreadable)"));
    }

    #[test]
    fn empty_data_dir_says_so() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir(dir.path().join("profiles")).expect("profiles dir");
        let report = Profiles {}
            .report(&ContentFactory::new(dir.path()))
            .expect("listing succeeds");
        assert!(report.starts_with("No profiles in"));
    }
}
