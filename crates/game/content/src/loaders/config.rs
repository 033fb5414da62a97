//! Rules configuration loader.

use std::path::Path;

use aoplan_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`RulesConfig`] from TOML files.
///
/// Every field is optional; anything left out keeps its default.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path, "rules")?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML {}: {}", path.display(), e))
    }

    /// Parse rules from TOML text.
    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let rules: RulesConfig = toml::from_str(content)?;
        if rules.bonus.stat_modifier_kinds.is_empty() {
            tracing::warn!("Rules list no stat modifier effect kinds; all bonuses will be zero");
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use aoplan_core::{CriteriaGrammar, Operator, StatId, UnknownOperatorPolicy};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let rules = RulesLoader::parse("").expect("empty TOML is valid");
        assert_eq!(rules, RulesConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let rules = RulesLoader::parse(
            r#"
grammar = "postfix"
unknown_operators = "reject"
eligibility_stats = [60]

[operators]
target_modifiers = [18, 19]

[bonus]
events = [14]
"#,
        )
        .expect("valid rules");

        assert_eq!(rules.grammar, CriteriaGrammar::Postfix);
        assert_eq!(rules.unknown_operators, UnknownOperatorPolicy::Reject);
        assert_eq!(
            rules.eligibility_stats.into_iter().collect::<Vec<_>>(),
            vec![StatId::PROFESSION]
        );
        assert_eq!(rules.operators.decode(19), Ok(Operator::TargetModifier));
        assert_eq!(rules.operators.decode(2), Ok(Operator::GreaterThan));
        assert_eq!(
            rules.bonus.stat_modifier_kinds,
            RulesConfig::default().bonus.stat_modifier_kinds
        );
        assert!(rules.bonus.events.is_some());
    }

    #[test]
    fn unknown_grammar_is_an_error() {
        assert!(RulesLoader::parse(r#"grammar = "infix""#).is_err());
    }
}
