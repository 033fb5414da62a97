//! Loads the bundled data directory and plans against it end to end.

use std::collections::BTreeSet;
use std::path::PathBuf;

use aoplan_content::{ContentFactory, PlannerContent, Profile};
use aoplan_core::{ActionKind, ActorStats, Criterion, EntryId, StatId};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

fn load(profile: &str) -> (PlannerContent, Profile, ActorStats) {
    let factory = factory();
    let content = factory.load_content().expect("bundled content loads");
    let profile = factory.load_profile(profile).expect("bundled profile loads");
    let breakdown = profile.breakdown(&content.catalog, &content.rules.aggregator());
    let stats = profile.actor_stats(&breakdown);
    (content, profile, stats)
}

fn eligible(content: &PlannerContent, stats: &ActorStats, action: ActionKind) -> Vec<u32> {
    content
        .catalog
        .filter_eligible(action, stats, &content.rules.eligibility_stats)
        .map(|entry| entry.id.0)
        .collect()
}

#[test]
fn lists_bundled_profiles() {
    assert_eq!(
        factory().profile_names().expect("profiles dir"),
        vec!["doctor", "nanotech"]
    );
}

#[test]
fn nanotech_skill_totals_include_every_bonus_kind() {
    let (content, profile, stats) = load("nanotech");
    let breakdown = profile.breakdown(&content.catalog, &content.rules.aggregator());

    assert_eq!(breakdown.equipment.get(StatId::NANO_PROGRAMMING), 50);
    assert_eq!(breakdown.buffs.get(StatId::NANO_PROGRAMMING), 20);
    assert_eq!(breakdown.perks.get(StatId::MATTER_CREATION), 25);

    assert_eq!(stats.get(StatId::NANO_PROGRAMMING), 330);
    assert_eq!(stats.get(StatId::MATTER_CREATION), 1530);
    assert_eq!(stats.get(StatId::COMPUTER_LITERACY), 215);
    assert_eq!(stats.get(StatId::SENSORY_IMPROVEMENT), 365);
}

#[test]
fn proc_effects_do_not_count_as_bonuses() {
    let (content, profile, _) = load("nanotech");
    let total = profile
        .breakdown(&content.catalog, &content.rules.aggregator())
        .total();
    assert!(total.get(StatId::NANO_PROGRAMMING) < 999);
}

#[test]
fn nanotech_requirement_checks() {
    let (content, _, stats) = load("nanotech");
    let evaluator = content.rules.evaluator();
    let check = |id: u32| {
        content
            .catalog
            .check(EntryId(id), ActionKind::Cast, &stats, &evaluator)
            .expect("entry exists")
    };

    assert!(check(100).satisfied);
    assert!(check(102).satisfied);
    assert!(check(103).satisfied);

    let heal = check(101);
    assert!(!heal.satisfied);
    assert_eq!(heal.failed_criteria.len(), 2);

    let link = check(104);
    assert!(!link.satisfied);
    assert_eq!(
        link.failed_criteria,
        vec![Criterion::greater_than(StatId::SENSORY_IMPROVEMENT, 400)]
    );
}

#[test]
fn target_scoped_buff_is_castable_by_other_professions() {
    let (content, _, stats) = load("doctor");
    assert_eq!(eligible(&content, &stats, ActionKind::Cast), vec![101, 102, 103]);
    assert!(
        content
            .catalog
            .check(EntryId(101), ActionKind::Cast, &stats, &content.rules.evaluator())
            .expect("entry exists")
            .satisfied
    );
}

#[test]
fn eligibility_follows_profession_breed_side_and_expansion() {
    let (content, _, nanotech) = load("nanotech");
    assert_eq!(
        eligible(&content, &nanotech, ActionKind::Cast),
        vec![100, 102, 103, 104]
    );
    assert_eq!(
        eligible(&content, &nanotech, ActionKind::Wear),
        vec![2001, 2002, 2003, 2004]
    );

    let (content, _, doctor) = load("doctor");
    assert_eq!(
        eligible(&content, &doctor, ActionKind::Wear),
        vec![2001, 2003, 2004]
    );
}

#[test]
fn narrower_filter_ignores_other_dimensions() {
    let (content, _, doctor) = load("doctor");
    let profession_only: BTreeSet<_> = [StatId::PROFESSION].into_iter().collect();
    let ids: Vec<_> = content
        .catalog
        .filter_eligible(ActionKind::Cast, &doctor, &profession_only)
        .map(|entry| entry.id.0)
        .collect();
    assert_eq!(ids, vec![101, 102, 103, 104]);
}
