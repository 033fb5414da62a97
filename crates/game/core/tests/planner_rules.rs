use std::collections::BTreeSet;

use aoplan_core::{
    ActorStats, BonusSource, CriteriaGrammar, Criterion, CriterionSequence, EffectRecord,
    Evaluator, Profession, RulesConfig, SourceKind, StatId, aggregate_bonuses,
    compute_skill_total, evaluate_requirements, is_eligible_for_actor,
};

const MODIFY_STAT: i32 = 53045;
const ON_WEAR: i32 = 14;

fn filter(stats: &[StatId]) -> BTreeSet<StatId> {
    stats.iter().copied().collect()
}

fn source(name: &str, kind: SourceKind, effects: &[(StatId, i32)]) -> BonusSource {
    effects.iter().fold(BonusSource::new(name, kind), |source, (stat, amount)| {
        source.with_effect(EffectRecord::new(MODIFY_STAT, *stat, *amount, ON_WEAR))
    })
}

#[test]
fn empty_requirements_are_always_met() {
    let actor = ActorStats::new().with(StatId::LEVEL, 1);
    let result = evaluate_requirements(&CriterionSequence::empty(), &actor);

    assert!(result.satisfied);
    assert!(result.failed_criteria.is_empty());
    assert!(is_eligible_for_actor(
        &CriterionSequence::empty(),
        &actor,
        &filter(&[StatId::PROFESSION])
    ));
}

#[test]
fn failed_comparisons_are_listed() {
    let s1 = StatId(2001);
    let s2 = StatId(2002);
    let sequence = CriterionSequence::new(vec![
        Criterion::greater_than(s1, 10),
        Criterion::greater_than(s2, 5),
    ]);
    let actor = ActorStats::new().with(s1, 20).with(s2, 1);

    let result = evaluate_requirements(&sequence, &actor);
    assert!(!result.satisfied);
    assert_eq!(result.failed_criteria, vec![Criterion::greater_than(s2, 5)]);
}

#[test]
fn target_modified_profession_never_filters_the_caster() {
    let sequence = CriterionSequence::new(vec![
        Criterion::on_target(),
        Criterion::equal(StatId::PROFESSION, 11),
    ]);
    let profession = filter(&[StatId::PROFESSION]);

    for caster in [Profession::Agent, Profession::Doctor, Profession::Soldier] {
        let actor = ActorStats::new().with(StatId::PROFESSION, caster.code());
        assert!(
            is_eligible_for_actor(&sequence, &actor, &profession),
            "{caster} should not be filtered by a target requirement"
        );
        assert!(evaluate_requirements(&sequence, &actor).satisfied);
    }
}

#[test]
fn caster_profession_requirement_filters() {
    let sequence = CriterionSequence::new(vec![Criterion::equal(StatId::PROFESSION, 11)]);
    let profession = filter(&[StatId::PROFESSION]);

    let nanotech = ActorStats::new().with(StatId::PROFESSION, 11);
    let agent = ActorStats::new().with(StatId::PROFESSION, 5);
    assert!(is_eligible_for_actor(&sequence, &nanotech, &profession));
    assert!(!is_eligible_for_actor(&sequence, &agent, &profession));
}

#[test]
fn expansion_bits_are_checked_with_masks() {
    let expansion = filter(&[StatId::EXPANSION]);
    let needs = CriterionSequence::new(vec![Criterion::bit_set(StatId::EXPANSION, 4)]);
    let forbids = CriterionSequence::new(vec![Criterion::bit_not_set(StatId::EXPANSION, 4)]);

    let five = ActorStats::new().with(StatId::EXPANSION, 5);
    let one = ActorStats::new().with(StatId::EXPANSION, 1);
    let all = ActorStats::new().with(StatId::EXPANSION, 127);

    assert!(is_eligible_for_actor(&needs, &five, &expansion));
    assert!(!is_eligible_for_actor(&needs, &one, &expansion));
    assert!(!is_eligible_for_actor(&forbids, &all, &expansion));
    assert!(is_eligible_for_actor(&forbids, &one, &expansion));
}

#[test]
fn aggregation_ignores_source_order() {
    let sources = vec![
        source("Hat", SourceKind::Equipment, &[(StatId::PSYCHIC, 10)]),
        source("Perk", SourceKind::Perk, &[(StatId::PSYCHIC, 3), (StatId::SENSE, 4)]),
        source("Buff", SourceKind::Buff, &[(StatId::SENSE, -2)]),
    ];
    let expected = aggregate_bonuses(&sources);

    let mut reversed = sources.clone();
    reversed.reverse();
    assert_eq!(aggregate_bonuses(&reversed), expected);

    let mut rotated = sources.clone();
    rotated.rotate_left(1);
    assert_eq!(aggregate_bonuses(&rotated), expected);

    assert_eq!(expected.get(StatId::PSYCHIC), 13);
    assert_eq!(expected.get(StatId::SENSE), 2);
}

#[test]
fn inactive_sources_are_excluded() {
    let off = source("Unequipped", SourceKind::Equipment, &[(StatId::STAMINA, 50)])
        .with_active(false);
    assert!(aggregate_bonuses(&[off]).is_empty());
}

#[test]
fn skill_total_formula() {
    assert_eq!(compute_skill_total(5, 10, 245, 50, 25, 10), 345);
}

#[test]
fn removing_a_source_removes_exactly_its_bonus() {
    let a = source("A", SourceKind::Equipment, &[(StatId::AGILITY, 7), (StatId::SENSE, 1)]);
    let b = source("B", SourceKind::Buff, &[(StatId::AGILITY, -3), (StatId::PSYCHIC, 9)]);

    let both = aggregate_bonuses(&[a.clone(), b.clone()]);
    let only_a = aggregate_bonuses(&[a]);
    let only_b = aggregate_bonuses(&[b]);

    let diff = both.difference(&only_a);
    assert_eq!(diff, only_b);
    for stat in [StatId::AGILITY, StatId::SENSE, StatId::PSYCHIC] {
        assert_eq!(both.get(stat) - only_a.get(stat), only_b.get(stat));
    }
}

#[test]
fn configured_grammar_changes_how_or_markers_read() {
    // Grouped reads (A && B) || C. Postfix reads (A || B) && C.
    let a = Criterion::equal(StatId::LEVEL, 1);
    let b = Criterion::equal(StatId::LEVEL, 2);
    let c = Criterion::greater_than(StatId::STRENGTH, 100);
    let sequence = CriterionSequence::new(vec![a, b, Criterion::or(), c]);
    let weak_level_one = ActorStats::new().with(StatId::LEVEL, 1);

    let grouped = RulesConfig::default().evaluator();
    let postfix = Evaluator::new(CriteriaGrammar::Postfix);

    assert!(!grouped.evaluate(&sequence, &weak_level_one).satisfied);
    assert!(!postfix.evaluate(&sequence, &weak_level_one).satisfied);

    let strong_level_one = weak_level_one.clone().with(StatId::STRENGTH, 200);
    assert!(grouped.evaluate(&sequence, &strong_level_one).satisfied);
    assert!(postfix.evaluate(&sequence, &strong_level_one).satisfied);

    let strong_level_three = ActorStats::new()
        .with(StatId::LEVEL, 3)
        .with(StatId::STRENGTH, 200);
    assert!(grouped.evaluate(&sequence, &strong_level_three).satisfied);
    assert!(!postfix.evaluate(&sequence, &strong_level_three).satisfied);
}

#[test]
fn evaluation_is_shareable_across_threads() {
    let sequence = CriterionSequence::new(vec![Criterion::greater_than(StatId::LEVEL, 50)]);
    let actors: Vec<_> = (0..8)
        .map(|i| ActorStats::new().with(StatId::LEVEL, i * 20))
        .collect();

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = actors
            .iter()
            .map(|actor| scope.spawn(|| evaluate_requirements(&sequence, actor).satisfied))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("evaluation does not panic"))
            .collect()
    });

    assert_eq!(
        results,
        vec![false, false, false, true, true, true, true, true]
    );
}
