//! Property-based tests for the stakes classifier.

use proptest::prelude::*;

use aimed_decisions::application::{ClassifyDecisionCommand, ClassifyDecisionHandler};
use aimed_decisions::domain::classification::{
    ClassificationEngine, ClassificationPolicy, CostOfReversal, DecisionAttribute,
    ImpactDuration, StakeholderInvolvement, StakesLabel,
};
use aimed_decisions::domain::session::DecisionSession;
use aimed_decisions::domain::walkthrough::WalkthroughField;

fn impact() -> impl Strategy<Value = ImpactDuration> {
    prop::sample::select(ImpactDuration::all().to_vec())
}

fn cost() -> impl Strategy<Value = CostOfReversal> {
    prop::sample::select(CostOfReversal::all().to_vec())
}

fn stakeholders() -> impl Strategy<Value = StakeholderInvolvement> {
    prop::sample::select(StakeholderInvolvement::all().to_vec())
}

fn policy() -> impl Strategy<Value = ClassificationPolicy> {
    prop_oneof![
        Just(ClassificationPolicy::OrdinalScore),
        Just(ClassificationPolicy::AnySevereFactor),
    ]
}

/// One level up, saturating at the top.
fn bump<A: DecisionAttribute>(level: A) -> A {
    A::from_severity((level.severity() + 1).min(3)).unwrap_or(level)
}

proptest! {
    #[test]
    fn classify_is_deterministic(
        policy in policy(),
        i in impact(),
        c in cost(),
        s in stakeholders(),
    ) {
        let engine = ClassificationEngine::new(policy);
        prop_assert_eq!(engine.classify(i, c, s), engine.classify(i, c, s));
    }

    #[test]
    fn score_stays_in_range_and_matches_label(
        i in impact(),
        c in cost(),
        s in stakeholders(),
    ) {
        let result = ClassificationEngine::default().classify(i, c, s);

        prop_assert!((3..=9).contains(&result.score()));
        let expected = match result.score() {
            3 => StakesLabel::LowStakes,
            4..=6 => StakesLabel::ModerateStakes,
            _ => StakesLabel::HighStakes,
        };
        prop_assert_eq!(result.label(), expected);
    }

    #[test]
    fn raising_any_attribute_never_lowers_the_label(
        policy in policy(),
        i in impact(),
        c in cost(),
        s in stakeholders(),
    ) {
        let engine = ClassificationEngine::new(policy);
        let base = engine.classify(i, c, s).label();

        prop_assert!(engine.classify(bump(i), c, s).label() >= base);
        prop_assert!(engine.classify(i, bump(c), s).label() >= base);
        prop_assert!(engine.classify(i, c, bump(s)).label() >= base);
    }

    #[test]
    fn any_severe_factor_is_two_level(
        i in impact(),
        c in cost(),
        s in stakeholders(),
    ) {
        let result = ClassificationEngine::new(ClassificationPolicy::AnySevereFactor).classify(i, c, s);
        let severe = i.is_severe() || c.is_severe() || s.is_severe();

        prop_assert_eq!(result.label() == StakesLabel::HighStakes, severe);
        prop_assert_ne!(result.label(), StakesLabel::ModerateStakes);
    }

    #[test]
    fn unknown_labels_are_rejected(raw in "[a-z]{1,12}") {
        prop_assume!(ImpactDuration::parse_level(&raw).is_err());
        let err = ClassificationEngine::default()
            .classify_labels(&raw, "minimal", "internal_only")
            .unwrap_err();
        prop_assert!(err.to_string().contains(&raw));
    }
}

#[test]
fn boundary_scores() {
    let engine = ClassificationEngine::default();

    let low = engine.classify(
        ImpactDuration::Short,
        CostOfReversal::Minimal,
        StakeholderInvolvement::InternalOnly,
    );
    assert_eq!((low.score(), low.label()), (3, StakesLabel::LowStakes));

    let four = engine.classify(
        ImpactDuration::Medium,
        CostOfReversal::Minimal,
        StakeholderInvolvement::InternalOnly,
    );
    assert_eq!((four.score(), four.label()), (4, StakesLabel::ModerateStakes));

    let five = engine.classify(
        ImpactDuration::Long,
        CostOfReversal::Minimal,
        StakeholderInvolvement::InternalOnly,
    );
    assert_eq!((five.score(), five.label()), (5, StakesLabel::ModerateStakes));

    let six = engine.classify(
        ImpactDuration::Medium,
        CostOfReversal::Moderate,
        StakeholderInvolvement::Mixed,
    );
    assert_eq!((six.score(), six.label()), (6, StakesLabel::ModerateStakes));

    let nine = engine.classify(
        ImpactDuration::Long,
        CostOfReversal::Significant,
        StakeholderInvolvement::BroadExternal,
    );
    assert_eq!((nine.score(), nine.label()), (9, StakesLabel::HighStakes));
}

#[test]
fn classifying_leaves_the_advice_gate_and_answers_alone() {
    let mut session = DecisionSession::start();
    session.set_answer(WalkthroughField::Risks, "Crane downtime");
    let gate_before = session.gate().state();

    let handler = ClassifyDecisionHandler::default();
    for (impact, cost, stakeholders) in [
        ("short", "minimal", "internal_only"),
        ("Medium", "Moderate", "BroadExternal"),
        ("Long-term (months or years)", "significant", "mixed"),
    ] {
        handler
            .handle(
                &mut session,
                ClassifyDecisionCommand {
                    impact: impact.to_string(),
                    cost: cost.to_string(),
                    stakeholders: stakeholders.to_string(),
                },
            )
            .unwrap();
    }

    assert_eq!(session.gate().state(), gate_before);
    assert_eq!(session.answers().get(WalkthroughField::Risks), "Crane downtime");
    assert!(session.advice().is_none());
}
