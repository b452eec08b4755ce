//! Decision session aggregate.
//!
//! A session is one interactive run of the questionnaire. It owns the
//! walkthrough answers, the current classification selections and the
//! advice gate. Nothing outlives it: dropping the session discards all of it.

use crate::domain::advice::{AdviceGate, AdviceText};
use crate::domain::classification::{
    ClassificationEngine, ClassificationInputs, ClassificationResult,
};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::walkthrough::{WalkthroughAnswers, WalkthroughField};

/// Session aggregate - exclusive owner of all per-session state.
///
/// # Invariants
///
/// - the advice gate starts unused and is never reset
/// - `advice` is only set after the gate let a successful call through
/// - classification is never stored, only derived from the selections
/// - not `Clone`: a copy would carry a second advice gate
#[derive(Debug)]
pub struct DecisionSession {
    id: SessionId,
    started_at: Timestamp,
    answers: WalkthroughAnswers,
    selections: Option<ClassificationInputs>,
    gate: AdviceGate,
    advice: Option<AdviceText>,
}

impl DecisionSession {
    /// Starts a fresh session.
    pub fn start() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            answers: WalkthroughAnswers::new(),
            selections: None,
            gate: AdviceGate::new(),
            advice: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn answers(&self) -> &WalkthroughAnswers {
        &self.answers
    }

    pub fn selections(&self) -> Option<&ClassificationInputs> {
        self.selections.as_ref()
    }

    pub fn gate(&self) -> &AdviceGate {
        &self.gate
    }

    /// Advice received in this session, if any.
    pub fn advice(&self) -> Option<&AdviceText> {
        self.advice.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_answer(&mut self, field: WalkthroughField, text: impl Into<String>) {
        self.answers.set(field, text);
    }

    pub fn set_selections(&mut self, selections: ClassificationInputs) {
        self.selections = Some(selections);
    }

    /// Current classification, recomputed from the selections on every call.
    pub fn classification(&self, engine: &ClassificationEngine) -> Option<ClassificationResult> {
        self.selections.as_ref().map(|s| engine.classify_inputs(s))
    }

    pub(crate) fn gate_mut(&mut self) -> &mut AdviceGate {
        &mut self.gate
    }

    pub(crate) fn store_advice(&mut self, advice: AdviceText) {
        self.advice = Some(advice);
    }
}

impl Default for DecisionSession {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advice::AdviceGateState;
    use crate::domain::classification::{
        ClassificationPolicy, CostOfReversal, ImpactDuration, StakeholderInvolvement, StakesLabel,
    };

    #[test]
    fn new_session_is_blank() {
        let session = DecisionSession::start();
        assert!(!session.answers().all_fields_non_empty());
        assert!(session.selections().is_none());
        assert!(session.advice().is_none());
        assert_eq!(session.gate().state(), AdviceGateState::Unused);
    }

    #[test]
    fn session_is_not_clone() {
        // Resolves only while exactly one impl applies, i.e. while
        // `DecisionSession: !Clone`.
        trait AmbiguousIfClone<A> {
            fn some_item() {}
        }
        impl<T: ?Sized> AmbiguousIfClone<()> for T {}
        struct IsClone;
        impl<T: ?Sized + Clone> AmbiguousIfClone<IsClone> for T {}

        <DecisionSession as AmbiguousIfClone<_>>::some_item();
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(DecisionSession::start().id(), DecisionSession::start().id());
    }

    #[test]
    fn classification_is_none_until_selected() {
        let session = DecisionSession::start();
        assert!(session.classification(&ClassificationEngine::default()).is_none());
    }

    #[test]
    fn classification_follows_latest_selection() {
        let engine = ClassificationEngine::new(ClassificationPolicy::OrdinalScore);
        let mut session = DecisionSession::start();

        session.set_selections(ClassificationInputs::default());
        assert_eq!(
            session.classification(&engine).unwrap().label(),
            StakesLabel::LowStakes
        );

        session.set_selections(ClassificationInputs::new(
            ImpactDuration::Long,
            CostOfReversal::Significant,
            StakeholderInvolvement::BroadExternal,
        ));
        assert_eq!(
            session.classification(&engine).unwrap().label(),
            StakesLabel::HighStakes
        );
    }

    #[test]
    fn classifying_repeatedly_never_touches_the_gate() {
        let engine = ClassificationEngine::default();
        let mut session = DecisionSession::start();
        session.set_selections(ClassificationInputs::default());

        let first = session.classification(&engine);
        for _ in 0..10 {
            assert_eq!(session.classification(&engine), first);
        }
        assert_eq!(session.gate().state(), AdviceGateState::Unused);
    }

    #[test]
    fn set_answer_is_visible_through_answers() {
        let mut session = DecisionSession::start();
        session.set_answer(WalkthroughField::DataNeeds, "soil survey");
        assert_eq!(session.answers().get(WalkthroughField::DataNeeds), "soil survey");
    }
}
