use super::*;

fn question(text: &str) -> ChallengeQuestion {
    ChallengeQuestion { question: text.to_owned(), ..ChallengeQuestion::default() }
}

fn outcome(rating: i32, left: i32) -> ChallengeOutcome {
    ChallengeOutcome { rating, insight: format!("rated {rating}"), left }
}

#[test]
fn fresh_state_cannot_submit_without_question_or_answer() {
    let mut state = ChallengeState::default();
    assert!(!state.can_submit());

    state = state.with_question(question("What is ownership?"));
    assert!(!state.can_submit(), "empty answer must not submit");

    state.answer = "   ".to_owned();
    assert!(!state.can_submit(), "whitespace answer must not submit");

    state.answer = "Moves transfer ownership.".to_owned();
    assert!(state.can_submit());
}

#[test]
fn rating_at_threshold_transitions_to_passed() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.begin_submit();
    state.apply_outcome(&outcome(PASSING_RATING, 2));

    assert_eq!(state.phase, SubmitPhase::Passed);
    assert_eq!(state.submit_label(), "Success");
    assert_eq!(state.submit_class(), "btn btn--success");
}

#[test]
fn rating_below_threshold_transitions_to_failed() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.begin_submit();
    state.apply_outcome(&outcome(PASSING_RATING - 1, 2));

    assert_eq!(state.phase, SubmitPhase::Failed);
    assert_eq!(state.submit_label(), "Failed");
    assert_eq!(state.submit_class(), "btn btn--danger");
}

#[test]
fn attempts_counter_decreases_by_one_per_submission() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.apply_outcome(&outcome(3, 2));
    assert_eq!(state.attempts_left, Some(2));

    let mut next = state.with_question(question("Q2"));
    next.answer = "B".to_owned();
    next.apply_outcome(&outcome(8, 1));
    assert_eq!(next.attempts_left, Some(1));
}

#[test]
fn next_is_offered_only_while_attempts_remain() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.apply_outcome(&outcome(7, 1));
    assert!(state.can_advance());

    let mut last = state.with_question(question("Q2"));
    last.answer = "B".to_owned();
    last.apply_outcome(&outcome(7, 0));
    assert!(!last.can_advance());
}

#[test]
fn next_is_not_offered_mid_submission() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.begin_submit();
    state.attempts_left = Some(2);
    assert!(!state.can_advance());
}

#[test]
fn with_question_resets_the_attempt_but_keeps_the_counter() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.apply_outcome(&outcome(9, 1));

    let next = state.with_question(question("Q2"));
    assert_eq!(next.phase, SubmitPhase::Idle);
    assert_eq!(next.answer, "");
    assert_eq!(next.insight, None);
    assert_eq!(next.attempts_left, Some(1));
}

#[test]
fn transit_failure_returns_to_editable() {
    let mut state = ChallengeState::default().with_question(question("Q"));
    state.answer = "A".to_owned();
    state.begin_submit();
    state.submit_failed();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert!(state.can_submit());
}
