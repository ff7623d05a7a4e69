//! Submitting while another episode is on screen

use super::*;

#[test]
fn test_preempt_while_awaiting_response() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    let first = harness.take_request().unwrap();

    harness.submit("B", 500).unwrap();

    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);
    assert_eq!(harness.controller.animation_phase(), AnimationPhase::Exiting);
    assert!(first.cancel_token.is_cancelled());
    assert_eq!(harness.controller.pending_request_id(), None);
    assert_eq!(harness.controller.current_status_message(), None);
    assert_eq!(harness.controller.active_timer_count(), 0);
    // B is not dispatched until the exit transition ends
    assert!(harness.take_request().is_none());

    harness.tick(500 + CLOSING_MS - 1);
    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);

    harness.tick(500 + CLOSING_MS);
    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );
    assert_eq!(harness.controller.current_query(), Some("B"));
    assert_eq!(
        harness.controller.current_status_message(),
        Some("Analyzing your query...")
    );

    let second = harness.take_request().unwrap();
    assert_eq!(second.query, "B");
    assert_ne!(second.request_id, first.request_id);
    assert!(!second.cancel_token.is_cancelled());

    // A's answer arrives late and must not leak onto B's card
    let before = harness.visible();
    assert!(!harness.answer(first.request_id, "answer for A", 900));
    assert_eq!(harness.visible(), before);

    harness.answer(second.request_id, "answer for B", 1000);
    harness.run_until_idle(1000);
    assert_eq!(harness.controller.current_revealed_content(), "answer for B");

    assert!(harness.take_request().is_none());
    assert_eq!(
        harness.states(),
        vec![
            LifecycleState::Idle,
            LifecycleState::Submitting,
            LifecycleState::AwaitingResponse,
            LifecycleState::Closing,
            LifecycleState::Submitting,
            LifecycleState::AwaitingResponse,
            LifecycleState::Revealing,
            LifecycleState::Idle,
        ]
    );
}

#[test]
fn test_late_failure_of_superseded_request_is_ignored() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    let first = harness.take_request().unwrap();
    harness.submit("B", 100).unwrap();
    harness.tick(100 + CLOSING_MS);
    harness.take_request().unwrap();

    let before = harness.visible();
    assert!(!harness.fail(first.request_id, AnswerError::Cancelled, 500));
    assert_eq!(harness.visible(), before);
    assert_eq!(harness.controller.content_kind(), ContentKind::Answer);
    assert_eq!(harness.controller.last_failure(), None);
}

#[test]
fn test_late_answer_during_closing_is_ignored() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    let first = harness.take_request().unwrap();
    harness.submit("B", 100).unwrap();

    let before = harness.visible();
    assert!(!harness.answer(first.request_id, "answer for A", 150));
    assert_eq!(harness.visible(), before);
    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);
}

#[test]
fn test_preempt_while_revealing() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    let first = harness.take_request().unwrap();
    harness.answer(first.request_id, "Top pick: X", 100);
    harness.tick(130);
    assert_eq!(harness.controller.current_revealed_content(), "Top ");

    harness.submit("B", 140).unwrap();

    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);
    assert!(!harness.controller.is_reveal_in_progress());
    assert_eq!(harness.controller.active_timer_count(), 0);
    // Frozen partial content fades out with the card
    assert_eq!(harness.controller.current_revealed_content(), "Top ");
    harness.tick(160);
    assert_eq!(harness.controller.current_revealed_content(), "Top ");

    harness.tick(140 + CLOSING_MS);
    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );
    assert_eq!(harness.controller.current_revealed_content(), "");
    assert_eq!(harness.take_request().unwrap().query, "B");
}

#[test]
fn test_submit_during_closing_replaces_queued_query() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    harness.take_request().unwrap();

    harness.submit("B", 100).unwrap();
    harness.submit("C", 200).unwrap();
    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);

    // The exit transition is not restarted by the second submit
    harness.tick(100 + CLOSING_MS);
    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );

    let next = harness.take_request().unwrap();
    assert_eq!(next.query, "C");
    assert!(harness.take_request().is_none());
    assert_eq!(harness.controller.current_query(), Some("C"));

    let closings = harness
        .states()
        .iter()
        .filter(|s| **s == LifecycleState::Closing)
        .count();
    assert_eq!(closings, 1);
}

#[test]
fn test_submit_after_completed_episode_closes_old_results() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    let first = harness.take_request().unwrap();
    harness.answer(first.request_id, "old answer", 100);
    let idle_at = harness.run_until_idle(100);

    harness.submit("B", idle_at).unwrap();

    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);
    assert_eq!(harness.controller.current_revealed_content(), "old answer");
    assert!(harness.take_request().is_none());

    harness.tick(idle_at + CLOSING_MS);
    assert_eq!(harness.take_request().unwrap().query, "B");
}

#[test]
fn test_resubmitting_same_query_starts_new_episode() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    let first = harness.take_request().unwrap();
    harness.answer(first.request_id, "answer", 100);
    let idle_at = harness.run_until_idle(100);

    harness.submit("AAA bonds", idle_at).unwrap();
    harness.tick(idle_at + CLOSING_MS);

    let second = harness.take_request().unwrap();
    assert_eq!(second.query, "AAA bonds");
    assert_eq!(second.request_id, first.request_id + 1);
    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );
    assert_eq!(harness.controller.current_revealed_content(), "");
}

#[test]
fn test_rapid_submissions_send_only_last_query() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    harness.take_request().unwrap();

    for (i, query) in ["B", "C", "D", "E"].iter().enumerate() {
        harness.submit(query, 10 * (i as u64 + 1)).unwrap();
    }
    harness.tick(10 + CLOSING_MS);

    assert_eq!(harness.take_request().unwrap().query, "E");
    assert!(harness.take_request().is_none());
}

#[test]
fn test_dismiss_while_awaiting_response() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    let first = harness.take_request().unwrap();

    assert!(harness.dismiss(500));
    assert!(first.cancel_token.is_cancelled());
    assert_eq!(harness.controller.active_timer_count(), 0);

    harness.tick(500 + CLOSING_MS);
    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert!(!harness.controller.has_results_surface());

    let before = harness.visible();
    assert!(!harness.answer(first.request_id, "late", 900));
    assert_eq!(harness.visible(), before);
}

#[test]
fn test_dismiss_during_closing_drops_queued_query() {
    let mut harness = Harness::new();
    harness.submit("A", 0).unwrap();
    harness.take_request().unwrap();
    harness.submit("B", 100).unwrap();

    assert!(harness.dismiss(150));
    // Nothing left to drop
    assert!(!harness.dismiss(160));

    harness.tick(100 + CLOSING_MS);
    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert!(harness.take_request().is_none());
    assert_eq!(harness.controller.current_query(), None);
}
