//! Single-episode flows: submit, wait, reveal, idle

use super::*;

#[test]
fn test_new_controller_is_idle() {
    let harness = Harness::new();
    let controller = &harness.controller;

    assert_eq!(controller.current_state(), LifecycleState::Idle);
    assert_eq!(controller.current_status_message(), None);
    assert_eq!(controller.current_revealed_content(), "");
    assert_eq!(controller.current_query(), None);
    assert!(!controller.has_results_surface());
    assert_eq!(controller.active_timer_count(), 0);
    assert_eq!(controller.next_deadline(), None);
}

#[test]
fn test_full_episode_scenario() {
    let mut harness = Harness::new();

    harness.submit("AAA bonds", 0).unwrap();
    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );
    assert_eq!(
        harness.controller.current_status_message(),
        Some("Analyzing your query...")
    );

    let request = harness.take_request().expect("request should be sent");
    assert_eq!(request.query, "AAA bonds");
    assert_eq!(request.request_id, 1);

    harness.tick(2000);
    assert_eq!(
        harness.controller.current_status_message(),
        Some("Fetching the most appropriate response...")
    );
    harness.tick(4000);
    assert_eq!(
        harness.controller.current_status_message(),
        Some("Almost there...")
    );
    harness.tick(6000);
    assert_eq!(
        harness.controller.current_status_message(),
        Some("Analyzing your query...")
    );

    assert!(harness.answer(request.request_id, "Top pick: X", 6500));
    assert_eq!(harness.controller.current_state(), LifecycleState::Revealing);
    assert_eq!(harness.controller.current_status_message(), None);
    assert_eq!(harness.controller.current_revealed_content(), "");
    assert!(harness.controller.is_reveal_in_progress());

    harness.tick(6530);
    assert_eq!(harness.controller.current_revealed_content(), "Top ");
    harness.tick(6560);
    assert_eq!(harness.controller.current_revealed_content(), "Top pick");
    harness.tick(6590);
    assert_eq!(harness.controller.current_revealed_content(), "Top pick: X");

    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert!(!harness.controller.is_reveal_in_progress());
    assert!(!harness.controller.snapshot().revealing);
    assert_eq!(harness.controller.active_timer_count(), 0);
    assert_eq!(harness.controller.content_kind(), ContentKind::Answer);

    assert_eq!(
        harness.states(),
        vec![
            LifecycleState::Idle,
            LifecycleState::Submitting,
            LifecycleState::AwaitingResponse,
            LifecycleState::Revealing,
            LifecycleState::Idle,
        ]
    );
}

#[test]
fn test_empty_submission_is_a_no_op() {
    let mut harness = Harness::new();

    assert_eq!(harness.submit("", 0), Err(QueryError::Empty));
    assert_eq!(harness.submit("   \t ", 0), Err(QueryError::Empty));

    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert!(harness.take_request().is_none());
    assert!(harness.controller.transitions.is_empty());
    assert_eq!(harness.controller.pending_request_id(), None);
}

#[test]
fn test_empty_submission_does_not_disturb_running_episode() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    let request = harness.take_request().unwrap();

    assert!(harness.submit("  ", 100).is_err());

    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );
    assert_eq!(harness.controller.pending_request_id(), Some(request.request_id));
    assert!(!request.cancel_token.is_cancelled());
}

#[test]
fn test_query_is_trimmed_before_sending() {
    let mut harness = Harness::new();
    harness.submit("  AA+ rated NBFC bonds  ", 0).unwrap();

    let request = harness.take_request().unwrap();
    assert_eq!(request.query, "AA+ rated NBFC bonds");
    assert_eq!(
        harness.controller.current_query(),
        Some("AA+ rated NBFC bonds")
    );
}

#[test]
fn test_empty_answer_completes_immediately() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    let request = harness.take_request().unwrap();

    harness.answer(request.request_id, "", 100);

    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert_eq!(harness.controller.current_revealed_content(), "");
    assert_eq!(harness.controller.active_timer_count(), 0);
    assert!(harness.states().ends_with(&[
        LifecycleState::AwaitingResponse,
        LifecycleState::Revealing,
        LifecycleState::Idle,
    ]));
}

#[test]
fn test_results_stay_visible_after_reveal() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    let request = harness.take_request().unwrap();
    harness.answer(request.request_id, "# Bonds\n- AAA", 100);
    harness.run_until_idle(100);

    assert!(harness.controller.has_results_surface());
    assert_eq!(harness.controller.current_query(), Some("AAA bonds"));
    assert_eq!(
        harness.controller.current_revealed_content(),
        "# Bonds\n- AAA"
    );
}

#[test]
fn test_entering_phase_ends_after_duration() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    assert_eq!(
        harness.controller.animation_phase(),
        AnimationPhase::Entering
    );

    assert!(!harness.tick(ENTERING_MS - 1));
    assert_eq!(
        harness.controller.animation_phase(),
        AnimationPhase::Entering
    );

    assert!(harness.tick(ENTERING_MS));
    assert_eq!(harness.controller.animation_phase(), AnimationPhase::Steady);
}

#[test]
fn test_next_deadline_tracks_earliest_timer() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    assert_eq!(
        harness.controller.next_deadline(),
        Some(harness.at(ENTERING_MS))
    );

    harness.tick(ENTERING_MS);
    assert_eq!(
        harness.controller.next_deadline(),
        Some(harness.at(STATUS_INTERVAL_MS))
    );

    let request = harness.take_request().unwrap();
    harness.answer(request.request_id, "Top pick: X", 500);
    assert_eq!(
        harness.controller.next_deadline(),
        Some(harness.at(500 + REVEAL_INTERVAL_MS))
    );

    harness.run_until_idle(500);
    assert_eq!(harness.controller.next_deadline(), None);
}

#[test]
fn test_request_ids_increase_per_dispatch() {
    let mut harness = Harness::new();

    harness.submit("first", 0).unwrap();
    let first = harness.take_request().unwrap();
    harness.answer(first.request_id, "one", 10);
    let idle_at = harness.run_until_idle(10);

    harness.submit("second", idle_at).unwrap();
    harness.tick(idle_at + CLOSING_MS);
    let second = harness.take_request().unwrap();

    assert!(second.request_id > first.request_id);
}

#[test]
fn test_dismiss_clears_results() {
    let mut harness = Harness::new();
    harness.submit("AAA bonds", 0).unwrap();
    let request = harness.take_request().unwrap();
    harness.answer(request.request_id, "Top pick: X", 100);
    let idle_at = harness.run_until_idle(100);

    assert!(harness.dismiss(idle_at));
    assert_eq!(harness.controller.current_state(), LifecycleState::Closing);
    assert_eq!(harness.controller.animation_phase(), AnimationPhase::Exiting);
    // The old card is still drawn during the exit transition
    assert_eq!(harness.controller.current_revealed_content(), "Top pick: X");

    harness.tick(idle_at + CLOSING_MS);

    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert_eq!(harness.controller.animation_phase(), AnimationPhase::Steady);
    assert_eq!(harness.controller.current_revealed_content(), "");
    assert_eq!(harness.controller.current_query(), None);
    assert!(!harness.controller.has_results_surface());
    assert!(harness.take_request().is_none());
}

#[test]
fn test_dismiss_without_results_does_nothing() {
    let mut harness = Harness::new();
    assert!(!harness.dismiss(0));
    assert!(harness.controller.transitions.is_empty());
}

#[test]
fn test_zero_transition_durations_skip_waiting() {
    let mut settings = test_settings();
    settings.closing = Duration::ZERO;
    settings.entering = Duration::ZERO;
    let mut harness = Harness::with_settings(settings);

    harness.submit("A", 0).unwrap();
    assert_eq!(harness.controller.animation_phase(), AnimationPhase::Steady);
    let first = harness.take_request().unwrap();

    harness.submit("B", 10).unwrap();
    assert_eq!(
        harness.controller.current_state(),
        LifecycleState::AwaitingResponse
    );
    assert!(first.cancel_token.is_cancelled());
    assert_eq!(harness.take_request().unwrap().query, "B");
}

#[test]
fn test_line_reveal_settings_are_used() {
    let mut settings = test_settings();
    settings.reveal = RevealSettings {
        unit: RevealUnit::Lines,
        chunk_size: 1,
        interval: Duration::from_millis(400),
    };
    let mut harness = Harness::with_settings(settings);
    harness.submit("AAA bonds", 0).unwrap();
    let request = harness.take_request().unwrap();
    harness.answer(request.request_id, "# Bonds\n- AAA\n- AA+", 0);

    harness.tick(400);
    assert_eq!(harness.controller.current_revealed_content(), "# Bonds\n");
    harness.tick(800);
    assert_eq!(
        harness.controller.current_revealed_content(),
        "# Bonds\n- AAA\n"
    );
}

#[test]
fn test_new_rejects_invalid_settings() {
    let mut no_messages = test_settings();
    no_messages.status_messages.clear();
    assert!(matches!(
        QueryController::new(no_messages),
        Err(ControllerError::Status(crate::status::StatusError::NoMessages))
    ));

    let mut zero_chunk = test_settings();
    zero_chunk.reveal.chunk_size = 0;
    assert!(matches!(
        QueryController::new(zero_chunk),
        Err(ControllerError::Reveal(crate::reveal::RevealError::ZeroChunk))
    ));
}

#[test]
fn test_settings_from_config() {
    let config = crate::config::Config::default();
    let settings = ControllerSettings::from_config(&config);

    assert_eq!(settings.status_messages, config.status.messages);
    assert_eq!(settings.status_interval, Duration::from_millis(2000));
    assert_eq!(settings.reveal.chunk_size, 10);
    assert_eq!(settings.closing, Duration::from_millis(300));
}

#[test]
fn test_rejected_reveal_settings_show_answer_in_full() {
    let mut harness = Harness::new();
    harness.controller.settings.reveal.chunk_size = 0;

    harness.submit("AAA bonds", 0).unwrap();
    let request = harness.take_request().unwrap();
    harness.answer(request.request_id, "Top pick: X", 100);

    assert_eq!(harness.controller.current_state(), LifecycleState::Idle);
    assert_eq!(harness.controller.current_revealed_content(), "Top pick: X");
    assert_eq!(harness.controller.active_timer_count(), 0);
}
