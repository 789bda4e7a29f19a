//! Host-level tests for toggling between the two messages.

mod common;

use common::{OK_PASS, Recorder, SOS_PASS, run};
use morse_beacon::{Error, Message, MessageSlot, MorseEncoder, Phase, Symbol, ToggleRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

#[test]
fn toggle_mid_message_takes_effect_at_next_boundary() {
    let toggle = ToggleRequest::new();
    let mut encoder = MorseEncoder::sos_ok(&toggle);
    let mut recorder = Recorder::default();

    let mut timeline = run(&mut encoder, &mut recorder, 5);
    encoder.request_toggle();
    timeline += &run(&mut encoder, &mut recorder, SOS_PASS.len() - 5);
    assert_eq!(timeline, SOS_PASS);
    assert_eq!(encoder.slot(), MessageSlot::Primary);

    assert_eq!(run(&mut encoder, &mut recorder, OK_PASS.len()), OK_PASS);
    assert_eq!(encoder.slot(), MessageSlot::Alternate);
    assert!(!encoder.is_toggle_pending());

    // No second request: OK keeps repeating.
    assert_eq!(run(&mut encoder, &mut recorder, OK_PASS.len()), OK_PASS);
}

#[test]
fn toggle_at_any_tick_of_a_pass_waits_for_the_boundary() {
    for offset in 0..=SOS_PASS.len() {
        let toggle = ToggleRequest::new();
        let mut encoder = MorseEncoder::sos_ok(&toggle);
        let mut recorder = Recorder::default();

        let mut timeline = run(&mut encoder, &mut recorder, offset);
        toggle.request();
        timeline += &run(&mut encoder, &mut recorder, SOS_PASS.len() - offset);

        assert_eq!(timeline, SOS_PASS, "toggle after tick {offset} changed SOS");
        assert_eq!(
            run(&mut encoder, &mut recorder, OK_PASS.len()),
            OK_PASS,
            "toggle after tick {offset} did not switch at the boundary"
        );
    }
}

#[test]
fn toggle_just_after_boundary_waits_a_full_message() {
    let toggle = ToggleRequest::new();
    let mut encoder = MorseEncoder::sos_ok(&toggle);
    let mut recorder = Recorder::default();

    // The boundary tick itself starts the second SOS.
    run(&mut encoder, &mut recorder, SOS_PASS.len() + 1);
    assert_eq!(encoder.phase(), Phase::EmittingDot);
    toggle.request();

    let rest = run(&mut encoder, &mut recorder, SOS_PASS.len() - 1);
    assert_eq!(rest, SOS_PASS[1..]);
    assert_eq!(run(&mut encoder, &mut recorder, OK_PASS.len()), OK_PASS);
}

#[test]
fn multiple_requests_collapse_to_one_swap() {
    let toggle = ToggleRequest::new();
    let mut encoder = MorseEncoder::sos_ok(&toggle);
    let mut recorder = Recorder::default();

    encoder.request_toggle();
    let mut timeline = run(&mut encoder, &mut recorder, 10);
    toggle.request();
    encoder.request_toggle();
    timeline += &run(&mut encoder, &mut recorder, SOS_PASS.len() - 10);
    assert_eq!(timeline, SOS_PASS);

    assert_eq!(run(&mut encoder, &mut recorder, OK_PASS.len()), OK_PASS);
    assert_eq!(run(&mut encoder, &mut recorder, OK_PASS.len()), OK_PASS);
}

#[test]
fn second_toggle_returns_to_sos() {
    let toggle = ToggleRequest::new();
    let mut encoder = MorseEncoder::sos_ok(&toggle);
    let mut recorder = Recorder::default();

    toggle.request();
    assert_eq!(run(&mut encoder, &mut recorder, SOS_PASS.len()), SOS_PASS);

    let mut timeline = run(&mut encoder, &mut recorder, 12);
    toggle.request();
    timeline += &run(&mut encoder, &mut recorder, OK_PASS.len() - 12);
    assert_eq!(timeline, OK_PASS);

    assert_eq!(run(&mut encoder, &mut recorder, SOS_PASS.len()), SOS_PASS);
    assert_eq!(encoder.slot(), MessageSlot::Primary);
}

#[test]
fn fresh_encoder_ignores_stale_request() {
    static TOGGLE: ToggleRequest = ToggleRequest::new();
    TOGGLE.request();

    let mut encoder = MorseEncoder::sos_ok(&TOGGLE);
    assert!(!encoder.is_toggle_pending());
    assert_eq!(encoder.phase(), Phase::EmittingDot);
    assert_eq!(encoder.cursor(), Some(0));
    assert_eq!(encoder.message(), Message::SOS);

    let mut recorder = Recorder::default();
    assert_eq!(run(&mut encoder, &mut recorder, SOS_PASS.len()), SOS_PASS);
    assert_eq!(run(&mut encoder, &mut recorder, SOS_PASS.len()), SOS_PASS);
}

#[test]
fn empty_message_is_rejected_at_construction() {
    let toggle = ToggleRequest::new();
    let symbols = [Symbol::Dot];

    assert!(matches!(
        MorseEncoder::from_symbols(&[], &symbols, &toggle),
        Err(Error::InvalidMessage)
    ));
    assert!(matches!(
        MorseEncoder::from_symbols(&symbols, &[], &toggle),
        Err(Error::InvalidMessage)
    ));
    assert!(MorseEncoder::from_symbols(&symbols, &symbols, &toggle).is_ok());
}

#[test]
fn custom_pair_swaps_slots() {
    let toggle = ToggleRequest::new();
    let primary = [Symbol::Dot, Symbol::Dash];
    let alternate = [Symbol::Dash, Symbol::Dot];
    let mut encoder = MorseEncoder::from_symbols(&primary, &alternate, &toggle).unwrap();
    let mut recorder = Recorder::default();

    toggle.request();
    assert_eq!(run(&mut encoder, &mut recorder, 13), ". ---        ");
    assert_eq!(run(&mut encoder, &mut recorder, 13), "--- .        ");
    assert_eq!(encoder.message().symbols(), &alternate);
}

/// Splits `timeline` into whole passes, returning how many were OK passes.
/// Anything left over must be the start of a pass.
fn count_ok_passes(timeline: &str) -> usize {
    let mut rest = timeline;
    let mut ok_passes = 0;
    loop {
        if let Some(after) = rest.strip_prefix(SOS_PASS) {
            rest = after;
        } else if let Some(after) = rest.strip_prefix(OK_PASS) {
            rest = after;
            ok_passes += 1;
        } else {
            break;
        }
    }
    assert!(
        SOS_PASS.starts_with(rest) || OK_PASS.starts_with(rest),
        "message broken at tick {}",
        timeline.len() - rest.len()
    );
    ok_passes
}

#[test]
fn requests_from_another_thread_never_break_a_message() {
    let toggle = ToggleRequest::new();
    let requests_done = AtomicBool::new(false);
    let mut encoder = MorseEncoder::sos_ok(&toggle);
    let mut recorder = Recorder::default();

    let timeline = thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..2_000 {
                toggle.request();
                thread::yield_now();
            }
            requests_done.store(true, Ordering::Release);
        });

        let mut timeline = String::new();
        while !requests_done.load(Ordering::Acquire) {
            timeline.push_str(&run(&mut encoder, &mut recorder, 1));
        }
        timeline
    });

    // Two more passes so the final request is applied at a boundary.
    let timeline = timeline + &run(&mut encoder, &mut recorder, 2 * SOS_PASS.len());

    assert!(count_ok_passes(&timeline) >= 1);
    assert!(!timeline.contains('!'));
}
