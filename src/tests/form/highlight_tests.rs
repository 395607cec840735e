use std::time::{Duration, Instant};

use crate::domain::HighlightPhase;
use crate::form::{Clock, HighlightSequencer, HighlightStep, ManualClock};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn walks_phases_on_schedule() {
    let t0 = Instant::now();
    let mut sequencer = HighlightSequencer::new();
    sequencer.start("a", t0);

    assert!(sequencer.poll(t0).is_empty());
    assert!(sequencer.poll(t0 + ms(199)).is_empty());
    assert_eq!(
        sequencer.poll(t0 + ms(200)),
        vec![HighlightStep {
            sub_id: "a".to_string(),
            phase: HighlightPhase::Visible,
        }]
    );
    assert_eq!(
        sequencer.poll(t0 + ms(800)),
        vec![HighlightStep {
            sub_id: "a".to_string(),
            phase: HighlightPhase::FadeOut,
        }]
    );
    assert_eq!(
        sequencer.poll(t0 + ms(1200)),
        vec![HighlightStep {
            sub_id: "a".to_string(),
            phase: HighlightPhase::None,
        }]
    );
    assert!(sequencer.is_idle());
}

#[test]
fn late_poll_returns_steps_in_due_order() {
    let t0 = Instant::now();
    let mut sequencer = HighlightSequencer::new();
    sequencer.start("a", t0);

    let phases: Vec<HighlightPhase> = sequencer
        .poll(t0 + ms(1200))
        .into_iter()
        .map(|step| step.phase)
        .collect();
    assert_eq!(
        phases,
        vec![
            HighlightPhase::Visible,
            HighlightPhase::FadeOut,
            HighlightPhase::None,
        ]
    );
}

#[test]
fn concurrent_sequences_do_not_cross_talk() {
    let t0 = Instant::now();
    let mut sequencer = HighlightSequencer::new();
    sequencer.start("a", t0);
    sequencer.start("b", t0 + ms(100));

    let due = sequencer.poll(t0 + ms(250));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].sub_id, "a");
    assert_eq!(due[0].phase, HighlightPhase::Visible);

    sequencer.cancel("a");
    let rest = sequencer.poll(t0 + ms(2000));
    assert_eq!(rest.len(), 3);
    assert!(rest.iter().all(|step| step.sub_id == "b"));
}

#[test]
fn cancel_unknown_id_is_noop() {
    let t0 = Instant::now();
    let mut sequencer = HighlightSequencer::new();
    sequencer.start("a", t0);
    sequencer.cancel("missing");
    assert_eq!(sequencer.next_due(), Some(t0 + ms(200)));
}

#[test]
fn clear_drops_everything() {
    let t0 = Instant::now();
    let mut sequencer = HighlightSequencer::new();
    sequencer.start("a", t0);
    sequencer.start("b", t0);
    sequencer.clear();
    assert!(sequencer.is_idle());
    assert_eq!(sequencer.next_due(), None);
    assert!(sequencer.poll(t0 + ms(2000)).is_empty());
}

#[test]
fn manual_clock_clones_share_state() {
    let clock = ManualClock::new();
    let handle = clock.clone();
    let before = clock.now();
    handle.advance(ms(500));
    assert_eq!(clock.now(), before + ms(500));
}
