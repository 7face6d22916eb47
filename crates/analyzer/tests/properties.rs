#![forbid(unsafe_code)]

use analyzer::{IntervalRecord, LineEvent, OutageTracker, Phase, TrackerOutput};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Interval { zero: bool, len: u8 },
    End,
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    let step = prop_oneof![
        8 => (any::<bool>(), 1u8..=5).prop_map(|(zero, len)| Step::Interval { zero, len }),
        1 => Just(Step::End),
    ];
    prop::collection::vec(step, 0..128)
}

/// Lay steps out as consecutive intervals, restarting at zero after every
/// end marker.
fn events(steps: &[Step]) -> Vec<LineEvent> {
    let mut offset = 0.0;
    steps
        .iter()
        .map(|step| match *step {
            Step::Interval { zero, len } => {
                let start = offset;
                offset += f64::from(len);
                let transfer = if zero { 0.0 } else { 1024.0 };
                LineEvent::Interval(IntervalRecord::new(start, offset, transfer))
            }
            Step::End => {
                offset = 0.0;
                LineEvent::TestEnd
            }
        })
        .collect()
}

fn run(events: &[LineEvent]) -> TrackerOutput {
    let mut tracker = OutageTracker::new();
    for event in events {
        tracker.process(event);
    }
    tracker.finish()
}

proptest! {
    #[test]
    fn closed_outages_match_emitted_events(steps in steps()) {
        let events = events(&steps);
        let mut tracker = OutageTracker::new();
        let mut closures = 0;
        for event in &events {
            let before = tracker.phase();
            tracker.process(event);
            if matches!(before, Phase::OutageOpen { .. }) && tracker.phase() == Phase::Idle {
                closures += 1;
            }
        }
        if matches!(tracker.phase(), Phase::OutageOpen { .. }) {
            closures += 1;
        }
        prop_assert_eq!(tracker.finish().outages.len(), closures);
    }

    #[test]
    fn replay_is_idempotent(steps in steps()) {
        let events = events(&steps);
        prop_assert_eq!(run(&events), run(&events));
    }

    #[test]
    fn outages_never_exceed_elapsed(steps in steps()) {
        let output = run(&events(&steps));
        let total: f64 = output.outages.iter().map(|o| o.duration_secs()).sum();
        prop_assert!(total <= output.elapsed_secs);
        for outage in &output.outages {
            prop_assert!(outage.start_offset <= outage.end_offset);
        }
    }

    #[test]
    fn segments_do_not_leak(steps in steps()) {
        let events = events(&steps);
        let whole = run(&events);

        let mut elapsed = 0.0;
        let mut outages = Vec::new();
        for segment in events.split(|event| *event == LineEvent::TestEnd) {
            let part = run(segment);
            elapsed += part.elapsed_secs;
            outages.extend(part.outages);
        }

        prop_assert_eq!(whole.elapsed_secs, elapsed);
        prop_assert_eq!(whole.outages, outages);
    }
}
