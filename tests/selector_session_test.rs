use pathway_select::app::console::{ConsoleEvents, ConsoleView};
use pathway_select::core::session::{SessionEngine, SessionOutcome};
use pathway_select::core::selector::RangeSelector;
use pathway_select::domain::model::{
    RangeSelection, SelectorEvent, SelectorSnapshot, ValueDomain,
};
use pathway_select::domain::ports::{EventSource, SelectionView};

struct Scripted(std::vec::IntoIter<SelectorEvent>);

impl Scripted {
    fn new(events: Vec<SelectorEvent>) -> Self {
        Self(events.into_iter())
    }
}

impl EventSource for Scripted {
    fn next_event(&mut self) -> pathway_select::Result<Option<SelectorEvent>> {
        Ok(self.0.next())
    }
}

#[derive(Default)]
struct Recording {
    snapshots: Vec<SelectorSnapshot>,
    warnings: Vec<String>,
}

impl SelectionView for &mut Recording {
    fn render(&mut self, snapshot: &SelectorSnapshot) {
        self.snapshots.push(*snapshot);
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

fn run_scripted(
    min_bound: f64,
    max_bound: f64,
    events: Vec<SelectorEvent>,
    view: &mut Recording,
) -> SessionOutcome {
    let mut selector = RangeSelector::new(ValueDomain::new(min_bound, max_bound).unwrap());
    let mut engine = SessionEngine::new(Scripted::new(events), view);
    engine.run(&mut selector).unwrap()
}

#[test]
fn test_push_down_scenario_ends_at_seventy() {
    // Moving the lower slider to 700 and then the upper to 300 drags the
    // lower bound down with it; both end at 700 -> 70.0.
    let mut view = Recording::default();
    let outcome = run_scripted(
        0.0,
        100.0,
        vec![
            SelectorEvent::LowerScale(700),
            SelectorEvent::UpperScale(300),
        ],
        &mut view,
    );

    assert_eq!(outcome, SessionOutcome::Cancelled);
    let last = view.snapshots.last().unwrap();
    assert_eq!(last.lower_position, 700);
    assert_eq!(last.upper_position, 700);
    assert_eq!(last.lower_value, 70.0);
    assert_eq!(last.upper_value, 70.0);
}

#[test]
fn test_out_of_domain_text_clamps_to_max() {
    let mut view = Recording::default();
    let outcome = run_scripted(
        0.0,
        10.0,
        vec![
            SelectorEvent::LowerText("15".to_string()),
            SelectorEvent::Confirm,
        ],
        &mut view,
    );

    let selection = match outcome {
        SessionOutcome::Confirmed(selection) => selection,
        other => panic!("expected confirmation, got {:?}", other),
    };
    assert_eq!(view.snapshots.last().unwrap().lower_position, 1000);
    assert_eq!(selection.min, 10.0);
    assert_eq!(selection.max, 10.0);
}

#[test]
fn test_disabled_lower_bound_confirms_unbounded() {
    let mut view = Recording::default();
    let outcome = run_scripted(
        0.0,
        10.0,
        vec![
            SelectorEvent::SetLowerEnabled(false),
            SelectorEvent::Confirm,
        ],
        &mut view,
    );

    assert_eq!(
        outcome,
        SessionOutcome::Confirmed(RangeSelection {
            min: RangeSelection::UNBOUNDED_MIN,
            max: 10.0,
        })
    );
}

#[test]
fn test_ordering_invariant_holds_after_every_event() {
    let mut view = Recording::default();
    run_scripted(
        -50.0,
        50.0,
        vec![
            SelectorEvent::LowerScale(900),
            SelectorEvent::UpperScale(100),
            SelectorEvent::SetUpperEnabled(false),
            SelectorEvent::LowerScale(950),
            SelectorEvent::SetUpperEnabled(true),
            SelectorEvent::LowerText("-20".to_string()),
            SelectorEvent::UpperText("-30.5".to_string()),
        ],
        &mut view,
    );

    for snapshot in &view.snapshots {
        if snapshot.lower_enabled && snapshot.upper_enabled {
            assert!(
                snapshot.lower_position <= snapshot.upper_position,
                "invariant violated: {:?}",
                snapshot
            );
        }
    }
}

#[test]
fn test_cancel_discards_pending_state() {
    let mut view = Recording::default();
    let outcome = run_scripted(
        0.0,
        100.0,
        vec![
            SelectorEvent::LowerScale(400),
            SelectorEvent::Cancel,
            SelectorEvent::Confirm,
        ],
        &mut view,
    );

    // Cancel ends the session; the trailing confirm is never seen.
    assert_eq!(outcome, SessionOutcome::Cancelled);
}

#[test]
fn test_console_adapter_drives_a_full_session() {
    let input = b"min 20\nmax-scale 800\nnot-a-command\nok\n" as &[u8];
    let mut selector = RangeSelector::new(ValueDomain::new(0.0, 100.0).unwrap());
    let mut engine = SessionEngine::new(ConsoleEvents::new(input), ConsoleView::new(Vec::new()));

    let outcome = engine.run(&mut selector).unwrap();
    assert_eq!(
        outcome,
        SessionOutcome::Confirmed(RangeSelection {
            min: 20.0,
            max: 80.0,
        })
    );
}
