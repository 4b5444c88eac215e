use crate::core::selector::RangeSelector;
use crate::domain::model::{RangeSelection, SelectorEvent};
use crate::domain::ports::{EventSource, SelectionView};
use crate::utils::error::{Result, SelectError};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Confirmed(RangeSelection),
    Cancelled,
}

/// Drives a selector through a stream of events until the user confirms or
/// cancels. The view is re-rendered after every event; user-recoverable
/// errors become warnings and the session stays open.
pub struct SessionEngine<E: EventSource, V: SelectionView> {
    events: E,
    view: V,
}

impl<E: EventSource, V: SelectionView> SessionEngine<E, V> {
    pub fn new(events: E, view: V) -> Self {
        Self { events, view }
    }

    pub fn run(&mut self, selector: &mut RangeSelector) -> Result<SessionOutcome> {
        tracing::info!(
            "Selector session started over [{}, {}]",
            selector.domain().min_bound,
            selector.domain().max_bound
        );
        self.view.render(&selector.snapshot());

        while let Some(event) = self.events.next_event()? {
            tracing::debug!("Applying event: {:?}", event);

            match event {
                SelectorEvent::SetLowerEnabled(enabled) => selector.set_lower_enabled(enabled),
                SelectorEvent::SetUpperEnabled(enabled) => selector.set_upper_enabled(enabled),
                SelectorEvent::LowerText(text) => {
                    self.apply_text(selector.set_lower_value(&text))?
                }
                SelectorEvent::UpperText(text) => {
                    self.apply_text(selector.set_upper_value(&text))?
                }
                SelectorEvent::LowerScale(position) => selector.set_lower_position(position),
                SelectorEvent::UpperScale(position) => selector.set_upper_position(position),
                SelectorEvent::Confirm => match selector.confirm() {
                    Ok(selection) => {
                        tracing::info!(
                            "Selection confirmed: [{}, {}]",
                            selection.min,
                            selection.max
                        );
                        return Ok(SessionOutcome::Confirmed(selection));
                    }
                    Err(err @ SelectError::NoBoundSelected) => {
                        self.view.warn(&err.user_friendly_message());
                    }
                    Err(err) => return Err(err),
                },
                SelectorEvent::Cancel => {
                    tracing::info!("Selection cancelled");
                    return Ok(SessionOutcome::Cancelled);
                }
            }

            self.view.render(&selector.snapshot());
        }

        // Input ran out without an explicit decision; treat as cancellation.
        tracing::info!("Event source exhausted, treating session as cancelled");
        Ok(SessionOutcome::Cancelled)
    }

    fn apply_text(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(err @ SelectError::ParseError { .. }) => {
                self.view.warn(&err.user_friendly_message());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
