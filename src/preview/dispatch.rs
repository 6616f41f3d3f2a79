//! Outcome selection per event type.
//!
//! Discrete markets preview whatever outcome the user picked. Continuous
//! markets always preview the short side (index 0); the range is shown for
//! context but does not change which side is priced.

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ContinuousRange, Event, Market, OutcomeIndex, Palette};

/// Why an outcome could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The event type is unknown, so there is nothing to select from.
    #[error("invalid outcomes: unrecognized event type '{kind}'")]
    InvalidOutcomes { kind: String },

    #[error("no outcome selected")]
    NoSelection,

    #[error("outcome {index} is out of range for {count} outcomes")]
    OutOfRange { index: usize, count: usize },
}

/// One selectable discrete outcome, as the rendering layer shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeOption<'a> {
    pub index: OutcomeIndex,
    pub label: &'a str,
    pub color: &'a str,
}

/// What the user can choose from for a given market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutcomeSelection<'a> {
    Discrete { options: Vec<OutcomeOption<'a>> },
    Continuous { range: &'a ContinuousRange },
    Invalid { kind: &'a str },
}

/// Dispatches outcome handling on the market's event type.
#[derive(Debug, Clone, Default)]
pub struct OutcomeDispatcher {
    palette: Palette,
}

impl OutcomeDispatcher {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Selectable options for rendering.
    #[must_use]
    pub fn options<'a>(&'a self, market: &'a Market) -> OutcomeSelection<'a> {
        match market.event() {
            Event::Discrete { outcomes } => OutcomeSelection::Discrete {
                options: outcomes
                    .iter()
                    .enumerate()
                    .map(|(i, label)| OutcomeOption {
                        index: OutcomeIndex::new(i),
                        label: label.as_str(),
                        color: self.palette.color(i),
                    })
                    .collect(),
            },
            Event::Continuous(range) => OutcomeSelection::Continuous { range },
            Event::Unrecognized { kind } => OutcomeSelection::Invalid {
                kind: kind.as_str(),
            },
        }
    }
}

/// Outcome index to price for a preview or a buy.
///
/// `selected` is only consulted for discrete events, where it must be within
/// the outcome count; continuous events always resolve to
/// [`OutcomeIndex::SHORT`].
///
/// # Errors
///
/// Returns [`SelectionError::InvalidOutcomes`] for unknown event types, and
/// [`SelectionError::NoSelection`] or [`SelectionError::OutOfRange`] for a
/// missing or out-of-bounds discrete selection.
pub fn resolve_outcome(
    event: &Event,
    selected: Option<usize>,
) -> Result<OutcomeIndex, SelectionError> {
    match event {
        Event::Discrete { outcomes } => {
            let index = selected.ok_or(SelectionError::NoSelection)?;
            if index >= outcomes.len() {
                return Err(SelectionError::OutOfRange {
                    index,
                    count: outcomes.len(),
                });
            }
            Ok(OutcomeIndex::new(index))
        }
        Event::Continuous(_) => Ok(OutcomeIndex::SHORT),
        Event::Unrecognized { kind } => Err(SelectionError::InvalidOutcomes { kind: kind.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BaseUnits;
    use alloy_primitives::I256;
    use rust_decimal_macros::dec;

    fn market(event: Event) -> Market {
        Market::new(BaseUnits::ZERO, vec![I256::ZERO; 3], event)
    }

    fn scalar() -> Event {
        Event::Continuous(ContinuousRange::new(dec!(0), dec!(100), 2, "mm"))
    }

    #[test]
    fn discrete_selection_passes_through() {
        let event = Event::discrete(["Red", "Green", "Blue"]);
        assert_eq!(resolve_outcome(&event, Some(2)), Ok(OutcomeIndex::new(2)));
    }

    #[test]
    fn discrete_selection_must_be_in_range() {
        let event = Event::discrete(["Yes", "No"]);
        assert_eq!(
            resolve_outcome(&event, Some(2)),
            Err(SelectionError::OutOfRange { index: 2, count: 2 })
        );
        assert_eq!(
            resolve_outcome(&event, None),
            Err(SelectionError::NoSelection)
        );
    }

    #[test]
    fn continuous_always_resolves_to_short_side() {
        for selected in [None, Some(0), Some(1), Some(57)] {
            assert_eq!(
                resolve_outcome(&scalar(), selected),
                Ok(OutcomeIndex::SHORT)
            );
        }
    }

    #[test]
    fn unrecognized_event_signals_invalid_outcomes() {
        let event = Event::Unrecognized { kind: "ranged".into() };
        assert_eq!(
            resolve_outcome(&event, Some(0)),
            Err(SelectionError::InvalidOutcomes { kind: "ranged".into() })
        );
    }

    #[test]
    fn discrete_options_carry_labels_and_cycling_colors() {
        let palette = Palette::try_new(vec!["#aaaaaa".into(), "#bbbbbb".into()]).unwrap();
        let dispatcher = OutcomeDispatcher::new(palette);
        let market = market(Event::discrete(["Red", "Green", "Blue"]));

        let OutcomeSelection::Discrete { options } = dispatcher.options(&market) else {
            panic!("expected discrete options");
        };
        let rendered: Vec<_> = options.iter().map(|o| (o.index.get(), o.label, o.color)).collect();
        assert_eq!(
            rendered,
            vec![
                (0, "Red", "#aaaaaa"),
                (1, "Green", "#bbbbbb"),
                (2, "Blue", "#aaaaaa"),
            ]
        );
    }

    #[test]
    fn continuous_options_expose_range() {
        let dispatcher = OutcomeDispatcher::default();
        let market = market(scalar());

        match dispatcher.options(&market) {
            OutcomeSelection::Continuous { range } => {
                assert_eq!(range.upper_bound(), dec!(100));
                assert_eq!(range.unit(), "mm");
            }
            other => panic!("expected continuous selection, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_options_are_invalid() {
        let dispatcher = OutcomeDispatcher::default();
        let market = market(Event::Unrecognized { kind: "x".into() });
        assert_eq!(
            dispatcher.options(&market),
            OutcomeSelection::Invalid { kind: "x" }
        );
    }
}
