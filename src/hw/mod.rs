//! Board-side implementations of the coordinator's collaborator traits.

mod engine;
mod leds;

pub(crate) use engine::{DmaEngine, StreamEvent};
pub(crate) use leds::{halt, IndicatorCommand, Leds, Phases, RticIndicators};
