//! Controller layer: UI events, status modeling, and command orchestration.

pub mod events;
pub mod orchestration;
