//! Controller layer: UI events from the channel worker and command
//! orchestration toward it.

pub mod events;
pub mod orchestration;
