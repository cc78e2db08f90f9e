mod dispatcher;
mod event;

pub use dispatcher::Dispatcher;
pub use event::{Action, Event, EventOutcome, Resource};
