mod event;
mod event_log;

pub use event::{
    Event,
    EventPart,
};
pub use event_log::EventLog;
