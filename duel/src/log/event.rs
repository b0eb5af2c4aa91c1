use std::fmt::{
    self,
    Display,
};

use itertools::Itertools;

/// A single part of an [`Event`].
///
/// Strings are added as-is. Pairs are added as `key:value`.
pub trait EventPart {
    fn append(&self, parts: &mut Vec<String>);
}

impl EventPart for &str {
    fn append(&self, parts: &mut Vec<String>) {
        parts.push((*self).to_owned());
    }
}

impl EventPart for String {
    fn append(&self, parts: &mut Vec<String>) {
        parts.push(self.clone());
    }
}

impl<K, V> EventPart for (K, V)
where
    K: Display,
    V: Display,
{
    fn append(&self, parts: &mut Vec<String>) {
        parts.push(format!("{}:{}", self.0, self.1));
    }
}

/// A battle event, formatted as `title|key:value|flag`.
///
/// Events should be built with the [`log_event`][`crate::log_event`] macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    parts: Vec<String>,
}

impl Event {
    /// Creates an event with only a title.
    pub fn new<T>(title: T) -> Self
    where
        T: Display,
    {
        Self {
            parts: vec![title.to_string()],
        }
    }

    /// The title of the event.
    pub fn title(&self) -> &str {
        self.parts.first().map(|s| s.as_str()).unwrap_or_default()
    }

    /// Adds a part to the end of the event.
    pub fn extend(&mut self, part: &dyn EventPart) {
        part.append(&mut self.parts);
    }

    /// Adds a part to the end of the event.
    pub fn with(mut self, part: &dyn EventPart) -> Self {
        self.extend(part);
        self
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join("|"))
    }
}

/// Constructs an [`Event`] to be added to the [`EventLog`][`crate::log::EventLog`].
///
/// This macro enforces a common format for all messages in the event log.
#[macro_export]
macro_rules! log_event {
    ($title:expr $(, $part:expr)* $(,)?) => {{
        $crate::log::Event::new($title)$(.with(&$part))*
    }};
}
