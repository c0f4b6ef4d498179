//! Match history: the append-only event log and the undo snapshot stack.
//!
//! The two mechanisms have different lifetimes. The event log is part of the
//! match state and therefore part of every snapshot; the undo stack sits
//! beside the state and holds full copies of it taken before each action.
//! Popping a snapshot restores the log to exactly the length and content it
//! had before the undone action.

use crate::error::{ErrorSeverity, GameError};
use crate::state::StartEvent;

/// Append-only ordered list of events.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventLog<E> {
    entries: Vec<E>,
}

impl<E> EventLog<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Starts a log with its opening event.
    pub fn starting_with(event: E) -> Self {
        Self {
            entries: vec![event],
        }
    }

    pub fn append(&mut self, event: E) {
        self.entries.push(event);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&E> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &E> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.entries
    }

    /// Events appended after the log had `len` entries.
    pub fn since(&self, len: usize) -> &[E] {
        self.entries.get(len..).unwrap_or(&[])
    }
}

impl<E: StartEvent> EventLog<E> {
    /// Most recent start event's recorded player names.
    pub fn latest_start_names_mut(&mut self) -> Option<&mut Vec<String>> {
        self.entries
            .iter_mut()
            .rev()
            .find_map(StartEvent::start_names_mut)
    }
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stack of pre-action state copies.
///
/// Unbounded: memory grows with the number of actions in one sitting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UndoStack<S> {
    snapshots: Vec<S>,
}

impl<S> UndoStack<S> {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: S) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<S> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&S> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.snapshots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.snapshots.iter_mut()
    }
}

impl<S> Default for UndoStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reasons an undo request is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HistoryError {
    #[error("nothing to undo")]
    Empty,

    #[error("the result is already decided")]
    Decided,
}

impl GameError for HistoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            HistoryError::Empty => ErrorSeverity::Recoverable,
            HistoryError::Decided => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            HistoryError::Empty => "HISTORY_EMPTY",
            HistoryError::Decided => "HISTORY_DECIDED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Note {
        Start(Vec<String>),
        Other,
    }

    impl StartEvent for Note {
        fn start_names_mut(&mut self) -> Option<&mut Vec<String>> {
            match self {
                Note::Start(names) => Some(names),
                Note::Other => None,
            }
        }
    }

    #[test]
    fn since_returns_only_new_entries() {
        let mut log = EventLog::starting_with(Note::Other);
        let before = log.len();
        log.append(Note::Start(vec![]));
        log.append(Note::Other);
        assert_eq!(log.since(before).len(), 2);
        assert!(log.since(10).is_empty());
    }

    #[test]
    fn latest_start_event_wins() {
        let mut log = EventLog::starting_with(Note::Start(vec!["old".into()]));
        log.append(Note::Start(vec!["new".into()]));
        log.append(Note::Other);

        if let Some(names) = log.latest_start_names_mut() {
            names[0] = "renamed".into();
        }

        assert_eq!(log.as_slice()[0], Note::Start(vec!["old".into()]));
        assert_eq!(log.as_slice()[1], Note::Start(vec!["renamed".into()]));
    }

    #[test]
    fn undo_stack_is_lifo() {
        let mut stack = UndoStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }
}
