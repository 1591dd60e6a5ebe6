//! Transition - Edge Labels
//!
//! A transition describes how a flow moves from one node to the next.
//! The store treats edge payloads as opaque; `Transition` is the ready-made
//! payload used by [`Flow`](crate::cursor::Flow) and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wait descriptor, the payload behind `FlowCursor::wait`.
///
/// Any edge payload type that implements `From<Wait>` can be staged with
/// `wait`/`stage_wait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wait(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Hold for `duration` before moving on
    Wait { duration: u64 },
    /// Free-form label (e.g. "approved", "retry")
    Label { name: String },
}

impl Transition {
    pub fn wait(duration: u64) -> Self {
        Transition::Wait { duration }
    }

    pub fn label(name: impl Into<String>) -> Self {
        Transition::Label { name: name.into() }
    }

    /// Returns the wait duration, if this is a wait transition.
    pub fn as_wait(&self) -> Option<u64> {
        match self {
            Transition::Wait { duration } => Some(*duration),
            Transition::Label { .. } => None,
        }
    }
}

impl From<Wait> for Transition {
    fn from(wait: Wait) -> Self {
        Transition::wait(wait.0)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Wait { duration } => write!(f, "wait({duration})"),
            Transition::Label { name } => f.write_str(name),
        }
    }
}
