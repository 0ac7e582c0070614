//! Scripted input source for tests.
//!
//! Replays a fixed list of [`InputEvent`]s, then reports exhaustion so the
//! event loop stops on its own.

use std::collections::VecDeque;

use async_trait::async_trait;
use bthid_core::InputEvent;

use crate::application::input_source::{InputSource, SourceError};

/// An [`InputSource`] that replays queued events.
pub struct ScriptedSource {
    /// `None` entries simulate "nothing pending yet".
    queue: VecDeque<Option<InputEvent>>,
    resets_before_apply: bool,
}

impl ScriptedSource {
    /// A source behaving like a raw device (keys go down and up explicitly).
    pub fn device(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().map(Some).collect(),
            resets_before_apply: false,
        }
    }

    /// A source behaving like a terminal (presses only, reset between keys).
    pub fn terminal(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            resets_before_apply: true,
            ..Self::device(events)
        }
    }

    /// Queues an idle poll (`Ok(None)`) after the events queued so far.
    pub fn push_idle(&mut self) {
        self.queue.push_back(None);
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(Some(event));
    }

    /// Number of entries not yet replayed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl InputSource for ScriptedSource {
    async fn next_event(&mut self) -> Result<Option<InputEvent>, SourceError> {
        self.queue.pop_front().ok_or(SourceError::Exhausted)
    }

    fn resets_before_apply(&self) -> bool {
        self.resets_before_apply
    }
}
