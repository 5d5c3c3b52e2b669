//! Key binding registry
//!
//! Maps chord patterns to handlers. Handlers receive the triggering
//! [`KeyPress`] and are responsible for calling [`suppress`](crate::chord::suppress)
//! when the host should not also act on the key.

use std::fmt;

use crate::chord::{ChordPattern, KeyPress};
use crate::error::NavResult;

type Handler<A> = Box<dyn Fn(&mut KeyPress) -> A + Send + Sync>;

/// A registered binding
pub struct KeyBinding<A> {
    pattern: ChordPattern,
    handler: Handler<A>,
}

impl<A> KeyBinding<A> {
    pub fn pattern(&self) -> &ChordPattern {
        &self.pattern
    }
}

impl<A> fmt::Debug for KeyBinding<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBinding")
            .field("pattern", &self.pattern.to_string())
            .finish_non_exhaustive()
    }
}

/// Ordered set of key bindings; the first registered match wins
pub struct KeyBindingRegistry<A> {
    bindings: Vec<KeyBinding<A>>,
}

impl<A> KeyBindingRegistry<A> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Parse `pattern` and register `handler` for it
    pub fn register<F>(&mut self, pattern: &str, handler: F) -> NavResult<()>
    where
        F: Fn(&mut KeyPress) -> A + Send + Sync + 'static,
    {
        let pattern = ChordPattern::parse(pattern)?;
        self.register_pattern(pattern, handler);
        Ok(())
    }

    /// Register an already parsed pattern
    pub fn register_pattern<F>(&mut self, pattern: ChordPattern, handler: F)
    where
        F: Fn(&mut KeyPress) -> A + Send + Sync + 'static,
    {
        self.bindings.push(KeyBinding {
            pattern,
            handler: Box::new(handler),
        });
    }

    /// Invoke the first binding matching `event`
    ///
    /// Returns `None` when no pattern matches.
    pub fn dispatch(&self, event: &mut KeyPress) -> Option<A> {
        let binding = self.bindings.iter().find(|b| b.pattern.matches(event))?;
        Some((binding.handler)(event))
    }

    pub fn bindings(&self) -> &[KeyBinding<A>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A> Default for KeyBindingRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for KeyBindingRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.bindings).finish()
    }
}
