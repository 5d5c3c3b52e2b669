//! serp-keynav Core Library
//!
//! Keyboard navigation over a page of search results:
//! - Chord parsing and key binding dispatch (`chord`, `keymap`)
//! - The focusable result collection (`focus`)
//! - Navigation memory and options over key-value storage (`services`)
//! - The navigation controller state machine (`services::NavigationController`)
//!
//! This library is designed to be platform-independent, abstracting storage and
//! the page through traits. The terminal host lives in `serp-keynav-tui`.

pub mod chord;
pub mod error;
pub mod focus;
pub mod keymap;
pub mod services;
pub mod site;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use chord::{suppress, Chord, ChordPattern, Key, KeyPress, Modifiers};
pub use error::{NavError, NavResult};
pub use focus::FocusableCollection;
pub use keymap::{KeyBinding, KeyBindingRegistry};
pub use services::{ControllerState, NavigationController, NavigationMemory, OptionsService, Session};
pub use traits::{InMemoryKeyValueStore, KeyValueStore, ResultPage};
pub use types::{Command, LastNavigation, Link, NavAction, OpenTarget, Options, Region};
