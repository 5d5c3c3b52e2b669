//! Collaborator abstraction trait definitions

mod key_value_store;
mod result_page;

pub use key_value_store::{get_with_defaults, set_record, InMemoryKeyValueStore, KeyValueStore};
pub use result_page::ResultPage;
