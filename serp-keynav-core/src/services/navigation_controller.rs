//! Navigation controller
//!
//! Drives the focus state machine for one page load:
//!
//! ```text
//! Uninitialized ──start()──▶ Restoring ──memory read──▶ Ready
//! ```
//!
//! In `Ready`, matched key presses become [`NavAction`]s; actions mutate the
//! result collection or produce a [`Command`] for the host to perform.

use std::sync::Arc;

use crate::chord::{suppress, KeyPress};
use crate::focus::FocusableCollection;
use crate::keymap::KeyBindingRegistry;
use crate::site;
use crate::traits::{KeyValueStore, ResultPage};
use crate::types::{Command, LastNavigation, Link, NavAction, OpenTarget, Options, Region};

use super::{OptionsService, Session};

/// Lifecycle of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Restoring,
    Ready,
}

/// Keyboard navigation over one result page
pub struct NavigationController<P> {
    page: P,
    options_service: OptionsService,
    session: Session,
    state: ControllerState,
    results: FocusableCollection<Link>,
    bindings: KeyBindingRegistry<NavAction>,
    /// Result navigation is skipped on image search pages
    results_enabled: bool,
    /// Set while auto-select is off and nothing has been focused yet
    first_move_pending: bool,
}

impl<P: ResultPage> NavigationController<P> {
    /// Create a controller; nothing is read until [`start`](Self::start)
    ///
    /// # Arguments
    /// * `options_store` - synced namespace holding [`Options`]
    /// * `memory_store` - local namespace holding [`LastNavigation`]
    pub fn new(
        page: P,
        options_store: Arc<dyn KeyValueStore>,
        memory_store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            page,
            options_service: OptionsService::new(options_store),
            session: Session::new(memory_store),
            state: ControllerState::Uninitialized,
            results: FocusableCollection::default(),
            bindings: KeyBindingRegistry::new(),
            results_enabled: false,
            first_move_pending: false,
        }
    }

    /// Load options and memory, pick the initial focus and install key bindings
    ///
    /// Always reaches [`ControllerState::Ready`]; storage failures fall back to defaults.
    pub async fn start(&mut self) {
        if self.state != ControllerState::Uninitialized {
            log::debug!("start() called in state {:?}, ignoring", self.state);
            return;
        }

        self.session.load_options(&self.options_service).await;
        self.state = ControllerState::Restoring;

        self.results_enabled = !site::is_image_search(self.page.location());
        if self.results_enabled {
            self.results = FocusableCollection::new(self.page.result_links());
            let memory = self.session.memory.load().await;
            self.restore(&memory);
        } else {
            log::info!("Image search page, result navigation disabled");
        }

        self.install_bindings();
        self.state = ControllerState::Ready;
        log::info!(
            "Navigation ready on {} ({} results, {} bindings)",
            self.page.location(),
            self.results.len(),
            self.bindings.len()
        );
    }

    fn restore(&mut self, memory: &LastNavigation) {
        let location = self.page.location();
        if memory.applies_to(location) {
            if memory.last_focused_index < self.results.len() {
                self.results.focus(memory.last_focused_index);
                self.first_move_pending = false;
                log::debug!("Restored focus {} on {location}", memory.last_focused_index);
                return;
            }
            log::debug!(
                "Remembered index {} out of range for {} results",
                memory.last_focused_index,
                self.results.len()
            );
        }

        if self.session.options.auto_select_first || self.results.len() == 1 {
            self.results.focus(0);
            self.first_move_pending = false;
        } else {
            self.first_move_pending = true;
        }
    }

    fn install_bindings(&mut self) {
        let mut actions = Vec::new();
        if self.results_enabled {
            actions.extend([
                NavAction::MoveNext,
                NavAction::MovePrevious,
                NavAction::Activate,
                NavAction::ActivateInNewContext,
            ]);
        }
        actions.extend(Region::ALL.map(NavAction::JumpToRegion));
        actions.push(NavAction::FocusSearchInput);

        for action in actions {
            self.bind(action);
        }
    }

    fn bind(&mut self, action: NavAction) {
        let configured = self.session.options.pattern_for(action);
        if let Err(e) = self.bindings.register(configured, trigger(action)) {
            log::warn!("{e}; using the default binding for {action:?}");
            let defaults = Options::default();
            if let Err(e) = self
                .bindings
                .register(defaults.pattern_for(action), trigger(action))
            {
                log::error!("Default binding for {action:?} is invalid: {e}");
            }
        }
    }

    /// Dispatch a key press
    ///
    /// Matched keys are suppressed whether or not the action had an effect.
    /// Before `Ready`, nothing is dispatched.
    pub async fn handle_key(&mut self, event: &mut KeyPress) -> Option<Command> {
        if self.state != ControllerState::Ready {
            return None;
        }
        let action = self.bindings.dispatch(event)?;
        log::debug!("{event:?} -> {action:?}");
        self.perform(action).await
    }

    /// Apply a semantic action
    pub async fn perform(&mut self, action: NavAction) -> Option<Command> {
        if self.state != ControllerState::Ready {
            return None;
        }

        match action {
            NavAction::MoveNext => {
                self.step(true);
                None
            }
            NavAction::MovePrevious => {
                self.step(false);
                None
            }
            NavAction::Activate => {
                let href = self.results.focused_item()?.href.clone();
                let index = self.results.focused_index();
                self.session.memory.save(self.page.location(), index).await;
                Some(Command::open(href, OpenTarget::CurrentContext))
            }
            NavAction::ActivateInNewContext => {
                let href = self.results.focused_item()?.href.clone();
                Some(Command::open(href, OpenTarget::NewContext))
            }
            NavAction::JumpToRegion(region) => {
                let Some(link) = self.page.region_link(region) else {
                    log::debug!("Region {region:?} not present on page");
                    return None;
                };
                Some(Command::open(link.href, OpenTarget::CurrentContext))
            }
            NavAction::FocusSearchInput => Some(Command::FocusSearchInput),
        }
    }

    fn step(&mut self, forward: bool) {
        if self.first_move_pending {
            self.first_move_pending = false;
            self.results.focus(0);
            return;
        }

        let wrap = self.session.options.wrap_navigation;
        if forward {
            self.results.focus_next(wrap);
        } else {
            self.results.focus_previous(wrap);
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn results(&self) -> &FocusableCollection<Link> {
        &self.results
    }

    pub fn options(&self) -> &Options {
        &self.session.options
    }

    pub fn bindings(&self) -> &KeyBindingRegistry<NavAction> {
        &self.bindings
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Whether result navigation bindings were installed
    pub fn results_enabled(&self) -> bool {
        self.results_enabled
    }
}

/// Binding handler: always suppresses, then yields the action
fn trigger(action: NavAction) -> impl Fn(&mut KeyPress) -> NavAction + Send + Sync + 'static {
    move |event: &mut KeyPress| {
        suppress(event);
        action
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::chord::{Key, Modifiers};
    use crate::test_utils::{controller_with, store_with, FailingStore, FakePage};
    use crate::traits::InMemoryKeyValueStore;

    const CATS: &str = "https://x/search?q=cats";
    const DOGS: &str = "https://x/search?q=dogs";

    fn key(k: Key) -> KeyPress {
        KeyPress::plain(k)
    }

    #[tokio::test]
    async fn restores_remembered_index_for_same_origin() {
        let memory = store_with(json!({"lastQueryUrl": CATS, "lastFocusedIndex": 2}));
        let mut controller = controller_with(FakePage::new(CATS, 5), store_with(json!({})), memory);
        controller.start().await;

        assert_eq!(controller.state(), ControllerState::Ready);
        assert_eq!(controller.results().marked(), Some(2));
    }

    #[tokio::test]
    async fn other_origin_falls_back_to_first_result() {
        let memory = store_with(json!({"lastQueryUrl": CATS, "lastFocusedIndex": 2}));
        let mut controller = controller_with(FakePage::new(DOGS, 5), store_with(json!({})), memory);
        controller.start().await;

        assert_eq!(controller.results().marked(), Some(0));
    }

    #[tokio::test]
    async fn restore_bypasses_first_move_rule() {
        let options = store_with(json!({"autoSelectFirst": false}));
        let memory = store_with(json!({"lastQueryUrl": CATS, "lastFocusedIndex": 2}));
        let mut controller = controller_with(FakePage::new(CATS, 5), options, memory);
        controller.start().await;

        let mut down = key(Key::Down);
        controller.handle_key(&mut down).await;
        assert_eq!(controller.results().marked(), Some(3));
    }

    #[tokio::test]
    async fn out_of_range_memory_is_ignored() {
        let memory = store_with(json!({"lastQueryUrl": CATS, "lastFocusedIndex": 9}));
        let mut controller = controller_with(FakePage::new(CATS, 3), store_with(json!({})), memory);
        controller.start().await;

        assert_eq!(controller.results().marked(), Some(0));
    }

    #[tokio::test]
    async fn first_move_without_auto_select_lands_on_zero() {
        let options = store_with(json!({"autoSelectFirst": false}));
        let mut controller =
            controller_with(FakePage::new(CATS, 4), options.clone(), store_with(json!({})));
        controller.start().await;
        assert_eq!(controller.results().marked(), None);

        let mut down = key(Key::Char('j'));
        controller.handle_key(&mut down).await;
        assert_eq!(controller.results().marked(), Some(0));
        controller.handle_key(&mut key(Key::Char('j'))).await;
        assert_eq!(controller.results().marked(), Some(1));

        let mut controller =
            controller_with(FakePage::new(CATS, 4), options, store_with(json!({})));
        controller.start().await;
        controller.handle_key(&mut key(Key::Up)).await;
        assert_eq!(controller.results().marked(), Some(0));
    }

    #[tokio::test]
    async fn single_result_is_always_focused() {
        let options = store_with(json!({"autoSelectFirst": false, "wrapNavigation": true}));
        let mut controller =
            controller_with(FakePage::new(CATS, 1), options, store_with(json!({})));
        controller.start().await;
        assert_eq!(controller.results().marked(), Some(0));

        controller.perform(NavAction::MoveNext).await;
        controller.perform(NavAction::MovePrevious).await;
        assert_eq!(controller.results().marked(), Some(0));
    }

    #[tokio::test]
    async fn wrap_option_controls_boundaries() {
        let options = store_with(json!({"wrapNavigation": true}));
        let mut controller =
            controller_with(FakePage::new(CATS, 3), options, store_with(json!({})));
        controller.start().await;

        controller.perform(NavAction::MovePrevious).await;
        assert_eq!(controller.results().marked(), Some(2));
        controller.perform(NavAction::MoveNext).await;
        assert_eq!(controller.results().marked(), Some(0));

        let mut controller = controller_with(
            FakePage::new(CATS, 3),
            store_with(json!({})),
            store_with(json!({})),
        );
        controller.start().await;
        controller.perform(NavAction::MovePrevious).await;
        assert_eq!(controller.results().marked(), Some(0));
    }

    #[tokio::test]
    async fn activate_persists_then_opens() {
        let memory = InMemoryKeyValueStore::new();
        let mut controller = controller_with(
            FakePage::new(CATS, 5),
            store_with(json!({})),
            Arc::new(memory.clone()),
        );
        controller.start().await;
        controller.perform(NavAction::MoveNext).await;
        controller.perform(NavAction::MoveNext).await;

        let mut enter = key(Key::Enter);
        let command = controller.handle_key(&mut enter).await;
        assert_eq!(
            command,
            Some(Command::open("https://result/2", OpenTarget::CurrentContext))
        );
        assert!(enter.is_suppressed());

        let stored = memory.snapshot().await;
        assert_eq!(stored["lastQueryUrl"], CATS);
        assert_eq!(stored["lastFocusedIndex"], 2);
    }

    #[tokio::test]
    async fn new_context_activation_does_not_persist() {
        let memory = InMemoryKeyValueStore::new();
        let mut controller = controller_with(
            FakePage::new(CATS, 5),
            store_with(json!({})),
            Arc::new(memory.clone()),
        );
        controller.start().await;
        controller.perform(NavAction::MoveNext).await;

        let mut ctrl_enter = KeyPress::new(Key::Enter, Modifiers::CTRL);
        let command = controller.handle_key(&mut ctrl_enter).await;
        assert_eq!(
            command,
            Some(Command::open("https://result/1", OpenTarget::NewContext))
        );
        assert!(memory.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn activation_on_empty_page_is_a_suppressed_noop() {
        let memory = InMemoryKeyValueStore::new();
        let mut controller = controller_with(
            FakePage::new(CATS, 0),
            store_with(json!({})),
            Arc::new(memory.clone()),
        );
        controller.start().await;

        for k in [Key::Down, Key::Up, Key::Enter] {
            let mut event = key(k);
            assert_eq!(controller.handle_key(&mut event).await, None);
            assert!(event.is_suppressed());
        }
        assert_eq!(controller.results().marked(), None);
        assert!(memory.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn region_jump_opens_when_present() {
        let page = FakePage::new(CATS, 3).with_region(Region::NextPage, "/search?q=cats&start=10");
        let mut controller = controller_with(page, store_with(json!({})), store_with(json!({})));
        controller.start().await;

        let mut l = key(Key::Char('l'));
        assert_eq!(
            controller.handle_key(&mut l).await,
            Some(Command::open(
                "/search?q=cats&start=10",
                OpenTarget::CurrentContext
            ))
        );

        let mut h = key(Key::Left);
        assert_eq!(controller.handle_key(&mut h).await, None);
        assert!(h.is_suppressed());
    }

    #[tokio::test]
    async fn unbound_keys_pass_through() {
        let mut controller = controller_with(
            FakePage::new(CATS, 3),
            store_with(json!({})),
            store_with(json!({})),
        );
        controller.start().await;

        let mut q = key(Key::Char('q'));
        assert_eq!(controller.handle_key(&mut q).await, None);
        assert!(!q.is_suppressed());
    }

    #[tokio::test]
    async fn keys_are_ignored_before_start() {
        let mut controller = controller_with(
            FakePage::new(CATS, 3),
            store_with(json!({})),
            store_with(json!({})),
        );
        let mut down = key(Key::Down);
        assert_eq!(controller.handle_key(&mut down).await, None);
        assert!(!down.is_suppressed());
        assert_eq!(controller.state(), ControllerState::Uninitialized);
    }

    #[tokio::test]
    async fn failing_stores_fall_back_to_defaults() {
        let mut controller =
            controller_with(FakePage::new(CATS, 3), Arc::new(FailingStore), Arc::new(FailingStore));
        controller.start().await;

        assert_eq!(controller.state(), ControllerState::Ready);
        assert_eq!(controller.options(), &Options::default());
        assert_eq!(controller.results().marked(), Some(0));

        let command = controller.perform(NavAction::Activate).await;
        assert_eq!(
            command,
            Some(Command::open("https://result/0", OpenTarget::CurrentContext))
        );
    }

    #[tokio::test]
    async fn image_search_skips_result_bindings() {
        let page = FakePage::new("https://www.google.com/search?q=cats&tbm=isch", 4)
            .with_region(Region::AllResults, "/search?q=cats");
        let mut controller = controller_with(page, store_with(json!({})), store_with(json!({})));
        controller.start().await;

        assert!(!controller.results_enabled());
        assert!(controller.results().is_empty());

        let mut down = key(Key::Down);
        assert_eq!(controller.handle_key(&mut down).await, None);
        assert!(!down.is_suppressed());

        let mut a = key(Key::Char('a'));
        assert_eq!(
            controller.handle_key(&mut a).await,
            Some(Command::open("/search?q=cats", OpenTarget::CurrentContext))
        );
    }

    #[tokio::test]
    async fn invalid_configured_chord_uses_default() {
        let options = store_with(json!({"nextKey": "ctrl+"}));
        let mut controller =
            controller_with(FakePage::new(CATS, 3), options, store_with(json!({})));
        controller.start().await;

        controller.handle_key(&mut key(Key::Char('j'))).await;
        assert_eq!(controller.results().marked(), Some(1));
    }

    #[tokio::test]
    async fn mistyped_option_keeps_other_settings() {
        let options = store_with(json!({"nextKey": "ctrl+n", "wrapNavigation": "yes"}));
        let mut controller =
            controller_with(FakePage::new(CATS, 3), options, store_with(json!({})));
        controller.start().await;

        assert_eq!(controller.options().next_key, "ctrl+n");
        assert!(!controller.options().wrap_navigation);

        let mut ctrl_n = KeyPress::new(Key::Char('n'), Modifiers::CTRL);
        controller.handle_key(&mut ctrl_n).await;
        assert_eq!(controller.results().marked(), Some(1));
    }

    #[tokio::test]
    async fn configured_chords_replace_defaults() {
        let options = store_with(json!({"nextKey": "ctrl+n", "focusSearchInput": "f"}));
        let mut controller =
            controller_with(FakePage::new(CATS, 3), options, store_with(json!({})));
        controller.start().await;

        let mut j = key(Key::Char('j'));
        controller.handle_key(&mut j).await;
        assert_eq!(controller.results().marked(), Some(0));
        assert!(!j.is_suppressed());

        let mut ctrl_n = KeyPress::new(Key::Char('n'), Modifiers::CTRL);
        controller.handle_key(&mut ctrl_n).await;
        assert_eq!(controller.results().marked(), Some(1));

        let mut f = key(Key::Char('f'));
        assert_eq!(
            controller.handle_key(&mut f).await,
            Some(Command::FocusSearchInput)
        );
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let mut controller = controller_with(
            FakePage::new(CATS, 3),
            store_with(json!({})),
            store_with(json!({})),
        );
        controller.start().await;
        let bindings = controller.bindings().len();
        controller.start().await;
        assert_eq!(controller.bindings().len(), bindings);
    }
}
