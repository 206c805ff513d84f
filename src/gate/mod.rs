//! Presentation gate
//!
//! [`WelcomeGate`] decides, once per activation, whether a welcome screen
//! should appear for a welcome key, schedules it after a short delay, and
//! persists the "seen" flag when the user dismisses it.
//!
//! Time is passed in explicitly: the host calls [`WelcomeGate::tick`] from
//! its event loop and the gate presents every schedule whose deadline has
//! passed. Tearing the host down cancels pending schedules.

mod state;

pub use state::{DismissReason, GateState};

use crate::config::WelcomeConfig;
use crate::render::{self, Document, WelcomeStyle};
use crate::store::{SeenStore, StoreError};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Delay between activation and presentation unless configured otherwise.
pub const DEFAULT_PRESENTATION_DELAY: Duration = Duration::from_millis(500);

/// Deadline offset used when `now + presentation_delay` is not representable.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Tunables for a [`WelcomeGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateOptions {
    /// Time between an unseen activation and the screen appearing
    pub presentation_delay: Duration,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            presentation_delay: DEFAULT_PRESENTATION_DELAY,
        }
    }
}

/// A welcome screen that has just become visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Welcome key the screen belongs to
    pub key: String,
    /// Selected layout
    pub style: WelcomeStyle,
    /// Rendered content
    pub document: Document,
}

#[derive(Debug)]
struct Session {
    state: GateState,
    config: WelcomeConfig,
}

/// Shows each welcome screen at most once per activation and remembers
/// dismissals in a [`SeenStore`].
#[derive(Debug)]
pub struct WelcomeGate<S> {
    store: S,
    options: GateOptions,
    sessions: BTreeMap<String, Session>,
}

impl<S: SeenStore> WelcomeGate<S> {
    /// Create a gate with default options.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_options(store, GateOptions::default())
    }

    /// Create a gate with explicit options.
    #[must_use]
    pub const fn with_options(store: S, options: GateOptions) -> Self {
        Self {
            store,
            options,
            sessions: BTreeMap::new(),
        }
    }

    /// Options this gate was built with.
    #[must_use]
    pub const fn options(&self) -> GateOptions {
        self.options
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the gate, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Current state for `key`; unknown keys are [`GateState::Idle`].
    #[must_use]
    pub fn state(&self, key: &str) -> GateState {
        self.sessions
            .get(key)
            .map_or(GateState::Idle, |session| session.state)
    }

    /// Activate the gate for `key` at time `now`.
    ///
    /// Reads the persisted flag and either hides the screen or schedules it
    /// for `now + presentation_delay`. A read failure counts as unseen. If
    /// the key already went through an activation that has not been torn
    /// down, the call is ignored, so a screen is never scheduled twice.
    pub fn activate(
        &mut self,
        config: WelcomeConfig,
        style: WelcomeStyle,
        key: &str,
        now: Instant,
    ) -> GateState {
        let current = self.state(key);
        if current != GateState::Idle {
            debug!(key, ?current, "Ignoring repeated welcome activation");
            return current;
        }

        self.sessions.insert(
            key.to_string(),
            Session {
                state: GateState::Checking,
                config,
            },
        );

        let seen = match self.store.get(key) {
            Ok(seen) => seen,
            Err(e) => {
                warn!(key, "Failed to read welcome flag, showing screen: {e}");
                false
            }
        };

        let next = if seen {
            info!(key, "Welcome screen already seen, not showing it");
            GateState::Hidden
        } else {
            info!(key, %style, "First launch, scheduling welcome screen");
            GateState::Scheduled {
                due: deadline(now, self.options.presentation_delay),
                style,
            }
        };
        self.set_state(key, next);
        next
    }

    /// Present every scheduled screen whose deadline is at or before `now`.
    ///
    /// Returns the screens that became visible on this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<Presentation> {
        let mut started = Vec::new();

        for (key, session) in &mut self.sessions {
            let GateState::Scheduled { due, style } = session.state else {
                continue;
            };
            if due > now {
                continue;
            }

            session.state = GateState::Presenting { style };
            info!(key = key.as_str(), %style, "Presenting welcome screen");
            started.push(Presentation {
                key: key.clone(),
                style,
                document: render::render(&session.config, style),
            });
        }

        started
    }

    /// The document currently presented for `key`, if any.
    #[must_use]
    pub fn document(&self, key: &str) -> Option<Document> {
        let session = self.sessions.get(key)?;
        match session.state {
            GateState::Presenting { style } => Some(render::render(&session.config, style)),
            _ => None,
        }
    }

    /// Keys whose screens are visible right now.
    pub fn presenting_keys(&self) -> impl Iterator<Item = &str> {
        self.sessions
            .iter()
            .filter(|(_, session)| matches!(session.state, GateState::Presenting { .. }))
            .map(|(key, _)| key.as_str())
    }

    /// Handle the user dismissing the screen for `key`.
    ///
    /// Persists the flag and moves to [`GateState::Dismissed`]. A write
    /// failure is logged; the screen will then reappear on the next launch.
    /// Returns `false` when no screen was presented for `key`.
    pub fn dismiss(&mut self, key: &str, reason: DismissReason) -> bool {
        if !matches!(self.state(key), GateState::Presenting { .. }) {
            debug!(key, ?reason, "Dismiss without a visible welcome screen");
            return false;
        }

        if let Err(e) = self.store.set(key, true) {
            warn!(key, "Failed to persist welcome flag: {e}");
        }
        self.set_state(key, GateState::Dismissed);
        info!(key, ?reason, "Welcome screen dismissed, marked as seen");
        true
    }

    /// Run the privacy action of the screen presented for `key`.
    ///
    /// Returns whether an action ran.
    pub fn trigger_privacy(&self, key: &str) -> bool {
        let Some(session) = self.sessions.get(key) else {
            return false;
        };
        if !matches!(session.state, GateState::Presenting { .. }) {
            return false;
        }
        let Some(action) = &session.config.privacy_action else {
            return false;
        };

        info!(key, "Privacy link activated");
        action.invoke();
        true
    }

    /// Cancel the gate for `key` because its host is going away.
    ///
    /// A pending schedule never fires after this. A visible screen is
    /// dropped without persisting the flag.
    pub fn teardown(&mut self, key: &str) {
        let Some(session) = self.sessions.remove(key) else {
            return;
        };
        match session.state {
            GateState::Scheduled { .. } => debug!(key, "Cancelled pending welcome screen"),
            GateState::Presenting { .. } => {
                debug!(key, "Host torn down while welcome screen was visible");
            }
            _ => {}
        }
    }

    /// Tear down every key.
    pub fn teardown_all(&mut self) {
        let keys: Vec<String> = self.sessions.keys().cloned().collect();
        for key in keys {
            self.teardown(&key);
        }
    }

    /// Clear the persisted flag for `key` and forget its session, so the
    /// next activation checks the store again.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset(&mut self, key: &str) -> Result<(), StoreError> {
        self.sessions.remove(key);
        self.store.clear(key)?;
        info!(key, "Welcome flag reset");
        Ok(())
    }

    fn set_state(&mut self, key: &str, state: GateState) {
        if let Some(session) = self.sessions.get_mut(key) {
            session.state = state;
        }
    }
}

fn deadline(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrivacyAction;
    use crate::store::{DEFAULT_WELCOME_KEY, MemoryStore};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const KEY: &str = DEFAULT_WELCOME_KEY;

    fn config() -> WelcomeConfig {
        WelcomeConfig::new("Test App").with_intro_text("Hello")
    }

    /// A store whose reads and writes can be made to fail.
    #[derive(Debug, Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: bool,
        fail_writes: bool,
        writes: Rc<RefCell<Vec<(String, bool)>>>,
    }

    impl SeenStore for FlakyStore {
        fn get(&self, key: &str) -> Result<bool, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Unavailable("read".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, seen: bool) -> Result<(), StoreError> {
            self.writes.borrow_mut().push((key.to_string(), seen));
            if self.fail_writes {
                return Err(StoreError::Unavailable("write".to_string()));
            }
            self.inner.set(key, seen)
        }

        fn clear(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.clear(key)
        }
    }

    #[test]
    fn test_unseen_key_is_scheduled_then_presented() {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();

        let state = gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        assert_eq!(
            state,
            GateState::Scheduled {
                due: start + DEFAULT_PRESENTATION_DELAY,
                style: WelcomeStyle::Standard,
            }
        );

        assert!(gate.tick(start + Duration::from_millis(499)).is_empty());

        let shown = gate.tick(start + DEFAULT_PRESENTATION_DELAY);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].key, KEY);
        assert_eq!(shown[0].style, WelcomeStyle::Standard);
        assert_eq!(
            gate.state(KEY),
            GateState::Presenting {
                style: WelcomeStyle::Standard
            }
        );

        assert!(gate.tick(start + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_seen_key_stays_hidden() {
        let mut gate = WelcomeGate::new(MemoryStore::with_seen([KEY]));
        let start = Instant::now();

        assert_eq!(
            gate.activate(config(), WelcomeStyle::Standard, KEY, start),
            GateState::Hidden
        );
        assert!(gate.tick(start + Duration::from_secs(10)).is_empty());
        assert_eq!(gate.state(KEY), GateState::Hidden);
    }

    #[test]
    fn test_repeated_activation_is_suppressed() {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();

        let first = gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        let later = start + Duration::from_millis(300);
        let second = gate.activate(config(), WelcomeStyle::Immersive, KEY, later);
        assert_eq!(first, second);

        let shown = gate.tick(start + Duration::from_secs(1));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].style, WelcomeStyle::Standard);

        let third = gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        assert!(matches!(third, GateState::Presenting { .. }));
        assert!(gate.tick(start + Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn test_dismiss_persists_flag() -> Result<(), StoreError> {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Immersive, KEY, start);
        gate.tick(start + Duration::from_secs(1));

        assert!(gate.dismiss(KEY, DismissReason::Gesture));
        assert_eq!(gate.state(KEY), GateState::Dismissed);
        assert!(gate.store().get(KEY)?);

        assert!(!gate.dismiss(KEY, DismissReason::ContinuePressed));
        Ok(())
    }

    #[test]
    fn test_dismiss_before_presenting_is_noop() -> Result<(), StoreError> {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        gate.activate(config(), WelcomeStyle::Standard, KEY, Instant::now());

        assert!(!gate.dismiss(KEY, DismissReason::ContinuePressed));
        assert!(!gate.store().get(KEY)?);
        assert!(matches!(gate.state(KEY), GateState::Scheduled { .. }));
        Ok(())
    }

    #[test]
    fn test_teardown_cancels_schedule() {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Standard, KEY, start);

        gate.teardown(KEY);
        assert_eq!(gate.state(KEY), GateState::Idle);
        assert!(gate.tick(start + Duration::from_secs(1)).is_empty());

        // Tearing down twice, or a key never seen, is harmless.
        gate.teardown(KEY);
        gate.teardown("unknown");
    }

    #[test]
    fn test_teardown_while_presenting_leaves_flag_unset() -> Result<(), StoreError> {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        gate.tick(start + Duration::from_secs(1));

        gate.teardown_all();
        assert!(!gate.store().get(KEY)?);

        let again = gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        assert!(matches!(again, GateState::Scheduled { .. }));
        Ok(())
    }

    #[test]
    fn test_read_failure_fails_open() {
        let store = FlakyStore {
            fail_reads: true,
            ..FlakyStore::default()
        };
        let mut gate = WelcomeGate::new(store);

        let state = gate.activate(config(), WelcomeStyle::Standard, KEY, Instant::now());
        assert!(matches!(state, GateState::Scheduled { .. }));
    }

    #[test]
    fn test_write_failure_still_dismisses() {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let store = FlakyStore {
            fail_writes: true,
            writes: Rc::clone(&writes),
            ..FlakyStore::default()
        };
        let mut gate = WelcomeGate::new(store);
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        gate.tick(start + Duration::from_secs(1));

        assert!(gate.dismiss(KEY, DismissReason::ContinuePressed));
        assert_eq!(gate.state(KEY), GateState::Dismissed);
        assert_eq!(*writes.borrow(), vec![(KEY.to_string(), true)]);
    }

    #[test]
    fn test_keys_are_independent() -> Result<(), StoreError> {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Standard, "intro", start);
        gate.activate(config(), WelcomeStyle::Immersive, "tour", start);

        let shown = gate.tick(start + Duration::from_secs(1));
        let keys: Vec<&str> = shown.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["intro", "tour"]);

        gate.dismiss("intro", DismissReason::ContinuePressed);
        assert!(gate.store().get("intro")?);
        assert!(!gate.store().get("tour")?);
        assert_eq!(gate.presenting_keys().collect::<Vec<_>>(), vec!["tour"]);
        Ok(())
    }

    #[test]
    fn test_custom_delay() {
        let options = GateOptions {
            presentation_delay: Duration::ZERO,
        };
        let mut gate = WelcomeGate::with_options(MemoryStore::new(), options);
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Standard, KEY, start);

        assert_eq!(gate.tick(start).len(), 1);
        assert_eq!(gate.options(), options);
    }

    #[test]
    fn test_unrepresentable_delay_schedules_far_ahead() {
        let options = GateOptions {
            presentation_delay: Duration::MAX,
        };
        let mut gate = WelcomeGate::with_options(MemoryStore::new(), options);
        let start = Instant::now();

        let state = gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        assert!(matches!(state, GateState::Scheduled { due, .. } if due > start));
        assert!(gate.tick(start + Duration::from_secs(3600)).is_empty());
    }

    #[test]
    fn test_privacy_action_only_while_presenting() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let cfg = config().with_privacy_action(PrivacyAction::new(move || {
            counter.set(counter.get() + 1);
        }));

        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(cfg, WelcomeStyle::Standard, KEY, start);
        assert!(!gate.trigger_privacy(KEY));

        gate.tick(start + Duration::from_secs(1));
        assert!(gate.trigger_privacy(KEY));
        assert_eq!(count.get(), 1);
        assert!(matches!(gate.state(KEY), GateState::Presenting { .. }));

        gate.dismiss(KEY, DismissReason::ContinuePressed);
        assert!(!gate.trigger_privacy(KEY));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_privacy_without_action_is_noop() {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(
            config().with_privacy_button("Privacy"),
            WelcomeStyle::Standard,
            KEY,
            start,
        );
        gate.tick(start + Duration::from_secs(1));
        assert!(!gate.trigger_privacy(KEY));
        assert!(!gate.trigger_privacy("unknown"));
    }

    #[test]
    fn test_reset_allows_showing_again() -> Result<(), StoreError> {
        let mut gate = WelcomeGate::new(MemoryStore::with_seen([KEY]));
        let start = Instant::now();
        assert_eq!(
            gate.activate(config(), WelcomeStyle::Standard, KEY, start),
            GateState::Hidden
        );

        gate.reset(KEY)?;
        assert!(!gate.store().get(KEY)?);
        assert!(matches!(
            gate.activate(config(), WelcomeStyle::Standard, KEY, start),
            GateState::Scheduled { .. }
        ));
        Ok(())
    }

    #[test]
    fn test_document_available_only_while_presenting() {
        let mut gate = WelcomeGate::new(MemoryStore::new());
        let start = Instant::now();
        gate.activate(config(), WelcomeStyle::Standard, KEY, start);
        assert!(gate.document(KEY).is_none());

        gate.tick(start + Duration::from_secs(1));
        let doc = gate.document(KEY);
        assert_eq!(
            doc.map(|d| d.title),
            Some(vec!["Welcome to \"Test App\"".to_string()])
        );
    }
}
