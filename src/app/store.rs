//! Single-writer shared state store.
//!
//! This module implements [`Store`], the owner of the current [`AppState`]
//! snapshot and the only component allowed to replace it. All mutation flows
//! through [`Store::dispatch`]; everything else holds read-only snapshot
//! handles or a dispatch capability. This single-writer discipline is what
//! keeps the model race-free without locks.
//!
//! # Scheduling Model
//!
//! The store is single-threaded and cooperative, matching a UI event loop:
//! it is `!Send` and `!Sync` by construction (`Rc`/`RefCell`), and `dispatch`
//! runs synchronously to completion. Actions dispatched from inside a
//! listener are queued and applied, in dispatch order, before the outermost
//! `dispatch` call returns; no action is ever applied against a stale
//! snapshot.
//!
//! # Notification Semantics
//!
//! Listeners are invoked once per committed transition, in subscription
//! order, each receiving the new snapshot. Cancelling a subscription is a
//! flag flip: it is idempotent, safe to call from inside a notification pass,
//! and never disturbs the pass that is already underway for listeners that
//! were notified before the cancel. A listener cancelled mid-pass before its
//! turn is skipped; actual removal from the listener list is deferred to the
//! end of the pass. Listeners subscribed mid-pass first hear the *next*
//! transition.

use crate::app::actions::Action;
use crate::app::reducer;
use crate::app::state::AppState;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// A state-change listener.
type Listener = Rc<dyn Fn(&Rc<AppState>)>;

/// One registered listener plus its shared cancellation flag.
struct ListenerEntry {
    active: Rc<Cell<bool>>,
    callback: Listener,
}

/// Handle for cancelling a subscription.
///
/// Cancellation is explicit: dropping the handle does *not* cancel the
/// subscription, so a caller that never needs to unsubscribe (the common case
/// for session-lifetime listeners like the persistence bridge) can simply
/// discard the handle.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
}

impl Subscription {
    /// Cancels the subscription.
    ///
    /// Idempotent and safe to call at any time, including from inside a
    /// notification callback.
    pub fn cancel(&self) {
        if self.active.replace(false) {
            tracing::debug!(listener_id = self.id, "listener cancelled");
        }
    }

    /// Returns `true` while the subscription is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

struct StoreInner {
    /// Current snapshot. Replaced, never mutated in place.
    state: RefCell<Rc<AppState>>,

    /// Registered listeners in subscription order.
    listeners: RefCell<Vec<ListenerEntry>>,

    /// Actions awaiting reduction. Non-empty only while draining.
    queue: RefCell<VecDeque<Action>>,

    /// Set while a dispatch drain is in progress, to fold re-entrant
    /// dispatches into the outer drain instead of recursing.
    draining: Cell<bool>,

    /// Next listener id, for tracing only.
    next_listener_id: Cell<u64>,
}

/// Shared state store with a dispatch/subscribe contract.
///
/// `Store` is a cheap handle (`Clone` shares the same underlying store), so a
/// host can pass one handle to each view adapter as the combined read
/// projection and dispatch capability.
///
/// # Examples
///
/// ```
/// use hubstate::app::{Action, AppState, Store};
/// use hubstate::domain::ThemeName;
///
/// let store = Store::new(AppState::default());
/// store.dispatch(Action::UpdateTheme("darkTheme".to_string()));
/// assert_eq!(store.state().prefs.theme, ThemeName::Dark);
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

impl Store {
    /// Creates a store owning the given initial snapshot.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(Rc::new(initial)),
                listeners: RefCell::new(Vec::new()),
                queue: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    /// Returns a handle to the current snapshot.
    ///
    /// O(1): this clones an `Rc`, not the state itself. Successive calls
    /// return pointer-equal handles until the next committed transition, so
    /// `Rc::ptr_eq` distinguishes "changed" from "unchanged".
    #[must_use]
    pub fn state(&self) -> Rc<AppState> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Dispatches an action for synchronous reduction.
    ///
    /// When called from outside a notification pass, the action (and any
    /// actions listeners dispatch in response) are fully applied before this
    /// returns: [`Store::state`] reflects the final snapshot and every
    /// listener has been notified exactly once per transition. When called
    /// re-entrantly from inside a listener, the action is queued and applied
    /// by the outer drain, still in dispatch order.
    ///
    /// Never panics for any well-formed action; malformed payloads are
    /// normalized by the reducer.
    pub fn dispatch(&self, action: Action) {
        self.inner.queue.borrow_mut().push_back(action);

        if self.inner.draining.replace(true) {
            tracing::trace!("re-entrant dispatch, queued for outer drain");
            return;
        }

        while let Some(action) = self.pop_action() {
            let _span = tracing::debug_span!("dispatch", action_kind = action.kind()).entered();

            let current = self.state();
            let next = Rc::new(reducer::reduce(&current, &action));
            *self.inner.state.borrow_mut() = Rc::clone(&next);

            self.notify(&next);
        }

        self.inner.draining.set(false);
    }

    /// Registers a listener invoked once per committed transition.
    ///
    /// Listeners run in subscription order and receive the new snapshot. The
    /// returned [`Subscription`] cancels the registration; see the module
    /// docs for mid-pass semantics.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Rc<AppState>) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);

        let active = Rc::new(Cell::new(true));
        self.inner.listeners.borrow_mut().push(ListenerEntry {
            active: Rc::clone(&active),
            callback: Rc::new(callback),
        });

        tracing::debug!(listener_id = id, "listener subscribed");
        Subscription { id, active }
    }

    /// Returns a standalone dispatch capability.
    ///
    /// Useful for handing a view adapter the ability to request transitions
    /// without also granting access to `subscribe`.
    #[must_use]
    pub fn dispatcher(&self) -> impl Fn(Action) {
        let store = self.clone();
        move |action| store.dispatch(action)
    }

    fn pop_action(&self) -> Option<Action> {
        self.inner.queue.borrow_mut().pop_front()
    }

    /// Runs one notification pass for a committed snapshot.
    ///
    /// The listener list length is pinned at pass start, so listeners
    /// subscribed by a callback wait for the next transition. The list borrow
    /// is released before each callback runs, which is what makes subscribing
    /// and cancelling from inside a callback safe. Cancelled entries are
    /// swept once the pass completes.
    fn notify(&self, snapshot: &Rc<AppState>) {
        let pass_len = self.inner.listeners.borrow().len();

        for index in 0..pass_len {
            let entry = {
                let listeners = self.inner.listeners.borrow();
                let entry = &listeners[index];
                (Rc::clone(&entry.active), Rc::clone(&entry.callback))
            };

            if entry.0.get() {
                (entry.1)(snapshot);
            }
        }

        self.inner
            .listeners
            .borrow_mut()
            .retain(|entry| entry.active.get());
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FacetCatalog, SearchQueryPatch, ThemeName};

    fn keyword_patch(keywords: &[&str]) -> Action {
        Action::UpdateSearchQuery(SearchQueryPatch {
            keywords: Some(keywords.iter().map(|s| (*s).to_string()).collect()),
            ..Default::default()
        })
    }

    fn sample_actions() -> Vec<Action> {
        vec![
            Action::UpdateTheme("darkTheme".to_string()),
            Action::PublishFacets(FacetCatalog {
                keywords: vec!["helm".to_string(), "operator".to_string()],
                package_kinds: vec!["0".to_string()],
                repositories: vec!["stable".to_string()],
            }),
            keyword_patch(&["helm", "ghost"]),
            Action::UpdateTheme("neon".to_string()),
            Action::ResetSearchQuery,
        ]
    }

    #[test]
    fn dispatch_commits_before_returning() {
        let store = Store::new(AppState::default());
        store.dispatch(Action::UpdateTheme("darkTheme".to_string()));
        assert_eq!(store.state().prefs.theme, ThemeName::Dark);
    }

    #[test]
    fn state_handles_are_pointer_equal_between_transitions() {
        let store = Store::new(AppState::default());
        assert!(Rc::ptr_eq(&store.state(), &store.state()));

        let before = store.state();
        store.dispatch(Action::UpdateTheme("theme".to_string()));
        assert!(!Rc::ptr_eq(&before, &store.state()));
        assert_eq!(*before, *store.state());
    }

    #[test]
    fn dispatched_actions_fold_like_the_reducer() {
        let store = Store::new(AppState::default());
        for _ in 0..3 {
            let _keep = store.subscribe(|_| {});
        }

        let mut expected = AppState::default();
        for action in sample_actions() {
            expected = reducer::reduce(&expected, &action);
            store.dispatch(action);
        }

        assert_eq!(*store.state(), expected);
    }

    #[test]
    fn listeners_fire_once_per_transition_in_subscription_order() {
        let store = Store::new(AppState::default());
        let calls = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            let _keep = store.subscribe(move |_| calls.borrow_mut().push(tag));
        }

        store.dispatch(Action::UpdateTheme("darkTheme".to_string()));
        store.dispatch(Action::ResetSearchQuery);

        assert_eq!(
            *calls.borrow(),
            vec!["first", "second", "first", "second"]
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let store = Store::new(AppState::default());
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        let subscription = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.dispatch(Action::ResetSearchQuery);
        subscription.cancel();
        subscription.cancel();
        assert!(!subscription.is_active());

        store.dispatch(Action::ResetSearchQuery);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn self_cancel_does_not_disturb_the_current_pass() {
        let store = Store::new(AppState::default());
        let calls = Rc::new(RefCell::new(Vec::new()));

        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        {
            let calls = Rc::clone(&calls);
            let slot_for_closure = Rc::clone(&slot);
            let subscription = store.subscribe(move |_| {
                calls.borrow_mut().push("self-cancelling");
                if let Some(subscription) = slot_for_closure.borrow().as_ref() {
                    subscription.cancel();
                }
            });
            *slot.borrow_mut() = Some(subscription);
        }
        {
            let calls = Rc::clone(&calls);
            let _keep = store.subscribe(move |_| calls.borrow_mut().push("after"));
        }

        store.dispatch(Action::ResetSearchQuery);
        assert_eq!(*calls.borrow(), vec!["self-cancelling", "after"]);

        store.dispatch(Action::ResetSearchQuery);
        assert_eq!(
            *calls.borrow(),
            vec!["self-cancelling", "after", "after"]
        );
    }

    #[test]
    fn re_entrant_dispatch_is_applied_before_the_outer_call_returns() {
        let store = Store::new(AppState::default());

        let inner = store.clone();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let _keep = store.subscribe(move |snapshot| {
            if snapshot.prefs.theme == ThemeName::Dark && !flag.get() {
                flag.set(true);
                inner.dispatch(Action::UpdateTheme("theme".to_string()));
            }
        });

        store.dispatch(Action::UpdateTheme("darkTheme".to_string()));
        assert_eq!(store.state().prefs.theme, ThemeName::Default);
    }

    #[test]
    fn listeners_subscribed_mid_pass_wait_for_the_next_transition() {
        let store = Store::new(AppState::default());
        let count = Rc::new(Cell::new(0));

        {
            let store_handle = store.clone();
            let count = Rc::clone(&count);
            let added = Rc::new(Cell::new(false));
            let _keep = store.subscribe(move |_| {
                if !added.replace(true) {
                    let count = Rc::clone(&count);
                    let _late = store_handle.subscribe(move |_| count.set(count.get() + 1));
                }
            });
        }

        store.dispatch(Action::ResetSearchQuery);
        assert_eq!(count.get(), 0);

        store.dispatch(Action::ResetSearchQuery);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dispatcher_capability_reaches_the_same_store() {
        let store = Store::new(AppState::default());
        let dispatch = store.dispatcher();

        dispatch(Action::UpdateTheme("darkTheme".to_string()));
        assert_eq!(store.state().prefs.theme, ThemeName::Dark);
    }
}
