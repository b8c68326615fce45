//! # Premium Invite Runtime
//!
//! Runtime implementation for the invitation studio reducers.
//!
//! This crate provides the [`Store`](store::Store), which owns a feature's state,
//! runs its reducer, and executes the effects the reducer describes.
//!
//! The studio is single-threaded and event driven: every UI interaction is one
//! `send()`, and the store executes the resulting effects inline before `send()`
//! returns. Actions produced by `Effect::Future` are fed back into the reducer and
//! broadcast to observers, so a caller awaiting `send()` observes the settled state.
//!
//! ## Example
//!
//! ```ignore
//! use premium_invite_runtime::Store;
//!
//! let store = Store::new(WizardState::default(), WizardReducer::new(), env);
//! store.send(WizardAction::Next).await?;
//! let step = store.state(|s| s.step).await;
//! ```

use futures::future::BoxFuture;
use premium_invite_core::effect::Effect;
use premium_invite_core::reducer::Reducer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// The Store module - runtime coordinator for reducers
pub mod store {
    use super::{Arc, AtomicBool, BoxFuture, Effect, Ordering, Reducer, RwLock, StoreError};
    use tokio::sync::broadcast;

    /// Default capacity of the feedback action broadcast channel.
    const BROADCAST_CAPACITY: usize = 16;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` so readers never see a half-applied action)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        /// Actions produced by effects, for observers (confirmation views, logs).
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (action_broadcast, _) = broadcast::channel(BROADCAST_CAPACITY);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Calls reducer with (state, action, environment)
        /// 2. Executes returned effects in order
        /// 3. Feeds actions produced by effects back into the reducer
        ///
        /// `send()` returns once the whole feedback chain has settled.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            metrics::counter!("store.commands.total").increment(1);
            self.dispatch(action).await;
            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let step = store.state(|s| s.step).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Access the injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// Subscribe to actions produced by effects
        ///
        /// Only feedback actions are broadcast, never the action passed to `send()`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Stop accepting new actions
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Returns `true` once [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shutting_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        fn dispatch(&self, action: A) -> BoxFuture<'_, ()> {
            Box::pin(async move {
                let effects = {
                    let mut state = self.state.write().await;
                    self.reducer.reduce(&mut *state, action, &self.environment)
                };

                tracing::trace!("Reducer returned {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect).await;
                }
            })
        }

        fn execute_effect(&self, effect: Effect<A>) -> BoxFuture<'_, ()> {
            Box::pin(async move {
                match effect {
                    Effect::None => {},
                    Effect::Future(future) => {
                        metrics::counter!("store.effects.total").increment(1);
                        if let Some(action) = future.await {
                            // No subscribers is the common case and not an error.
                            let _ = self.action_broadcast.send(action.clone());
                            self.dispatch(action).await;
                        }
                    },
                }
            })
        }
    }
}

pub use store::Store;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use premium_invite_core::{SmallVec, smallvec};

    #[derive(Debug, Clone, Default)]
    struct CounterState {
        count: i32,
        saved: Vec<i32>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum CounterAction {
        Increment,
        Save,
        Saved(i32),
        SaveTwice,
    }

    #[derive(Clone)]
    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = CounterState;
        type Action = CounterAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut CounterState,
            action: CounterAction,
            _env: &(),
        ) -> SmallVec<[Effect<CounterAction>; 4]> {
            match action {
                CounterAction::Increment => {
                    state.count += 1;
                    smallvec![Effect::None]
                },
                CounterAction::Save => {
                    let count = state.count;
                    smallvec![Effect::Future(Box::pin(async move {
                        Some(CounterAction::Saved(count))
                    }))]
                },
                CounterAction::Saved(value) => {
                    state.saved.push(value);
                    smallvec![Effect::None]
                },
                CounterAction::SaveTwice => {
                    let first = state.count;
                    smallvec![
                        Effect::Future(Box::pin(async move { Some(CounterAction::Saved(first)) })),
                        Effect::Future(Box::pin(async move {
                            Some(CounterAction::Saved(first + 1))
                        })),
                    ]
                },
            }
        }
    }

    #[tokio::test]
    async fn test_send_updates_state() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        store.send(CounterAction::Increment).await.unwrap();
        store.send(CounterAction::Increment).await.unwrap();
        assert_eq!(store.state(|s| s.count).await, 2);
    }

    #[tokio::test]
    async fn test_future_effect_feeds_back_before_send_returns() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        let mut rx = store.subscribe_actions();

        store.send(CounterAction::Increment).await.unwrap();
        store.send(CounterAction::Save).await.unwrap();

        assert_eq!(store.state(|s| s.saved.clone()).await, vec![1]);
        assert_eq!(rx.recv().await.unwrap(), CounterAction::Saved(1));
    }

    #[tokio::test]
    async fn test_effects_apply_in_order() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        store.send(CounterAction::SaveTwice).await.unwrap();
        assert_eq!(store.state(|s| s.saved.clone()).await, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_send_after_shutdown_is_rejected() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        store.shutdown();
        assert!(store.is_shutting_down());
        assert_eq!(
            store.send(CounterAction::Increment).await,
            Err(StoreError::ShutdownInProgress)
        );
        assert_eq!(store.state(|s| s.count).await, 0);
    }

    #[test]
    fn test_store_usable_from_blocking_context() {
        let store = Store::new(CounterState::default(), CounterReducer, ());
        tokio_test::block_on(store.send(CounterAction::Increment)).unwrap();
        assert_eq!(tokio_test::block_on(store.state(|s| s.count)), 1);
    }
}
