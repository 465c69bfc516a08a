//! Cached, server-authoritative collections.
//!
//! A [`CollectionStore`] keeps the client-side copy of one user-scoped
//! collection (the cart or the wishlist). Reads are served from the cache;
//! every mutation goes to the server and the server's answer replaces the
//! cached copy wholesale.
//!
//! # Ordering
//!
//! Requests are not serialized. Each one is tagged with the identity epoch
//! it was issued under and a sequence number; a response is applied only
//! if the identity has not changed since and nothing newer has been applied
//! already. A slow response can therefore never overwrite a newer one or
//! repopulate a store whose shopper has signed out.
//!
//! # Signed-out behavior
//!
//! Without an identity, mutations fail with
//! [`MutationError::NotAuthenticated`] before any network call and `fetch`
//! does nothing.

mod cart;
mod collection;
mod error;
mod remote;
mod wishlist;

pub use cart::{CART_TTL, CartStore};
pub use collection::Collection;
pub use error::MutationError;
pub use remote::{CartRemote, CollectionRemote, WishlistRemote};
pub use wishlist::{WISHLIST_TTL, WishlistStore};

use std::fmt;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use luxe_api::SessionToken;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::Cached;
use crate::session::{Identity, SessionGate};
use crate::time::SharedClock;

struct State<C> {
    identity: Option<Identity>,
    epoch: u64,
    next_seq: u64,
    applied_seq: u64,
    cached: Cached<C>,
}

/// What a request was issued under.
#[derive(Debug, Clone)]
struct Ticket {
    epoch: u64,
    seq: u64,
    token: SessionToken,
}

struct Inner<C, R> {
    remote: R,
    clock: SharedClock,
    state: RwLock<State<C>>,
    fetch_gate: Mutex<()>,
    revision: watch::Sender<u64>,
}

/// Client-side cache of a server-owned collection.
///
/// Cheap to clone; clones share the same cache.
pub struct CollectionStore<C, R> {
    inner: Arc<Inner<C, R>>,
}

impl<C, R> Clone for CollectionStore<C, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Collection, R> fmt::Debug for CollectionStore<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("CollectionStore")
            .field("kind", &C::KIND)
            .field("entries", &state.cached.collection().len())
            .field("loading", &state.cached.is_loading())
            .field("epoch", &state.epoch)
            .finish_non_exhaustive()
    }
}

impl<C: Collection, R: CollectionRemote<C>> CollectionStore<C, R> {
    /// Creates an empty, signed-out store.
    #[must_use]
    pub fn with_ttl(remote: R, ttl: Duration, clock: SharedClock) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                remote,
                clock,
                state: RwLock::new(State {
                    identity: None,
                    epoch: 0,
                    next_seq: 0,
                    applied_seq: 0,
                    cached: Cached::new(ttl),
                }),
                fetch_gate: Mutex::new(()),
                revision,
            }),
        }
    }

    /// Loads the collection from the server unless the cached copy is
    /// still fresh.
    ///
    /// With `force` the server is always asked. Failures are logged and the
    /// previous copy is kept.
    pub async fn fetch(&self, force: bool) {
        if !force && self.is_fresh() {
            debug!(kind = C::KIND, "Cache hit");
            return;
        }

        let _gate = self.inner.fetch_gate.lock().await;
        if !force && self.is_fresh() {
            debug!(kind = C::KIND, "Cache filled while waiting");
            return;
        }
        let Some(ticket) = self.ticket() else {
            debug!(kind = C::KIND, "No identity, skipping fetch");
            return;
        };

        self.write().cached.begin_fetch();
        self.notify();

        match self.inner.remote.fetch(&ticket.token).await {
            Ok(collection) => {
                let collection = normalized(collection);
                let entries = collection.len();
                let clock = &*self.inner.clock;
                if self.apply(&ticket, |cached| cached.refresh(collection, clock)) {
                    debug!(kind = C::KIND, entries, "Fetched");
                }
            }
            Err(e) => warn!(kind = C::KIND, error = %e, "Fetch failed, keeping cached copy"),
        }

        self.write().cached.end_fetch();
        self.notify();
    }

    /// Reacts to an identity change: signing out empties the cache, signing
    /// in (or switching users) empties it and refetches.
    ///
    /// A new token for the same user only replaces the token.
    pub async fn on_identity_changed(&self, identity: Option<Identity>) {
        if self.transition(identity) {
            self.fetch(true).await;
        }
    }

    /// Follows a [`SessionGate`] until the returned guard is dropped.
    ///
    /// The gate's current identity is applied immediately; a fetch it
    /// triggers runs in the background. Must be called within a Tokio
    /// runtime.
    pub fn watch_session(&self, gate: &SessionGate) -> SessionSubscription {
        let mut receiver = gate.subscribe();
        let initial = receiver.borrow_and_update().clone();
        if self.transition(initial) {
            self.spawn_refetch();
        }

        let store = self.clone();
        let task = tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let identity = receiver.borrow_and_update().clone();
                if store.transition(identity) {
                    store.spawn_refetch();
                }
            }
        });

        SessionSubscription { task }
    }

    fn spawn_refetch(&self) {
        let store = self.clone();
        tokio::spawn(async move { store.fetch(true).await });
    }
}

impl<C: Collection, R> CollectionStore<C, R> {
    /// A copy of the cached collection.
    #[must_use]
    pub fn snapshot(&self) -> C {
        self.read().cached.collection().clone()
    }

    /// Runs `f` against the cached collection without copying it.
    pub fn view<T>(&self, f: impl FnOnce(&C) -> T) -> T {
        f(self.read().cached.collection())
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().cached.is_loading()
    }

    /// When the cached copy was last fetched.
    #[must_use]
    pub fn last_fetched_at(&self) -> Option<Instant> {
        self.read().cached.stamp().last_fetched_at()
    }

    /// True while the last fetch is within the TTL.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.read().cached.stamp().is_fresh(&*self.inner.clock)
    }

    /// Freshness window of this store.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.read().cached.stamp().ttl()
    }

    /// True while the store has an identity to act for.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().identity.is_some()
    }

    /// The identity the store currently acts for.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.read().identity.clone()
    }

    /// Returns a receiver whose value changes whenever the cached
    /// collection or loading state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    fn read(&self) -> RwLockReadGuard<'_, State<C>> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State<C>> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.inner.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    /// Tags a new request, or returns `None` when signed out.
    fn ticket(&self) -> Option<Ticket> {
        let mut state = self.write();
        let token = state.identity.as_ref()?.token.clone();
        state.next_seq += 1;
        Some(Ticket {
            epoch: state.epoch,
            seq: state.next_seq,
            token,
        })
    }

    /// Applies a response if it is still current. Returns whether it was.
    fn apply(&self, ticket: &Ticket, update: impl FnOnce(&mut Cached<C>)) -> bool {
        let mut state = self.write();
        if state.epoch != ticket.epoch {
            debug!(kind = C::KIND, "Discarding response from a previous identity");
            return false;
        }
        if ticket.seq <= state.applied_seq {
            debug!(
                kind = C::KIND,
                seq = ticket.seq,
                applied = state.applied_seq,
                "Discarding stale response"
            );
            return false;
        }

        state.applied_seq = ticket.seq;
        update(&mut state.cached);
        drop(state);
        self.notify();
        true
    }

    /// Records an identity change. Returns true if a fetch should follow.
    fn transition(&self, identity: Option<Identity>) -> bool {
        let mut guard = self.write();
        let state = &mut *guard;

        let refetch = match identity {
            Some(next) => {
                if state
                    .identity
                    .as_ref()
                    .is_some_and(|current| current.same_user(&next))
                {
                    state.identity = Some(next);
                    return false;
                }
                info!(kind = C::KIND, user = %next.user_id(), "Identity present, refetching");
                state.identity = Some(next);
                true
            }
            None => {
                if state.identity.take().is_none() {
                    return false;
                }
                info!(kind = C::KIND, "Identity cleared, resetting");
                false
            }
        };

        state.epoch += 1;
        state.cached.reset();
        drop(guard);
        self.notify();
        refetch
    }

    /// Runs a mutation and commits the server's answer.
    async fn mutate<T, F, Fut>(
        &self,
        fallback: &str,
        call: F,
        commit: impl FnOnce(T) -> C,
    ) -> Result<(), MutationError>
    where
        F: FnOnce(SessionToken) -> Fut,
        Fut: Future<Output = luxe_api::Result<T>>,
    {
        let Some(ticket) = self.ticket() else {
            debug!(kind = C::KIND, "Mutation without identity rejected");
            return Err(MutationError::NotAuthenticated);
        };

        match call(ticket.token.clone()).await {
            Ok(response) => {
                let collection = normalized(commit(response));
                self.apply(&ticket, |cached| cached.replace(collection));
                Ok(())
            }
            Err(e) => {
                warn!(kind = C::KIND, error = %e, "{fallback}");
                Err(MutationError::from_api(&e, fallback))
            }
        }
    }
}

fn normalized<C: Collection>(mut collection: C) -> C {
    if collection.normalize() {
        debug!(kind = C::KIND, "Merged duplicate entries from server");
    }
    collection
}

/// Keeps a store following a [`SessionGate`]. Dropping it stops the
/// listener.
#[derive(Debug)]
#[must_use = "dropping the subscription stops following the session"]
pub struct SessionSubscription {
    task: JoinHandle<()>,
}

impl SessionSubscription {
    /// Stops following the session.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
