use crate::error::{Result, StreamError};
use crate::source::{Flow, Stream, Walk};
use crate::subscriber::{Observer, Subscriber};
use log::{debug, trace, warn};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// How a subscription ended. A walk is idle until `subscribe` is called and
/// emitting until it returns, so only the terminal states are observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionState {
    Completed,
    Errored,
    Cancelled,
}

/// Outcome of one dispatch walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    state: SubscriptionState,
    delivered: usize,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> SubscriptionState {
        self.state
    }

    /// Number of values that reached the subscriber.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn is_completed(&self) -> bool {
        self.state == SubscriptionState::Completed
    }
}

impl<T> Stream<T> {
    /// Push every value to `on_next` and return once the source is exhausted.
    ///
    /// An operator failure stops delivery and is returned to the caller.
    pub fn subscribe<F>(&self, on_next: F) -> Result<Subscription>
    where
        F: FnMut(T),
    {
        let mut observer = Observer::new(on_next);
        let (subscription, error) = dispatch(self, &mut observer);
        match error {
            Some(err) => Err(err),
            None => Ok(subscription),
        }
    }

    /// Like [`Stream::subscribe`], but errors go to `Subscriber::on_error`
    /// instead of the caller.
    pub fn subscribe_with<S>(&self, mut subscriber: S) -> Subscription
    where
        S: Subscriber<T>,
    {
        dispatch(self, &mut subscriber).0
    }

    pub fn to_vec(&self) -> Result<Vec<T>> {
        let mut values = Vec::new();
        self.subscribe(|value| values.push(value))?;
        Ok(values)
    }
}

fn dispatch<T>(
    stream: &Stream<T>,
    subscriber: &mut dyn Subscriber<T>,
) -> (Subscription, Option<StreamError>) {
    let id = NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed);
    let walk = Walk::new(subscriber.cancel_token().cloned());
    let mut delivered = 0usize;

    if walk.is_cancelled() {
        debug!("subscription {id}: cancelled before emitting");
        return (
            Subscription {
                id,
                state: SubscriptionState::Cancelled,
                delivered,
            },
            None,
        );
    }
    debug!("subscription {id}: Idle -> Emitting");

    let outcome = stream.run(&walk, &mut |value: T| {
        if walk.is_cancelled() {
            return Ok(Flow::Stop);
        }
        subscriber.on_next(value);
        delivered += 1;
        trace!("subscription {id}: delivered value #{delivered}");
        if walk.is_cancelled() {
            Ok(Flow::Stop)
        } else {
            Ok(Flow::Continue)
        }
    });

    let (state, error) = match outcome {
        // An operator can absorb the stop signal, e.g. `take` reaching its limit.
        Ok(Flow::Continue) if walk.is_cancelled() => (SubscriptionState::Cancelled, None),
        Ok(Flow::Continue) => {
            subscriber.on_complete();
            (SubscriptionState::Completed, None)
        }
        Ok(Flow::Stop) => (SubscriptionState::Cancelled, None),
        Err(err) => {
            warn!("subscription {id}: {err}");
            subscriber.on_error(&err);
            (SubscriptionState::Errored, Some(err))
        }
    };
    debug!("subscription {id}: Emitting -> {state:?} after {delivered} values");

    (
        Subscription {
            id,
            state,
            delivered,
        },
        error,
    )
}
