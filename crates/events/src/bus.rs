//! Broadcast abstraction for extension listeners.
//!
//! Anything that wants to react to a sync outcome (for instance, attaching a
//! newly created store to a mailing list) subscribes to a bus and receives a
//! copy of every published message.
//!
//! Delivery is best-effort: no persistence, no replay for late subscribers.
//! Messages published before `subscribe()` are not seen by that subscription.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError};

/// Receiving end of a bus subscription.
///
/// Meant for a single consumer; hand it to one thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Drain everything already delivered, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Publish/subscribe bus with broadcast semantics.
///
/// `publish()` may fail (e.g. the implementation's lock is poisoned); callers
/// decide whether that failure matters for the operation that produced the
/// message.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
