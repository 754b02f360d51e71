mod select;
mod transform;

pub use select::{filter, take, try_filter};
pub use transform::{filter_map, map, scan, tap, try_map};

use crate::source::Stream;
use std::rc::Rc;

/// A reusable `Stream<T> -> Stream<U>` step of a pipeline.
///
/// Applying an operator only wraps the upstream stream; its body runs once
/// per element during a subscription.
pub struct Operator<T, U> {
    apply: Rc<dyn Fn(Stream<T>) -> Stream<U>>,
}

impl<T, U> Clone for Operator<T, U> {
    fn clone(&self) -> Self {
        Operator {
            apply: self.apply.clone(),
        }
    }
}

impl<T, U> Operator<T, U>
where
    T: 'static,
    U: 'static,
{
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(Stream<T>) -> Stream<U> + 'static,
    {
        Self {
            apply: Rc::new(apply),
        }
    }

    pub fn apply(&self, upstream: Stream<T>) -> Stream<U> {
        (self.apply)(upstream)
    }

    /// Fuse `self` and `next` into one operator; `self` runs first.
    pub fn then<V>(self, next: Operator<U, V>) -> Operator<T, V>
    where
        V: 'static,
    {
        Operator::new(move |upstream| next.apply(self.apply(upstream)))
    }
}

impl<T: 'static> Operator<T, T> {
    pub fn identity() -> Self {
        Operator::new(|upstream| upstream)
    }
}
