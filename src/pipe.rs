use crate::operators::{self, Operator};
use crate::source::Stream;

impl<T: 'static> Stream<T> {
    /// Apply one operator. Nothing runs until the result is subscribed.
    pub fn pipe<U: 'static>(&self, operator: Operator<T, U>) -> Stream<U> {
        operator.apply(self.clone())
    }

    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.pipe(operators::map(f))
    }

    pub fn try_map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> anyhow::Result<U> + 'static,
    {
        self.pipe(operators::try_map(f))
    }

    pub fn filter<F>(&self, predicate: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.pipe(operators::filter(predicate))
    }

    pub fn try_filter<F>(&self, predicate: F) -> Stream<T>
    where
        F: Fn(&T) -> anyhow::Result<bool> + 'static,
    {
        self.pipe(operators::try_filter(predicate))
    }

    pub fn filter_map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + 'static,
    {
        self.pipe(operators::filter_map(f))
    }

    pub fn tap<F>(&self, f: F) -> Stream<T>
    where
        F: Fn(&T) + 'static,
    {
        self.pipe(operators::tap(f))
    }

    pub fn scan<S, F>(&self, initial: S, f: F) -> Stream<S>
    where
        S: Clone + 'static,
        F: Fn(S, T) -> S + 'static,
    {
        self.pipe(operators::scan(initial, f))
    }

    pub fn take(&self, limit: usize) -> Stream<T> {
        self.pipe(operators::take(limit))
    }
}

/// Apply operators to a stream left to right; the first operator sits
/// closest to the source.
///
/// ```
/// use rust_rxstream::{filter, from, map, pipe};
///
/// let evens = pipe!(from([1, 2, 3, 4]), filter(|x: &i32| x % 2 == 0), map(|x: i32| x * 10));
/// assert_eq!(evens.to_vec().unwrap(), vec![20, 40]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($source:expr $(, $operator:expr)* $(,)?) => {{
        let stream = $source;
        $(let stream = stream.pipe($operator);)*
        stream
    }};
}

/// Fuse operators into a single [`Operator`](crate::Operator), left to right.
#[macro_export]
macro_rules! compose {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let operator = $first;
        $(let operator = operator.then($rest);)*
        operator
    }};
}
