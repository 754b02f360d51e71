use super::Operator;
use crate::error::{Result, StreamError};
use crate::source::{Flow, Stream};
use std::rc::Rc;

/// Emit `f(value)` for every upstream value.
pub fn map<T, U, F>(f: F) -> Operator<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let f = Rc::new(f);
    Operator::new(move |upstream: Stream<T>| {
        let f = f.clone();
        Stream::new(move |walk, emit| upstream.run(walk, &mut |value: T| emit(f(value))))
    })
}

/// Like [`map`], but a failing call ends the subscription with
/// [`StreamError::Operator`].
pub fn try_map<T, U, F>(f: F) -> Operator<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> anyhow::Result<U> + 'static,
{
    let f = Rc::new(f);
    Operator::new(move |upstream: Stream<T>| {
        let f = f.clone();
        Stream::new(move |walk, emit| {
            let mut index = 0;
            upstream.run(walk, &mut |value: T| {
                let mapped = f(value).map_err(|err| StreamError::operator("try_map", index, err))?;
                index += 1;
                emit(mapped)
            })
        })
    })
}

pub fn filter_map<T, U, F>(f: F) -> Operator<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Option<U> + 'static,
{
    let f = Rc::new(f);
    Operator::new(move |upstream: Stream<T>| {
        let f = f.clone();
        Stream::new(move |walk, emit| {
            upstream.run(walk, &mut |value: T| match f(value) {
                Some(mapped) => emit(mapped),
                None => Ok(Flow::Continue),
            })
        })
    })
}

/// Run `f` on each value for its side effect and forward the value unchanged.
pub fn tap<T, F>(f: F) -> Operator<T, T>
where
    T: 'static,
    F: Fn(&T) + 'static,
{
    let f = Rc::new(f);
    Operator::new(move |upstream: Stream<T>| {
        let f = f.clone();
        Stream::new(move |walk, emit| {
            upstream.run(walk, &mut |value: T| {
                f(&value);
                emit(value)
            })
        })
    })
}

/// Running fold that emits every intermediate state. The accumulator starts
/// from `initial` again on each subscription.
pub fn scan<T, S, F>(initial: S, f: F) -> Operator<T, S>
where
    T: 'static,
    S: Clone + 'static,
    F: Fn(S, T) -> S + 'static,
{
    let f = Rc::new(f);
    Operator::new(move |upstream: Stream<T>| {
        let f = f.clone();
        let initial = initial.clone();
        Stream::new(move |walk, emit| {
            let mut state = initial.clone();
            upstream.run(walk, &mut |value: T| -> Result<Flow> {
                state = f(state.clone(), value);
                emit(state.clone())
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn map_preserves_order_and_cardinality() {
        let stream = from([1, 2, 3]).pipe(map(|x: i32| x * 10));
        assert_eq!(stream.to_vec().unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn map_changes_element_type() {
        let stream = from([1, 22, 333]).pipe(map(|x: i32| x.to_string().len()));
        assert_eq!(stream.to_vec().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn map_body_does_not_run_until_subscribed() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let stream = from([1, 2]).pipe(map(move |x: i32| {
            counter.set(counter.get() + 1);
            x
        }));
        assert_eq!(calls.get(), 0);
        stream.to_vec().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn try_map_stops_before_later_elements() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let stream = from([4, 2, 0, 1]).pipe(try_map(move |x: i32| {
            counter.set(counter.get() + 1);
            8_i32.checked_div(x).ok_or_else(|| anyhow!("divide by zero"))
        }));
        let err = stream.to_vec().unwrap_err();
        assert_eq!(calls.get(), 3);
        assert!(matches!(err, StreamError::Operator { index: 2, .. }));
    }

    #[test]
    fn try_map_index_resets_per_subscription() {
        let stream = from([1, -1]).pipe(try_map(|x: i32| {
            if x < 0 {
                Err(anyhow!("negative"))
            } else {
                Ok(x)
            }
        }));
        for _ in 0..2 {
            let err = stream.to_vec().unwrap_err();
            assert!(matches!(err, StreamError::Operator { index: 1, .. }));
        }
    }

    #[test]
    fn filter_map_drops_none() {
        let stream = from(["7", "seven", "11"]).pipe(filter_map(|s: &str| s.parse::<u8>().ok()));
        assert_eq!(stream.to_vec().unwrap(), vec![7, 11]);
    }

    #[test]
    fn tap_sees_every_value_and_forwards_it() {
        let seen = Rc::new(Cell::new(0));
        let sum = seen.clone();
        let stream = from([1, 2, 3]).pipe(tap(move |x: &i32| sum.set(sum.get() + *x)));
        assert_eq!(stream.to_vec().unwrap(), vec![1, 2, 3]);
        assert_eq!(seen.get(), 6);
    }

    #[test]
    fn scan_restarts_for_each_subscription() {
        let stream = from([1, 2, 3]).pipe(scan(0, |acc: i32, x: i32| acc + x));
        assert_eq!(stream.to_vec().unwrap(), vec![1, 3, 6]);
        assert_eq!(stream.to_vec().unwrap(), vec![1, 3, 6]);
    }
}
