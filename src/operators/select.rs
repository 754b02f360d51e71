use super::Operator;
use crate::error::StreamError;
use crate::source::{Flow, Stream};
use std::rc::Rc;

/// Forward only the values for which `predicate` holds.
pub fn filter<T, F>(predicate: F) -> Operator<T, T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    Operator::new(move |upstream: Stream<T>| {
        let predicate = predicate.clone();
        Stream::new(move |walk, emit| {
            upstream.run(walk, &mut |value: T| {
                if predicate(&value) {
                    emit(value)
                } else {
                    Ok(Flow::Continue)
                }
            })
        })
    })
}

pub fn try_filter<T, F>(predicate: F) -> Operator<T, T>
where
    T: 'static,
    F: Fn(&T) -> anyhow::Result<bool> + 'static,
{
    let predicate = Rc::new(predicate);
    Operator::new(move |upstream: Stream<T>| {
        let predicate = predicate.clone();
        Stream::new(move |walk, emit| {
            let mut index = 0;
            upstream.run(walk, &mut |value: T| {
                let keep = predicate(&value)
                    .map_err(|err| StreamError::operator("try_filter", index, err))?;
                index += 1;
                if keep {
                    emit(value)
                } else {
                    Ok(Flow::Continue)
                }
            })
        })
    })
}

/// Forward the first `limit` values, then stop pulling from upstream.
pub fn take<T>(limit: usize) -> Operator<T, T>
where
    T: 'static,
{
    Operator::new(move |upstream: Stream<T>| {
        Stream::new(move |walk, emit| {
            if limit == 0 {
                return Ok(Flow::Continue);
            }
            let mut remaining = limit;
            let mut downstream_stopped = false;
            upstream.run(walk, &mut |value: T| {
                remaining -= 1;
                if emit(value)? == Flow::Stop {
                    downstream_stopped = true;
                    return Ok(Flow::Stop);
                }
                Ok(if remaining == 0 {
                    Flow::Stop
                } else {
                    Flow::Continue
                })
            })?;
            // Our own early stop still counts as completion downstream.
            Ok(if downstream_stopped {
                Flow::Stop
            } else {
                Flow::Continue
            })
        })
    })
}
