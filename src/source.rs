use crate::config::SourceConfig;
use crate::error::{ConstructionError, Result};
use crate::subscriber::CancelToken;
use log::warn;
use std::rc::Rc;

/// Signal passed back up the chain after each push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// State shared by every stage of one subscription's walk.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    cancel: Option<CancelToken>,
}

impl Walk {
    pub(crate) fn new(cancel: Option<CancelToken>) -> Self {
        Self { cancel }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

type Producer<T> = Rc<dyn Fn(&Walk, &mut dyn FnMut(T) -> Result<Flow>) -> Result<Flow>>;

/// A lazy description of a finite, ordered push sequence.
///
/// Nothing runs until the stream is subscribed; every subscription walks the
/// whole chain again from the root.
pub struct Stream<T> {
    producer: Producer<T>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            producer: self.producer.clone(),
        }
    }
}

impl<T> Stream<T> {
    pub(crate) fn new<P>(producer: P) -> Self
    where
        P: Fn(&Walk, &mut dyn FnMut(T) -> Result<Flow>) -> Result<Flow> + 'static,
    {
        Self {
            producer: Rc::new(producer),
        }
    }

    /// Push every value of one walk into `emit`. Returns `Flow::Stop` when
    /// the consumer asked to stop early or the walk was cancelled.
    pub(crate) fn run(&self, walk: &Walk, emit: &mut dyn FnMut(T) -> Result<Flow>) -> Result<Flow> {
        (self.producer)(walk, emit)
    }
}

impl<T> Stream<T>
where
    T: Clone + 'static,
{
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_shared(items.into())
    }

    pub fn of(items: &[T]) -> Self {
        Self::from_shared(items.into())
    }

    pub fn empty() -> Self {
        Self::from_shared(Rc::from(Vec::new()))
    }

    /// Length-checked variant of [`Stream::from_vec`].
    pub fn from_vec_with(items: Vec<T>, config: &SourceConfig) -> Result<Self> {
        if let Some(max_len) = config.max_len {
            if items.len() > max_len {
                return Err(too_long(config, max_len).into());
            }
        }
        Ok(Self::from_vec(items))
    }

    /// Build a source from an arbitrary iterator, refusing anything that
    /// cannot be shown to be finite within the configured limit.
    ///
    /// Without `max_len` the iterator must report an upper bound through
    /// `size_hint`. With `max_len`, at most `max_len + 1` items are pulled.
    pub fn try_from_iter<I>(iter: I, config: &SourceConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        match config.max_len {
            None => {
                if iter.size_hint().1.is_none() {
                    warn!("rejecting source `{}`: no upper bound", config.label);
                    return Err(ConstructionError::Unbounded {
                        label: config.label.clone(),
                    }
                    .into());
                }
                Ok(iter.collect())
            }
            Some(max_len) => {
                let items: Vec<T> = iter.take(max_len.saturating_add(1)).collect();
                if items.len() > max_len {
                    return Err(too_long(config, max_len).into());
                }
                Ok(Self::from_vec(items))
            }
        }
    }

    fn from_shared(items: Rc<[T]>) -> Self {
        Stream::new(move |walk, emit| {
            for item in items.iter() {
                if walk.is_cancelled() || emit(item.clone())? == Flow::Stop {
                    return Ok(Flow::Stop);
                }
            }
            Ok(Flow::Continue)
        })
    }
}

fn too_long(config: &SourceConfig, max_len: usize) -> ConstructionError {
    warn!(
        "rejecting source `{}`: longer than {} elements",
        config.label, max_len
    );
    ConstructionError::TooLong {
        label: config.label.clone(),
        max_len,
    }
}

impl<T> FromIterator<T> for Stream<T>
where
    T: Clone + 'static,
{
    /// The iterator is drained eagerly, so it must be finite.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Stream<T>
where
    T: Clone + 'static,
{
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

/// Wrap a finite sequence into a stream that replays it on every subscription.
pub fn from<T, I>(items: I) -> Stream<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect()
}
