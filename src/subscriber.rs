use crate::error::StreamError;
use std::cell::Cell;
use std::rc::Rc;

/// Terminal consumer of a stream.
///
/// Only `on_next` is required. A subscription calls at most one of
/// `on_error` or `on_complete`, and neither if it was cancelled.
pub trait Subscriber<T> {
    fn on_next(&mut self, value: T);

    fn on_error(&mut self, _error: &StreamError) {}

    fn on_complete(&mut self) {}

    /// Checked before the walk, between root elements and around every
    /// delivery.
    fn cancel_token(&self) -> Option<&CancelToken> {
        None
    }
}

/// Shared flag that ends a subscription between two deliveries.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

type NextCallback<'a, T> = Box<dyn FnMut(T) + 'a>;
type ErrorCallback<'a> = Box<dyn FnMut(&StreamError) + 'a>;
type CompleteCallback<'a> = Box<dyn FnMut() + 'a>;

/// Closure-backed [`Subscriber`].
pub struct Observer<'a, T> {
    on_next: NextCallback<'a, T>,
    on_error: Option<ErrorCallback<'a>>,
    on_complete: Option<CompleteCallback<'a>>,
    cancel: Option<CancelToken>,
}

impl<'a, T> Observer<'a, T> {
    pub fn new<F>(on_next: F) -> Self
    where
        F: FnMut(T) + 'a,
    {
        Self {
            on_next: Box::new(on_next),
            on_error: None,
            on_complete: None,
            cancel: None,
        }
    }

    pub fn with_error<F>(mut self, on_error: F) -> Self
    where
        F: FnMut(&StreamError) + 'a,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    pub fn with_complete<F>(mut self, on_complete: F) -> Self
    where
        F: FnMut() + 'a,
    {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl<'a, T> Subscriber<T> for Observer<'a, T> {
    fn on_next(&mut self, value: T) {
        (self.on_next)(value)
    }

    fn on_error(&mut self, error: &StreamError) {
        if let Some(callback) = self.on_error.as_mut() {
            callback(error);
        }
    }

    fn on_complete(&mut self) {
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
    }

    fn cancel_token(&self) -> Option<&CancelToken> {
        self.cancel.as_ref()
    }
}
