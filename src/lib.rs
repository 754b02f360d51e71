//! Lazy, synchronous push streams.
//!
//! A [`Stream`] describes a finite sequence of values. Operators such as
//! [`map`] and [`filter`] wrap it into new streams without running anything;
//! [`Stream::subscribe`] then walks the whole chain, pushing one value at a
//! time from the root to the subscriber.
//!
//! ```
//! use rust_rxstream::{filter, from, map, pipe};
//!
//! let mut seen = Vec::new();
//! pipe!(
//!     from([1, 2, 3, 4]),
//!     map(|x: i32| x * x),
//!     filter(|x: &i32| *x > 4),
//! )
//! .subscribe(|x| seen.push(x))
//! .unwrap();
//! assert_eq!(seen, vec![9, 16]);
//! ```

mod config;
mod dispatch;
mod error;
pub mod operators;
mod pipe;
mod source;
mod subscriber;

pub use config::{SourceConfig, SourceConfigBuilder};
pub use dispatch::{Subscription, SubscriptionState};
pub use error::{ConstructionError, Result, StreamError};
pub use operators::{filter, filter_map, map, scan, take, tap, try_filter, try_map, Operator};
pub use source::{from, Stream};
pub use subscriber::{CancelToken, Observer, Subscriber};
