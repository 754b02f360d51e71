//! Print the values of a sequence that sit at even-valued positions, reading
//! them back through a shared cell written by an earlier stage.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example even_positions
//! ```

use anyhow::Result;
use rust_rxstream::{filter, from, map, pipe};
use std::cell::Cell;
use std::rc::Rc;

fn main() -> Result<()> {
    env_logger::init();

    let value = Rc::new(Cell::new(0));
    let write = value.clone();
    let read = value.clone();

    let numbers = from([1, 2, 3, 4, 4, 3, 12, 9, 13]);

    pipe!(
        numbers,
        map(move |x: i32| {
            write.set(x);
            x
        }),
        map(|x: i32| x % 2 == 0),
        filter(|even: &bool| *even),
        map(move |_: bool| read.get()),
    )
    .subscribe(|val| println!("{val}"))?;

    Ok(())
}
