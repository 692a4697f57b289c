// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A vertical shop list of 100 products shown with a handful of recycled cells.
//!
//! The content is dragged to the end of the list and back. Every frame tick that
//! wraps a cell prints the pool, so you can watch the same cells being reused.
//!
//! Run:
//! - `cargo run -p understory_demos --example recycling_list`
//! - `RUST_LOG=trace cargo run -p understory_demos --features logging --example recycling_list`

use core::num::NonZeroUsize;

use kurbo::Size;
use understory_demos::{Cell, TextStrip, describe};
use understory_recycler::{Direction, Recycler, RecyclerConfig, TickOutcome};

struct Product {
    name: String,
    price: u32,
}

fn main() {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let products: Vec<Product> = (0..100)
        .map(|i| Product {
            name: format!("item_{i}"),
            price: i * 100,
        })
        .collect();

    let strip = TextStrip::new(Size::new(300.0, 48.0), Size::new(300.0, 200.0));
    let config = RecyclerConfig::new(Direction::Vertical)
        .with_margins(2.0, 0.0)
        .with_max_wraps_per_tick(NonZeroUsize::new(4).unwrap());
    let mut list = Recycler::with_binder(strip, config, move |cell: &mut Cell, index: usize| {
        let product = &products[index];
        cell.text = format!("{} ({} gold)", product.name, product.price);
    });

    if let Err(err) = list.initialize(100) {
        eprintln!("cannot build the list: {err}");
        return;
    }
    println!(
        "{} cells for {} products, content {:?}",
        list.materialized_count(),
        list.total_count(),
        list.host().content_size
    );
    print!("{}", describe(&list));

    let mut frame = 0;
    for delta in [37.0, -37.0] {
        loop {
            frame += 1;
            list.host_mut().drag(delta);
            match list.on_frame_tick() {
                TickOutcome::Advanced { wraps } | TickOutcome::Retreated { wraps } => {
                    println!(
                        "frame {frame}: {wraps} wrap(s), window {:?}..={:?}",
                        list.first_index(),
                        list.last_index()
                    );
                }
                // Keep dragging until the end we are heading for is reached.
                TickOutcome::AtEnd if delta > 0.0 => break,
                TickOutcome::AtStart if delta < 0.0 => break,
                _ => {}
            }
        }
    }

    print!("{}", describe(&list));
    println!(
        "{} frames, {} cells ever instantiated",
        frame,
        list.host().instantiated()
    );
}
