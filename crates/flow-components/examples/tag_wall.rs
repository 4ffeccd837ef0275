//! Tag wall demo: thirty random numeric labels flowed into rows.
//!
//! Run with `cargo run -p flow-components --features std --example tag_wall`.
//! Set `RUST_LOG=debug` to see per-child placements.

use embedded_graphics::prelude::*;
use flow_components::prelude::{Chip, Label, TextSize};
use flow_system::prelude::*;
use rand::Rng;
use tracing::{debug, info};

const WALL_WIDTH: u32 = 360;
const CHILD_COUNT: usize = 30;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand::thread_rng();
    let mut wall: FlowContainer<Chip, MAX_CHILDREN> = FlowContainer::new()
        .padding(Edges::all(10))
        .spacing(Spacing::uniform(10));

    for _ in 0..CHILD_COUNT {
        let value: u32 = rng.gen_range(0..1000);
        let size = if rng.gen_bool(0.5) {
            TextSize::Small
        } else {
            TextSize::Normal
        };
        let label = Label::new(&value.to_string()).size(size);
        if wall.add_child(Chip::new(label)).is_err() {
            break;
        }
    }

    let result = wall.layout(Constraints::loose(Size::new(WALL_WIDTH, u32::MAX)));

    info!(
        children = wall.len(),
        rows = result.row_count(),
        width = result.size.width,
        height = result.size.height,
        "tag wall laid out"
    );

    for (row_index, row) in result.rows().iter().enumerate() {
        info!(
            row = row_index,
            children = row.len,
            width = row.width,
            height = row.height,
            "row"
        );
    }

    for (index, placement) in result.placements().iter().enumerate() {
        debug!(
            child = index,
            x = placement.offset.x,
            y = placement.offset.y,
            w = placement.size.width,
            h = placement.size.height,
            "placed"
        );
    }
}
