//! Drives a sortable list through one scripted gesture without a window.
//!
//! Run with `RUST_LOG=sortable_list=trace` to see every step. Set
//! `SORTABLE_PROFILE=1` to serve puffin data while it runs.

use sortable_core::logging;
use sortable_core::profiling::{self, ProfilingBackend, init_profiling};
use sortable_list::{GestureEvent, SortableConfig, SortableList, Vec2};
use sortable_test_utils::MockListEnvironment;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    if std::env::var_os("SORTABLE_PROFILE").is_some() {
        init_profiling(ProfilingBackend::PuffinHttp);
    }

    let env = MockListEnvironment::column(4, Vec2::new(240.0, 32.0));
    let items = env.item_ids();

    let mut list = SortableList::new(SortableConfig::from_attributes(None, Some("create")));
    list.on_sort(|event| tracing::info!(order = ?event.order, "sorted"));
    list.attach(&env)?;

    let handle = env.handles(items[3])[0];
    let mut script = vec![GestureEvent::Start {
        origin: handle,
        position: env.center_of(items[3]),
    }];
    script.extend(items.iter().rev().skip(1).map(|item| GestureEvent::Move {
        position: env.center_of(*item),
    }));
    script.push(GestureEvent::End);

    // One event per turn, as a host event loop would deliver them
    for event in script {
        profiling::new_frame();
        list.handle_event(&env, event);
    }

    for item in &items {
        println!("{} -> placement {:?}", item, env.placement(*item));
    }
    Ok(())
}
