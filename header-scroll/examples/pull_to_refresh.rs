use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use header_scroll::{HeaderScroll, HeaderScrollOptions};

fn main() {
    // Example: a pull past the threshold starts a refresh; the caller ends it.
    let refreshes = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&refreshes);
    let options = HeaderScrollOptions::new()
        .with_allows_collapse(true)
        .with_on_refresh(Some(move || {
            counted.fetch_add(1, Ordering::SeqCst);
            println!("refresh requested");
        }));

    let Ok(mut header) = HeaderScroll::new(options) else {
        return;
    };

    header.on_drag_begin();
    for pull in [5.0f32, 15.0, 30.0, 45.0] {
        header.on_scroll(-pull);
        header.on_content_frame(pull);
        println!(
            "pull={pull:>4.1} spinner={}",
            header.is_spinning_indicator_visible()
        );
    }
    header.on_drag_end();
    println!(
        "loading={} phase={:?} refreshes={}",
        header.is_loading(),
        header.phase(),
        refreshes.load(Ordering::SeqCst)
    );

    // The caller's async work completes.
    header.set_is_loading(false);
    println!("loading={} phase={:?}", header.is_loading(), header.phase());
}
