use header_scroll::HeaderScrollOptions;
use header_scroll_adapter::{Controller, Easing, ScrollHost, TweenHost};

fn main() {
    // Example: a headless host animates the snap after the user lets go mid-collapse.
    //
    // An adapter would:
    // - forward scroll / drag notifications from the real scroll view
    // - call tick(now_ms) once per frame, after the host processed its events
    // - lay out the header from controller.header().geometry()
    let options = HeaderScrollOptions::new()
        .with_heights(150.0, 350.0)
        .with_allows_collapse(true)
        .with_allows_snap(true);
    let host = TweenHost::new(0.0)
        .with_duration_ms(240)
        .with_easing(Easing::EaseInOutCubic);
    let Ok(mut c) = Controller::new(options, host) else {
        return;
    };

    c.on_drag_begin();
    c.host_mut().drag_to(130.0);
    c.on_scroll(130.0);
    c.on_drag_end();
    println!("snapping: phase={:?}", c.header().phase());

    let mut now_ms = 0u64;
    while c.host().is_animating() || now_ms == 0 {
        now_ms += 16;
        if c.tick(now_ms) {
            let g = c.header().geometry();
            println!(
                "t={now_ms:>3} raw={:>6.1} height={:>6.1} progress={:.2}",
                c.header().raw_offset(),
                g.header_height,
                g.collapse_progress
            );
        }
    }
    println!("settled: phase={:?}", c.header().phase());
}
