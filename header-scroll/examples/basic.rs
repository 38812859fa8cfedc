use header_scroll::{HeaderGeometry, HeaderScroll, HeaderScrollOptions};

fn main() {
    // Example: sweep a scroll gesture from pulled-down to fully scrolled and print the header.
    let options = HeaderScrollOptions::new()
        .with_heights(150.0, 350.0)
        .with_allows_collapse(true)
        .with_allows_growth(true);

    for raw in [-120.0f32, -40.0, 0.0, 50.0, 100.0, 200.0, 320.0] {
        let g = HeaderGeometry::compute(raw, &options);
        println!(
            "raw={raw:>7.1} height={:>6.1} offset={:>6.1} scale={:.3} progress={:.2}",
            g.header_height, g.header_offset, g.header_scale, g.collapse_progress
        );
    }

    let mut header = match HeaderScroll::new(options) {
        Ok(header) => header,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    header.on_scroll(100.0);
    header.flush();
    println!("published={:?}", header.published());
}
