// Example: compute windows for a long fixed-height list.
use lesson_window::{WindowOptions, compute_visible_window, filter_indices};

fn main() {
    let opts = WindowOptions::default();
    println!("options={opts:?}");
    println!("total_height={}", opts.total_height(800));

    for scroll in [0.0, 6400.0, 51_200.0, -50.0] {
        let w = opts.compute(scroll, 800).expect("valid options");
        println!("scroll={scroll} window={w:?} rendered={}", w.len());
    }

    // A misconfigured row height is rejected instead of producing a degenerate window.
    match compute_visible_window(0.0, 320.0, 0.0, 800, 5) {
        Ok(w) => println!("unexpected window {w:?}"),
        Err(err) => println!("error: {err}"),
    }

    // The window is computed over the filtered count, not the unfiltered one.
    let titles: Vec<String> = (1..=800).map(|i| format!("Lesson {i}")).collect();
    let hits = filter_indices(&titles, "lesson 8");
    let w = opts.compute(0.0, hits.len()).expect("valid options");
    println!("filtered={} window={w:?}", hits.len());
}
