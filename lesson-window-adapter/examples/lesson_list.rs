// Example: drive a scroll container the way a UI adapter would.
use lesson_window::WindowOptions;
use lesson_window_adapter::{FavoriteSet, ScrollContainer, SeededLessons};

fn main() {
    let mut list =
        ScrollContainer::from_source(&mut SeededLessons::default(), WindowOptions::default())
            .expect("default options are valid");
    let mut favorites = FavoriteSet::new();

    // Simulate a few scroll events, 16ms apart.
    for (i, offset) in [0.0, 640.0, 3200.0, 6400.0].into_iter().enumerate() {
        list.on_scroll(offset, i as u64 * 16);
        println!(
            "scroll={offset} window={:?} translate_y={} scrolling={}",
            list.visible_window(),
            list.translate_y(),
            list.is_scrolling()
        );
    }
    list.update_scrolling(1_000);
    println!("after debounce: phase={:?}", list.scroll_phase());

    list.for_each_visible(|position, lesson, top| {
        if position % 5 == 0 {
            favorites.toggle(lesson.id);
        }
        println!(
            "  #{position:<4} top={top:<7} {} ({} min, {})",
            lesson.title, lesson.duration_minutes, lesson.difficulty
        );
    });
    println!("favorites={}", favorites.len());

    list.set_search("lesson 8");
    println!(
        "search={:?} matches={} total_height={} window={:?}",
        list.search(),
        list.filtered_len(),
        list.total_height(),
        list.visible_window()
    );
}
