use crate::*;

use lesson_window::{VisibleWindow, WindowOptions};

fn lesson_list() -> ScrollContainer<LessonRecord> {
    ScrollContainer::from_source(&mut SeededLessons::default(), WindowOptions::default()).unwrap()
}

#[test]
fn container_starts_at_top() {
    let c = lesson_list();
    assert_eq!(c.filtered_len(), 800);
    assert_eq!(c.total_height(), 51_200.0);
    assert_eq!(
        c.visible_window(),
        VisibleWindow {
            start_index: 0,
            end_index: 10
        }
    );
    assert_eq!(c.translate_y(), 0.0);
    assert_eq!(c.scroll_phase(), ScrollPhase::Idle);
}

#[test]
fn scrolling_moves_window_and_slice_offset() {
    let mut c = lesson_list();
    c.on_scroll(6400.0, 0);
    let w = c.visible_window();
    assert_eq!((w.start_index, w.end_index), (95, 110));
    assert_eq!(c.translate_y(), 95.0 * 64.0);

    let mut rows = Vec::new();
    c.for_each_visible(|position, lesson, top| rows.push((position, lesson.id, top)));
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0], (95, 96, 6080.0));
    assert_eq!(rows[14], (109, 110, 109.0 * 64.0));

    let ids: Vec<u32> = c.visible_items().iter().map(|l| l.id).collect();
    assert_eq!(ids, (96..=110).collect::<Vec<u32>>());
}

#[test]
fn overscroll_is_tolerated() {
    let mut c = lesson_list();
    c.on_scroll(-50.0, 0);
    assert_eq!(c.scroll_offset(), -50.0);
    assert_eq!(c.visible_window().start_index, 0);
    assert_eq!(c.visible_window().end_index, 10);

    c.on_scroll(51_200.0, 16);
    let w = c.visible_window();
    assert_eq!((w.start_index, w.end_index), (795, 800));
}

#[test]
fn scroll_phase_debounces_back_to_idle() {
    let mut c = lesson_list().with_is_scrolling_reset_delay_ms(100);
    c.on_scroll(64.0, 1_000);
    assert!(c.is_scrolling());

    assert_eq!(c.update_scrolling(1_050), ScrollPhase::Scrolling);
    c.on_scroll(128.0, 1_080);
    assert_eq!(c.update_scrolling(1_150), ScrollPhase::Scrolling);
    assert_eq!(c.update_scrolling(1_180), ScrollPhase::Idle);
    assert!(!c.is_scrolling());

    c.on_scroll(0.0, 2_000);
    c.end_scroll();
    assert_eq!(c.scroll_phase(), ScrollPhase::Idle);
    assert_eq!(c.update_scrolling(5_000), ScrollPhase::Idle);
}

#[test]
fn search_filters_and_recomputes_window() {
    let mut c = lesson_list();
    c.set_search("LESSON 1");
    // 1, 10..=19, 100..=199
    assert_eq!(c.filtered_len(), 111);
    assert!(c.is_filtered());
    assert_eq!(c.filtered_item(0).map(|l| l.id), Some(1));
    assert_eq!(c.filtered_item(1).map(|l| l.id), Some(10));
    assert_eq!(c.total_height(), 111.0 * 64.0);

    c.set_search("   ");
    assert!(!c.is_filtered());
    assert_eq!(c.filtered_len(), 800);
}

#[test]
fn shrinking_filter_clamps_scroll_offset() {
    let mut c = lesson_list();
    c.on_scroll(6400.0, 0);
    c.set_search("lesson 8");
    // 8, 80..=89, 800
    assert_eq!(c.filtered_len(), 12);
    assert_eq!(c.max_scroll_offset(), 12.0 * 64.0 - 320.0);
    assert_eq!(c.scroll_offset(), 448.0);
    assert_eq!(
        c.visible_window(),
        VisibleWindow {
            start_index: 2,
            end_index: 12
        }
    );
}

#[test]
fn empty_filter_result_renders_nothing() {
    let mut c = lesson_list();
    c.on_scroll(3200.0, 0);
    c.set_search("angular");
    assert_eq!(c.filtered_len(), 0);
    assert_eq!(c.scroll_offset(), 0.0);
    assert!(c.visible_window().is_empty());
    assert_eq!(c.total_height(), 0.0);
    assert!(c.visible_items().is_empty());
}

#[test]
fn viewport_resize_changes_window() {
    let mut c = lesson_list();
    c.set_viewport_height(640.0);
    assert_eq!(c.visible_window().end_index, 15);
    assert_eq!(c.viewport().viewport_height, 640.0);
}

#[test]
fn set_items_reapplies_search() {
    let mut c = lesson_list();
    c.set_search("lesson 2");
    c.set_items(generate_lessons(30, 7));
    // 2, 20..=29
    assert_eq!(c.filtered_len(), 11);
    assert_eq!(c.items().len(), 30);
}

#[test]
fn nan_viewport_keeps_scroll_position() {
    let mut c = lesson_list();
    c.set_scroll_offset(6400.0);
    c.set_viewport_height(f64::NAN);
    assert_eq!(c.scroll_offset(), 6400.0);
    assert_eq!(c.max_scroll_offset(), 51_200.0);
}

#[test]
fn negative_viewport_cannot_scroll_past_content() {
    let mut c = lesson_list();
    c.set_viewport_height(-1000.0);
    c.set_scroll_offset(1_000_000.0);
    assert_eq!(c.scroll_offset(), 51_200.0);
    assert_eq!(c.visible_window().end_index, 800);
}

#[test]
fn viewport_growth_clamps_offset_to_new_maximum() {
    let mut c = lesson_list();
    c.set_scroll_offset(50_880.0);
    c.set_viewport_height(640.0);
    assert_eq!(c.scroll_offset(), 51_200.0 - 640.0);
}

#[test]
fn invalid_options_fail_fast() {
    let opts = WindowOptions::default().with_item_height(0.0);
    assert!(ScrollContainer::new(generate_lessons(10, 1), opts).is_err());
}

#[test]
fn programmatic_scroll_does_not_enter_scrolling_phase() {
    let mut c = lesson_list();
    c.set_scroll_offset(1_000_000.0);
    assert_eq!(c.scroll_offset(), 51_200.0 - 320.0);
    assert_eq!(c.scroll_phase(), ScrollPhase::Idle);
    assert_eq!(c.visible_window().end_index, 800);
}

#[test]
fn seeded_lessons_are_deterministic() {
    let a = generate_lessons(800, 42);
    let b = SeededLessons::new(800, 42).lessons();
    assert_eq!(a, b);
    assert_ne!(a, generate_lessons(800, 43));

    for (i, lesson) in a.iter().enumerate() {
        assert_eq!(lesson.id as usize, i + 1);
        assert!((8..20).contains(&lesson.duration_minutes), "{lesson:?}");
        assert_eq!(lesson.difficulty, Difficulty::for_index(i));
    }
    assert_eq!(a[0].title, "Lesson 1 · Practical React");
}

#[test]
fn difficulty_pattern() {
    let got: Vec<Difficulty> = (0..6).map(Difficulty::for_index).collect();
    assert_eq!(
        got,
        [
            Difficulty::Challenge,
            Difficulty::Intro,
            Difficulty::Advanced,
            Difficulty::Intro,
            Difficulty::Advanced,
            Difficulty::Challenge,
        ]
    );
    assert_eq!(Difficulty::Advanced.to_string(), "advanced");
}

#[test]
fn closures_can_be_injected_as_sources() {
    let mut calls = 0;
    let mut source = || {
        calls += 1;
        generate_lessons(3, 0)
    };
    let c = ScrollContainer::from_source(&mut source, WindowOptions::default()).unwrap();
    assert_eq!(c.filtered_len(), 3);
    assert_eq!(calls, 1);
}

#[test]
fn favorites_toggle_and_clear() {
    let mut favs = FavoriteSet::new();
    assert!(favs.toggle(3u32));
    assert!(favs.toggle(1));
    assert!(favs.contains(&3));
    assert!(!favs.toggle(3));
    assert!(!favs.contains(&3));
    assert_eq!(favs.iter().copied().collect::<Vec<_>>(), [1]);
    assert_eq!(favs.len(), 1);
    favs.clear();
    assert!(favs.is_empty());
}

#[test]
fn progress_starts_empty_without_stored_value() {
    let p = LearningProgress::load(MemoryStore::new());
    assert_eq!(p.completed_count(), 0);
    assert_eq!(p.completion_rate(), 0);
    assert_eq!(p.key(), DEFAULT_STORAGE_KEY);
}

#[test]
fn progress_ignores_malformed_values() {
    for raw in ["not json", "{\"a\":1}", "\"intro\"", "null"] {
        let store = MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, raw);
        let p = LearningProgress::load(store);
        assert!(p.completed().is_empty(), "raw={raw}");
    }
}

#[test]
fn progress_drops_non_string_ids() {
    let store =
        MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, r#"["intro", 3, null, "signals"]"#);
    let p = LearningProgress::load(store);
    assert_eq!(p.completed(), ["intro", "signals"]);
}

#[test]
fn progress_toggle_persists_json_array() {
    let mut p = LearningProgress::load(MemoryStore::new());
    assert!(p.toggle("intro").unwrap());
    assert!(p.toggle("signals").unwrap());
    assert!(!p.toggle("intro").unwrap());
    assert!(p.is_completed("signals"));
    assert!(!p.is_completed("intro"));

    let store = p.into_store();
    assert_eq!(
        store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some(r#"["signals"]"#)
    );

    let reloaded = LearningProgress::load(store);
    assert_eq!(reloaded.completed(), ["signals"]);
}

#[test]
fn completion_rate_rounds_to_percent() {
    let mut p = LearningProgress::load(MemoryStore::new());
    p.set_total_lessons(3);
    p.toggle("a").unwrap();
    assert_eq!(p.completion_rate(), 33);
    p.toggle("b").unwrap();
    assert_eq!(p.completion_rate(), 67);

    p.set_total_lessons(8);
    p.toggle("b").unwrap();
    assert_eq!(p.completion_rate(), 13);
    assert_eq!(p.total_lessons(), 8);
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("read failed".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("write failed".to_string()))
    }
}

#[test]
fn failed_write_rolls_back_toggle() {
    let mut p = LearningProgress::load(BrokenStore);
    assert!(p.completed().is_empty());
    let err = p.toggle("intro").unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(!p.is_completed("intro"));
}

#[test]
fn progress_works_through_borrowed_store() {
    let mut store = MemoryStore::new();
    {
        let mut p = LearningProgress::load_with_key(&mut store, "custom");
        p.toggle("x").unwrap();
    }
    assert_eq!(store.get("custom").unwrap().as_deref(), Some(r#"["x"]"#));
    assert_eq!(store.len(), 1);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("nested"));
    assert_eq!(store.get("progress").unwrap(), None);

    store.set("progress", "[\"a\"]").unwrap();
    assert_eq!(store.get("progress").unwrap().as_deref(), Some("[\"a\"]"));

    store.set("progress", "[]").unwrap();
    assert_eq!(store.get("progress").unwrap().as_deref(), Some("[]"));
}

#[test]
fn file_store_failed_write_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("progress")).unwrap();
    let mut store = FileStore::new(dir.path());

    let err = store.set("progress", "[\"a\"]").unwrap_err();
    assert!(matches!(err, StoreError::Io { ref key, .. } if key == "progress"), "{err:?}");

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["progress"]);
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    for key in ["", "../escape", "a/b", ".hidden"] {
        assert!(matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))), "{key}");
        assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))), "{key}");
    }
}

#[test]
fn progress_survives_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut p = LearningProgress::load(FileStore::new(dir.path()));
        p.toggle("lesson-1").unwrap();
        p.toggle("lesson-2").unwrap();
    }
    let p = LearningProgress::load(FileStore::new(dir.path()));
    assert_eq!(p.completed(), ["lesson-1", "lesson-2"]);
}
