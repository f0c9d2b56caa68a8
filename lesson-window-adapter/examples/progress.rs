// Example: persist completed lessons to the platform config directory.
use lesson_window_adapter::{FileStore, LearningProgress, MemoryStore, generate_lessons};

fn main() {
    let lessons = generate_lessons(12, 1);

    let store = match FileStore::open_default() {
        Ok(store) => {
            println!("storing progress under {}", store.root().display());
            Box::new(store) as Box<dyn lesson_window_adapter::KeyValueStore>
        }
        Err(err) => {
            println!("{err}; falling back to memory");
            Box::new(MemoryStore::new())
        }
    };

    let mut progress = LearningProgress::load(store);
    progress.set_total_lessons(lessons.len());

    let id = format!("lesson-{}", lessons[0].id);
    match progress.toggle(&id) {
        Ok(done) => println!("{id} completed={done}"),
        Err(err) => println!("could not save progress: {err}"),
    }
    println!(
        "completed={:?} rate={}%",
        progress.completed(),
        progress.completion_rate()
    );
}
