use core::fmt;

use lesson_window::Labeled;

pub const DEFAULT_LESSON_COUNT: usize = 800;

/// Difficulty label shown next to each lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Intro,
    Advanced,
    Challenge,
}

impl Difficulty {
    /// Every fifth lesson (starting with the first) is a challenge; of the rest, even positions
    /// are advanced and odd ones introductory.
    pub fn for_index(index: usize) -> Self {
        if index % 5 == 0 {
            Self::Challenge
        } else if index % 2 == 0 {
            Self::Advanced
        } else {
            Self::Intro
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Advanced => "advanced",
            Self::Challenge => "challenge",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the lesson list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LessonRecord {
    /// 1-based, stable across filtering.
    pub id: u32,
    pub title: String,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
}

impl Labeled for LessonRecord {
    fn label(&self) -> &str {
        &self.title
    }
}

/// Something that produces the lesson sequence for a list.
///
/// Inject a deterministic source in tests so the rendered list is reproducible.
pub trait LessonSource {
    fn lessons(&mut self) -> Vec<LessonRecord>;
}

impl<F> LessonSource for F
where
    F: FnMut() -> Vec<LessonRecord>,
{
    fn lessons(&mut self) -> Vec<LessonRecord> {
        self()
    }
}

/// A seeded lesson generator. The same `(count, seed)` always yields the same lessons.
#[derive(Clone, Copy, Debug)]
pub struct SeededLessons {
    count: usize,
    seed: u64,
}

impl SeededLessons {
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for SeededLessons {
    fn default() -> Self {
        Self::new(DEFAULT_LESSON_COUNT, 0x1E55_0000)
    }
}

impl LessonSource for SeededLessons {
    fn lessons(&mut self) -> Vec<LessonRecord> {
        generate_lessons(self.count, self.seed)
    }
}

/// Generates `count` lessons; durations are drawn from `8..20` minutes.
pub fn generate_lessons(count: usize, seed: u64) -> Vec<LessonRecord> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|index| {
            let id = (index + 1) as u32;
            LessonRecord {
                id,
                title: format!("Lesson {id} · Practical React"),
                duration_minutes: 8 + rng.gen_below(12) as u32,
                difficulty: Difficulty::for_index(index),
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    // High bits of an LCG are better distributed than the low ones.
    fn gen_below(&mut self, bound: u64) -> u64 {
        (self.next_u64() >> 33) % bound
    }
}
