//! Roadmap list state and the pure transitions behind the feed's optimistic
//! like toggle and the builder's course sequencing.
//!
//! DESIGN
//! ======
//! Every transition builds a fresh `Vec` instead of mutating in place, so
//! views holding the previous list never observe a half-applied update and
//! a failed remote call can roll back by re-applying the same transition.

#[cfg(test)]
#[path = "roadmaps_test.rs"]
mod roadmaps_test;

use crate::net::types::{Course, Roadmap};

/// A fetched roadmap collection (feed, my-learning).
#[derive(Clone, Debug, Default)]
pub struct RoadmapListState {
    pub items: Vec<Roadmap>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Flip the viewer's like on one roadmap, adjusting its count. Returns a
/// rebuilt list; unknown ids return the input unchanged.
pub fn toggle_like(items: &[Roadmap], id: &str) -> Vec<Roadmap> {
    items
        .iter()
        .map(|roadmap| {
            if roadmap.id == id {
                let mut updated = roadmap.clone();
                updated.liked = !roadmap.liked;
                updated.likes += if updated.liked { 1 } else { -1 };
                updated
            } else {
                roadmap.clone()
            }
        })
        .collect()
}

/// Append a course to the builder sequence unless it is already present.
pub fn insert_course(sequence: &[Course], course: Course) -> Vec<Course> {
    if sequence.iter().any(|existing| existing.id == course.id) {
        return sequence.to_vec();
    }
    let mut updated = sequence.to_vec();
    updated.push(course);
    updated
}

/// Remove a course from the builder sequence by id.
pub fn remove_course(sequence: &[Course], id: &str) -> Vec<Course> {
    sequence.iter().filter(|course| course.id != id).cloned().collect()
}

/// Move the course at `index` one slot earlier. First slot and out-of-range
/// indices are no-ops.
pub fn move_course_up(sequence: &[Course], index: usize) -> Vec<Course> {
    let mut updated = sequence.to_vec();
    if index > 0 && index < updated.len() {
        updated.swap(index - 1, index);
    }
    updated
}

/// Move the course at `index` one slot later. Last slot and out-of-range
/// indices are no-ops.
pub fn move_course_down(sequence: &[Course], index: usize) -> Vec<Course> {
    let mut updated = sequence.to_vec();
    if index + 1 < updated.len() {
        updated.swap(index, index + 1);
    }
    updated
}

/// Split a comma-separated topics field into trimmed, non-empty names.
pub fn parse_topics(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join topic names back into the comma-separated form the form fields use.
pub fn topics_field(topics: &[String]) -> String {
    topics.join(", ")
}
