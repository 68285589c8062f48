//! Board Model
//!
//! Ordered task lists for the three fixed sections. Index 0 of each list is
//! the top of the column, i.e. the most recently added or moved task.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BoardError, BoardResult};
use crate::section::Section;

/// Position of a task on the board
///
/// Tasks carry no identifier, so a task is addressed by where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskRef {
    pub section: Section,
    pub index: usize,
}

impl TaskRef {
    pub fn new(section: Section, index: usize) -> Self {
        Self { section, index }
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.section, self.index)
    }
}

/// The whole board, serialized as `{ "todo": [..], "in-progress": [..], "done": [..] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    todo: Vec<String>,
    #[serde(default, rename = "in-progress")]
    in_progress: Vec<String>,
    #[serde(default)]
    done: Vec<String>,
}

impl Board {
    /// Empty board: every section present with no tasks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, section: Section) -> &[String] {
        match section {
            Section::Todo => &self.todo,
            Section::InProgress => &self.in_progress,
            Section::Done => &self.done,
        }
    }

    fn tasks_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Todo => &mut self.todo,
            Section::InProgress => &mut self.in_progress,
            Section::Done => &mut self.done,
        }
    }

    /// Total number of tasks across all sections
    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.tasks(*s).len()).sum()
    }

    pub fn read(&self, at: TaskRef) -> Option<&str> {
        self.tasks(at.section).get(at.index).map(String::as_str)
    }

    /// Insert a task at the front of a section
    pub fn create(&mut self, section: Section, text: impl Into<String>) -> BoardResult<TaskRef> {
        let text = text.into();
        if text.is_empty() {
            return Err(BoardError::EmptyInput);
        }
        self.tasks_mut(section).insert(0, text);
        Ok(TaskRef::new(section, 0))
    }

    pub fn remove(&mut self, at: TaskRef) -> Option<String> {
        let tasks = self.tasks_mut(at.section);
        (at.index < tasks.len()).then(|| tasks.remove(at.index))
    }

    /// Replace a task's text in place, returning the previous text
    pub fn edit(&mut self, at: TaskRef, text: impl Into<String>) -> BoardResult<String> {
        let slot = self
            .tasks_mut(at.section)
            .get_mut(at.index)
            .ok_or(BoardError::TaskNotFound(at))?;
        Ok(std::mem::replace(slot, text.into()))
    }

    /// Move a task to the front of `to`. Moving within a section brings it to the top.
    pub fn move_task(&mut self, from: TaskRef, to: Section) -> BoardResult<TaskRef> {
        let text = self.remove(from).ok_or(BoardError::TaskNotFound(from))?;
        self.tasks_mut(to).insert(0, text);
        Ok(TaskRef::new(to, 0))
    }

    pub fn clear_section(&mut self, section: Section) {
        self.tasks_mut(section).clear();
    }

    /// Replace every section with the contents of `other`
    ///
    /// Tasks are inserted front-wise, walking each stored list backwards so the
    /// resulting order equals the stored order.
    pub fn restore(&mut self, other: &Board) {
        for section in Section::ALL {
            self.clear_section(section);
            for text in other.tasks(section).iter().rev() {
                self.tasks_mut(section).insert(0, text.clone());
            }
        }
    }

    pub fn capture_json(&self) -> BoardResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        let mut board = Board::new();
        board.create(Section::Todo, "write report").unwrap();
        board.create(Section::Todo, "buy milk").unwrap();
        board.create(Section::InProgress, "fix bike").unwrap();
        board.create(Section::Done, "call mom").unwrap();
        board
    }

    #[test]
    fn test_create_inserts_at_front() {
        let mut board = sample();
        let before = board.tasks(Section::Todo).len();

        let at = board.create(Section::Todo, "water plants").unwrap();

        assert_eq!(at, TaskRef::new(Section::Todo, 0));
        assert_eq!(board.tasks(Section::Todo).len(), before + 1);
        assert_eq!(board.tasks(Section::Todo)[0], "water plants");
        assert_eq!(board.tasks(Section::Todo)[1], "buy milk");
    }

    #[test]
    fn test_create_rejects_empty_text() {
        let mut board = sample();
        let before = board.clone();

        let result = board.create(Section::Done, "");

        assert!(matches!(result, Err(BoardError::EmptyInput)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_create_accepts_whitespace() {
        let mut board = Board::new();
        assert!(board.create(Section::Todo, " ").is_ok());
    }

    #[test]
    fn test_read_and_remove() {
        let mut board = sample();
        let at = TaskRef::new(Section::Todo, 1);

        assert_eq!(board.read(at), Some("write report"));
        assert_eq!(board.remove(at).as_deref(), Some("write report"));
        assert_eq!(board.tasks(Section::Todo), ["buy milk"]);
        assert_eq!(board.remove(TaskRef::new(Section::Todo, 5)), None);
    }

    #[test]
    fn test_edit_in_place() {
        let mut board = sample();
        let at = TaskRef::new(Section::InProgress, 0);

        let old = board.edit(at, "fix bike brakes").unwrap();

        assert_eq!(old, "fix bike");
        assert_eq!(board.read(at), Some("fix bike brakes"));
        assert!(board.edit(TaskRef::new(Section::Done, 3), "x").is_err());
    }

    #[test]
    fn test_move_between_sections() {
        let mut board = sample();
        let total = board.len();

        let at = board.move_task(TaskRef::new(Section::Todo, 1), Section::Done).unwrap();

        assert_eq!(at, TaskRef::new(Section::Done, 0));
        assert_eq!(board.tasks(Section::Todo), ["buy milk"]);
        assert_eq!(board.tasks(Section::Done), ["write report", "call mom"]);
        assert_eq!(board.len(), total);
    }

    #[test]
    fn test_move_within_section_brings_to_front() {
        let mut board = sample();
        board.move_task(TaskRef::new(Section::Todo, 1), Section::Todo).unwrap();
        assert_eq!(board.tasks(Section::Todo), ["write report", "buy milk"]);
    }

    #[test]
    fn test_move_single_task_to_done() {
        let mut board = Board::from_json(r#"{"todo":["buy milk"],"in-progress":[],"done":[]}"#).unwrap();

        board.move_task(TaskRef::new(Section::Todo, 0), Section::Done).unwrap();

        let expected = Board::from_json(r#"{"todo":[],"in-progress":[],"done":["buy milk"]}"#).unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_move_stale_ref_fails() {
        let mut board = sample();
        let before = board.clone();
        let result = board.move_task(TaskRef::new(Section::Done, 9), Section::Todo);
        assert!(matches!(result, Err(BoardError::TaskNotFound(_))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_restore_idempotent() {
        let stored = sample();
        let captured = stored.capture_json().unwrap();

        let mut elsewhere = Board::new();
        elsewhere.create(Section::Done, "stale").unwrap();
        elsewhere.restore(&Board::from_json(&captured).unwrap());

        assert_eq!(elsewhere, stored);
        assert_eq!(elsewhere.capture_json().unwrap(), captured);
    }

    #[test]
    fn test_json_shape() {
        let json = Board::new().capture_json().unwrap();
        assert_eq!(json, r#"{"todo":[],"in-progress":[],"done":[]}"#);
    }

    #[test]
    fn test_missing_keys_are_empty() {
        let board = Board::from_json(r#"{"done":["a"],"archived":["b"]}"#).unwrap();
        assert!(board.tasks(Section::Todo).is_empty());
        assert!(board.tasks(Section::InProgress).is_empty());
        assert_eq!(board.tasks(Section::Done), ["a"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Board::from_json("{not json"), Err(BoardError::Codec(_))));
    }
}
