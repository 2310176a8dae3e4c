//! Narrowing the todo collection to the subset a view shows.

use crate::libs::messages::Message;
use crate::libs::todo::Todo;
use clap::ValueEnum;
use std::fmt;

/// View modes. Every mode except `Removed` hides soft-deleted todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TodoFilter {
    #[default]
    All,
    Checked,
    Unchecked,
    Removed,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => !todo.removed,
            TodoFilter::Checked => todo.checked && !todo.removed,
            TodoFilter::Unchecked => !todo.checked && !todo.removed,
            TodoFilter::Removed => todo.removed,
        }
    }

    /// The matching todos, in their original order.
    pub fn apply<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|todo| self.matches(todo)).collect()
    }

    pub fn label(&self) -> Message {
        match self {
            TodoFilter::All => Message::FilterAll,
            TodoFilter::Checked => Message::FilterChecked,
            TodoFilter::Unchecked => Message::FilterUnchecked,
            TodoFilter::Removed => Message::FilterRemoved,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, checked: bool, removed: bool) -> Todo {
        Todo {
            id: Some(id),
            value: format!("todo {}", id),
            checked,
            removed,
            completed_at: None,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            todo(1, false, false),
            todo(2, true, false),
            todo(3, false, true),
            todo(4, true, true),
            todo(5, false, false),
        ]
    }

    fn ids(todos: &[&Todo]) -> Vec<i64> {
        todos.iter().filter_map(|t| t.id).collect()
    }

    #[test]
    fn predicates() {
        let todos = sample();
        assert_eq!(ids(&TodoFilter::All.apply(&todos)), vec![1, 2, 5]);
        assert_eq!(ids(&TodoFilter::Checked.apply(&todos)), vec![2]);
        assert_eq!(ids(&TodoFilter::Unchecked.apply(&todos)), vec![1, 5]);
        assert_eq!(ids(&TodoFilter::Removed.apply(&todos)), vec![3, 4]);
    }

    #[test]
    fn all_and_removed_partition_the_collection() {
        let todos = sample();
        for t in &todos {
            let hits = [TodoFilter::All, TodoFilter::Removed].iter().filter(|f| f.matches(t)).count();
            assert_eq!(hits, 1, "todo {:?} must be in exactly one of all/removed", t.id);
        }
    }

    #[test]
    fn checked_and_unchecked_cover_the_non_removed() {
        let todos = sample();
        for t in &todos {
            let hits = [TodoFilter::Checked, TodoFilter::Unchecked].iter().filter(|f| f.matches(t)).count();
            assert_eq!(hits, usize::from(!t.removed));
        }
    }

    #[test]
    fn preserves_relative_order() {
        let todos = vec![todo(9, false, false), todo(3, false, false), todo(6, false, false)];
        assert_eq!(ids(&TodoFilter::Unchecked.apply(&todos)), vec![9, 3, 6]);
    }

    #[test]
    fn parses_from_cli_names() {
        assert_eq!(TodoFilter::from_str("removed", true).unwrap(), TodoFilter::Removed);
        assert_eq!(TodoFilter::from_str("unchecked", true).unwrap(), TodoFilter::Unchecked);
        assert!(TodoFilter::from_str("trash", true).is_err());
    }

    #[test]
    fn defaults_to_all() {
        assert_eq!(TodoFilter::default(), TodoFilter::All);
        assert_eq!(TodoFilter::All.to_string(), "All tasks");
    }
}
