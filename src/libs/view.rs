use super::filter::TodoFilter;
use super::todo::{format_date, Todo};
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders `todos` under a header naming `filter`.
    pub fn todos(filter: TodoFilter, todos: &[&Todo]) {
        msg_print!(filter.label(), true);
        Self::table(todos).printstd();
    }

    pub fn table(todos: &[&Todo]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "VALUE", "DATE"]);
        for todo in todos {
            table.add_row(row![
                todo.id.map(|id| id.to_string()).unwrap_or_default(),
                if todo.checked { "x" } else { "" },
                todo.value,
                format_date(&todo.completed_at)
            ]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_a_header_and_one_row_per_todo() {
        let mut done = Todo::new("walk the dog", None);
        done.id = Some(2);
        done.checked = true;
        let open = Todo::new("buy milk", None);

        let table = View::table(&[&done, &open]);
        assert_eq!(table.len(), 3);

        let rendered = table.to_string();
        assert!(rendered.contains("walk the dog"));
        assert!(rendered.contains("buy milk"));
    }
}
