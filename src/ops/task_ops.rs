use crate::model::Status;
use crate::parse::parse_tasks;

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
}

/// Rewrite the checkbox of task `id` in a `tasks.md` source.
///
/// Only the checkbox character on the task's own line changes; every other
/// byte (line endings, sub-notes, prose) is preserved.
pub fn set_status_in_source(source: &str, id: &str, status: Status) -> Result<String, TaskError> {
    let tasks = parse_tasks(source);
    let task = tasks
        .iter()
        .find(|t| !t.id.is_empty() && t.id.as_str() == id)
        .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

    let mut out = String::with_capacity(source.len());
    for (idx, line) in source.split_inclusive('\n').enumerate() {
        match line.strip_prefix("- [") {
            Some(rest) if idx == task.position => {
                // the checkbox char is always one byte (' ', 'x' or 'X')
                out.push_str("- [");
                out.push(status.checkbox_char());
                out.push_str(&rest[1..]);
            }
            _ => out.push_str(line),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "\
# Tasks

- [ ] `T-1` Write report
  - [ ] not a task, just a sub-note
- [X] `T-2` Book flights
- [ ] Call the bank
";

    #[test]
    fn marks_done_and_reopens() {
        let done = set_status_in_source(SOURCE, "T-1", Status::Done).unwrap();
        assert!(done.contains("- [x] `T-1` Write report\n"));
        assert!(done.contains("  - [ ] not a task"));
        assert_eq!(done.len(), SOURCE.len());

        let open = set_status_in_source(SOURCE, "T-2", Status::Open).unwrap();
        assert!(open.contains("- [ ] `T-2` Book flights\n"));
    }

    #[test]
    fn leaves_other_lines_untouched() {
        let done = set_status_in_source(SOURCE, "T-1", Status::Done).unwrap();
        let changed: Vec<(&str, &str)> = SOURCE
            .lines()
            .zip(done.lines())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(
            changed,
            vec![("- [ ] `T-1` Write report", "- [x] `T-1` Write report")]
        );
    }

    #[test]
    fn preserves_crlf() {
        let src = "- [ ] `A` one\r\n- [ ] `B` two\r\n";
        let out = set_status_in_source(src, "B", Status::Done).unwrap();
        assert_eq!(out, "- [ ] `A` one\r\n- [x] `B` two\r\n");
    }

    #[test]
    fn unknown_ids_fail() {
        assert!(matches!(
            set_status_in_source(SOURCE, "T-9", Status::Done),
            Err(TaskError::NotFound(_))
        ));
        assert!(matches!(
            set_status_in_source(SOURCE, "", Status::Done),
            Err(TaskError::NotFound(_))
        ));
    }

    #[test]
    fn positional_ids_address_their_line() {
        let out = set_status_in_source(SOURCE, "_L6", Status::Done).unwrap();
        assert!(out.ends_with("- [x] Call the bank\n"));
    }

    #[test]
    fn first_duplicate_wins() {
        let src = "- [ ] `D` first\n- [ ] `D` second\n";
        let out = set_status_in_source(src, "D", Status::Done).unwrap();
        assert_eq!(out, "- [x] `D` first\n- [ ] `D` second\n");
    }
}
