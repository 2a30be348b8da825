use serde::Serialize;

use crate::io::journal_io::{LOG_FILE, NOTES_DIR, TASKS_FILE};
use crate::model::Journal;
use crate::outline::Rejection;

/// Structured result from `day check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// An entry that was dropped on load and never reaches a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    #[serde(rename = "rejected")]
    Rejected {
        file: String,
        line: usize,
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent: Option<String>,
        reason: String,
    },
    /// A note file left out of the journal
    #[serde(rename = "skipped_note")]
    SkippedNote { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// A `[[wikilink]]` to a note that doesn't exist
    #[serde(rename = "missing_note")]
    MissingNote { source: String, target: String },
    /// A task without a backticked id; it is addressed by line number
    #[serde(rename = "missing_id")]
    MissingId { line: usize, text: String },
}

/// Report what loading dropped or could not resolve. Read-only.
pub fn check_journal(journal: &Journal) -> CheckResult {
    let mut result = CheckResult::default();

    for (file, r) in journal
        .rejected_tasks
        .iter()
        .map(|r| (TASKS_FILE, r))
        .chain(journal.rejected_log.iter().map(|r| (LOG_FILE, r)))
    {
        result.errors.push(rejection_error(file, r));
    }
    for skipped in &journal.skipped_notes {
        result.errors.push(CheckError::SkippedNote {
            file: format!("{NOTES_DIR}/{}", skipped.file),
            reason: skipped.reason.clone(),
        });
    }

    for task in journal.tasks.iter().filter(|t| t.id.is_positional()) {
        result.warnings.push(CheckWarning::MissingId {
            line: task.position + 1,
            text: task.text.clone(),
        });
    }

    for note in journal.notes.values() {
        for link in &note.links {
            if !journal.notes.contains_key(&link.target) {
                result.warnings.push(CheckWarning::MissingNote {
                    source: note.slug.clone(),
                    target: link.target.clone(),
                });
            }
        }
    }

    result.valid = result.errors.is_empty();
    result
}

fn rejection_error(file: &str, r: &Rejection) -> CheckError {
    CheckError::Rejected {
        file: file.to_string(),
        line: r.position + 1,
        id: r.id.to_string(),
        parent: r.parent.as_ref().map(|p| p.to_string()),
        reason: r.reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkippedNote;
    use crate::outline::validate;
    use crate::parse::parse_tasks;
    use crate::tui::render::test_helpers::{empty_journal, sample_journal};
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_journal_only_warns_about_missing_note() {
        let result = check_journal(&sample_journal());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.warnings,
            vec![CheckWarning::MissingNote {
                source: "plan".into(),
                target: "budget".into(),
            }]
        );
    }

    #[test]
    fn rejections_are_errors() {
        let mut journal = empty_journal();
        let validated = validate(parse_tasks(
            "- [ ] `T-1` First\n- [ ] `T-1` Again\n- [ ] No id\n",
        ));
        journal.tasks = validated.parents;
        journal.rejected_tasks = validated.rejected;

        let result = check_journal(&journal);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![CheckError::Rejected {
                file: TASKS_FILE.into(),
                line: 2,
                id: "T-1".into(),
                parent: None,
                reason: "duplicate id".into(),
            }]
        );
        assert_eq!(
            result.warnings,
            vec![CheckWarning::MissingId {
                line: 3,
                text: "No id".into(),
            }]
        );
    }

    #[test]
    fn skipped_notes_are_errors() {
        let mut journal = sample_journal();
        journal.skipped_notes.push(SkippedNote {
            file: "bad.md".into(),
            reason: "stream did not contain valid UTF-8".into(),
        });
        let result = check_journal(&journal);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![CheckError::SkippedNote {
                file: "notes/bad.md".into(),
                reason: "stream did not contain valid UTF-8".into(),
            }]
        );
    }

    #[test]
    fn serializes_with_type_tags() {
        let err = CheckError::Rejected {
            file: "log.md".into(),
            line: 4,
            id: "".into(),
            parent: None,
            reason: "empty id".into(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "rejected");
        assert!(json.get("parent").is_none());
    }
}
