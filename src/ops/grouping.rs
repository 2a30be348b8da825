use chrono::NaiveDate;

use crate::model::ParentItem;
use crate::outline::{Grouping, Section};
use crate::util::dates::due_date;

pub const TODAY: &str = "Today";
pub const THIS_WEEK: &str = "This Week";
pub const LATER: &str = "Later";

/// Groups open tasks by their `due:` date: overdue and today, the rest of
/// the week, and everything else. Done tasks are left out.
#[derive(Debug, Clone, Copy)]
pub struct DueBuckets {
    pub today: NaiveDate,
    /// Days, counting today, that make up "This Week"
    pub week_days: i64,
}

impl DueBuckets {
    pub fn new(today: NaiveDate, week_days: i64) -> Self {
        DueBuckets {
            today,
            week_days: week_days.max(1),
        }
    }

    /// Section index for `item`, or `None` if it is excluded
    pub fn bucket(&self, item: &ParentItem) -> Option<usize> {
        if item.status.is_some_and(|s| s.is_terminal()) {
            return None;
        }
        let Some(due) = due_date(&item.text, self.today) else {
            return Some(2);
        };
        if due <= self.today {
            Some(0)
        } else if (due - self.today).num_days() < self.week_days {
            Some(1)
        } else {
            Some(2)
        }
    }
}

impl Grouping for DueBuckets {
    fn group(&self, parents: &[ParentItem]) -> Vec<Section> {
        let mut buckets: [Vec<ParentItem>; 3] = Default::default();
        for item in parents {
            if let Some(b) = self.bucket(item) {
                buckets[b].push(item.clone());
            }
        }
        let [today, week, later] = buckets;
        vec![
            Section::new(TODAY, today),
            Section::new(THIS_WEEK, week),
            Section::new(LATER, later),
        ]
    }
}
