//! Sample data - デモ用のタスク一式

use chrono::{TimeZone, Utc};

use crate::domain::TodoTask;
use crate::ports::IdGenerator;

const SAMPLES: &[(&str, &str, (i32, u32, u32, u32, u32), bool)] = &[
    (
        "Do groceries",
        "Go to the supermarket and buy whatever Marge requests",
        (2023, 11, 3, 10, 10),
        false,
    ),
    (
        "Do laundry",
        "Go to the laundromat and wash whatever Marge requests",
        (2023, 12, 7, 11, 30),
        true,
    ),
    ("Pay rent", "Go pay the rent", (2023, 12, 10, 14, 30), false),
    (
        "Take Bart to Moe's",
        "Go for a Duff with Bart",
        (2023, 12, 13, 16, 0),
        false,
    ),
    (
        "Hang out with Barney",
        "Share a Duff with Barney at Moe's",
        (2023, 12, 16, 15, 45),
        true,
    ),
    (
        "Watch TV",
        "Sit on the couch as always and turn on the TV",
        (2023, 12, 19, 20, 0),
        false,
    ),
];

/// hsimpson のタスク 6 件。id は `ids` で発行する
pub fn sample_tasks(ids: &dyn IdGenerator) -> Vec<TodoTask> {
    SAMPLES
        .iter()
        .filter_map(|&(title, description, (y, mo, d, h, mi), done)| {
            let date = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single()?;
            let task = TodoTask::new(ids.generate_task_id(), "hsimpson", title, description, date);
            Some(if done { task.completed() } else { task })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{SystemClock, UlidGenerator};
    use std::collections::HashSet;

    #[test]
    fn samples_have_unique_ids() {
        let tasks = sample_tasks(&UlidGenerator::new(SystemClock));
        assert_eq!(tasks.len(), 6);
        let ids: HashSet<_> = tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(tasks.iter().filter(|t| t.is_completed).count(), 2);
    }
}
