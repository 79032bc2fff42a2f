//! Shared fixtures for task engine tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

use crate::task::domain::{PersistedTaskData, Priority, TaskId};

/// Clock that starts at a fixed instant and advances by `step` per read.
pub(super) struct StepClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl StepClock {
    pub(super) fn starting_at(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().expect("clock lock");
        let now = *current;
        *current = now + self.step;
        now
    }
}

/// 09:00 UTC on the given day of January 2024.
pub(super) fn january(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(super) fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

/// Incomplete Medium-priority task created and last updated on `day`.
pub(super) fn persisted(id: &str, title: &str, day: u32) -> PersistedTaskData {
    PersistedTaskData {
        id: task_id(id),
        title: title.to_owned(),
        description: String::new(),
        due_date: None,
        priority: Priority::Medium,
        completed: false,
        created_at: january(day),
        updated_at: january(day),
    }
}
