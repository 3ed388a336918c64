//! Read-only views over a task list
//!
//! Pure functions: nothing here mutates the list or touches persistence.

use crate::models::{Filter, Stats, Task};

/// Tasks visible under `filter`, in list order.
pub fn filter(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Tasks visible under the status named `status`.
///
/// Unrecognized names select every task.
pub fn filter_by_name<'a>(tasks: &'a [Task], status: &str) -> Vec<&'a Task> {
    filter(tasks, Filter::parse(status))
}

/// Total, active and completed counts of `tasks`.
pub fn stats(tasks: &[Task]) -> Stats {
    Stats::from_tasks(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;
    use chrono::Utc;

    fn list() -> Vec<Task> {
        let now = Utc::now();
        vec![
            Task::new(TaskId::new(5), "e", now),
            Task::new(TaskId::new(4), "d", now).with_completed(true),
            Task::new(TaskId::new(3), "c", now),
            Task::new(TaskId::new(2), "b", now).with_completed(true),
            Task::new(TaskId::new(1), "a", now),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id().get()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let tasks = list();
        let all = filter(&tasks, Filter::All);
        assert_eq!(all.len(), tasks.len());
        assert!(all.iter().zip(&tasks).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_active_keeps_order() {
        let tasks = list();
        let active = filter(&tasks, Filter::Active);
        assert!(active.iter().all(|t| !t.is_completed()));
        assert_eq!(ids(&active), vec![5, 3, 1]);
    }

    #[test]
    fn test_filter_completed_keeps_order() {
        let tasks = list();
        let completed = filter(&tasks, Filter::Completed);
        assert!(completed.iter().all(|t| t.is_completed()));
        assert_eq!(ids(&completed), vec![4, 2]);
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let tasks = list();
        let before = tasks.clone();
        let _ = filter(&tasks, Filter::Completed);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_filter_by_name() {
        let tasks = list();
        assert_eq!(ids(&filter_by_name(&tasks, "active")), vec![5, 3, 1]);
        assert_eq!(ids(&filter_by_name(&tasks, "completed")), vec![4, 2]);
        assert_eq!(ids(&filter_by_name(&tasks, "all")), vec![5, 4, 3, 2, 1]);
        assert_eq!(ids(&filter_by_name(&tasks, "bogus")), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter(&[], Filter::Active).is_empty());
    }

    #[test]
    fn test_stats_partition_total() {
        let tasks = list();
        let s = stats(&tasks);
        assert_eq!(s.total, 5);
        assert_eq!(s.active, 3);
        assert_eq!(s.completed, 2);
        assert_eq!(s.active + s.completed, s.total);
    }

    #[test]
    fn test_filter_sizes_match_stats() {
        let tasks = list();
        let s = stats(&tasks);
        assert_eq!(filter(&tasks, Filter::Active).len(), s.active);
        assert_eq!(filter(&tasks, Filter::Completed).len(), s.completed);
        assert_eq!(filter(&tasks, Filter::All).len(), s.total);
    }
}
