use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// A task whose deadline was reached during `advance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    pub id: TaskId,
    pub at: u64,
    pub payload: T,
}

/// Virtual-clock task queue.
///
/// Time only moves through `advance`, so the host decides how clock units map
/// to real time. Tasks sharing a deadline fire in scheduling order.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: u64,
    next_id: u64,
    queue: BTreeMap<(u64, TaskId), T>,
    deadlines: HashMap<TaskId, u64>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule `payload` to fire `delay` units from now.
    pub fn schedule(&mut self, delay: u64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending task. Returns its payload, or `None` if it already
    /// fired or was cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        let deadline = self.deadlines.remove(&id)?;
        self.queue.remove(&(deadline, id))
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Move the clock forward and collect every task that came due, in
    /// deadline order.
    pub fn advance(&mut self, units: u64) -> Vec<Fired<T>> {
        let target = self.now.saturating_add(units);
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.first_entry() {
            let (deadline, id) = *entry.key();
            if deadline > target {
                break;
            }
            let payload = entry.remove();
            self.deadlines.remove(&id);
            self.now = deadline;
            fired.push(Fired { id, at: deadline, payload });
        }

        self.now = target;
        fired
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
