use super::*;

/// What a scheduled task does when it fires. The original page schedules
/// three kinds of work: hiding the initial loader, dismissing a toast, and
/// advancing a stat-counter animation by one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TaskKind {
    HideLoader,
    DismissToast(u64),
    StatFrame { index: usize },
}

impl TaskKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::HideLoader => "hide_loader",
            Self::DismissToast(_) => "dismiss_toast",
            Self::StatFrame { .. } => "stat_frame",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduledTask {
    pub(crate) id: i64,
    pub(crate) due_at: i64,
    pub(crate) order: i64,
    pub(crate) kind: TaskKind,
}

/// Inspection view of a queued task, sorted by `(due_at, order)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: i64,
    pub due_at: i64,
    pub order: i64,
}

#[derive(Debug)]
pub(crate) struct SchedulerState {
    pub(crate) task_queue: Vec<ScheduledTask>,
    pub(crate) now_ms: i64,
    pub(crate) timer_step_limit: usize,
    next_timer_id: i64,
    next_task_order: i64,
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self {
            task_queue: Vec::new(),
            now_ms: 0,
            timer_step_limit: 10_000,
            next_timer_id: 1,
            next_task_order: 0,
        }
    }
}

impl SchedulerState {
    pub(crate) fn allocate_timer_id(&mut self) -> i64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        id
    }

    pub(crate) fn allocate_task_order(&mut self) -> i64 {
        let order = self.next_task_order;
        self.next_task_order += 1;
        order
    }
}
