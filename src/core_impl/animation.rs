use super::*;

use crate::stats::{ANIMATION_SPAN_MS, FRAME_INTERVAL_MS, format_stat_value};

impl Page {
    /// Registers a numeric display element, returning its index. Counters
    /// start at "0" and stay idle until first scrolled into view.
    pub fn add_stat_counter(&mut self, label: &str, target: f64) -> usize {
        self.stats.push(StatCounter::new(label, target));
        self.stats.len() - 1
    }

    /// First sight of a counter starts its 0-to-target sweep; later
    /// sightings are ignored, as the observer unsubscribes after firing.
    pub fn scroll_stat_into_view(&mut self, index: usize) -> Result<()> {
        let count = self.stats.len();
        let Some(stat) = self.stats.get_mut(index) else {
            return Err(Error::StatNotFound { index, count });
        };
        if stat.animation != StatAnimation::Idle {
            self.trace_event_line(format!(
                "[event] stat_in_view index={index} already_triggered"
            ));
            return Ok(());
        }

        let started_at = self.scheduler.now_ms;
        stat.animation = StatAnimation::Running { started_at };
        let target = stat.target;
        self.trace_event_line(format!(
            "[event] stat_in_view index={index} target={target} started_at={started_at}"
        ));
        self.schedule_task(FRAME_INTERVAL_MS, TaskKind::StatFrame { index });
        Ok(())
    }

    /// One animation frame. The frame's due time is its timestamp, so the
    /// interpolation is exact no matter how the clock was advanced; the
    /// chain re-schedules itself until progress reaches 1 and cannot be
    /// aborted in flight.
    pub(crate) fn step_stat_frame(&mut self, index: usize, frame_at: i64) {
        let (target, started_at) = match self.stats.get(index) {
            Some(stat) => match stat.animation {
                StatAnimation::Running { started_at } => (stat.target, started_at),
                _ => return,
            },
            None => return,
        };

        let elapsed = frame_at.saturating_sub(started_at);
        let progress = (elapsed as f64 / ANIMATION_SPAN_MS as f64).min(1.0);

        if progress < 1.0 {
            self.stats[index].display = format_stat_value(target, target * progress, false);
            self.schedule_task_at(
                frame_at.saturating_add(FRAME_INTERVAL_MS),
                TaskKind::StatFrame { index },
            );
        } else {
            let stat = &mut self.stats[index];
            stat.display = format_stat_value(target, target, true);
            stat.animation = StatAnimation::Finished;
        }
    }
}
