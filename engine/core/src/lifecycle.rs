//! Character Lifecycle Bookkeeping
//!
//! Every character in a run is in exactly one of three partitions at all
//! times: *pending* (not yet activated), *active* (currently animating), or
//! *settled* (transition complete). The only transitions are pending →
//! active on a schedule trigger and active → settled once the stage reports
//! the character done. Nothing ever re-enters an earlier partition.

use std::collections::VecDeque;

use crate::schedule::Group;
use crate::stage::{CharacterId, Stage};

/// Pending/active/settled partitions plus the stagger countdown.
///
/// The countdown counts ticks *between* releases: with delay D, group k is
/// released exactly at tick `k × (D + 1)`, and a delay of 0 releases one
/// group per tick starting at tick 0.
#[derive(Debug, Clone)]
pub struct LifecycleSet {
    pending: VecDeque<Group>,
    active: Vec<CharacterId>,
    settled: Vec<CharacterId>,
    stagger_delay: u32,
    countdown: u32,
}

impl LifecycleSet {
    /// Create the partitions from the scheduled groups.
    ///
    /// All characters start pending; the first release happens on the first
    /// call to [`LifecycleSet::release_next_group`], not after a delay.
    #[must_use]
    pub fn new(groups: Vec<Group>, stagger_delay: u32) -> Self {
        Self {
            pending: groups.into(),
            active: Vec::new(),
            settled: Vec::new(),
            stagger_delay,
            countdown: 0,
        }
    }

    /// Release the next pending group if the countdown has reached zero.
    ///
    /// On release the group's characters move from pending to active, the
    /// countdown resets to the configured delay, and the newly activated
    /// characters are returned so the caller can make them visible. While
    /// the countdown is still running it is decremented instead and `None`
    /// is returned.
    pub fn release_next_group(&mut self) -> Option<&[CharacterId]> {
        if self.countdown > 0 {
            self.countdown -= 1;
            return None;
        }
        let group = self.pending.pop_front()?;
        self.countdown = self.stagger_delay;
        tracing::debug!(
            released = group.len(),
            pending_groups = self.pending.len(),
            "released next group"
        );
        let start = self.active.len();
        self.active.extend(group.members);
        Some(&self.active[start..])
    }

    /// Move every active character the stage reports dead into settled.
    ///
    /// Idempotent: a second scan with no intervening advance finds nothing
    /// new to move. Relative order is preserved in both partitions.
    pub fn reap_finished<S: Stage + ?Sized>(&mut self, stage: &S) {
        let before = self.settled.len();
        let mut still_active = Vec::with_capacity(self.active.len());
        for id in self.active.drain(..) {
            if stage.is_alive(id) {
                still_active.push(id);
            } else {
                self.settled.push(id);
            }
        }
        self.active = still_active;
        let reaped = self.settled.len() - before;
        if reaped > 0 {
            tracing::trace!(reaped, active = self.active.len(), "settled characters");
        }
    }

    /// True once nothing is pending and nothing is active
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.pending.is_empty() && self.active.is_empty()
    }

    /// Number of groups still waiting for release
    #[must_use]
    pub fn pending_groups(&self) -> usize {
        self.pending.len()
    }

    /// Currently animating characters, in activation order
    #[must_use]
    pub fn active(&self) -> &[CharacterId] {
        &self.active
    }

    /// Characters whose transition has completed, in settling order
    #[must_use]
    pub fn settled(&self) -> &[CharacterId] {
        &self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coord;
    use crate::stage::test_support::ScriptedStage;
    use pretty_assertions::assert_eq;

    fn two_groups() -> Vec<Group> {
        vec![
            Group::new(vec![CharacterId(0), CharacterId(1)]),
            Group::new(vec![CharacterId(2)]),
        ]
    }

    #[test]
    fn test_zero_delay_releases_one_group_per_call() {
        let mut set = LifecycleSet::new(two_groups(), 0);
        assert_eq!(set.release_next_group().unwrap().len(), 2);
        assert_eq!(set.release_next_group().unwrap().len(), 1);
        assert!(set.release_next_group().is_none());
        assert_eq!(set.active().len(), 3);
    }

    #[test]
    fn test_countdown_spaces_out_releases() {
        let mut set = LifecycleSet::new(two_groups(), 2);
        assert!(set.release_next_group().is_some()); // tick 0
        assert!(set.release_next_group().is_none()); // tick 1
        assert!(set.release_next_group().is_none()); // tick 2
        assert!(set.release_next_group().is_some()); // tick 3 = 1 × (D+1)
    }

    #[test]
    fn test_reap_moves_dead_characters_once() {
        let mut stage = ScriptedStage::from_origins(vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
        ]);
        let mut set = LifecycleSet::new(two_groups(), 0);
        while set.release_next_group().is_some() {}

        stage.kill(CharacterId(1));
        set.reap_finished(&stage);
        assert_eq!(set.active(), &[CharacterId(0), CharacterId(2)]);
        assert_eq!(set.settled(), &[CharacterId(1)]);

        // Idempotent: nothing changed, nothing moves.
        set.reap_finished(&stage);
        assert_eq!(set.settled(), &[CharacterId(1)]);
        assert!(!set.is_done());
    }

    #[test]
    fn test_is_done_requires_empty_pending_and_active() {
        let mut stage = ScriptedStage::from_origins(vec![Coord::new(0, 0)]);
        let mut set = LifecycleSet::new(vec![Group::new(vec![CharacterId(0)])], 0);
        assert!(!set.is_done());
        set.release_next_group();
        assert!(!set.is_done());
        stage.kill(CharacterId(0));
        set.reap_finished(&stage);
        assert!(set.is_done());
    }

    #[test]
    fn test_empty_schedule_is_done_immediately() {
        let set = LifecycleSet::new(Vec::new(), 5);
        assert!(set.is_done());
    }
}
