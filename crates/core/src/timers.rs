//! Fire-once timers on a virtual clock.
//!
//! Nothing here sleeps. The controller advances its clock from `tick` and
//! pops whatever is due. There are two kinds of timers:
//!
//! - one **sequence** slot: the next playback step, or the lead-in to the
//!   next round. Scheduling replaces whatever was pending, so playback can
//!   only ever be chained one step at a time.
//! - one **lights-off** slot per target. Relighting a target pushes its
//!   lights-off deadline back instead of stacking a second timer.

use arrayvec::ArrayVec;

use crate::types::Choice;

/// What a sequence timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceStep {
    /// Highlight `current_game[turn_number]`.
    Playback,
    /// Append a turn and start playback.
    NextRound,
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    LightsOff {
        choice: Choice,
        due_ms: u64,
    },
    Sequence {
        step: SequenceStep,
        generation: u32,
        due_ms: u64,
    },
}

impl Fired {
    /// Deadline the timer was scheduled for, not the time it was popped.
    pub fn due_ms(&self) -> u64 {
        match *self {
            Fired::LightsOff { due_ms, .. } | Fired::Sequence { due_ms, .. } => due_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SequenceTimer {
    due_ms: u64,
    generation: u32,
    step: SequenceStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LightTimer {
    due_ms: u64,
    choice: Choice,
}

#[derive(Debug, Clone, Default)]
pub struct TimerWheel {
    sequence: Option<SequenceTimer>,
    lights: ArrayVec<LightTimer, 4>,
}

impl TimerWheel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_sequence(&mut self, due_ms: u64, generation: u32, step: SequenceStep) {
        self.sequence = Some(SequenceTimer {
            due_ms,
            generation,
            step,
        });
    }

    pub fn cancel_sequence(&mut self) {
        self.sequence = None;
    }

    pub fn schedule_lights_off(&mut self, due_ms: u64, choice: Choice) {
        if let Some(t) = self.lights.iter_mut().find(|t| t.choice == choice) {
            t.due_ms = due_ms;
            return;
        }
        // One slot per target, so this never overflows.
        self.lights.push(LightTimer { due_ms, choice });
    }

    /// Pending sequence step, if any.
    pub fn sequence_pending(&self) -> Option<SequenceStep> {
        self.sequence.map(|t| t.step)
    }

    /// Earliest deadline across all timers.
    pub fn next_due(&self) -> Option<u64> {
        let lights = self.lights.iter().map(|t| t.due_ms).min();
        match (lights, self.sequence.map(|t| t.due_ms)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    ///
    /// On equal deadlines lights go off before the sequence step, so a
    /// target flashed twice in a row visibly blinks.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Fired> {
        let light_idx = self
            .lights
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| t.due_ms)
            .map(|(i, _)| i);

        let seq_due = self.sequence.filter(|t| t.due_ms <= now_ms);

        match (light_idx, seq_due) {
            (Some(i), Some(s)) if s.due_ms < self.lights[i].due_ms => self.take_sequence(),
            (Some(i), _) => {
                let t = self.lights.remove(i);
                Some(Fired::LightsOff {
                    choice: t.choice,
                    due_ms: t.due_ms,
                })
            }
            (None, Some(_)) => self.take_sequence(),
            (None, None) => None,
        }
    }

    fn take_sequence(&mut self) -> Option<Fired> {
        self.sequence.take().map(|t| Fired::Sequence {
            step: t.step,
            generation: t.generation,
            due_ms: t.due_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_deadline() {
        let mut w = TimerWheel::new();
        w.schedule_sequence(800, 1, SequenceStep::Playback);
        assert_eq!(w.pop_due(799), None);
        assert_eq!(w.sequence_pending(), Some(SequenceStep::Playback));
    }

    #[test]
    fn sequence_slot_is_replaced_not_stacked() {
        let mut w = TimerWheel::new();
        w.schedule_sequence(800, 1, SequenceStep::Playback);
        w.schedule_sequence(1000, 2, SequenceStep::NextRound);

        assert_eq!(
            w.pop_due(5000),
            Some(Fired::Sequence {
                step: SequenceStep::NextRound,
                generation: 2,
                due_ms: 1000
            })
        );
        assert_eq!(w.pop_due(5000), None);
    }

    #[test]
    fn relighting_extends_instead_of_stacking() {
        let mut w = TimerWheel::new();
        w.schedule_lights_off(400, Choice::Button1);
        w.schedule_lights_off(600, Choice::Button1);
        assert_eq!(w.next_due(), Some(600));
        assert_eq!(w.pop_due(500), None);
        assert_eq!(
            w.pop_due(600),
            Some(Fired::LightsOff {
                choice: Choice::Button1,
                due_ms: 600
            })
        );
    }

    #[test]
    fn pops_in_deadline_order() {
        let mut w = TimerWheel::new();
        w.schedule_lights_off(1200, Choice::Button2);
        w.schedule_sequence(1000, 1, SequenceStep::Playback);
        w.schedule_lights_off(900, Choice::Button3);

        let mut order = Vec::new();
        while let Some(f) = w.pop_due(2000) {
            order.push(f.due_ms());
        }
        assert_eq!(order, vec![900, 1000, 1200]);
    }

    #[test]
    fn lights_off_wins_ties() {
        let mut w = TimerWheel::new();
        w.schedule_sequence(800, 1, SequenceStep::Playback);
        w.schedule_lights_off(800, Choice::Button4);
        assert!(matches!(w.pop_due(800), Some(Fired::LightsOff { .. })));
        assert!(matches!(w.pop_due(800), Some(Fired::Sequence { .. })));
    }

    #[test]
    fn next_due_covers_both_kinds() {
        let mut w = TimerWheel::new();
        assert_eq!(w.next_due(), None);
        w.schedule_sequence(800, 1, SequenceStep::Playback);
        assert_eq!(w.next_due(), Some(800));
        w.schedule_lights_off(300, Choice::Button1);
        assert_eq!(w.next_due(), Some(300));
        w.cancel_sequence();
        assert_eq!(w.next_due(), Some(300));
    }
}
