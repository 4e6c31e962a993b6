use serde::{Deserialize, Serialize};

use crate::engine::Quality;

/// Where the panel stands in the two-phase refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshState {
    /// The raster matches the scene; paint cycles just re-blit it.
    Clean,
    /// Interaction arrived; the next pass is a cheap preview.
    DirtyFast,
    /// A preview is on screen; one anti-aliased pass is owed.
    DirtySlow,
}

/// Handle for an in-flight render pass, returned by
/// [`RenderScheduler::begin_pass`] and redeemed with
/// [`RenderScheduler::complete_pass`].
#[derive(Debug, Clone, Copy)]
pub struct PassTicket {
    quality: Quality,
    generation: u64,
}

impl PassTicket {
    pub fn quality(&self) -> Quality {
        self.quality
    }
}

/// Outcome of completing a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The result is current. `follow_up` asks the host to schedule one
    /// more paint cycle (the anti-aliased pass after a preview).
    Committed { follow_up: bool },
    /// Interaction arrived while the pass was in flight; the result is
    /// stale and must not be displayed.
    Discarded,
}

/// Decides when to re-render and at which quality.
///
/// Interaction always takes the cheap path, and a full-quality pass
/// follows once the event stream quiesces: one drag event while otherwise
/// idle yields exactly one preview pass, then exactly one anti-aliased
/// pass, then nothing until the next interaction.
///
/// A fresh scheduler starts at [`RefreshState::DirtySlow`] so the very
/// first paint produces a single full-quality frame.
#[derive(Debug, Clone)]
pub struct RenderScheduler {
    state: RefreshState,
    generation: u64,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self {
            state: RefreshState::DirtySlow,
            generation: 0,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// An interactive event arrived (drag, wheel, key, resize).
    ///
    /// Also bumps the pass generation, so any pass already in flight is
    /// discarded on completion instead of displaying a stale frame.
    pub fn mark_interaction(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.state != RefreshState::DirtyFast {
            log::debug!("refresh state {:?} -> DirtyFast", self.state);
        }
        self.state = RefreshState::DirtyFast;
    }

    /// A full-quality repaint was requested without any interaction.
    pub fn mark_refresh(&mut self) {
        if self.state == RefreshState::Clean {
            log::debug!("refresh state Clean -> DirtySlow");
            self.state = RefreshState::DirtySlow;
        }
    }

    /// Start the pass owed at this paint cycle, if any.
    pub fn begin_pass(&mut self) -> Option<PassTicket> {
        let quality = match self.state {
            RefreshState::Clean => return None,
            RefreshState::DirtyFast => Quality::Preview,
            RefreshState::DirtySlow => Quality::AntiAliased,
        };
        Some(PassTicket {
            quality,
            generation: self.generation,
        })
    }

    /// Commit or discard a finished pass.
    pub fn complete_pass(&mut self, ticket: PassTicket) -> PassOutcome {
        if ticket.generation != self.generation {
            log::debug!("discarding stale {:?} pass", ticket.quality);
            self.state = RefreshState::DirtyFast;
            return PassOutcome::Discarded;
        }
        match ticket.quality {
            Quality::Preview => {
                self.state = RefreshState::DirtySlow;
                PassOutcome::Committed { follow_up: true }
            }
            Quality::AntiAliased => {
                self.state = RefreshState::Clean;
                PassOutcome::Committed { follow_up: false }
            }
        }
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_pass(scheduler: &mut RenderScheduler) -> Option<(Quality, PassOutcome)> {
        let ticket = scheduler.begin_pass()?;
        let quality = ticket.quality();
        Some((quality, scheduler.complete_pass(ticket)))
    }

    #[test]
    fn test_startup_is_single_antialiased_pass() {
        let mut scheduler = RenderScheduler::new();
        let (quality, outcome) = run_pass(&mut scheduler).unwrap();
        assert_eq!(quality, Quality::AntiAliased);
        assert_eq!(outcome, PassOutcome::Committed { follow_up: false });
        assert!(scheduler.begin_pass().is_none());
    }

    #[test]
    fn test_interaction_yields_fast_then_slow_then_idle() {
        let mut scheduler = RenderScheduler::new();
        run_pass(&mut scheduler);

        scheduler.mark_interaction();

        let (quality, outcome) = run_pass(&mut scheduler).unwrap();
        assert_eq!(quality, Quality::Preview);
        assert_eq!(outcome, PassOutcome::Committed { follow_up: true });

        let (quality, outcome) = run_pass(&mut scheduler).unwrap();
        assert_eq!(quality, Quality::AntiAliased);
        assert_eq!(outcome, PassOutcome::Committed { follow_up: false });

        assert!(scheduler.begin_pass().is_none());
        assert_eq!(scheduler.state(), RefreshState::Clean);
    }

    #[test]
    fn test_interaction_during_slow_pass_discards_it() {
        let mut scheduler = RenderScheduler::new();
        let ticket = scheduler.begin_pass().unwrap();
        assert_eq!(ticket.quality(), Quality::AntiAliased);

        scheduler.mark_interaction();

        assert_eq!(scheduler.complete_pass(ticket), PassOutcome::Discarded);
        assert_eq!(scheduler.state(), RefreshState::DirtyFast);
    }

    #[test]
    fn test_forced_refresh_is_single_slow_pass() {
        let mut scheduler = RenderScheduler::new();
        run_pass(&mut scheduler);
        assert_eq!(scheduler.state(), RefreshState::Clean);

        scheduler.mark_refresh();

        let (quality, outcome) = run_pass(&mut scheduler).unwrap();
        assert_eq!(quality, Quality::AntiAliased);
        assert_eq!(outcome, PassOutcome::Committed { follow_up: false });
    }

    #[test]
    fn test_forced_refresh_does_not_downgrade_pending_fast_pass() {
        let mut scheduler = RenderScheduler::new();
        scheduler.mark_interaction();
        scheduler.mark_refresh();
        assert_eq!(scheduler.state(), RefreshState::DirtyFast);
    }
}
