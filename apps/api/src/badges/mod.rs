#![allow(dead_code)]

//! Badge engine: usage counters, one-way locked-to-earned transitions, and
//! the observer registry that fans out badge-list updates.

pub mod handlers;

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::debug;

use crate::models::badge::{Badge, BadgeId, UserProgress};

/// Alumni-path explorations required for the alumni-paths badge.
const ALUMNI_PATHS_THRESHOLD: u32 = 3;
/// Skill-gap identifications required for the skill-builder badge.
const SKILL_GAPS_THRESHOLD: u32 = 1;

/// Evaluation order is fixed so a single pass earns badges deterministically.
const EVALUATION_ORDER: [BadgeId; 3] = [
    BadgeId::ResumeUpload,
    BadgeId::AlumniPaths,
    BadgeId::SkillBuilder,
];

type ObserverFn = Arc<dyn Fn(&[Badge]) + Send + Sync>;

/// Handle returned by [`BadgeEngine::subscribe`]. Consumed by
/// [`BadgeEngine::unsubscribe`], so a handle can be redeemed at most once.
#[derive(Debug)]
pub struct Subscription(u64);

struct EngineState {
    badges: Vec<Badge>,
    progress: UserProgress,
    observers: Vec<(u64, ObserverFn)>,
    next_observer_id: u64,
}

/// Work to do after the state lock is released: the badge-list snapshot and
/// the observers to hand it to.
type Notification = Option<(Vec<Badge>, Vec<ObserverFn>)>;

pub struct BadgeEngine {
    state: Mutex<EngineState>,
}

impl BadgeEngine {
    /// Builds an engine over the badge list loaded from the definitions
    /// fixture. An empty list (fixture load failure) is tolerated: no
    /// condition will ever transition anything.
    pub fn new(badges: Vec<Badge>) -> Self {
        Self {
            state: Mutex::new(EngineState {
                badges,
                progress: UserProgress::default(),
                observers: Vec::new(),
                next_observer_id: 0,
            }),
        }
    }

    /// Records that a resume was uploaded (idempotent flag set) and runs an
    /// evaluation pass. Returns the badges newly earned by that pass.
    pub fn track_resume_upload(&self) -> Vec<Badge> {
        self.track(|p| p.resume_uploaded = true)
    }

    /// Records one alumni-path exploration and runs an evaluation pass.
    pub fn track_alumni_path_explored(&self) -> Vec<Badge> {
        self.track(|p| p.alumni_paths_explored += 1)
    }

    /// Records one skill-gap identification and runs an evaluation pass.
    pub fn track_skill_gap_identified(&self) -> Vec<Badge> {
        self.track(|p| p.skill_gaps_identified += 1)
    }

    /// Re-runs the threshold checks without recording any action. Safe to
    /// call repeatedly: with no new threshold crossed the result is empty
    /// and nothing observable changes.
    pub fn evaluate(&self) -> Vec<Badge> {
        let (newly, notification) = self.locked().evaluate();
        self.notify(notification);
        newly
    }

    /// Snapshot copy of the progress counters, not a live reference.
    pub fn progress(&self) -> UserProgress {
        self.locked().progress
    }

    /// Snapshot of the full badge list.
    pub fn badges(&self) -> Vec<Badge> {
        self.locked().badges.clone()
    }

    pub fn earned_badges(&self) -> Vec<Badge> {
        self.locked()
            .badges
            .iter()
            .filter(|b| b.earned)
            .cloned()
            .collect()
    }

    pub fn unearned_badges(&self) -> Vec<Badge> {
        self.locked()
            .badges
            .iter()
            .filter(|b| !b.earned)
            .cloned()
            .collect()
    }

    /// Registers an observer. After any transition it receives the full
    /// current badge list, not just the delta.
    pub fn subscribe(&self, observer: impl Fn(&[Badge]) + Send + Sync + 'static) -> Subscription {
        let mut state = self.locked();
        let id = state.next_observer_id;
        state.next_observer_id += 1;
        state.observers.push((id, Arc::new(observer)));
        Subscription(id)
    }

    /// Removes one observer. Other subscriptions are unaffected.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.locked()
            .observers
            .retain(|(id, _)| *id != subscription.0);
    }

    fn track(&self, mutate: impl FnOnce(&mut UserProgress)) -> Vec<Badge> {
        let (newly, notification) = {
            let mut state = self.locked();
            mutate(&mut state.progress);
            state.evaluate()
        };
        self.notify(notification);
        newly
    }

    fn locked(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().expect("badge engine mutex poisoned")
    }

    /// Observers run with the lock released so a callback may call back
    /// into the engine.
    fn notify(&self, notification: Notification) {
        if let Some((badges, observers)) = notification {
            for observer in observers {
                observer(&badges);
            }
        }
    }
}

impl EngineState {
    /// One re-evaluation pass: flips every locked badge whose condition now
    /// holds and stamps it with the current time. Earned badges are never
    /// re-checked, so a condition that later becomes false cannot revoke
    /// them, and a pass with no new threshold crossed is a no-op.
    fn evaluate(&mut self) -> (Vec<Badge>, Notification) {
        let mut newly = Vec::new();

        for id in EVALUATION_ORDER {
            if !condition_met(id, &self.progress) {
                continue;
            }
            if let Some(badge) = self.badges.iter_mut().find(|b| b.id == id && !b.earned) {
                badge.earned = true;
                badge.earned_at = Some(Utc::now());
                debug!(badge = %badge.name, "badge earned");
                newly.push(badge.clone());
            }
        }

        let notification = if newly.is_empty() {
            None
        } else {
            Some((
                self.badges.clone(),
                self.observers.iter().map(|(_, f)| Arc::clone(f)).collect(),
            ))
        };

        (newly, notification)
    }
}

fn condition_met(id: BadgeId, progress: &UserProgress) -> bool {
    match id {
        BadgeId::ResumeUpload => progress.resume_uploaded,
        BadgeId::AlumniPaths => progress.alumni_paths_explored >= ALUMNI_PATHS_THRESHOLD,
        BadgeId::SkillBuilder => progress.skill_gaps_identified >= SKILL_GAPS_THRESHOLD,
    }
}
