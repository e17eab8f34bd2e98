//! Mount guard for async loaders.
//!
//! A loader captures a [`MountGuard`] before its first `await`. The guard is
//! released from `on_cleanup`, after which late responses are dropped instead
//! of written into disposed signals.

#[cfg(test)]
#[path = "mount_guard_test.rs"]
mod mount_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Guard tied to the current reactive owner.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_drop = guard.clone();
        leptos::prelude::on_cleanup(move || on_drop.release());
        guard
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while mounted. Returns whether it ran.
    pub fn apply_if_mounted<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_mounted() {
            return false;
        }
        apply(value);
        true
    }
}

/// Spawn `task` and hand its output to `apply` if the component is still mounted.
///
/// Server renders never issue backend calls, so off the browser the task is
/// dropped unpolled.
#[cfg(feature = "hydrate")]
pub fn spawn_guarded<T, Fut>(guard: &MountGuard, task: Fut, apply: impl FnOnce(T) + 'static)
where
    T: 'static,
    Fut: std::future::Future<Output = T> + 'static,
{
    let guard = guard.clone();
    leptos::task::spawn_local(async move {
        let value = task.await;
        guard.apply_if_mounted(value, apply);
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn spawn_guarded<T, Fut>(guard: &MountGuard, task: Fut, apply: impl FnOnce(T) + 'static)
where
    T: 'static,
    Fut: std::future::Future<Output = T> + 'static,
{
    let _ = (guard, task, apply);
}
