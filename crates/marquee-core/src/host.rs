//! Host lifecycle and window collaborators

/// Lifecycle transition reported by the host application
///
/// Only `Start` and `Stop` drive playback; the remaining events exist so
/// hosts can forward their full lifecycle stream unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Create,
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
}

/// Best-effort handle on the host window's system chrome
///
/// Chrome control is a cosmetic enhancement: when no window can be
/// resolved at bind time, playback proceeds without it.
pub trait HostWindow {
    /// Hide status and navigation bars
    fn hide_system_chrome(&mut self);

    /// Restore status and navigation bars
    fn show_system_chrome(&mut self);
}
