use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Trait for checking if a frame should be abandoned
pub trait CancellationChecker: Clone + Send + Sync {
    /// Returns true if computation should be cancelled
    fn is_cancelled(&self) -> bool;
}

/// Never cancels - for one-shot renders such as exports
#[derive(Clone, Copy, Default)]
pub struct NeverCancel;

impl CancellationChecker for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Checks an atomic boolean flag for cancellation
#[derive(Clone)]
pub struct AtomicBoolChecker {
    flag: Arc<AtomicBool>,
}

impl AtomicBoolChecker {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl CancellationChecker for AtomicBoolChecker {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Monotonic render id counter. Starting a new render supersedes every
/// render started before it.
#[derive(Clone, Default)]
pub struct RenderGeneration {
    current: Arc<AtomicU64>,
}

impl RenderGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next render id and a checker bound to it.
    pub fn begin(&self) -> GenerationChecker {
        let render_id = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        GenerationChecker {
            render_id,
            current: Arc::clone(&self.current),
        }
    }

    /// Supersede any in-flight render without starting a new one.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }
}

/// Cancelled once a newer render id has been issued.
#[derive(Clone)]
pub struct GenerationChecker {
    render_id: u64,
    current: Arc<AtomicU64>,
}

impl GenerationChecker {
    pub fn render_id(&self) -> u64 {
        self.render_id
    }
}

impl CancellationChecker for GenerationChecker {
    fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.render_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_cancel_always_returns_false() {
        let checker = NeverCancel;
        assert!(!checker.is_cancelled());
        assert!(!checker.is_cancelled());
    }

    #[test]
    fn test_atomic_bool_checker_reads_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let checker = AtomicBoolChecker::new(Arc::clone(&flag));

        assert!(!checker.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(checker.is_cancelled());

        flag.store(false, Ordering::Relaxed);
        assert!(!checker.is_cancelled());
    }

    #[test]
    fn test_newer_render_supersedes_older() {
        let generation = RenderGeneration::new();
        let first = generation.begin();
        assert!(!first.is_cancelled());

        let second = generation.begin();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(second.render_id() > first.render_id());
    }

    #[test]
    fn test_invalidate_cancels_without_new_render() {
        let generation = RenderGeneration::new();
        let checker = generation.begin();
        generation.invalidate();
        assert!(checker.is_cancelled());
    }

    #[test]
    fn test_generation_checker_cloneable() {
        let generation = RenderGeneration::new();
        let checker1 = generation.begin();
        let checker2 = checker1.clone();

        generation.begin();
        assert!(checker1.is_cancelled());
        assert!(checker2.is_cancelled());
    }
}
