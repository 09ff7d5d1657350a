use std::sync::atomic::{AtomicBool, Ordering};

/// Single-flight gate for capture operations.
///
/// At most one capture may be in flight at a time; a second request is
/// rejected, not queued. Acquisition is an atomic test-and-set, so the gate
/// holds even under reentrant event dispatch or a capture running on a
/// worker thread.
#[derive(Debug, Default)]
pub struct CaptureGuard {
    busy: AtomicBool,
}

impl CaptureGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns `None` without side effects if a capture is
    /// already in flight. The returned permit releases the gate when
    /// dropped, on every exit path.
    pub fn try_acquire(&self) -> Option<CapturePermit<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(CapturePermit { guard: self })
        } else {
            None
        }
    }

    /// Whether a capture currently holds the gate. Backs the UI's disabled
    /// shutter state.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn release(&self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Held for the duration of one capture; releases the gate on drop.
#[derive(Debug)]
pub struct CapturePermit<'a> {
    guard: &'a CaptureGuard,
}

impl Drop for CapturePermit<'_> {
    fn drop(&mut self) {
        self.guard.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn second_acquire_is_denied_until_release() {
        let guard = CaptureGuard::new();

        let permit = guard.try_acquire().expect("first acquire");
        assert!(guard.is_busy());
        assert!(guard.try_acquire().is_none());
        assert!(guard.try_acquire().is_none());

        drop(permit);
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn permit_releases_on_early_exit() {
        let guard = CaptureGuard::new();

        fn fails_midway(guard: &CaptureGuard) -> Result<(), ()> {
            let _permit = guard.try_acquire().ok_or(())?;
            Err(())
        }

        assert!(fails_midway(&guard).is_err());
        assert!(!guard.is_busy());
    }

    #[test]
    fn contended_acquire_grants_exactly_once() {
        let guard = Arc::new(CaptureGuard::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let guard = Arc::clone(&guard);
                thread::spawn(move || {
                    // Leak the permit so later threads stay denied.
                    match guard.try_acquire() {
                        Some(permit) => {
                            std::mem::forget(permit);
                            1
                        }
                        None => 0,
                    }
                })
            })
            .collect();

        let granted: i32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(granted, 1);
        assert!(guard.is_busy());
    }
}
