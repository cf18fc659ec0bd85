// src/shared.rs

use std::sync::{Arc, Mutex, MutexGuard};

use glam::DVec3;

use crate::builder::{FaceView, IncrementalHullBuilder};

/// Builder behind one lock, for owners that append from one thread and
/// render from another.
///
/// `append` and `with_faces` each hold the lock for their whole duration, so a
/// reader never sees a hull that is half way through a rebuild.
#[derive(Clone, Default)]
pub struct SharedHull {
    inner: Arc<Mutex<IncrementalHullBuilder>>,
}

impl SharedHull {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_builder(builder: IncrementalHullBuilder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IncrementalHullBuilder> {
        // The hull is always rebuildable from the point store, so a panic in
        // another holder leaves nothing worth refusing to read.
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("Hull lock was poisoned; continuing with existing points");
            poisoned.into_inner()
        })
    }

    pub fn append(&self, point: DVec3) {
        self.lock().append(point);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.lock().is_degenerate()
    }

    /// Updates the hull if needed and hands its faces to `f` under the lock.
    pub fn with_faces<R>(&self, f: impl FnOnce(FaceView<'_>) -> R) -> R {
        let mut builder = self.lock();
        f(builder.ensure_current())
    }
}
