use std::sync::Arc;
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

/// Coordinates access to the records file shared by readers and the
/// resolver script.
///
/// Script runs take the write side so they never overlap each other and
/// never overlap a read. When disabled every acquisition returns `None`
/// immediately and callers proceed unguarded.
#[derive(Clone, Default)]
pub struct RecordsAccessGuard {
    lock: Option<Arc<RwLock<()>>>,
}

impl RecordsAccessGuard {
    pub fn new(serialize_access: bool) -> Self {
        if serialize_access {
            Self::enabled()
        } else {
            Self::disabled()
        }
    }

    pub fn enabled() -> Self {
        Self {
            lock: Some(Arc::new(RwLock::new(()))),
        }
    }

    pub fn disabled() -> Self {
        Self { lock: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.lock.is_some()
    }

    pub async fn read(&self) -> Option<OwnedRwLockReadGuard<()>> {
        match &self.lock {
            Some(lock) => Some(lock.clone().read_owned().await),
            None => None,
        }
    }

    pub async fn write(&self) -> Option<OwnedRwLockWriteGuard<()>> {
        match &self.lock {
            Some(lock) => Some(lock.clone().write_owned().await),
            None => None,
        }
    }
}
