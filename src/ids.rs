use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of surrogate identifiers. Injected into the normalizer so tests
/// can supply a deterministic sequence.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Production generator: 128-bit random identifiers.
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests: 1, 2, 3, ... encoded as UUIDs.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(n))
    }
}
