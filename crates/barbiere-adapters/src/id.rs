//! Id and cancellation-code generation.

use std::sync::atomic::{AtomicU64, Ordering};

use barbiere_core::domain::IdGenerator;
use rand::Rng;
use uuid::Uuid;

/// Characters used for customer-facing cancellation codes. No lowercase
/// and no ambiguity-prone symbols — the code gets read over the phone.
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 6;

/// Production id source: UUID v4 for entity ids, a dedicated random
/// source for cancellation codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn generate_code(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
            .collect()
    }
}

/// Deterministic ids for tests and reproducible fixtures.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique() {
        let ids = UuidGenerator::new();
        assert_ne!(ids.generate(), ids.generate());
    }

    #[test]
    fn codes_have_expected_shape() {
        let ids = UuidGenerator::new();
        let code = ids.generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn sequential_ids_are_stable() {
        let ids = SequentialIdGenerator::new("bk");
        assert_eq!(ids.generate(), "bk-1");
        assert_eq!(ids.generate(), "bk-2");
    }

    #[test]
    fn sequential_generator_derives_codes_from_ids() {
        // Exercises the default provided method on the trait.
        let ids = SequentialIdGenerator::new("booking");
        assert_eq!(ids.generate_code(), "BOOKIN");
    }
}
