//! Ports the domain itself depends on.
//!
//! Time and identity are the only two effects the domain layer needs, so
//! they are injected everywhere "the past" or a fresh id matters. Keeping
//! them as trait parameters (never globals) is what makes every rule and
//! state transition deterministic under test.

use chrono::NaiveDateTime;

/// Source of the current shop-local wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Source of opaque unique identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// An opaque unique string (booking ids, blocked-slot ids, ...).
    fn generate(&self) -> String;

    /// Short customer-facing code used for self-service cancellation.
    ///
    /// The default derives six uppercase alphanumerics from [`generate`]
    /// (adequate entropy for uuid-backed generators); adapters may
    /// override with a dedicated random source.
    ///
    /// [`generate`]: IdGenerator::generate
    fn generate_code(&self) -> String {
        self.generate()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(6)
            .collect::<String>()
            .to_ascii_uppercase()
    }
}
