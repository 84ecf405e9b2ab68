//! Shared test utilities for the domain crates
//!
//! - `TestDatabase`: migrated PostgreSQL container with automatic cleanup (feature: "postgres")
//! - `TestDataBuilder`: deterministic names and emails per test
//! - `assertions`: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{EmployeeSeed, TestDataBuilder, TestDatabase};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let id = db
//!         .seed_employee(EmployeeSeed::new("Ada", Some("IT"), "Engineer", &builder.email("ada")))
//!         .await;
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::{EmployeeSeed, TestDatabase};

/// Deterministic test data derived from a seed.
///
/// Unique constraints (employee email, project name) mean tests sharing a
/// database must not reuse values; seeding from the test name keeps them
/// distinct and reproducible.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_assign_employee");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-{prefix}-{seed}-{suffix}`, e.g. a project name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).name("project", "apollo");
    /// assert_eq!(name, "test-project-7-apollo");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Unique email for a local part, e.g. `ada.7@example.test`.
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.test", local, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Unwrap an Option with a contextual panic message
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two slices hold the same elements, ignoring order.
    pub fn assert_same_elements<T>(actual: &[T], expected: &[T], context: &str)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        let mut a = actual.to_vec();
        let mut e = expected.to_vec();
        a.sort();
        e.sort();
        assert_eq!(a, e, "{}: element sets differ", context);
    }
}
