// Per-employee mutual exclusion for the read-validate-append sequence.
//
// Purpose
// - At most one transition-accepting operation per employee at a time.
// - Different employees never wait on each other.
//
// Notes
// - Locks are created lazily and kept for the life of the process; the key
//   space is the set of employees, which is small and bounded.

use crate::shared::core::primitives::EmployeeId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Default)]
pub struct EmployeeLocks {
    inner: Arc<Mutex<HashMap<EmployeeId, Arc<Mutex<()>>>>>,
}

impl EmployeeLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other holder exists for `employee_id`. The scope ends
    /// when the returned guard is dropped.
    pub async fn acquire(&self, employee_id: EmployeeId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().await;
            locks.entry(employee_id).or_default().clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod employee_locks_tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;
    use tokio::time::timeout;

    #[rstest]
    #[tokio::test]
    async fn it_should_block_a_second_holder_for_the_same_employee() {
        let locks = EmployeeLocks::new();
        let _held = locks.acquire(7).await;
        let second = timeout(Duration::from_millis(20), locks.acquire(7)).await;
        assert!(second.is_err(), "second acquire should still be waiting");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_block_other_employees() {
        let locks = EmployeeLocks::new();
        let _held = locks.acquire(7).await;
        let other = timeout(Duration::from_millis(20), locks.acquire(8)).await;
        assert!(other.is_ok(), "a different employee must not wait");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_release_the_scope_when_the_guard_drops() {
        let locks = EmployeeLocks::new();
        drop(locks.acquire(7).await);
        let again = timeout(Duration::from_millis(20), locks.acquire(7)).await;
        assert!(again.is_ok());
    }
}
