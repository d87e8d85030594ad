use chrono::NaiveDate;
use shared::{DomainError, DomainResult};
use tokio::sync::Mutex;

/// Serializes generation runs whose horizons overlap. A run that would
/// overlap an in-flight one is rejected outright rather than queued —
/// generation concurrency here is about correctness of the shared horizon,
/// not throughput.
pub struct GenerationLock {
    in_flight: Mutex<Vec<(NaiveDate, NaiveDate)>>,
}

impl GenerationLock {
    pub fn new() -> Self {
        Self { in_flight: Mutex::new(Vec::new()) }
    }

    /// Reserves `[start, end]` for the duration of a run. Returns a guard
    /// that releases the reservation on drop.
    pub async fn acquire(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<GenerationLockGuard<'_>> {
        let mut guard = self.in_flight.lock().await;
        if guard.iter().any(|(s, e)| *s <= end && start <= *e) {
            return Err(DomainError::ConcurrentGeneration);
        }
        guard.push((start, end));
        drop(guard);
        Ok(GenerationLockGuard { lock: self, start, end })
    }
}

impl Default for GenerationLock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GenerationLockGuard<'a> {
    lock: &'a GenerationLock,
    start: NaiveDate,
    end: NaiveDate,
}

impl Drop for GenerationLockGuard<'_> {
    fn drop(&mut self) {
        let lock = self.lock;
        let start = self.start;
        let end = self.end;
        tokio::spawn(async move {
            let mut guard = lock.in_flight.lock().await;
            guard.retain(|range| *range != (start, end));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[tokio::test]
    async fn rejects_overlapping_horizon() {
        let lock = GenerationLock::new();
        let _first = lock.acquire(date(1), date(14)).await.unwrap();
        let second = lock.acquire(date(10), date(20)).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn allows_disjoint_horizons() {
        let lock = GenerationLock::new();
        let _first = lock.acquire(date(1), date(7)).await.unwrap();
        let second = lock.acquire(date(8), date(14)).await;
        assert!(second.is_ok());
    }
}
