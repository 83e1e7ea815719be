use std::collections::HashMap;
use std::sync::Mutex;

/// Memoised fitness values keyed by `Chromosome::key`
pub struct FitnessCache {
    data: Mutex<HashMap<u64, u64>>,
    capacity: usize,
}

impl FitnessCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Mutex::new(HashMap::with_capacity(capacity.min(1 << 16))),
            capacity,
        }
    }

    pub fn get(&self, key: u64) -> Option<u64> {
        let data = self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        data.get(&key).copied()
    }

    pub fn set(&self, key: u64, fitness: u64) {
        let mut data = self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if data.len() >= self.capacity {
            // A simple eviction strategy: clear the cache when full.
            data.clear();
        }
        data.insert(key, fitness);
    }

    /// Look up `key`, computing and storing the value on a miss
    pub fn get_or_insert_with<F: FnOnce() -> u64>(&self, key: u64, compute: F) -> u64 {
        if let Some(fitness) = self.get(key) {
            return fitness;
        }
        let fitness = compute();
        self.set(key, fitness);
        fitness
    }

    pub fn clear(&self) {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_insert_computes_once() {
        let cache = FitnessCache::new(8);
        let mut calls = 0;
        let first = cache.get_or_insert_with(3, || {
            calls += 1;
            17
        });
        let second = cache.get_or_insert_with(3, || {
            calls += 1;
            99
        });
        assert_eq!((first, second), (17, 17));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_clears_when_full() {
        let cache = FitnessCache::new(2);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.set(3, 30);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1), None);
        assert_eq!(cache.get(3), Some(30));
    }
}
