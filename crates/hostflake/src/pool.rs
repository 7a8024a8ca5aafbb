use crate::mutex::Mutex;
#[cfg(not(feature = "parking-lot"))]
use crate::mutex::PoisonError;
use core::ops::{Deref, DerefMut};

/// An unbounded free list of reusable values.
///
/// Callers borrow a value with [`Pool::acquire_with`] and get it back as a
/// [`PoolGuard`]; dropping the guard returns the value to the pool. Each
/// borrowed value is owned by exactly one caller at a time, so stateful
/// values (like seeded RNGs) can be reused across calls without any caller
/// observing another's state.
///
/// The pool grows on demand and has no ceiling: if the free list is empty,
/// the supplied factory creates a fresh value. Acquisition therefore never
/// blocks beyond a push/pop critical section and never fails.
pub struct Pool<T> {
    free: Mutex<Vec<T>>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    /// Creates an empty pool.
    pub const fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
        }
    }

    /// Borrows a value from the pool, creating one with `create` if the free
    /// list is empty.
    ///
    /// The factory runs outside the critical section. The returned guard
    /// gives exclusive access to the value and returns it on drop.
    pub fn acquire_with(&self, create: impl FnOnce() -> T) -> PoolGuard<'_, T> {
        let recycled = self.free_list().pop();
        let value = recycled.unwrap_or_else(create);
        PoolGuard {
            value: Some(value),
            pool: self,
        }
    }

    /// Returns the number of values currently sitting idle in the pool.
    pub fn idle(&self) -> usize {
        self.free_list().len()
    }

    fn free_list(&self) -> impl DerefMut<Target = Vec<T>> + '_ {
        #[cfg(feature = "parking-lot")]
        {
            self.free.lock()
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            // The free list holds whole values only: a borrower that panics
            // has already popped its entry, so a poisoned lock cannot expose
            // torn state. Recover rather than fail.
            self.free.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

/// Exclusive handle to a pooled value; returns it to the pool on drop.
pub struct PoolGuard<'a, T> {
    value: Option<T>,
    pool: &'a Pool<T>,
}

impl<T> Deref for PoolGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value.as_ref().expect("present until drop")
    }
}

impl<T> DerefMut for PoolGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value.as_mut().expect("present until drop")
    }
}

impl<T> Drop for PoolGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.free_list().push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread::scope;

    #[test]
    fn test_acquire_creates_lazily_and_recycles() {
        let pool: Pool<u32> = Pool::new();
        assert_eq!(pool.idle(), 0);

        {
            let guard = pool.acquire_with(|| 5);
            assert_eq!(*guard, 5);
            assert_eq!(pool.idle(), 0);
        }
        assert_eq!(pool.idle(), 1);

        // The recycled value comes back; the factory must not run again.
        let guard = pool.acquire_with(|| unreachable!("free list is non-empty"));
        assert_eq!(*guard, 5);
    }

    #[test]
    fn test_guard_mutations_survive_reuse() {
        let pool: Pool<u32> = Pool::new();
        {
            let mut guard = pool.acquire_with(|| 0);
            *guard = 9;
        }
        let guard = pool.acquire_with(|| 0);
        assert_eq!(*guard, 9);
    }

    #[test]
    fn test_concurrent_borrowers_never_share_an_entry() {
        #[derive(Default)]
        struct Token {
            busy: AtomicBool,
        }

        const THREADS: usize = 8;
        const ITERS: usize = 500;

        let pool: Pool<Token> = Pool::new();
        let created = AtomicUsize::new(0);

        scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    for _ in 0..ITERS {
                        let guard = pool.acquire_with(|| {
                            created.fetch_add(1, Ordering::Relaxed);
                            Token::default()
                        });
                        // Exclusive use: the entry must not already be busy.
                        assert!(!guard.busy.swap(true, Ordering::SeqCst));
                        std::hint::spin_loop();
                        guard.busy.store(false, Ordering::SeqCst);
                    }
                });
            }
        });

        // Never more entries than peak concurrency, and all returned.
        let total = created.load(Ordering::Relaxed);
        assert!(total <= THREADS);
        assert_eq!(pool.idle(), total);
    }
}
