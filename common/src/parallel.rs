//! Concurrency-limited parallel iteration utilities.
//!
//! Wraps rayon's `par_iter` to process items in parallel while limiting
//! the number of items in flight at once (e.g. to cap peak memory when every
//! item allocates a full-size working buffer).

use rayon::prelude::*;

/// Resolves an optional user limit to a usable one: `None` or `Some(0)`
/// fall back to the size of the rayon pool.
pub fn resolve_concurrency(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => rayon::current_num_threads().max(1),
    }
}

/// Maps `f` over `items` in parallel, with at most `max_concurrent` items in flight.
///
/// The closure receives the item's position in `items`. Results keep input
/// order. Stops at the first chunk that contains an error and returns one of
/// that chunk's errors; items within the failing chunk may still be processed.
///
/// # Panics
///
/// Panics if `max_concurrent` is 0.
pub fn try_par_map_limited<T, R, E, F>(
    items: &[T],
    max_concurrent: usize,
    f: F,
) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(usize, &T) -> Result<R, E> + Sync,
{
    assert!(max_concurrent > 0, "max_concurrent must be > 0");

    let mut results = Vec::with_capacity(items.len());
    for (chunk_idx, chunk) in items.chunks(max_concurrent).enumerate() {
        let base = chunk_idx * max_concurrent;
        let chunk_results: Result<Vec<R>, E> = chunk
            .par_iter()
            .enumerate()
            .map(|(offset, item)| f(base + offset, item))
            .collect();
        results.extend(chunk_results?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_try_par_map_limited_ok_preserves_order() {
        let items: Vec<i32> = (0..100).collect();
        let result: Result<Vec<i32>, &str> = try_par_map_limited(&items, 4, |_, &x| Ok(x * 2));
        let expected: Vec<i32> = (0..100).map(|x| x * 2).collect();
        assert_eq!(result.unwrap(), expected);
    }

    #[test]
    fn test_try_par_map_limited_passes_indices() {
        let items = vec!["a", "b", "c", "d", "e"];
        let result: Result<Vec<usize>, ()> = try_par_map_limited(&items, 2, |idx, _| Ok(idx));
        assert_eq!(result.unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_try_par_map_limited_err() {
        let items: Vec<i32> = (0..10).collect();
        let result: Result<Vec<i32>, String> = try_par_map_limited(&items, 3, |idx, &x| {
            if x == 5 {
                Err(format!("bad item at {idx}"))
            } else {
                Ok(x)
            }
        });
        assert_eq!(result.unwrap_err(), "bad item at 5");
    }

    #[test]
    fn test_try_par_map_limited_empty() {
        let items: Vec<i32> = vec![];
        let result: Result<Vec<i32>, &str> = try_par_map_limited(&items, 3, |_, &x| Ok(x));
        assert_eq!(result.unwrap(), Vec::<i32>::new());
    }

    #[test]
    #[should_panic(expected = "max_concurrent must be > 0")]
    fn test_try_par_map_limited_zero_panics() {
        let _: Result<Vec<i32>, ()> = try_par_map_limited(&[1, 2, 3], 0, |_, &x| Ok(x));
    }

    #[test]
    fn test_try_par_map_limited_concurrency_cap() {
        let items: Vec<i32> = (0..20).collect();
        let in_flight = AtomicUsize::new(0);
        let max_observed = AtomicUsize::new(0);

        let _: Result<Vec<i32>, ()> = try_par_map_limited(&items, 3, |_, &x| {
            let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_observed.fetch_max(current, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(5));
            in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(x)
        });

        let max = max_observed.load(Ordering::SeqCst);
        assert!(max <= 3, "max in-flight was {max}, expected <= 3");
    }

    #[test]
    fn test_resolve_concurrency() {
        assert_eq!(resolve_concurrency(Some(3)), 3);
        assert!(resolve_concurrency(Some(0)) >= 1);
        assert!(resolve_concurrency(None) >= 1);
    }
}
