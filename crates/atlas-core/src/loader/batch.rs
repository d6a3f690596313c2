// crates/atlas-core/src/loader/batch.rs
use super::DocumentSource;
use crate::error::Result;
use serde_json::Value;
use tracing::warn;

fn settle(path: &str, fetched: Result<Value>) -> Option<Value> {
    match fetched {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(%path, error = %e, "skipping document");
            None
        }
    }
}

/// Upper bound on documents fetched at the same time.
#[cfg(not(target_arch = "wasm32"))]
pub const MAX_PARALLEL_FETCHES: usize = 16;

/// Fetches every path in parallel, at most [`MAX_PARALLEL_FETCHES`] at a
/// time, and waits for all of them to settle.
///
/// The result has one slot per input path, in input order. A failed or
/// malformed document leaves `None` in its slot and never affects siblings.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_all<S>(source: &S, paths: &[String]) -> Vec<Option<Value>>
where
    S: DocumentSource + ?Sized,
{
    use std::thread;

    let mut out = Vec::with_capacity(paths.len());
    for chunk in paths.chunks(MAX_PARALLEL_FETCHES) {
        thread::scope(|scope| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|path| scope.spawn(move || source.fetch(path)))
                .collect();

            out.extend(handles.into_iter().zip(chunk).map(|(handle, path)| {
                match handle.join() {
                    Ok(fetched) => settle(path, fetched),
                    Err(_) => {
                        warn!(%path, "fetch worker panicked; skipping document");
                        None
                    }
                }
            }));
        });
    }
    out
}

/// Sequential variant for wasm32, which has no threads. Documents there come
/// from memory, so there is nothing to overlap.
#[cfg(target_arch = "wasm32")]
pub fn fetch_all<S>(source: &S, paths: &[String]) -> Vec<Option<Value>>
where
    S: DocumentSource + ?Sized,
{
    paths
        .iter()
        .map(|path| settle(path, source.fetch(path)))
        .collect()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::error::AtlasError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves `{"n": <index>}` for even indexes and fails odd ones, tracking
    /// the peak number of concurrent fetches.
    #[derive(Default)]
    struct CountingSource {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl DocumentSource for CountingSource {
        fn fetch(&self, path: &str) -> Result<Value> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(2));
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let n: u64 = path.parse().map_err(|_| AtlasError::NotFound(path.to_owned()))?;
            if n % 2 == 1 {
                return Err(AtlasError::NotFound(path.to_owned()));
            }
            Ok(json!({ "n": n }))
        }
    }

    #[test]
    fn large_batches_are_capped_and_keep_input_order() {
        let source = CountingSource::default();
        let paths: Vec<String> = (0..MAX_PARALLEL_FETCHES * 3 + 5).map(|i| i.to_string()).collect();
        let docs = fetch_all(&source, &paths);

        assert_eq!(docs.len(), paths.len());
        for (i, doc) in docs.iter().enumerate() {
            match doc {
                Some(v) => assert_eq!(v["n"], json!(i)),
                None => assert_eq!(i % 2, 1),
            }
        }
        let peak = source.peak.load(Ordering::SeqCst);
        assert!(peak >= 1 && peak <= MAX_PARALLEL_FETCHES, "peak {peak}");
    }

    #[test]
    fn empty_batch_spawns_nothing() {
        let source = CountingSource::default();
        assert!(fetch_all(&source, &[]).is_empty());
        assert_eq!(source.peak.load(Ordering::SeqCst), 0);
    }
}
