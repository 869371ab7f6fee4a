use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::foundation::error::{RefractError, RefractResult};

/// Cooperative cancellation flag shared between a caller and a running effect.
///
/// The engine polls it before each row batch; setting it makes the current
/// call return [`RefractError::Cancelled`] without partial output.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Return `true` once [`CancelToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Threading, batching and cancellation controls for one effect invocation.
#[derive(Clone, Debug)]
pub struct EngineOpts {
    /// Rows handed to a worker at a time; `0` is treated as `1`.
    pub rows_per_batch: usize,
    /// Optional cancellation flag checked between row batches.
    pub cancel: Option<CancelToken>,
    pub(crate) pool: Option<Arc<rayon::ThreadPool>>,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            rows_per_batch: 32,
            cancel: None,
            pool: None,
        }
    }
}

impl EngineOpts {
    /// Run on a dedicated pool of `threads` workers instead of the global rayon pool.
    pub fn with_threads(mut self, threads: usize) -> RefractResult<Self> {
        self.pool = Some(Arc::new(build_thread_pool(threads)?));
        Ok(self)
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Number of workers effects will use.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub(crate) fn batch_rows(&self) -> usize {
        self.rows_per_batch.max(1)
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    pub(crate) fn check_cancelled(&self) -> RefractResult<()> {
        if self.is_cancelled() {
            return Err(RefractError::Cancelled);
        }
        Ok(())
    }

    pub(crate) fn install<R, F>(&self, f: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

fn build_thread_pool(threads: usize) -> RefractResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(RefractError::parameter("engine 'threads' must be >= 1"));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| RefractError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/opts.rs"]
mod tests;
