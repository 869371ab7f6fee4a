use rayon::prelude::*;

use crate::engine::opts::EngineOpts;
use crate::foundation::error::{RefractError, RefractResult};

/// Fill `dst` row by row in parallel batches.
///
/// `f(y, row)` receives the row index and its `row_len` elements. The cancel
/// flag is checked once per batch, before any of its rows are written.
pub(crate) fn for_each_row<T, F>(
    dst: &mut [T],
    row_len: usize,
    opts: &EngineOpts,
    f: F,
) -> RefractResult<()>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    if row_len == 0 || !dst.len().is_multiple_of(row_len) {
        return Err(RefractError::dimensions(
            "row buffer length must be a multiple of the row length",
        ));
    }
    let rows_per_batch = opts.batch_rows();
    let batch_len = row_len
        .checked_mul(rows_per_batch)
        .ok_or_else(|| RefractError::dimensions("row batch size overflow"))?;

    opts.install(|| {
        dst.par_chunks_mut(batch_len)
            .enumerate()
            .try_for_each(|(batch, rows)| {
                opts.check_cancelled()?;
                for (i, row) in rows.chunks_exact_mut(row_len).enumerate() {
                    f(batch * rows_per_batch + i, row);
                }
                Ok(())
            })
    })
}

#[cfg(test)]
#[path = "../../tests/unit/engine/rows.rs"]
mod tests;
