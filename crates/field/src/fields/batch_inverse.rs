//! Amortized inversion of many field elements.
//!
//! Montgomery's trick: accumulate the running product of the inputs, invert it once,
//! then walk backwards peeling one factor at a time. Zero entries are treated as
//! identity factors on the way forward and skipped on the way back, so they stay zero
//! without corrupting the inverses of their neighbours.
//!
//! The parallel variant is a segmented scan: chunk-local running products are built
//! concurrently, the chunk totals are combined (and inverted once) sequentially, and
//! the chunk-local backward passes run concurrently again. Field arithmetic is exact,
//! so the output does not depend on the chunking.

use rayon::prelude::*;

use super::field::Field;
use super::field_params::FieldParams;

/// Below this many elements per chunk the parallel variant falls back to a single pass.
pub const MIN_PARALLEL_CHUNK_LEN: usize = 1 << 12;

/// Invert every nonzero entry of `values` in place; zero entries stay zero.
///
/// Costs one field inversion and roughly 3N multiplications.
pub fn batch_invert<P: FieldParams>(values: &mut [Field<P>]) {
    if values.is_empty() {
        return;
    }
    let mut prefix = vec![Field::<P>::zero(); values.len()];
    let total = exclusive_products(values, &mut prefix);
    invert_backward(values, &prefix, Field::one(), total.invert());
}

/// Parallel batch inversion, chunked by the size of the rayon thread pool.
pub fn batch_invert_parallel<P: FieldParams>(values: &mut [Field<P>]) {
    let num_chunks = rayon::current_num_threads()
        .min(values.len() / MIN_PARALLEL_CHUNK_LEN)
        .max(1);
    if num_chunks == 1 {
        batch_invert(values);
    } else {
        batch_invert_chunked(values, num_chunks);
    }
}

/// Segmented-scan batch inversion over (at most) `num_chunks` contiguous chunks.
///
/// Still performs exactly one field inversion regardless of the chunk count.
pub fn batch_invert_chunked<P: FieldParams>(values: &mut [Field<P>], num_chunks: usize) {
    if values.is_empty() {
        return;
    }
    let _span = tracing::debug_span!("batch_invert_chunked", len = values.len(), num_chunks)
        .entered();

    let chunk_len = values.len().div_ceil(num_chunks.max(1));
    let mut prefix = vec![Field::<P>::zero(); values.len()];

    // Phase A: chunk-local exclusive running products, one total per chunk.
    let totals: Vec<Field<P>> = values
        .par_chunks(chunk_len)
        .zip(prefix.par_chunks_mut(chunk_len))
        .map(|(chunk, chunk_prefix)| exclusive_products(chunk, chunk_prefix))
        .collect();

    // Phase B: offsets[c] is the product of every chunk before c; seeds[c] is the
    // inverse of the product of every chunk up to and including c.
    let mut offsets = Vec::with_capacity(totals.len());
    let mut running = Field::<P>::one();
    for total in &totals {
        offsets.push(running);
        running *= *total;
    }
    let mut seeds = vec![Field::<P>::zero(); totals.len()];
    let mut inverse = running.invert();
    for (seed, total) in seeds.iter_mut().zip(&totals).rev() {
        *seed = inverse;
        inverse *= *total;
    }

    // Phase C: chunk-local backward passes.
    values
        .par_chunks_mut(chunk_len)
        .zip(prefix.par_chunks(chunk_len))
        .zip(offsets.par_iter().zip(seeds.par_iter()))
        .for_each(|((chunk, chunk_prefix), (offset, seed))| {
            invert_backward(chunk, chunk_prefix, *offset, *seed)
        });
}

/// Writes into `prefix[i]` the product of the nonzero entries of `values[..i]` and
/// returns the product of all nonzero entries.
fn exclusive_products<P: FieldParams>(values: &[Field<P>], prefix: &mut [Field<P>]) -> Field<P> {
    debug_assert_eq!(values.len(), prefix.len());
    let mut running = Field::<P>::one();
    for (value, slot) in values.iter().zip(prefix.iter_mut()) {
        *slot = running;
        if !value.is_zero() {
            running *= *value;
        }
    }
    running
}

/// Backward pass. `inverse` must be the inverse of `offset` times the product of all
/// nonzero entries of `values`.
fn invert_backward<P: FieldParams>(
    values: &mut [Field<P>],
    prefix: &[Field<P>],
    offset: Field<P>,
    mut inverse: Field<P>,
) {
    for i in (0..values.len()).rev() {
        let original = values[i];
        if original.is_zero() {
            continue;
        }
        values[i] = inverse * offset * prefix[i];
        inverse *= original;
    }
}
