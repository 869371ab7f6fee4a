use super::*;
use crate::engine::opts::CancelToken;

#[test]
fn every_row_is_visited_once_with_its_index() {
    let (w, h) = (3usize, 37usize);
    let mut dst = vec![0u32; w * h];
    let opts = EngineOpts {
        rows_per_batch: 4,
        ..EngineOpts::default()
    };
    for_each_row(&mut dst, w, &opts, |y, row| {
        for v in row.iter_mut() {
            *v += y as u32 + 1;
        }
    })
    .unwrap();
    for (y, row) in dst.chunks_exact(w).enumerate() {
        assert!(row.iter().all(|&v| v == y as u32 + 1));
    }
}

#[test]
fn mismatched_row_length_is_rejected() {
    let mut dst = vec![0u8; 10];
    let err = for_each_row(&mut dst, 4, &EngineOpts::default(), |_, _| {}).unwrap_err();
    assert!(matches!(err, RefractError::InvalidDimensions(_)));
}

#[test]
fn cancelled_token_stops_before_writing() {
    let token = CancelToken::new();
    token.cancel();
    let opts = EngineOpts::default().with_cancel(token);
    let mut dst = vec![0u8; 64];
    let err = for_each_row(&mut dst, 8, &opts, |_, row| row.fill(1)).unwrap_err();
    assert!(matches!(err, RefractError::Cancelled));
    assert!(dst.iter().all(|&v| v == 0));
}

#[test]
fn runs_inside_dedicated_pool() {
    let opts = EngineOpts::default().with_threads(1).unwrap();
    let mut dst = vec![0usize; 16];
    for_each_row(&mut dst, 4, &opts, |_, row| {
        row.fill(rayon::current_num_threads());
    })
    .unwrap();
    assert!(dst.iter().all(|&v| v == 1));
}
