use ccsmm_core::EngineError;
use ccsmm_kernels::{
    Strategy, multiply_sparse_f64, multiply_sparse_par_f64, multiply_sparse_seq_f64,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn random_dense(rng: &mut ChaCha8Rng, nrows: usize, ncols: usize, density: f64) -> Vec<f64> {
    (0..nrows * ncols)
        .map(|_| {
            if rng.gen::<f64>() < density {
                rng.gen_range(-10.0..10.0)
            } else {
                0.0
            }
        })
        .collect()
}

#[test]
fn test_multiply_correct() {
    let a = vec![4.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0];
    let b = vec![9.0, 1.0, 0.0, 0.0, 0.0, 7.0, 3.0, 0.0, 0.0];
    let expected = [36.0, 4.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 14.0];

    for strategy in [Strategy::Sequential, Strategy::Parallel] {
        let mut out = vec![0.0f64; 9];
        multiply_sparse_f64(&a, 3, 3, &b, 3, 3, &mut out, strategy).unwrap();
        for (got, want) in out.iter().zip(expected.iter()) {
            assert!(approx_eq(*got, *want));
        }
    }
}

#[test]
fn test_inverse_matrix() {
    let a = vec![4.0, 0.0, 0.0, 0.0, 2.0, 1.0, 0.0, 2.0, 0.0];
    let a_inv = vec![0.25, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, -1.0];
    let identity = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

    let mut out = vec![0.0f64; 9];
    multiply_sparse_seq_f64(&a, 3, 3, &a_inv, 3, 3, &mut out).unwrap();
    for (got, want) in out.iter().zip(identity.iter()) {
        assert!(approx_eq(*got, *want));
    }

    let mut out2 = vec![0.0f64; 9];
    multiply_sparse_par_f64(&a, 3, 3, &a_inv, 3, 3, &mut out2).unwrap();
    for (got, want) in out2.iter().zip(identity.iter()) {
        assert!(approx_eq(*got, *want));
    }
}

#[test]
fn test_zero_matrix() {
    let a = vec![0.0f64; 4 * 6];
    let b = vec![0.0f64; 6 * 2];
    let mut out = vec![1.0f64; 4 * 2];
    multiply_sparse_seq_f64(&a, 4, 6, &b, 6, 2, &mut out).unwrap();
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn test_sizes_accepted() {
    let a = vec![0.0f64; 4 * 6];
    let b = vec![0.0f64; 6 * 2];
    let mut out = vec![0.0f64; 4 * 2];
    assert!(multiply_sparse_seq_f64(&a, 4, 6, &b, 6, 2, &mut out).is_ok());
    assert!(multiply_sparse_par_f64(&a, 4, 6, &b, 6, 2, &mut out).is_ok());
}

#[test]
fn test_inner_dimensions_rejected() {
    let a = vec![0.0f64; 2 * 3];
    let b = vec![0.0f64; 4 * 5];
    let mut out = vec![7.5f64; 2 * 5];
    for strategy in [Strategy::Sequential, Strategy::Parallel] {
        let err = multiply_sparse_f64(&a, 2, 3, &b, 4, 5, &mut out, strategy).unwrap_err();
        assert_eq!(
            err,
            EngineError::DimensionMismatch {
                a_rows: 2,
                a_cols: 3,
                b_rows: 4,
                b_cols: 5,
            }
        );
        // Failed validation must leave the output untouched.
        assert!(out.iter().all(|&v| v == 7.5));
    }
}

#[test]
fn test_output_size_rejected() {
    let a = vec![1.0f64; 3 * 3];
    let b = vec![1.0f64; 3 * 3];
    let mut out = vec![7.5f64; 8];
    let err = multiply_sparse_seq_f64(&a, 3, 3, &b, 3, 3, &mut out).unwrap_err();
    assert_eq!(err, EngineError::OutputSizeMismatch { expected: 9, got: 8 });
    assert!(out.iter().all(|&v| v == 7.5));
}

#[test]
fn test_buffer_size_rejected() {
    let a = vec![1.0f64; 8]; // declared 3x3 below
    let b = vec![1.0f64; 9];
    let mut out = vec![7.5f64; 9];
    let err = multiply_sparse_seq_f64(&a, 3, 3, &b, 3, 3, &mut out).unwrap_err();
    assert_eq!(
        err,
        EngineError::BufferSizeMismatch {
            nrows: 3,
            ncols: 3,
            len: 8,
        }
    );
    assert!(out.iter().all(|&v| v == 7.5));
}

#[test]
fn test_degenerate_empty_shapes() {
    // rows(A) == 0
    let a: Vec<f64> = vec![];
    let b = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut out: Vec<f64> = vec![];
    assert!(multiply_sparse_seq_f64(&a, 0, 3, &b, 3, 2, &mut out).is_ok());
    assert!(multiply_sparse_par_f64(&a, 0, 3, &b, 3, 2, &mut out).is_ok());

    // cols(B) == 0
    let c = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let d: Vec<f64> = vec![];
    let mut out2: Vec<f64> = vec![];
    assert!(multiply_sparse_seq_f64(&c, 2, 3, &d, 3, 0, &mut out2).is_ok());
    assert!(multiply_sparse_par_f64(&c, 2, 3, &d, 3, 0, &mut out2).is_ok());
}

#[test]
fn test_parallel_matches_sequential_across_worker_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let (n, k, m) = (19, 23, 31);
    let a = random_dense(&mut rng, n, k, 0.25);
    let b = random_dense(&mut rng, k, m, 0.25);

    let mut seq = vec![0.0f64; n * m];
    multiply_sparse_seq_f64(&a, n, k, &b, k, m, &mut seq).unwrap();

    // 1, 2, and more workers than destination columns.
    for nthreads in [1, 2, m + 3] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(nthreads)
            .build()
            .unwrap();
        let mut par = vec![0.0f64; n * m];
        pool.install(|| multiply_sparse_par_f64(&a, n, k, &b, k, m, &mut par))
            .unwrap();
        for i in 0..seq.len() {
            assert!(approx_eq(par[i], seq[i]));
        }
    }
}
