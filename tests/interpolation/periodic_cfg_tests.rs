use periodic_rbf::interpolation::errors::InterpolationError;
use periodic_rbf::interpolation::rbf::periodic::{interpolate, PeriodicRbfCfg};
use periodic_rbf::interpolation::rbf::KernelType;
use periodic_rbf::interpolation::Derivative;

type RbfResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-8;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    approx::abs_diff_eq!(a, b, epsilon = ATOL + RTOL * b.abs())
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn report_metadata() -> RbfResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 0.0, -1.0, 0.0];
    let x_eval = [0.5, 1.5, 9.0];

    let cfg = PeriodicRbfCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "periodic c3 rbf (quintic)");
    assert_eq!(rep.derivative, Derivative::Value);
    assert_eq!(rep.n_provided, 5);
    assert_eq!(rep.n_evaluated, 3);
    assert_eq!(rep.evaluated.len(), 3);
    assert_eq!(rep.rank, 8);
    assert!(rep.is_rank_deficient());
    Ok(())
}

#[test]
fn exact_hits() -> RbfResult {
    let x = [0.0, 0.3, 1.1, 2.0, 2.6, 3.5, 4.0];
    let y = [1.0, 2.0, 0.5, -1.0, 0.2, 0.7, 1.0];

    let cfg = PeriodicRbfCfg::new()
        .with_kernel(KernelType::Quintic)
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "periodic c3 rbf (quintic)");
    assert!(!rep.is_rank_deficient());
    assert_vec_close(&rep.evaluated, &y);
    Ok(())
}

#[test]
fn wraps_instead_of_out_of_bounds() -> RbfResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 0.0, -1.0, 0.0];
    let x_eval   = [-3.0, 5.0, 6.0, 7.0, 8.0, 401.0];
    let expected = [ 1.0, 1.0, 0.0, -1.0, 0.0, 1.0];

    let cfg = PeriodicRbfCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_vec_close(&rep.evaluated, &expected);
    Ok(())
}

#[test]
fn derivative_selection() -> RbfResult {
    let x = [0.0, 0.3, 1.1, 2.0, 2.6, 3.5, 4.0];
    let y = [1.0, 2.0, 0.5, -1.0, 0.2, 0.7, 1.0];
    let x_eval = [0.0, 4.0, 8.0, -4.0];

    for order in Derivative::ALL {
        let cfg = PeriodicRbfCfg::new()
            .with_kernel(KernelType::Quintic)
            .with_derivative(order)
            .set_x(&x)?
            .set_y(&y)?
            .set_x_eval(&x_eval)?;
        assert_eq!(cfg.derivative(), order);

        let rep = interpolate(cfg)?;
        assert_eq!(rep.derivative, order);

        // every eval point is the same point of the period
        let first = rep.evaluated[0];
        assert!(rep.evaluated.iter().all(|&v| (v - first).abs() <= 1e-9 * (1.0 + first.abs())));
    }
    Ok(())
}

#[test]
fn empty_eval_points() -> RbfResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 0.0, -1.0, 1.0];

    let cfg = PeriodicRbfCfg::new()
        .set_x(&x)?
        .set_y(&y)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}

#[test]
fn non_periodic_rejected() -> RbfResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 0.0, -1.0, 0.5];

    let cfg = PeriodicRbfCfg::new()
        .set_x(&x)?
        .set_y(&y)?;
    assert!(matches!(
        interpolate(cfg),
        Err(InterpolationError::NonPeriodic { .. })
    ));
    Ok(())
}

#[test]
fn missing_values_rejected() -> RbfResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let cfg = PeriodicRbfCfg::new().set_x(&x)?;

    assert!(matches!(interpolate(cfg), Err(InterpolationError::EmptyInput)));
    Ok(())
}

#[test]
fn setter_validation() {
    assert!(matches!(
        PeriodicRbfCfg::new().set_x(&[]),
        Err(InterpolationError::EmptyInput)
    ));
    assert!(matches!(
        PeriodicRbfCfg::new().set_x(&[1.0]),
        Err(InterpolationError::InsufficientPoints { got: 1, need: 2 })
    ));
    assert!(matches!(
        PeriodicRbfCfg::new().set_x(&[0.0, 2.0, 1.0]),
        Err(InterpolationError::NonIncreasingX)
    ));
    assert!(matches!(
        PeriodicRbfCfg::new().set_x(&[0.0, f64::NAN]),
        Err(InterpolationError::NonFiniteVec { name: "x", idx: 1 })
    ));
    assert!(matches!(
        PeriodicRbfCfg::new().set_x_eval(&[0.0, f64::INFINITY]),
        Err(InterpolationError::NonFiniteVec { name: "x_eval", idx: 1 })
    ));
    assert!(matches!(
        PeriodicRbfCfg::new().set_y(&[0.0, f64::NAN, 0.0]),
        Err(InterpolationError::NonFiniteVec { name: "y", idx: 1 })
    ));
    assert!(matches!(
        PeriodicRbfCfg::new().set_x_tol(0.0),
        Err(InterpolationError::InvalidXTol { .. })
    ));
}

#[test]
fn unequal_lengths_rejected_either_order() -> RbfResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 0.0, 0.0];

    let err = PeriodicRbfCfg::new().set_x(&x)?.set_y(&y);
    assert!(matches!(err, Err(InterpolationError::UnequalLength { x_len: 5, y_len: 4 })));

    let err = PeriodicRbfCfg::new().set_y(&y)?.set_x(&x);
    assert!(matches!(err, Err(InterpolationError::UnequalLength { x_len: 5, y_len: 4 })));
    Ok(())
}

#[test]
fn spacing_below_tolerance_rejected() -> RbfResult {
    let x = [0.0, 0.5, 0.5001, 2.0];

    let err = PeriodicRbfCfg::new().set_x_tol(1e-3)?.set_x(&x);
    assert!(matches!(err, Err(InterpolationError::DuplicateX { .. })));

    // default tolerance accepts the same data
    assert!(PeriodicRbfCfg::new().set_x(&x).is_ok());
    Ok(())
}

#[test]
fn tolerance_tightened_after_set_x_is_enforced() -> RbfResult {
    let x = [0.0, 0.5, 0.5001, 2.0];
    let y = [1.0, 0.0, 2.0, 1.0];

    let cfg = PeriodicRbfCfg::new()
        .set_x(&x)?
        .set_x_tol(1e-3)?
        .set_y(&y)?;
    assert!(matches!(interpolate(cfg), Err(InterpolationError::DuplicateX { .. })));
    Ok(())
}

#[test]
fn default_cfg_reproduces_uneven_samples() -> RbfResult {
    let x = [0.0, 0.3, 1.1, 2.0, 2.6, 3.5, 4.0];
    let y = [1.0, 2.0, 0.5, -1.0, 0.2, 0.7, 1.0];

    let cfg = PeriodicRbfCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x)?;
    assert_eq!(cfg.kernel(), KernelType::Quintic);

    let rep = interpolate(cfg)?;
    assert!(!rep.is_rank_deficient());
    assert_vec_close(&rep.evaluated, &y);
    Ok(())
}
