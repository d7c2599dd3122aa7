use super::*;

fn sum(k: &Kernel) -> f32 {
    k.weights().iter().sum()
}

#[test]
fn box_weights_are_uniform() {
    let k = box_kernel(5);
    assert_eq!(k.weights(), &[0.2; 5]);
    assert_eq!(k.radius(), 2);
}

#[test]
fn sizes_round_up_to_odd() {
    assert_eq!(box_kernel(0).weights().len(), 1);
    assert_eq!(box_kernel(4).weights().len(), 5);
    assert_eq!(gaussian_kernel(6, None).unwrap().weights().len(), 7);
}

#[test]
fn gaussian_is_symmetric_normalized_and_peaked() {
    let k = gaussian_kernel(7, Some(1.5)).unwrap();
    let w = k.weights();
    assert!((sum(&k) - 1.0).abs() < 1e-5);
    for i in 0..3 {
        assert!((w[i] - w[6 - i]).abs() < 1e-7);
        assert!(w[i] < w[i + 1]);
    }
}

#[test]
fn gaussian_default_sigma_is_half_extent() {
    let explicit = gaussian_kernel(9, Some(4.0)).unwrap();
    let default = gaussian_kernel(9, None).unwrap();
    assert_eq!(explicit, default);
}

#[test]
fn gaussian_non_positive_sigma_is_centre_only() {
    assert_eq!(gaussian_kernel(1, None).unwrap().weights(), &[1.0]);
    assert_eq!(
        gaussian_kernel(3, Some(0.0)).unwrap().weights(),
        &[0.0, 1.0, 0.0]
    );
}

#[test]
fn gaussian_rejects_non_finite_sigma() {
    assert!(matches!(
        gaussian_kernel(5, Some(f32::NAN)),
        Err(CanvasError::Validation(_))
    ));
}

#[test]
fn raw_weights_must_be_odd_and_finite() {
    assert!(Kernel::from_weights(vec![1.0, 2.0, 1.0]).is_ok());
    assert!(Kernel::from_weights(vec![1.0, 1.0]).is_err());
    assert!(Kernel::from_weights(vec![f32::INFINITY]).is_err());
}
