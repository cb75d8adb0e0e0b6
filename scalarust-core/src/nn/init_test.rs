use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_is_unit_uniform() {
    assert_eq!(
        Init::default(),
        Init::Uniform {
            low: -1.0,
            high: 1.0
        }
    );
}

#[test]
fn test_uniform_range() -> Result<(), ScalarustError> {
    let mut rng = StdRng::seed_from_u64(7);
    let values = Init::Uniform { low: -0.5, high: 0.25 }.sample_n(500, &mut rng)?;
    assert_eq!(values.len(), 500);
    assert!(values.iter().all(|&v| (-0.5..0.25).contains(&v)));
    Ok(())
}

#[test]
fn test_normal_statistics() -> Result<(), ScalarustError> {
    let mut rng = StdRng::seed_from_u64(11);
    let values = Init::Normal { mean: 2.0, std_dev: 0.1 }.sample_n(2000, &mut rng)?;
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert!((mean - 2.0).abs() < 0.02, "sample mean {}", mean);
    Ok(())
}

#[test]
fn test_same_seed_same_values() -> Result<(), ScalarustError> {
    let init = Init::default();
    let a = init.sample_n(10, &mut StdRng::seed_from_u64(3))?;
    let b = init.sample_n(10, &mut StdRng::seed_from_u64(3))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_invalid_parameters() {
    let mut rng = StdRng::seed_from_u64(0);
    let empty = Init::Uniform { low: 1.0, high: 1.0 }.sample_n(1, &mut rng);
    assert!(matches!(empty, Err(ScalarustError::InvalidInit(_))));

    let unbounded = Init::Uniform { low: 0.0, high: f64::INFINITY }.sample_n(1, &mut rng);
    assert!(matches!(unbounded, Err(ScalarustError::InvalidInit(_))));

    let negative_std = Init::Normal { mean: 0.0, std_dev: -1.0 }.sample_n(1, &mut rng);
    assert!(matches!(negative_std, Err(ScalarustError::InvalidInit(_))));
}

#[test]
fn test_normal_zero_std_dev_is_constant() -> Result<(), ScalarustError> {
    let mut rng = StdRng::seed_from_u64(3);
    let values = Init::Normal { mean: 0.25, std_dev: 0.0 }.sample_n(4, &mut rng)?;
    assert_eq!(values, vec![0.25; 4]);
    Ok(())
}
