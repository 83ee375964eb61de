use crate::core::config::VelocityGridConfig;
use crate::core::constants::ATOMIC_MASS;
use crate::core::integrand::IsotropicIntegrand;
use crate::core::params::{PlasmaParameters, Species, VdfKind};
use approx::assert_relative_eq;

fn velocity() -> VelocityGridConfig {
    VelocityGridConfig {
        v_max: 2e4,
        points: 801,
        order: 2.0,
    }
}

fn params(gyrofreq: f64, theta: f64) -> PlasmaParameters {
    let species = Species::new(gyrofreq, 16.0 * ATOMIC_MASS, 1000.0, 0.0);
    PlasmaParameters::new(&species, -39.1, theta)
}

#[test]
fn 원점_극한_테스트() {
    let velocity = velocity();
    let rising: Vec<f64> = (0..11).map(|i| i as f64 * 1e-5).collect();
    let falling: Vec<f64> = rising.iter().map(|y| -y).collect();

    for &theta in &[0.0, 0.2, 0.785, 1.3, std::f64::consts::FRAC_PI_2] {
        for &w_c in &[250.0, -250.0, 1e4] {
            let params = params(w_c, theta);
            let up = IsotropicIntegrand::initialize(&rising, &params, &velocity).p_d();
            assert_relative_eq!(up[0], 39.1, max_relative = 1e-12);
            let down = IsotropicIntegrand::initialize(&falling, &params, &velocity).p_d();
            assert_relative_eq!(down[0], -39.1, max_relative = 1e-12);
            assert!(up.iter().all(|v| v.is_finite()));
        }
    }
}

#[test]
fn 전부_0인_샘플_부호_테스트() {
    // y_last = 0이면 sign(0) = 0
    let velocity = velocity();
    let params = params(250.0, 0.5);
    let zeros = [0.0, 0.0, 0.0];
    let p_d = IsotropicIntegrand::initialize(&zeros, &params, &velocity).p_d();
    assert_eq!(p_d, vec![0.0, 0.0, 0.0]);
}

#[test]
fn 평행_전파_도함수_테스트() {
    // θ = 0이면 p(y) = |K|·y, 도함수는 |K|
    let velocity = velocity();
    let params = params(250.0, 0.0);
    let y = [0.0, 1e-4, 3e-3];
    let p_d = IsotropicIntegrand::initialize(&y, &params, &velocity).p_d();
    for value in p_d {
        assert_relative_eq!(value, 39.1, max_relative = 1e-12);
    }
}

#[test]
fn 데바이_배율은_피적분_값을_바꾸지_않음_테스트() -> anyhow::Result<()> {
    let velocity = velocity();
    let params = params(250.0, 0.4).with_vdf(VdfKind::Kappa).with_kappa(Some(4.0));
    let y: Vec<f64> = (0..65).map(|i| i as f64 * 2e-5).collect();

    let (with_metric, scale) = IsotropicIntegrand::initialize(&y, &params, &velocity).integrand()?;
    let (without_metric, none) = IsotropicIntegrand::initialize(&y, &params, &velocity)
        .with_debye_metric(false)
        .integrand()?;

    assert_eq!(with_metric, without_metric);
    assert!(none.is_none());
    let scale = scale.expect("데바이 배율");
    assert!(scale.is_finite() && scale > 0.0, "배율: {}", scale);
    Ok(())
}

#[test]
fn 맥스웰_분포_데바이_배율_1_테스트() -> anyhow::Result<()> {
    let velocity = velocity();
    let params = params(250.0, 0.4);
    let y: Vec<f64> = (0..33).map(|i| i as f64 * 2e-5).collect();
    let v_int = IsotropicIntegrand::initialize(&y, &params, &velocity).v_int()?;
    assert_eq!(v_int.debye_scale, Some(1.0));
    assert_eq!(v_int.values.len(), y.len());
    assert_eq!(v_int.values[0], 0.0);
    Ok(())
}
