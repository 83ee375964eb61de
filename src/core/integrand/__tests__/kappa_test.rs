use crate::core::constants::ATOMIC_MASS;
use crate::core::integrand::kappa::{clamp_overflow, normalization, KappaIntegrand};
use crate::core::params::{PlasmaParameters, Species};
use approx::assert_relative_eq;
use std::f64::consts::PI;

fn params(kappa: Option<f64>) -> PlasmaParameters {
    let species = Species::new(1e4, 16.0 * ATOMIC_MASS, 1000.0, 0.0);
    PlasmaParameters::new(&species, -39.1, 0.6).with_kappa(kappa)
}

#[test]
fn 발산_베셀값_1로_대체_테스트() -> anyhow::Result<()> {
    let params = params(Some(3.0));
    let y = [0.0, 1e-6, 1e-5];
    let integrand = KappaIntegrand::initialize(&y, &params)?;

    // y = 0에서 Z = 0, K_ν(0) = ∞ → 1
    assert_eq!(integrand.z()[0], 0.0);
    assert_eq!(integrand.bessel()[0], 1.0);
    let g = integrand.integrand();
    assert_eq!(g[0], 0.0);
    assert!(g.iter().all(|v| v.is_finite()));
    assert!(integrand.bessel().iter().all(|v| v.is_finite()));
    Ok(())
}

#[test]
fn 클램프_함수_테스트() {
    assert_eq!(clamp_overflow(f64::INFINITY), 1.0);
    assert_eq!(clamp_overflow(2.5), 2.5);
    assert_eq!(clamp_overflow(0.0), 0.0);
}

#[test]
fn 정규화_상수_기준값_테스트() {
    // κ = 3: 2^{5/2}·Γ(7/2) = 4√2 · 15√π/8 = 7.5·√(2π)
    assert_relative_eq!(normalization(3.0), 7.5 * (2.0 * PI).sqrt(), max_relative = 1e-12);
    // κ = 1.5: 2·Γ(2) = 2
    assert_relative_eq!(normalization(1.5), 2.0, max_relative = 1e-12);
}

#[test]
fn 정규화된_피적분_함수_원점_극한_테스트() -> anyhow::Result<()> {
    // Z → 0에서 Z^ν K_ν(Z) → 2^{ν-1} Γ(ν)
    let params = params(Some(3.0));
    let y = [1e-9];
    let integrand = KappaIntegrand::initialize(&y, &params)?;
    let g = integrand.integrand()[0] / normalization(3.0);
    assert_relative_eq!(g, 1.0, max_relative = 1e-6);
    Ok(())
}

#[test]
fn 카파_지수_누락_오류_테스트() {
    let params = params(None);
    assert!(KappaIntegrand::initialize(&[0.0, 1.0], &params).is_err());
}
