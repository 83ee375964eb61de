//! 카파 분포의 고르데예프 피적분 함수 (Mace 2003)

use anyhow::Result;

use crate::core::constants::thermal_speed_squared;
use crate::core::math::{bessel_kv, gamma};
use crate::core::params::PlasmaParameters;

/// 카파 피적분 함수
///
/// 초기화 시 유효 인자 Z(y)와 `K_{κ+½}(Z)`를 미리 계산한다.
#[derive(Debug, Clone)]
pub struct KappaIntegrand<'a> {
    y: &'a [f64],
    params: &'a PlasmaParameters,
    kappa: f64,
    z: Vec<f64>,
    kn: Vec<f64>,
}

impl<'a> KappaIntegrand<'a> {
    pub fn initialize(y: &'a [f64], params: &'a PlasmaParameters) -> Result<Self> {
        let kappa = params.require_kappa()?;
        let mut this = Self {
            y,
            params,
            kappa,
            z: Vec::new(),
            kn: Vec::new(),
        };
        this.z_func();
        Ok(this)
    }

    fn z_func(&mut self) {
        let p = self.params;
        let kappa = self.kappa;
        let theta2 = 2.0 * ((kappa - 1.5) / kappa) * thermal_speed_squared(p.temperature, p.mass);
        let w_c = p.gyrofreq;
        let k2 = p.radar_wavenumber * p.radar_wavenumber;
        let sin2 = p.aspect_angle.sin().powi(2);
        let cos2 = p.aspect_angle.cos().powi(2);
        let order = kappa + 0.5;

        self.z = self
            .y
            .iter()
            .map(|&y| {
                (2.0 * kappa).sqrt()
                    * (k2 * sin2 * theta2 / (w_c * w_c) * (1.0 - (w_c * y).cos())
                        + 0.5 * k2 * cos2 * theta2 * y * y)
                        .sqrt()
            })
            .collect();
        self.kn = self
            .z
            .iter()
            .map(|&z| clamp_overflow(bessel_kv(order, z)))
            .collect();
    }

    /// 유효 인자 Z(y)
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// 클램프가 적용된 `K_{κ+½}(Z)`
    pub fn bessel(&self) -> &[f64] {
        &self.kn
    }

    /// `Z^(κ+½)·K_{κ+½}(Z)·exp(-yν)`
    pub fn integrand(&self) -> Vec<f64> {
        let order = self.kappa + 0.5;
        let nu = self.params.collision_freq;
        self.y
            .iter()
            .zip(self.z.iter().zip(&self.kn))
            .map(|(&y, (&z, &kn))| z.powf(order) * kn * (-y * nu).exp())
            .collect()
    }
}

/// 작은 인자·높은 차수에서 발산한 베셀 값은 1로 대체
#[inline]
pub fn clamp_overflow(value: f64) -> f64 {
    if value == f64::INFINITY {
        1.0
    } else {
        value
    }
}

/// 카파 결과의 정규화 상수 `2^(κ-½)·Γ(κ+½)`
pub fn normalization(kappa: f64) -> f64 {
    2f64.powf(kappa - 0.5) * gamma(kappa + 0.5)
}
