//! 맥스웰 분포의 고르데예프 피적분 함수 (Hagfors 1961, Mace 2003)

use crate::core::constants::thermal_speed_squared;
use crate::core::params::PlasmaParameters;

/// 맥스웰 피적분 함수
#[derive(Debug, Clone)]
pub struct MaxwellIntegrand<'a> {
    y: &'a [f64],
    params: &'a PlasmaParameters,
}

impl<'a> MaxwellIntegrand<'a> {
    pub fn initialize(y: &'a [f64], params: &'a PlasmaParameters) -> Self {
        Self { y, params }
    }

    /// `exp(-yν - K²sin²θ·v²/w_c²·(1-cos(w_c y)) - ½(K cosθ y)²·v²)`, v² = T·k_B/m
    pub fn integrand(&self) -> Vec<f64> {
        let p = self.params;
        let vth2 = thermal_speed_squared(p.temperature, p.mass);
        let w_c = p.gyrofreq;
        let k_perp = p.k_perp();
        let k_par = p.k_par();
        let gyro = k_perp * k_perp * vth2 / (w_c * w_c);

        self.y
            .iter()
            .map(|&y| {
                (-y * p.collision_freq
                    - gyro * (1.0 - (w_c * y).cos())
                    - 0.5 * (k_par * y).powi(2) * vth2)
                    .exp()
            })
            .collect()
    }
}
