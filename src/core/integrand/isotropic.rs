//! 임의의 등방 분포에 대한 고르데예프 피적분 함수 (Mace 2003)
//!
//! `G(y) = p_d(y)·v_int(y)`. 속도 적분은 `VelocityIntegrator`에 위임한다.

use anyhow::Result;
use log::{debug, info};

use crate::core::config::VelocityGridConfig;
use crate::core::math::{power_law_grid, sign, simpson};
use crate::core::params::{PlasmaParameters, VdfKind};
use crate::core::vdf;
use crate::core::velocity::VelocityIntegrator;

/// 등방 피적분 함수
#[derive(Debug, Clone)]
pub struct IsotropicIntegrand<'a> {
    y: &'a [f64],
    params: &'a PlasmaParameters,
    velocity: &'a VelocityGridConfig,
    debye_metric: bool,
}

/// 속도 적분 결과와 데바이 길이 배율
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityIntegral {
    pub values: Vec<f64>,
    /// 맥스웰 기준 대비 데바이 길이 배율
    pub debye_scale: Option<f64>,
}

impl<'a> IsotropicIntegrand<'a> {
    pub fn initialize(
        y: &'a [f64],
        params: &'a PlasmaParameters,
        velocity: &'a VelocityGridConfig,
    ) -> Self {
        Self {
            y,
            params,
            velocity,
            debye_metric: true,
        }
    }

    /// 데바이 길이 배율 계산 여부 (피적분 값에는 영향 없음)
    pub fn with_debye_metric(mut self, enabled: bool) -> Self {
        self.debye_metric = enabled;
        self
    }

    /// y 샘플마다의 속도 적분
    pub fn v_int(&self) -> Result<VelocityIntegral> {
        let v = power_law_grid(self.velocity.v_max, self.velocity.order, self.velocity.points)?;
        let f = vdf::sample(self.params.vdf, &v, self.params)?;
        let integrator = VelocityIntegrator;
        let values = integrator.integrand(self.y, self.params, &v, &f)?;

        let debye_scale = if !self.debye_metric {
            None
        } else if self.params.vdf == VdfKind::Maxwell {
            Some(1.0)
        } else {
            // 특성 속도(데바이 길이)의 변화를 맥스웰 분포와 비교
            let f_maxwell = vdf::sample(VdfKind::Maxwell, &v, self.params)?;
            let maxwell = integrator.integrand(self.y, self.params, &v, &f_maxwell)?;
            Some(simpson(&maxwell, self.y)? / simpson(&values, self.y)?)
        };
        if let Some(scale) = debye_scale {
            info!(
                "{} 분포의 데바이 길이는 맥스웰 분포의 {:.6}배",
                self.params.vdf, scale
            );
        }

        Ok(VelocityIntegral { values, debye_scale })
    }

    /// 위상 함수 p(y)의 y에 대한 도함수
    ///
    /// 분모가 정확히 0인 점(y = 0)에서는 0/0이므로 한쪽 극한
    /// `sign(y_last)·|K|·|w_c|/|w_c|`를 쓴다.
    pub fn p_d(&self) -> Vec<f64> {
        let p = self.params;
        let cos2 = p.aspect_angle.cos().powi(2);
        let sin2 = p.aspect_angle.sin().powi(2);
        let w_c = p.gyrofreq;
        let k_abs = p.radar_wavenumber.abs();

        // y가 0에서 시작해 위/아래 어느 쪽으로 가는지에 따라 극한의 부호가 정해짐
        let y_last = self.y.last().copied().unwrap_or(0.0);
        let first = sign(y_last) * k_abs * w_c.abs() / w_c.abs();

        self.y
            .iter()
            .map(|&y| {
                let num = k_abs * w_c.abs() * (cos2 * w_c * y + sin2 * (w_c * y).sin());
                let den = w_c
                    * (cos2 * w_c * w_c * y * y - 2.0 * sin2 * (w_c * y).cos() + 2.0 * sin2).sqrt();
                if den == 0.0 {
                    first
                } else {
                    num / den
                }
            })
            .collect()
    }

    /// `p_d(y)·v_int(y)`
    pub fn integrand(&self) -> Result<(Vec<f64>, Option<f64>)> {
        let p_d = self.p_d();
        let v_int = self.v_int()?;
        debug!("등방 피적분 함수: y {}개, 속도 {}개", self.y.len(), self.velocity.points);
        let values = p_d.iter().zip(&v_int.values).map(|(a, b)| a * b).collect();
        Ok((values, v_int.debye_scale))
    }
}
