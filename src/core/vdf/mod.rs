//! # 속도 분포 함수 (VDF)
//!
//! 등방 피적분 함수가 쓰는 정규화된 3차원 등방 분포 f(|v|).
//! 모든 해석적 분포는 `4π ∫ v² f(v) dv = 1`을 만족한다.

use anyhow::{bail, Result};
use std::f64::consts::PI;

use crate::core::constants::thermal_speed_squared;
use crate::core::math::{erf, gamma};
use crate::core::params::{PlasmaParameters, TabulatedVdf, VdfKind};


/// 정규화 상수가 계산된 속도 분포
#[derive(Debug, Clone, PartialEq)]
pub enum VelocityDistribution {
    Maxwell {
        norm: f64,
        vth2: f64,
    },
    Kappa {
        norm: f64,
        kappa: f64,
        theta2: f64,
    },
    KappaVol2 {
        norm: f64,
        kappa: f64,
        vth2: f64,
    },
    GaussShell {
        norm: f64,
        radius: f64,
        vth2: f64,
    },
    RealData(TabulatedVdf),
}

impl VelocityDistribution {
    /// `kind` 분포를 `params`로 정규화
    pub fn new(kind: VdfKind, params: &PlasmaParameters) -> Result<Self> {
        let vth2 = thermal_speed_squared(params.temperature, params.mass);
        let vdf = match kind {
            VdfKind::Maxwell => VelocityDistribution::Maxwell {
                norm: (2.0 * PI * vth2).powf(-1.5),
                vth2,
            },
            VdfKind::Kappa => {
                let kappa = params.require_kappa()?;
                let theta2 = 2.0 * ((kappa - 1.5) / kappa) * vth2;
                VelocityDistribution::Kappa {
                    norm: (PI * kappa * theta2).powf(-1.5) * gamma(kappa + 1.0) / gamma(kappa - 0.5),
                    kappa,
                    theta2,
                }
            }
            VdfKind::KappaVol2 => {
                let kappa = params.require_kappa()?;
                VelocityDistribution::KappaVol2 {
                    norm: (PI * kappa * vth2).powf(-1.5) * gamma(kappa) / gamma(kappa - 1.5),
                    kappa,
                    vth2,
                }
            }
            VdfKind::GaussShell => {
                let radius = params.shell_radius * vth2.sqrt();
                VelocityDistribution::GaussShell {
                    norm: 1.0 / (4.0 * PI * shell_moment(radius, vth2)),
                    radius,
                    vth2,
                }
            }
            VdfKind::RealData => {
                let data = match &params.real_data {
                    Some(data) => data.clone(),
                    None => bail!("real_data 분포에는 측정 샘플이 필요함"),
                };
                if data.v.len() != data.f.len() {
                    bail!("shape mismatch: real_data v {}개, f {}개", data.v.len(), data.f.len());
                }
                if data.v.len() < 2 {
                    bail!("real_data 샘플은 최소 2개 필요");
                }
                VelocityDistribution::RealData(data)
            }
        };
        Ok(vdf)
    }

    /// 속도 노드 `v`에서의 분포 값
    pub fn f_0(&self, v: &[f64]) -> Vec<f64> {
        match self {
            VelocityDistribution::Maxwell { norm, vth2 } => {
                v.iter().map(|&v| norm * (-v * v / (2.0 * vth2)).exp()).collect()
            }
            VelocityDistribution::Kappa { norm, kappa, theta2 } => v
                .iter()
                .map(|&v| norm * (1.0 + v * v / (kappa * theta2)).powf(-kappa - 1.0))
                .collect(),
            VelocityDistribution::KappaVol2 { norm, kappa, vth2 } => v
                .iter()
                .map(|&v| norm * (1.0 + v * v / (kappa * vth2)).powf(-kappa))
                .collect(),
            VelocityDistribution::GaussShell { norm, radius, vth2 } => v
                .iter()
                .map(|&v| norm * (-(v.abs() - radius).powi(2) / (2.0 * vth2)).exp())
                .collect(),
            VelocityDistribution::RealData(data) => v.iter().map(|&v| interpolate(data, v)).collect(),
        }
    }
}

/// 편의 함수: 분포를 만들고 바로 샘플링
pub fn sample(kind: VdfKind, v: &[f64], params: &PlasmaParameters) -> Result<Vec<f64>> {
    Ok(VelocityDistribution::new(kind, params)?.f_0(v))
}

/// `∫_0^∞ v² exp(-(v-r)²/(2σ²)) dv`
fn shell_moment(radius: f64, sigma2: f64) -> f64 {
    let sigma = sigma2.sqrt();
    let gauss = sigma * (PI / 2.0).sqrt() * (1.0 + erf(radius / (sigma * 2f64.sqrt())));
    let edge = (-radius * radius / (2.0 * sigma2)).exp();
    (radius * radius + sigma2) * gauss + sigma2 * radius * edge
}

/// 선형 보간, 측정 범위 밖은 0
fn interpolate(data: &TabulatedVdf, v: f64) -> f64 {
    let (first, last) = (data.v[0], data.v[data.v.len() - 1]);
    if v < first || v > last {
        return 0.0;
    }
    let upper = data.v.partition_point(|&node| node < v).max(1);
    let (v0, v1) = (data.v[upper - 1], data.v[upper]);
    let (f0, f1) = (data.f[upper - 1], data.f[upper]);
    if v1 == v0 {
        return f0;
    }
    f0 + (f1 - f0) * (v - v0) / (v1 - v0)
}
