//! 적분 변수 및 주파수 격자

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// `linspace(0, max^(1/order), n)^order` 형태의 거듭제곱 간격 격자
///
/// `order > 1`이면 원점 근처에 노드가 밀집한다.
pub fn power_law_grid(max: f64, order: f64, n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        bail!("격자 점은 최소 2개 필요: {}", n);
    }
    if order <= 0.0 || !order.is_finite() {
        bail!("격자 차수는 양수여야 함: {}", order);
    }
    let top = max.signum() * max.abs().powf(1.0 / order);
    let step = top / (n - 1) as f64;
    Ok((0..n)
        .map(|i| {
            let base = if i == n - 1 { top } else { i as f64 * step };
            base.signum() * base.abs().powf(order)
        })
        .collect())
}

/// 주파수 격자 설정 [Hz]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrequencyGridConfig {
    /// 최소 주파수
    pub f_min: f64,
    /// 최대 주파수
    pub f_max: f64,
    /// 샘플 수
    pub n_points: usize,
}

impl Default for FrequencyGridConfig {
    fn default() -> Self {
        Self {
            f_min: 0.0,
            f_max: 2e4,
            n_points: 1_000,
        }
    }
}

/// 각주파수 샘플 [rad/s] (읽기 전용)
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    w: Vec<f64>,
}

impl FrequencyGrid {
    /// `f_min..=f_max` 선형 격자를 각주파수로 변환
    pub fn linear(config: &FrequencyGridConfig) -> Result<Self> {
        if config.n_points == 0 {
            bail!("주파수 격자가 비어 있음");
        }
        if config.n_points == 1 {
            return Ok(Self { w: vec![2.0 * PI * config.f_min] });
        }
        let df = (config.f_max - config.f_min) / (config.n_points - 1) as f64;
        let w = (0..config.n_points)
            .map(|i| 2.0 * PI * (config.f_min + i as f64 * df))
            .collect();
        Ok(Self { w })
    }

    /// 임의의 각주파수 샘플로 격자 생성
    pub fn from_angular(w: Vec<f64>) -> Result<Self> {
        if w.is_empty() {
            bail!("주파수 격자가 비어 있음");
        }
        Ok(Self { w })
    }

    pub fn angular(&self) -> &[f64] {
        &self.w
    }

    /// 선형 주파수 [Hz]
    pub fn hertz(&self) -> Vec<f64> {
        self.w.iter().map(|w| w / (2.0 * PI)).collect()
    }

    pub fn len(&self) -> usize {
        self.w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }
}
