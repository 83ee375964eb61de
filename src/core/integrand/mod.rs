//! # 고르데예프 피적분 함수 카탈로그
//!
//! 분포 선택자 → 피적분 함수 매핑은 `IntegrandKind`에 대한 `match` 하나로
//! 정해진다. 새 분포는 열거형에 변형을 추가해야만 들어올 수 있다.

pub mod isotropic;
pub mod kappa;
pub mod maxwell;

#[cfg(test)]
mod __tests__;

use anyhow::{bail, Result};

use crate::core::config::VelocityGridConfig;
use crate::core::params::{IntegrandKind, PlasmaParameters};

pub use isotropic::{IsotropicIntegrand, VelocityIntegral};
pub use kappa::KappaIntegrand;
pub use maxwell::MaxwellIntegrand;

/// y 샘플에 정렬된 피적분 함수 값
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrandSamples {
    pub values: Vec<f64>,
    /// 등방 분포에서만 계산되는 데바이 길이 배율
    pub debye_scale: Option<f64>,
}

/// 닫힌 피적분 함수 변형
#[derive(Debug, Clone)]
pub enum IntegrandVariant<'a> {
    Maxwell(MaxwellIntegrand<'a>),
    Kappa(KappaIntegrand<'a>),
    Isotropic(IsotropicIntegrand<'a>),
}

impl<'a> IntegrandVariant<'a> {
    /// 적분 변수 샘플 `y`와 파라미터로 변형을 초기화
    ///
    /// `velocity`는 등방 분포에서만 쓰인다.
    pub fn initialize(
        kind: IntegrandKind,
        y: &'a [f64],
        params: &'a PlasmaParameters,
        velocity: &'a VelocityGridConfig,
    ) -> Result<Self> {
        if y.is_empty() {
            bail!("적분 변수 샘플이 비어 있음");
        }
        let variant = match kind {
            IntegrandKind::Maxwell => IntegrandVariant::Maxwell(MaxwellIntegrand::initialize(y, params)),
            IntegrandKind::Kappa => IntegrandVariant::Kappa(KappaIntegrand::initialize(y, params)?),
            IntegrandKind::Isotropic => {
                if params.vdf.needs_kappa() {
                    params.require_kappa()?;
                }
                IntegrandVariant::Isotropic(IsotropicIntegrand::initialize(y, params, velocity))
            }
        };
        Ok(variant)
    }

    /// 등방 분포의 데바이 길이 배율 계산 여부
    pub fn with_debye_metric(self, enabled: bool) -> Self {
        match self {
            IntegrandVariant::Isotropic(inner) => IntegrandVariant::Isotropic(inner.with_debye_metric(enabled)),
            other => other,
        }
    }

    pub fn kind(&self) -> IntegrandKind {
        match self {
            IntegrandVariant::Maxwell(_) => IntegrandKind::Maxwell,
            IntegrandVariant::Kappa(_) => IntegrandKind::Kappa,
            IntegrandVariant::Isotropic(_) => IntegrandKind::Isotropic,
        }
    }

    /// 피적분 함수 값
    pub fn integrand(&self) -> Result<IntegrandSamples> {
        let samples = match self {
            IntegrandVariant::Maxwell(inner) => IntegrandSamples {
                values: inner.integrand(),
                debye_scale: None,
            },
            IntegrandVariant::Kappa(inner) => IntegrandSamples {
                values: inner.integrand(),
                debye_scale: None,
            },
            IntegrandVariant::Isotropic(inner) => {
                let (values, debye_scale) = inner.integrand()?;
                IntegrandSamples { values, debye_scale }
            }
        };
        Ok(samples)
    }
}
