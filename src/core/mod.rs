//! # 고르데예프 적분 핵심 모듈
//!
//! 수치 적분, 피적분 함수 카탈로그, 속도 적분, 주파수 적분

pub mod config;
pub mod constants;
pub mod frequency;
pub mod integrand;
pub mod math;
pub mod parallel;
pub mod params;
pub mod vdf;
pub mod velocity;

#[cfg(test)]
mod __tests__;

// 주요 타입들 재수출
pub use config::{GordeyevConfig, SampleGridConfig, VelocityGridConfig};
pub use frequency::{FrequencyIntegrator, GordeyevSpectrum, RawIntegral};
pub use integrand::{IntegrandSamples, IntegrandVariant};
pub use math::{FrequencyGrid, FrequencyGridConfig};
pub use params::{IntegrandKind, PlasmaParameters, Species, TabulatedVdf, VdfKind};
pub use vdf::VelocityDistribution;
pub use velocity::VelocityIntegrator;
