//! 고르데예프(Gordeyev) 적분 라이브러리
//!
//! 비간섭 산란 레이더(ISR) 스펙트럼 모델에 쓰이는 고르데예프 적분을
//! 맥스웰, 카파, 임의의 등방 속도 분포에 대해 주파수 격자 위에서 병렬 계산한다.

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    // 설정
    GordeyevConfig, SampleGridConfig, VelocityGridConfig, FrequencyGridConfig,
    // 파라미터
    IntegrandKind, VdfKind, PlasmaParameters, Species, TabulatedVdf,
    // 적분기
    FrequencyIntegrator, GordeyevSpectrum, RawIntegral, VelocityIntegrator,
    IntegrandVariant, IntegrandSamples, VelocityDistribution, FrequencyGrid,
};
