//! # 적분기 구성 설정
//!
//! 레이더, 격자 해상도, 등방 분포 형태, 병렬 처리 설정. JSON으로 불러올 수 있다.
//! 모르는 키가 있으면 파싱 오류로 거부한다.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

use crate::core::constants::SPEED_OF_LIGHT;
use crate::core::math::FrequencyGridConfig;
use crate::core::params::{TabulatedVdf, VdfKind};

/// 적분기 전체 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GordeyevConfig {
    /// 레이더 송신 주파수 [Hz]
    pub radar_frequency: f64,
    /// 자기장과 레이더 빔 사이 각 [deg]
    pub aspect_angle_deg: f64,
    /// 주파수 격자
    pub frequency: FrequencyGridConfig,
    /// 고르데예프 적분 변수 y 격자
    pub y_grid: SampleGridConfig,
    /// 등방 분포용 속도 격자
    pub velocity: VelocityGridConfig,
    /// 등방 피적분 함수의 속도 분포
    pub vdf: VdfKind,
    /// 가우스 껍질 반지름 (열속도 단위)
    pub shell_radius: f64,
    /// real_data 분포의 측정 샘플
    pub real_data: Option<TabulatedVdf>,
    /// 작업자 스레드 수 (None이면 CPU 수)
    pub threads: Option<usize>,
    /// 진행률 바 표시
    pub show_progress: bool,
    /// 등방 분포에서 데바이 길이 배율 계산
    pub debye_scale_metric: bool,
}

/// y 격자 설정: `linspace(0, y_max^(1/order), points)^order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleGridConfig {
    /// 샘플 수
    pub points: usize,
    /// 간격 차수
    pub order: f64,
}

/// 속도 격자 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VelocityGridConfig {
    /// 최대 속도 [m/s]
    pub v_max: f64,
    /// 샘플 수
    pub points: usize,
    /// 간격 차수
    pub order: f64,
}

impl Default for GordeyevConfig {
    fn default() -> Self {
        Self {
            radar_frequency: 933e6,
            aspect_angle_deg: 45.0,
            frequency: FrequencyGridConfig::default(),
            y_grid: SampleGridConfig::default(),
            velocity: VelocityGridConfig::default(),
            vdf: VdfKind::Maxwell,
            shell_radius: 10.0,
            real_data: None,
            threads: None,
            show_progress: true,
            debye_scale_metric: true,
        }
    }
}

impl Default for SampleGridConfig {
    fn default() -> Self {
        Self {
            points: 10_001,
            order: 3.0,
        }
    }
}

impl Default for VelocityGridConfig {
    fn default() -> Self {
        Self {
            v_max: 6e6,
            points: 4_001,
            order: 3.0,
        }
    }
}

impl GordeyevConfig {
    /// JSON 문자열에서 설정 읽기 (빠진 필드는 기본값)
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("설정 JSON 파싱 실패")?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 파일에서 설정 읽기
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("설정 파일을 읽을 수 없음: {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// 후방 산란 파수 K = -2·(2π f / c)
    pub fn radar_wavenumber(&self) -> f64 {
        -2.0 * 2.0 * PI * self.radar_frequency / SPEED_OF_LIGHT
    }

    /// 측면각 [rad]
    pub fn aspect_angle(&self) -> f64 {
        self.aspect_angle_deg.to_radians()
    }

    /// 작업자 수
    pub fn worker_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// 구조적으로 잘못된 설정 검사
    pub fn validate(&self) -> Result<()> {
        if self.frequency.n_points == 0 {
            bail!("주파수 격자 점 수가 0");
        }
        if self.y_grid.points < 3 {
            bail!("y 격자 점은 최소 3개 필요: {}", self.y_grid.points);
        }
        if self.velocity.points < 3 {
            bail!("속도 격자 점은 최소 3개 필요: {}", self.velocity.points);
        }
        if self.y_grid.order <= 0.0 || self.velocity.order <= 0.0 {
            bail!("격자 차수는 양수여야 함");
        }
        if self.velocity.v_max <= 0.0 {
            bail!("최대 속도는 양수여야 함: {}", self.velocity.v_max);
        }
        if !(self.shell_radius.is_finite() && self.shell_radius > 0.0) {
            bail!("가우스 껍질 반지름은 양수여야 함: {}", self.shell_radius);
        }
        if let Some(data) = &self.real_data {
            if data.v.len() != data.f.len() {
                bail!("shape mismatch: real_data v {}개, f {}개", data.v.len(), data.f.len());
            }
        }
        if self.threads == Some(0) {
            bail!("작업자 스레드 수가 0");
        }
        Ok(())
    }
}
