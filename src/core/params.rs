//! # 플라즈마 파라미터와 분포 선택자
//!
//! 분포 태그는 닫힌 열거형으로 다룬다. 목록에 없는 태그는 파싱 단계에서
//! "unsupported distribution" 오류로 거부된다.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::constants::{ATOMIC_MASS, ELECTRON_MASS, ELEMENTARY_CHARGE};

/// 고르데예프 피적분 함수 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrandKind {
    /// 맥스웰 분포 (해석적)
    Maxwell,
    /// 카파 분포 (해석적, 베셀 함수)
    Kappa,
    /// 임의의 등방 분포 (속도 적분 필요)
    Isotropic,
}

/// 등방 피적분 함수에서 쓰는 속도 분포 함수 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdfKind {
    Maxwell,
    Kappa,
    KappaVol2,
    GaussShell,
    RealData,
}

impl VdfKind {
    /// 카파 지수가 필요한 분포인지
    pub fn needs_kappa(self) -> bool {
        matches!(self, VdfKind::Kappa | VdfKind::KappaVol2)
    }
}

impl FromStr for IntegrandKind {
    type Err = anyhow::Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "maxwell" => Ok(IntegrandKind::Maxwell),
            "kappa" => Ok(IntegrandKind::Kappa),
            "isotropic" | "a_vdf" => Ok(IntegrandKind::Isotropic),
            other => Err(anyhow!("unsupported distribution: '{}'", other)),
        }
    }
}

impl FromStr for VdfKind {
    type Err = anyhow::Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "maxwell" => Ok(VdfKind::Maxwell),
            "kappa" => Ok(VdfKind::Kappa),
            "kappa_vol2" => Ok(VdfKind::KappaVol2),
            "gauss_shell" => Ok(VdfKind::GaussShell),
            "real_data" => Ok(VdfKind::RealData),
            other => Err(anyhow!("unsupported distribution: '{}'", other)),
        }
    }
}

impl fmt::Display for IntegrandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            IntegrandKind::Maxwell => "maxwell",
            IntegrandKind::Kappa => "kappa",
            IntegrandKind::Isotropic => "isotropic",
        };
        f.write_str(tag)
    }
}

impl fmt::Display for VdfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            VdfKind::Maxwell => "maxwell",
            VdfKind::Kappa => "kappa",
            VdfKind::KappaVol2 => "kappa_vol2",
            VdfKind::GaussShell => "gauss_shell",
            VdfKind::RealData => "real_data",
        };
        f.write_str(tag)
    }
}

/// 측정된 속도 분포 샘플 (real_data)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabulatedVdf {
    /// 속도 노드 [m/s], 오름차순
    pub v: Vec<f64>,
    /// 각 노드에서의 분포 값
    pub f: Vec<f64>,
}

impl TabulatedVdf {
    /// `{ "v": [...], "f": [...] }` 형태의 JSON 파일 읽기
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("측정 샘플 파일을 읽을 수 없음: {}", path.display()))?;
        let data: Self = serde_json::from_str(&text)
            .with_context(|| format!("측정 샘플 JSON 파싱 실패: {}", path.display()))?;
        if data.v.len() != data.f.len() {
            bail!("shape mismatch: real_data v {}개, f {}개", data.v.len(), data.f.len());
        }
        Ok(data)
    }
}

/// 입자 종 (적분 호출마다 바뀌는 값)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    /// 자이로 주파수 w_c [rad/s]
    pub gyrofreq: f64,
    /// 입자 질량 [kg]
    pub mass: f64,
    /// 온도 [K]
    pub temperature: f64,
    /// 충돌 주파수 / 자이로 주파수
    pub collision_ratio: f64,
}

impl Species {
    pub fn new(gyrofreq: f64, mass: f64, temperature: f64, collision_ratio: f64) -> Self {
        Self { gyrofreq, mass, temperature, collision_ratio }
    }

    /// 자기장 `b_field` [T] 안의 전자
    pub fn electron(b_field: f64, temperature: f64, collision_ratio: f64) -> Self {
        Self::new(ELEMENTARY_CHARGE * b_field / ELECTRON_MASS, ELECTRON_MASS, temperature, collision_ratio)
    }

    /// 자기장 `b_field` [T] 안의 1가 이온 (질량은 원자 질량 단위)
    pub fn ion(mass_amu: f64, b_field: f64, temperature: f64, collision_ratio: f64) -> Self {
        let mass = mass_amu * ATOMIC_MASS;
        Self::new(ELEMENTARY_CHARGE * b_field / mass, mass, temperature, collision_ratio)
    }

    /// 충돌 주파수 ν = Λ·w_c
    pub fn collision_frequency(&self) -> f64 {
        self.collision_ratio * self.gyrofreq
    }
}

/// 한 번의 적분 동안 변하지 않는 플라즈마 파라미터
#[derive(Debug, Clone, PartialEq)]
pub struct PlasmaParameters {
    /// 자이로 주파수 w_c [rad/s]
    pub gyrofreq: f64,
    /// 입자 질량 [kg]
    pub mass: f64,
    /// 온도 [K]
    pub temperature: f64,
    /// 충돌 주파수 / 자이로 주파수
    pub collision_ratio: f64,
    /// 레이더 파수 K [rad/m]
    pub radar_wavenumber: f64,
    /// 자기장과 레이더 파수 벡터 사이 각 [rad]
    pub aspect_angle: f64,
    /// 충돌 주파수 ν [rad/s]
    pub collision_freq: f64,
    /// 카파 지수 (카파 계열 분포에서만)
    pub kappa: Option<f64>,
    /// 등방 피적분 함수의 속도 분포
    pub vdf: VdfKind,
    /// 가우스 껍질 반지름 (열속도 단위)
    pub shell_radius: f64,
    /// real_data 샘플
    pub real_data: Option<TabulatedVdf>,
}

impl PlasmaParameters {
    pub fn new(species: &Species, radar_wavenumber: f64, aspect_angle: f64) -> Self {
        Self {
            gyrofreq: species.gyrofreq,
            mass: species.mass,
            temperature: species.temperature,
            collision_ratio: species.collision_ratio,
            radar_wavenumber,
            aspect_angle,
            collision_freq: species.collision_frequency(),
            kappa: None,
            vdf: VdfKind::Maxwell,
            shell_radius: 10.0,
            real_data: None,
        }
    }

    pub fn with_kappa(mut self, kappa: Option<f64>) -> Self {
        self.kappa = kappa;
        self
    }

    pub fn with_vdf(mut self, vdf: VdfKind) -> Self {
        self.vdf = vdf;
        self
    }

    pub fn with_shell_radius(mut self, shell_radius: f64) -> Self {
        self.shell_radius = shell_radius;
        self
    }

    pub fn with_real_data(mut self, real_data: Option<TabulatedVdf>) -> Self {
        self.real_data = real_data;
        self
    }

    /// 카파 지수 (없으면 오류)
    pub fn require_kappa(&self) -> Result<f64> {
        match self.kappa {
            Some(kappa) => Ok(kappa),
            None => bail!("kappa 분포에는 형태 파라미터(kappa)가 필요함"),
        }
    }

    /// 자기장 수직 파수 K·sinθ
    pub fn k_perp(&self) -> f64 {
        self.radar_wavenumber * self.aspect_angle.sin()
    }

    /// 자기장 평행 파수 K·cosθ
    pub fn k_par(&self) -> f64 {
        self.radar_wavenumber * self.aspect_angle.cos()
    }
}
