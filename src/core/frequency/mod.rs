//! # 주파수 격자 위의 고르데예프 적분
//!
//! `F(w) = 1 - (i·w + ν)·∫_0^{T_max} g(y)·e^{-iwy} dy`  (Hagfors 1968)
//!
//! g(y)는 주파수와 무관하므로 호출마다 한 번만 계산하고,
//! 그 뒤 (index, w) 작업 단위를 작업자 풀에 펼친다.

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use num_complex::Complex64;
use rayon::ThreadPool;
use std::time::{Duration, Instant};

use crate::core::config::GordeyevConfig;
use crate::core::integrand::{kappa, IntegrandVariant};
use crate::core::math::{power_law_grid, simpson, FrequencyGrid};
use crate::core::parallel::{build_pool, SlotBuffer};
use crate::core::params::{IntegrandKind, PlasmaParameters, Species};


/// 적분 결과 스펙트럼
#[derive(Debug, Clone, PartialEq)]
pub struct GordeyevSpectrum {
    /// 각주파수 [rad/s]
    pub frequencies: Vec<f64>,
    /// 주파수 격자에 정렬된 F(w)
    pub values: Vec<Complex64>,
    /// 등방 분포의 데바이 길이 배율 (맥스웰 기준)
    pub debye_scale: Option<f64>,
}

/// 정규화 전 적분값 a(w)
#[derive(Debug, Clone, PartialEq)]
pub struct RawIntegral {
    pub values: Vec<Complex64>,
    pub debye_scale: Option<f64>,
}

/// 주파수 적분기
pub struct FrequencyIntegrator {
    config: GordeyevConfig,
    grid: FrequencyGrid,
    pool: ThreadPool,
}

impl FrequencyIntegrator {
    /// 설정의 선형 주파수 격자로 적분기 생성
    pub fn new(config: GordeyevConfig) -> Result<Self> {
        config.validate()?;
        let grid = FrequencyGrid::linear(&config.frequency)?;
        Self::with_grid(config, grid)
    }

    /// 임의의 주파수 격자로 적분기 생성
    pub fn with_grid(config: GordeyevConfig, grid: FrequencyGrid) -> Result<Self> {
        config.validate()?;
        let pool = build_pool(config.worker_threads())?;
        debug!(
            "주파수 적분기: 격자 {}개, 작업자 {}개",
            grid.len(),
            pool.current_num_threads()
        );
        Ok(Self { config, grid, pool })
    }

    pub fn config(&self) -> &GordeyevConfig {
        &self.config
    }

    pub fn grid(&self) -> &FrequencyGrid {
        &self.grid
    }

    /// 입자 종과 설정으로 플라즈마 파라미터 구성
    ///
    /// 등방 분포의 VDF 종류, 껍질 반지름, 측정 샘플은 설정에서 가져온다.
    pub fn plasma_parameters(&self, species: &Species, kappa: Option<f64>) -> PlasmaParameters {
        PlasmaParameters::new(species, self.config.radar_wavenumber(), self.config.aspect_angle())
            .with_kappa(kappa)
            .with_vdf(self.config.vdf)
            .with_shell_radius(self.config.shell_radius)
            .with_real_data(self.config.real_data.clone())
    }

    /// 0부터 `upper_limit`까지 적분해 F(w)를 계산
    ///
    /// # Arguments
    /// * `species` - 자이로 주파수, 질량, 온도, 충돌 비율
    /// * `upper_limit` - 적분 상한 T_max [s]
    /// * `distribution` - 피적분 함수 종류
    /// * `kappa` - 카파 지수 (카파 계열에서만)
    pub fn integrate(
        &self,
        species: &Species,
        upper_limit: f64,
        distribution: IntegrandKind,
        kappa: Option<f64>,
    ) -> Result<GordeyevSpectrum> {
        let params = self.plasma_parameters(species, kappa);
        self.integrate_params(&params, upper_limit, distribution)
    }

    /// 완성된 파라미터로 적분 (등방 분포의 VDF 선택 등)
    pub fn integrate_params(
        &self,
        params: &PlasmaParameters,
        upper_limit: f64,
        distribution: IntegrandKind,
    ) -> Result<GordeyevSpectrum> {
        let raw = self.raw_integral(params, upper_limit, distribution)?;
        let scale = match distribution {
            IntegrandKind::Kappa => kappa::normalization(params.require_kappa()?),
            IntegrandKind::Maxwell | IntegrandKind::Isotropic => 1.0,
        };

        let w = self.grid.angular();
        let nu = params.collision_freq;
        let mut buffer = SlotBuffer::from_values(raw.values);
        self.pool.install(|| {
            buffer.map_in_place(|index, a| {
                Complex64::new(1.0, 0.0) - Complex64::new(nu, w[index]) * (a / scale)
            })
        });

        Ok(GordeyevSpectrum {
            frequencies: w.to_vec(),
            values: buffer.into_inner(),
            debye_scale: raw.debye_scale,
        })
    }

    /// 정규화·변환 전의 `a(w) = ∫ g(y)·e^{-iwy} dy`
    pub fn raw_integral(
        &self,
        params: &PlasmaParameters,
        upper_limit: f64,
        distribution: IntegrandKind,
    ) -> Result<RawIntegral> {
        if !upper_limit.is_finite() || upper_limit == 0.0 {
            bail!("적분 상한이 유효하지 않음: {}", upper_limit);
        }
        let start = Instant::now();
        let y = power_law_grid(upper_limit, self.config.y_grid.order, self.config.y_grid.points)?;
        let w = self.grid.angular();

        let progress = self.progress_bar();

        let raw = self.pool.install(|| -> Result<RawIntegral> {
            // 피적분 함수 단계는 작업 단위가 없으므로 스피너만 돈다
            progress.set_message(format!("{} 피적분 함수 계산 중 (y {}개)", distribution, y.len()));
            progress.enable_steady_tick(Duration::from_millis(120));
            let samples = IntegrandVariant::initialize(distribution, &y, params, &self.config.velocity)?
                .with_debye_metric(self.config.debye_scale_metric)
                .integrand()?;
            let g = &samples.values;

            progress.disable_steady_tick();
            progress.set_message(format!("{} 주파수 적분 중", distribution));

            // 호출 범위 버퍼, 슬롯 i는 주파수 w[i] 전용
            let mut buffer = SlotBuffer::new(w.len(), Complex64::new(f64::NAN, f64::NAN));
            buffer.try_fill(|index| {
                let value = transform_at(w[index], g, &y)?;
                progress.inc(1);
                Ok(value)
            })?;

            Ok(RawIntegral {
                values: buffer.into_inner(),
                debye_scale: samples.debye_scale,
            })
        });

        progress.finish_and_clear();
        let raw = raw?;
        info!(
            "{} 고르데예프 적분 완료: 주파수 {}개, y {}개, {:.2?}",
            distribution,
            w.len(),
            y.len(),
            start.elapsed()
        );
        Ok(raw)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let progress = ProgressBar::new(self.grid.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len:5} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        progress
    }
}

/// 한 주파수에서 `∫ g(y)·e^{-iwy} dy`
pub fn transform_at(w: f64, g: &[f64], y: &[f64]) -> Result<Complex64> {
    let values: Vec<Complex64> = g
        .iter()
        .zip(y)
        .map(|(&g, &y)| Complex64::new((w * y).cos(), -(w * y).sin()) * g)
        .collect();
    simpson(&values, y)
}
