//! # 속도 공간 적분
//!
//! 고르데예프 적분 변수 y의 각 샘플에서
//! `∫ v·sin(p(y)·v)·f(v) dv` 를 계산한다 (Mace 2003).

use anyhow::{bail, Result};

use crate::core::math::simpson;
use crate::core::parallel::SlotBuffer;
use crate::core::params::PlasmaParameters;


/// y 샘플별 속도 적분기
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityIntegrator;

impl VelocityIntegrator {
    /// y 샘플마다 속도 적분을 계산해 y와 같은 길이로 반환
    ///
    /// # Arguments
    /// * `y` - 고르데예프 적분 변수 샘플
    /// * `params` - 플라즈마 파라미터
    /// * `v` - 속도 노드
    /// * `f` - 속도 노드에서의 분포 값
    pub fn integrand(
        &self,
        y: &[f64],
        params: &PlasmaParameters,
        v: &[f64],
        f: &[f64],
    ) -> Result<Vec<f64>> {
        if v.len() != f.len() {
            bail!("shape mismatch: 속도 노드 {}개, 분포 값 {}개", v.len(), f.len());
        }
        if v.len() < 2 {
            bail!("속도 노드는 최소 2개 필요");
        }

        // 호출마다 새로 만드는 버퍼, 슬롯 i는 y[i] 전용
        let mut buffer = SlotBuffer::new(y.len(), f64::NAN);
        buffer.try_fill(|index| v_int_integrand(y[index], params, v, f))?;
        Ok(buffer.into_inner())
    }
}

/// 한 y 샘플에서의 속도 적분
pub fn v_int_integrand(y: f64, params: &PlasmaParameters, v: &[f64], f: &[f64]) -> Result<f64> {
    let p = p(y, params);
    let values: Vec<f64> = v
        .iter()
        .zip(f)
        .map(|(&v, &f)| v * (p * v).sin() * f)
        .collect();
    simpson(&values, v)
}

/// `p(y) = sqrt(2 k⊥²/w_c² (1 - cos(y w_c)) + k∥² y²)`
pub fn p(y: f64, params: &PlasmaParameters) -> f64 {
    let k_perp = params.k_perp();
    let k_par = params.k_par();
    let w_c = params.gyrofreq;
    (2.0 * k_perp * k_perp / (w_c * w_c) * (1.0 - (y * w_c).cos()) + k_par * k_par * y * y).sqrt()
}
