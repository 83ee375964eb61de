//! 고정 노드 심프슨 적분
//!
//! 샘플 간격이 균일하지 않아도 되는 복합 심프슨 규칙.
//! 샘플 수가 짝수이면 마지막 구간에 Cartwright 보정을 적용한다.

use anyhow::{bail, Result};
use std::ops::{Add, Mul};

/// 심프슨 적분이 가능한 샘플 값 (실수, 복소수)
pub trait Integrable: Copy + Default + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Integrable for T where T: Copy + Default + Add<Output = T> + Mul<f64, Output = T> {}

/// 샘플 `values`를 노드 `samples` 위에서 적분
///
/// # Arguments
/// * `values` - 각 노드에서의 피적분 함수 값
/// * `samples` - 단조 증가(또는 감소)하는 적분 변수 노드
pub fn simpson<T: Integrable>(values: &[T], samples: &[f64]) -> Result<T> {
    if values.len() != samples.len() {
        bail!(
            "shape mismatch: 값 {}개, 노드 {}개",
            values.len(),
            samples.len()
        );
    }

    match samples.len() {
        0 => bail!("적분할 샘플이 없음"),
        1 => Ok(T::default()),
        2 => Ok((values[0] + values[1]) * (0.5 * (samples[1] - samples[0]))),
        n if n % 2 == 1 => Ok(simpson_odd(values, samples)),
        n => {
            // 앞쪽 n-1개(홀수)는 일반 심프슨, 마지막 구간만 보정
            let head = simpson_odd(&values[..n - 1], &samples[..n - 1]);
            let hm2 = samples[n - 2] - samples[n - 3];
            let hm1 = samples[n - 1] - samples[n - 2];
            let alpha = (2.0 * hm1 * hm1 + 3.0 * hm1 * hm2) / (6.0 * (hm2 + hm1));
            let beta = (hm1 * hm1 + 3.0 * hm1 * hm2) / (6.0 * hm2);
            let eta = hm1 * hm1 * hm1 / (6.0 * hm2 * (hm2 + hm1));
            Ok(head + values[n - 1] * alpha + values[n - 2] * beta + values[n - 3] * (-eta))
        }
    }
}

/// 홀수 개 노드에 대한 비균일 복합 심프슨
fn simpson_odd<T: Integrable>(values: &[T], samples: &[f64]) -> T {
    let mut total = T::default();
    for i in (0..samples.len() - 2).step_by(2) {
        let h0 = samples[i + 1] - samples[i];
        let h1 = samples[i + 2] - samples[i + 1];
        let hsum = h0 + h1;
        let ratio = h0 / h1;
        let panel = values[i] * (2.0 - 1.0 / ratio)
            + values[i + 1] * (hsum * hsum / (h0 * h1))
            + values[i + 2] * (2.0 - ratio);
        total = total + panel * (hsum / 6.0);
    }
    total
}
