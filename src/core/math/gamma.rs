/// 감마 함수 Γ(x)
#[inline]
pub fn gamma(x: f64) -> f64 {
    libm::tgamma(x)
}

/// 오차 함수 erf(x)
#[inline]
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// numpy 규약의 부호 함수 (0이면 0)
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}
