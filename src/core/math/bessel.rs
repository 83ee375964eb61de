//! 제2종 변형 베셀 함수 K_ν (실수 차수)
//!
//! |μ| ≤ 1/2 인 K_μ, K_{μ+1}을 구한 뒤 위쪽 점화식으로 K_ν까지 올라간다.
//! x < 2 에서는 Temme 급수, x ≥ 2 에서는 Steed 연분수(CF2)를 쓴다.

use std::f64::consts::PI;

const EPS: f64 = 1e-16;
const MAX_ITER: usize = 10_000;
const SERIES_LIMIT: f64 = 2.0;

/// Γ₁, Γ₂ 체비셰프 계수
const GAM1_COEFFS: [f64; 7] = [
    -1.142022680371168e0,
    6.5165112670737e-3,
    3.087090173086e-4,
    -3.4706269649e-6,
    6.9437664e-9,
    3.67795e-11,
    -1.356e-13,
];
const GAM2_COEFFS: [f64; 8] = [
    1.843740587300905e0,
    -7.68528408447867e-2,
    1.2719271366546e-3,
    -4.9717367042e-6,
    -3.31261198e-8,
    2.423096e-10,
    -1.702e-13,
    -1.49e-15,
];

/// 제2종 변형 베셀 함수 `K_ν(x)`
///
/// `x == 0`이면 `+∞`, 음수 또는 NaN 입력이면 NaN.
/// 큰 차수와 작은 인자에서는 점화식이 f64 범위를 넘어 `+∞`가 될 수 있다.
pub fn bessel_kv(nu: f64, x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    if x.is_infinite() {
        return 0.0;
    }

    // K_{-ν} = K_ν
    let nu = nu.abs();
    let steps = (nu + 0.5).floor() as usize;
    let mu = nu - steps as f64;

    let (mut k_mu, mut k_mu1) = if x < SERIES_LIMIT {
        temme_series(mu, x)
    } else {
        steed_fraction(mu, x)
    };

    let two_over_x = 2.0 / x;
    for i in 1..=steps {
        let next = (mu + i as f64) * two_over_x * k_mu1 + k_mu;
        k_mu = k_mu1;
        k_mu1 = next;
    }
    k_mu
}

/// 작은 인자: (K_μ, K_{μ+1})
fn temme_series(mu: f64, x: f64) -> (f64, f64) {
    let half_x = 0.5 * x;
    let pi_mu = PI * mu;
    let fact = if pi_mu.abs() < EPS { 1.0 } else { pi_mu / pi_mu.sin() };
    let d = -half_x.ln();
    let e = mu * d;
    let fact2 = if e.abs() < EPS { 1.0 } else { e.sinh() / e };

    let (gam1, gam2, gam_plus, gam_minus) = temme_gammas(mu);

    let mut ff = fact * (gam1 * e.cosh() + gam2 * fact2 * d);
    let mut sum = ff;
    let e = e.exp();
    let mut p = 0.5 * e / gam_plus;
    let mut q = 0.5 / (e * gam_minus);
    let mut c = 1.0;
    let d = half_x * half_x;
    let mut sum1 = p;
    let mu2 = mu * mu;

    for i in 1..=MAX_ITER {
        let fi = i as f64;
        ff = (fi * ff + p + q) / (fi * fi - mu2);
        c *= d / fi;
        p /= fi - mu;
        q /= fi + mu;
        let del = c * ff;
        sum += del;
        sum1 += c * (p - fi * ff);
        if del.abs() < sum.abs() * EPS {
            break;
        }
    }

    (sum, sum1 * 2.0 / x)
}

/// 큰 인자: (K_μ, K_{μ+1})
fn steed_fraction(mu: f64, x: f64) -> (f64, f64) {
    let mu2 = mu * mu;
    let mut b = 2.0 * (1.0 + x);
    let mut d = 1.0 / b;
    let mut delh = d;
    let mut h = d;
    let mut q1 = 0.0;
    let mut q2 = 1.0;
    let a1 = 0.25 - mu2;
    let mut q = a1;
    let mut c = a1;
    let mut a = -a1;
    let mut s = 1.0 + q * delh;

    for i in 2..=MAX_ITER {
        let fi = i as f64;
        a -= 2.0 * (fi - 1.0);
        c = -a * c / fi;
        let q_new = (q1 - b * q2) / a;
        q1 = q2;
        q2 = q_new;
        q += c * q_new;
        b += 2.0;
        d = 1.0 / (b + a * d);
        delh = (b * d - 1.0) * delh;
        h += delh;
        let dels = q * delh;
        s += dels;
        if (dels / s).abs() < EPS {
            break;
        }
    }

    h *= a1;
    let k_mu = (PI / (2.0 * x)).sqrt() * (-x).exp() / s;
    let k_mu1 = k_mu * (mu + x + 0.5 - h) / x;
    (k_mu, k_mu1)
}

/// Temme 급수용 Γ₁(μ), Γ₂(μ), 1/Γ(1+μ), 1/Γ(1-μ)
fn temme_gammas(mu: f64) -> (f64, f64, f64, f64) {
    let t = 8.0 * mu * mu - 1.0;
    let gam1 = chebyshev(&GAM1_COEFFS, t);
    let gam2 = chebyshev(&GAM2_COEFFS, t);
    (gam1, gam2, gam2 - mu * gam1, gam2 + mu * gam1)
}

/// [-1, 1] 구간 체비셰프 급수 (Clenshaw)
fn chebyshev(coeffs: &[f64], t: f64) -> f64 {
    let t2 = 2.0 * t;
    let (mut d, mut dd) = (0.0, 0.0);
    for &c in coeffs[1..].iter().rev() {
        let sv = d;
        d = t2 * d - dd + c;
        dd = sv;
    }
    t * d - dd + 0.5 * coeffs[0]
}
