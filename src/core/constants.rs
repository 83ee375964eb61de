//! 물리 상수 (CODATA 2018)

/// 볼츠만 상수 [J/K]
pub const BOLTZMANN: f64 = 1.380649e-23;

/// 진공 중 광속 [m/s]
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// 통일 원자 질량 단위 [kg]
pub const ATOMIC_MASS: f64 = 1.660_539_066_60e-27;

/// 전자 질량 [kg]
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// 기본 전하 [C]
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// 열속도의 제곱 `T·k_B/m`
#[inline]
pub fn thermal_speed_squared(temperature: f64, mass: f64) -> f64 {
    temperature * BOLTZMANN / mass
}
