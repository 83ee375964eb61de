// 각 모듈이 자체 테스트를 포함함
pub mod bessel;
pub mod gamma;
pub mod grid;
pub mod simpson;


// 재수출
pub use bessel::bessel_kv;
pub use gamma::{erf, gamma, sign};
pub use grid::{power_law_grid, FrequencyGrid, FrequencyGridConfig};
pub use simpson::{simpson, Integrable};
