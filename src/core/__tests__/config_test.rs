use crate::core::config::GordeyevConfig;
use crate::core::params::{TabulatedVdf, VdfKind};
use approx::assert_relative_eq;
use std::io::Write;

#[test]
fn 기본_설정_유효성_테스트() -> anyhow::Result<()> {
    let config = GordeyevConfig::default();
    config.validate()?;
    assert_relative_eq!(config.radar_wavenumber(), -39.12, max_relative = 1e-3);
    assert_relative_eq!(config.aspect_angle(), std::f64::consts::FRAC_PI_4);
    assert!(config.worker_threads() >= 1);
    Ok(())
}

#[test]
fn 부분_json_설정_테스트() -> anyhow::Result<()> {
    let config = GordeyevConfig::from_json_str(
        r#"{ "aspect_angle_deg": 10.0, "y_grid": { "points": 501 }, "threads": 2 }"#,
    )?;
    assert_eq!(config.aspect_angle_deg, 10.0);
    assert_eq!(config.y_grid.points, 501);
    assert_eq!(config.y_grid.order, 3.0);
    assert_eq!(config.worker_threads(), 2);
    assert_eq!(config.frequency, GordeyevConfig::default().frequency);
    Ok(())
}

#[test]
fn 잘못된_설정_오류_테스트() {
    assert!(GordeyevConfig::from_json_str(r#"{ "y_grid": { "points": 1 } }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "threads": 0 }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "velocity": { "v_max": -1.0 } }"#).is_err());
    assert!(GordeyevConfig::from_json_str("not json").is_err());
}

#[test]
fn 설정_파일_읽기_테스트() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "radar_frequency": 224e6, "show_progress": false }}"#)?;
    let config = GordeyevConfig::from_json_file(file.path())?;
    assert_eq!(config.radar_frequency, 224e6);
    assert!(!config.show_progress);

    assert!(GordeyevConfig::from_json_file("/nonexistent/gordeyev.json").is_err());
    Ok(())
}

#[test]
fn 등방_분포_형태_json_테스트() -> anyhow::Result<()> {
    let config = GordeyevConfig::from_json_str(
        r#"{ "shell_radius": 3.0, "real_data": { "v": [0, 1], "f": [1, 1] }, "vdf": "real_data" }"#,
    )?;
    assert_ne!(config, GordeyevConfig::default());
    assert_eq!(config.vdf, VdfKind::RealData);
    assert_eq!(config.shell_radius, 3.0);
    assert_eq!(
        config.real_data,
        Some(TabulatedVdf { v: vec![0.0, 1.0], f: vec![1.0, 1.0] })
    );

    // 직렬화 후 다시 읽어도 같음
    let text = serde_json::to_string(&config)?;
    assert_eq!(GordeyevConfig::from_json_str(&text)?, config);
    Ok(())
}

#[test]
fn 모르는_키_거부_테스트() {
    assert!(GordeyevConfig::from_json_str(r#"{ "shell_radus": 3.0 }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "y_grid": { "pts": 501 } }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "frequency": { "fmax": 1e4 } }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "real_data": { "v": [0], "f": [1], "w": [2] } }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "vdf": "gauss" }"#).is_err());
}

#[test]
fn 등방_분포_형태_검증_테스트() {
    assert!(GordeyevConfig::from_json_str(r#"{ "shell_radius": -1.0 }"#).is_err());
    assert!(GordeyevConfig::from_json_str(r#"{ "shell_radius": 0.0 }"#).is_err());
    assert!(
        GordeyevConfig::from_json_str(r#"{ "real_data": { "v": [0, 1, 2], "f": [1, 1] } }"#).is_err()
    );
}
