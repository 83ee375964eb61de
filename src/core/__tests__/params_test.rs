use crate::core::constants::{ATOMIC_MASS, ELECTRON_MASS};
use crate::core::params::{IntegrandKind, PlasmaParameters, Species, TabulatedVdf, VdfKind};
use approx::assert_relative_eq;
use std::io::Write;

#[test]
fn 분포_태그_파싱_테스트() -> anyhow::Result<()> {
    assert_eq!("maxwell".parse::<IntegrandKind>()?, IntegrandKind::Maxwell);
    assert_eq!("kappa".parse::<IntegrandKind>()?, IntegrandKind::Kappa);
    assert_eq!("isotropic".parse::<IntegrandKind>()?, IntegrandKind::Isotropic);

    for tag in ["maxwell", "kappa", "kappa_vol2", "gauss_shell", "real_data"] {
        let kind: VdfKind = tag.parse()?;
        assert_eq!(kind.to_string(), tag);
    }
    Ok(())
}

#[test]
fn 지원하지_않는_분포_오류_테스트() {
    let err = "bimaxwell".parse::<IntegrandKind>().unwrap_err();
    assert!(err.to_string().contains("unsupported distribution"), "{}", err);
    let err = "isotropic".parse::<VdfKind>().unwrap_err();
    assert!(err.to_string().contains("unsupported distribution"), "{}", err);
}

#[test]
fn 카파_지수_필요_여부_테스트() {
    assert!(VdfKind::Kappa.needs_kappa());
    assert!(VdfKind::KappaVol2.needs_kappa());
    assert!(!VdfKind::GaussShell.needs_kappa());
}

#[test]
fn 입자_종_테스트() {
    let electron = Species::electron(3.5e-5, 2000.0, 0.1);
    assert_eq!(electron.mass, ELECTRON_MASS);
    assert_relative_eq!(electron.gyrofreq, 6.155e6, max_relative = 1e-3);
    assert_relative_eq!(electron.collision_frequency(), 0.1 * electron.gyrofreq);

    let ion = Species::ion(16.0, 3.5e-5, 1000.0, 0.0);
    assert_relative_eq!(ion.mass, 16.0 * ATOMIC_MASS);
    assert_eq!(ion.collision_frequency(), 0.0);
}

#[test]
fn 파수_성분_테스트() {
    let species = Species::new(1e4, ELECTRON_MASS, 1000.0, 0.3);
    let params = PlasmaParameters::new(&species, -39.1, 0.0);
    assert_eq!(params.k_perp(), 0.0);
    assert_eq!(params.k_par(), -39.1);
    assert_relative_eq!(params.collision_freq, 3e3);
    assert!(params.require_kappa().is_err());
    assert_eq!(params.with_kappa(Some(2.5)).require_kappa().ok(), Some(2.5));
}

#[test]
fn 측정_샘플_파일_읽기_테스트() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "v": [0.0, 1e3, 2e3], "f": [1.0, 0.5, 0.1] }}"#)?;
    let data = TabulatedVdf::from_json_file(file.path())?;
    assert_eq!(data.v, vec![0.0, 1e3, 2e3]);
    assert_eq!(data.f, vec![1.0, 0.5, 0.1]);

    let mut mismatched = tempfile::NamedTempFile::new()?;
    write!(mismatched, r#"{{ "v": [0.0, 1e3], "f": [1.0] }}"#)?;
    let err = TabulatedVdf::from_json_file(mismatched.path()).unwrap_err();
    assert!(err.to_string().contains("shape mismatch"), "{}", err);

    assert!(TabulatedVdf::from_json_file("/nonexistent/vdf.json").is_err());
    Ok(())
}
