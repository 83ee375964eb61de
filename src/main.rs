use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use gordeyev::core::constants::{ATOMIC_MASS, ELECTRON_MASS};
use gordeyev::{FrequencyIntegrator, GordeyevConfig, IntegrandKind, Species, TabulatedVdf, VdfKind};
use std::process;

fn cli() -> Command {
    Command::new("gordeyev")
        .version("0.1.0")
        .about("주파수 격자 위에서 고르데예프 적분 계산")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON 설정 파일 (없으면 기본값)"),
        )
        .arg(
            Arg::new("distribution")
                .long("distribution")
                .short('d')
                .value_name("KIND")
                .help("피적분 함수: maxwell | kappa | isotropic")
                .default_value("maxwell"),
        )
        .arg(
            Arg::new("vdf")
                .long("vdf")
                .value_name("VDF")
                .help("등방 분포의 VDF: maxwell | kappa | kappa_vol2 | gauss_shell | real_data (설정 파일 값을 덮어씀)"),
        )
        .arg(
            Arg::new("real-data")
                .long("real-data")
                .value_name("FILE")
                .help("real_data VDF의 측정 샘플 JSON 파일 ({\"v\": [...], \"f\": [...]})"),
        )
        .arg(
            Arg::new("shell-radius")
                .long("shell-radius")
                .value_name("RADIUS")
                .value_parser(clap::value_parser!(f64))
                .help("gauss_shell VDF의 껍질 반지름 (열속도 단위)"),
        )
        .arg(
            Arg::new("kappa")
                .long("kappa")
                .short('k')
                .value_name("KAPPA")
                .value_parser(clap::value_parser!(f64))
                .help("카파 지수"),
        )
        .arg(
            Arg::new("electron")
                .long("electron")
                .action(ArgAction::SetTrue)
                .help("이온 대신 전자"),
        )
        .arg(
            Arg::new("ion-mass")
                .long("ion-mass")
                .value_name("AMU")
                .value_parser(clap::value_parser!(f64))
                .default_value("16"),
        )
        .arg(
            Arg::new("b-field")
                .long("b-field")
                .value_name("TESLA")
                .value_parser(clap::value_parser!(f64))
                .default_value("3.5e-5"),
        )
        .arg(
            Arg::new("temperature")
                .long("temperature")
                .short('t')
                .value_name("KELVIN")
                .value_parser(clap::value_parser!(f64))
                .default_value("1000"),
        )
        .arg(
            Arg::new("collision-ratio")
                .long("collision-ratio")
                .value_name("RATIO")
                .value_parser(clap::value_parser!(f64))
                .default_value("0"),
        )
        .arg(
            Arg::new("upper-limit")
                .long("upper-limit")
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(f64))
                .default_value("1.5e-4"),
        )
}

fn run() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => GordeyevConfig::from_json_file(path)?,
        None => GordeyevConfig::default(),
    };
    if let Some(tag) = matches.get_one::<String>("vdf") {
        config.vdf = tag.parse::<VdfKind>()?;
    }
    if let Some(path) = matches.get_one::<String>("real-data") {
        config.real_data = Some(TabulatedVdf::from_json_file(path)?);
    }
    if let Some(&radius) = matches.get_one::<f64>("shell-radius") {
        config.shell_radius = radius;
    }
    let distribution: IntegrandKind = matches
        .get_one::<String>("distribution")
        .context("분포 인자 누락")?
        .parse()?;
    let kappa = matches.get_one::<f64>("kappa").copied();
    let b_field = *matches.get_one::<f64>("b-field").context("자기장 인자 누락")?;
    let temperature = *matches.get_one::<f64>("temperature").context("온도 인자 누락")?;
    let collision_ratio = *matches.get_one::<f64>("collision-ratio").context("충돌 비율 인자 누락")?;
    let upper_limit = *matches.get_one::<f64>("upper-limit").context("적분 상한 인자 누락")?;

    let species = if matches.get_flag("electron") {
        Species::electron(b_field, temperature, collision_ratio)
    } else {
        let amu = *matches.get_one::<f64>("ion-mass").context("이온 질량 인자 누락")?;
        Species::ion(amu, b_field, temperature, collision_ratio)
    };
    log::info!(
        "입자 질량 {:.3} amu ({:.3} m_e), w_c = {:.4e} rad/s",
        species.mass / ATOMIC_MASS,
        species.mass / ELECTRON_MASS,
        species.gyrofreq
    );

    let integrator = FrequencyIntegrator::new(config)?;
    let params = integrator.plasma_parameters(&species, kappa);
    let spectrum = integrator.integrate_params(&params, upper_limit, distribution)?;

    if let Some(scale) = spectrum.debye_scale {
        println!("# debye_scale {:.6}", scale);
    }
    println!("# frequency_hz re im");
    for (f, value) in integrator.grid().hertz().iter().zip(&spectrum.values) {
        println!("{:.6e} {:.9e} {:.9e}", f, value.re, value.im);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("오류: {:#}", e);
        process::exit(1);
    }
}
