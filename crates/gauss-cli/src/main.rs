use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use gauss::math::AngleUnit;
use gauss::{EliminationConfig, PivotRule};
use gauss_cli::io::{load_elimination_config, load_matrix, load_vector, write_matrix};
use gauss_cli::timing::{load_timing_config, run_timing, TimingConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default()
                .filter_or("GAUSS_LOG", "error,gauss=info,gauss_cli=info"),
        )
        .init();

    let matches = Command::new("gauss")
        .version(clap::crate_version!())
        .about("Dense vector and matrix utilities")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("det")
                .about("Determinant of a square matrix by Gaussian elimination")
                .arg(
                    Arg::new("matrix")
                        .help("Path to a JSON matrix (array of rows)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON elimination configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("pivot")
                        .long("pivot")
                        .help("Pivot rule. Overrides the rule in the configuration file.")
                        .value_parser(["partial", "legacy"])
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("matmul")
                .about("Multiply two matrices")
                .arg(
                    Arg::new("lhs")
                        .help("Path to the left JSON matrix")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rhs")
                        .help("Path to the right JSON matrix")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path to write the product as JSON. Defaults to stdout.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .help("Compute output rows in parallel.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("vec")
                .about("Vector products, norm and angle")
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(["dot", "cross", "norm", "angle"]),
                )
                .arg(
                    Arg::new("u")
                        .help("Path to the first JSON vector")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("v")
                        .help("Path to the second JSON vector (not used by norm)")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("degrees")
                        .long("degrees")
                        .help("Report angles in degrees instead of radians.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("timing")
                .about("Time construction, multiplication and determinant on random matrices")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON timing configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .help("Matrix dimension. Overrides the size in the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .help("Use the parallel multiplication.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("det", sub_m)) => handle_det(sub_m),
        Some(("matmul", sub_m)) => handle_matmul(sub_m),
        Some(("vec", sub_m)) => handle_vec(sub_m),
        Some(("timing", sub_m)) => handle_timing(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_det(matches: &ArgMatches) -> Result<()> {
    let matrix_path: &PathBuf = matches.get_one("matrix").unwrap();
    let matrix = load_matrix(matrix_path)?;

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[gauss::det] Using config: {:?}", config_path);
            load_elimination_config(config_path)?
        }
        None => EliminationConfig::default(),
    };
    if let Some(rule) = matches.get_one::<String>("pivot") {
        config.pivot_rule = PivotRule::from_str(rule).map_err(anyhow::Error::msg)?;
    }

    let report = matrix.determinant_with(&config)?;
    if report.singular {
        log::info!("[gauss::det] Matrix is singular");
    }
    println!("{}", report.determinant);
    log::info!(
        "[gauss::det] {} row swaps ({} pivoting)",
        report.row_swaps,
        config.pivot_rule
    );
    Ok(())
}

fn handle_matmul(matches: &ArgMatches) -> Result<()> {
    let lhs = load_matrix(matches.get_one::<PathBuf>("lhs").unwrap())?;
    let rhs = load_matrix(matches.get_one::<PathBuf>("rhs").unwrap())?;
    let output_path: Option<&PathBuf> = matches.get_one("output_file");

    let product = if matches.get_flag("parallel") {
        lhs.par_matmul(&rhs)?
    } else {
        lhs.matmul(&rhs)?
    };
    write_matrix(&product, output_path.map(PathBuf::as_path))
}

fn handle_vec(matches: &ArgMatches) -> Result<()> {
    let op = matches.get_one::<String>("op").unwrap().as_str();
    let u = load_vector(matches.get_one::<PathBuf>("u").unwrap())?;

    if op == "norm" {
        println!("{}", u.norm());
        return Ok(());
    }

    let Some(v_path) = matches.get_one::<PathBuf>("v") else {
        anyhow::bail!("`{}` needs a second vector", op);
    };
    let v = load_vector(v_path)?;

    match op {
        "dot" => println!("{}", u.dot(&v)?),
        "cross" => println!("{}", u.cross(&v)?),
        "angle" => {
            let unit = if matches.get_flag("degrees") {
                AngleUnit::Degrees
            } else {
                AngleUnit::Radians
            };
            println!("{}", u.angle(&v, unit)?);
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn handle_timing(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[gauss::timing] Using config: {:?}", config_path);
            load_timing_config(config_path)?
        }
        None => TimingConfig::default(),
    };
    if let Some(size) = matches.get_one::<usize>("size") {
        config.size = *size;
    }
    if matches.get_flag("parallel") {
        config.parallel = true;
    }

    let report = run_timing(&config)?;
    println!("{}", report);
    Ok(())
}
