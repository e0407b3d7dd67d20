use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use npframe::{read_mat, write_csv, DataFrame, FormatOptions};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NPFRAME_LOG", "error,npframe=info"))
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("show", sub_m)) => run_show(sub_m),
        Some(("export", sub_m)) => run_export(sub_m),
        _ => unreachable!("clap enforces a subcommand"),
    }
}

fn cli() -> Command {
    Command::new("npframe")
        .version(clap::crate_version!())
        .about("Print or export 1-D/2-D .npy arrays as labeled tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Print an .npy array as an aligned table")
                .arg(input_arg())
                .arg(columns_arg())
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .help("Digits after the decimal point")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("max_rows")
                        .short('n')
                        .long("max-rows")
                        .help("Print only the first and last rows when the table is longer")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("JSON file with format options")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write an .npy array to CSV (or TSV by extension)")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .help("Destination .csv or .tsv file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(columns_arg()),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to a .npy file holding a 1-D or 2-D float64 array")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn columns_arg() -> Arg {
    Arg::new("columns")
        .short('c')
        .long("columns")
        .help("Comma-separated column names (defaults to 0, 1, 2, ...)")
        .value_delimiter(',')
        .num_args(1..)
}

fn run_show(sub_m: &ArgMatches) -> Result<()> {
    let frame = load_frame(sub_m)?;

    let mut options = match sub_m.get_one::<PathBuf>("config") {
        Some(path) => FormatOptions::from_json_file(path)?,
        None => FormatOptions::default(),
    };
    if let Some(&precision) = sub_m.get_one::<usize>("precision") {
        options.precision = precision;
    }
    if let Some(&max_rows) = sub_m.get_one::<usize>("max_rows") {
        options.max_rows = Some(max_rows);
    }

    println!("{}", frame.to_text_with(&options));
    Ok(())
}

fn run_export(sub_m: &ArgMatches) -> Result<()> {
    let frame = load_frame(sub_m)?;
    let output = sub_m
        .get_one::<PathBuf>("output")
        .context("missing output path")?;

    write_csv(&frame, output)?;
    log::info!(
        "Wrote {} rows x {} columns to {}",
        frame.nrows(),
        frame.ncols(),
        output.display()
    );
    Ok(())
}

fn load_frame(sub_m: &ArgMatches) -> Result<DataFrame<f64>> {
    let input = sub_m
        .get_one::<PathBuf>("input")
        .context("missing input path")?;
    let data = read_input(input)?;

    let columns: Vec<String> = match sub_m.get_many::<String>("columns") {
        Some(names) => names.cloned().collect(),
        None => (0..data.ncols()).map(|i| i.to_string()).collect(),
    };

    let frame = DataFrame::new(data, columns)
        .with_context(|| format!("Column names do not fit {}", input.display()))?;
    Ok(frame)
}

fn read_input(input: &Path) -> Result<ndarray::Array2<f64>> {
    let loaded = read_mat(input)
        .with_context(|| format!("Failed to read array from {}", input.display()))?;
    let data = loaded.into_columns()?;
    Ok(data)
}
