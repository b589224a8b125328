use chart_config::ChartConfig;
use chart_config::telemetry::init_default_tracing;
use chart_config::transfer::transfer_chart_configs_with_report;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: transfer_chart_config --target <path> --source <path> [--output <path>] [--report]";

#[derive(Debug)]
struct CliArgs {
    target: PathBuf,
    source: PathBuf,
    output: Option<PathBuf>,
    report: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let mut target = read_config(&args.target)?;
    let mut source = read_config(&args.source)?;

    let report = transfer_chart_configs_with_report(&mut target, &mut source);
    if args.report {
        eprintln!("{}", report.to_json_pretty().map_err(|err| err.to_string())?);
    }

    let json = target.to_json_pretty().map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read_config(path: &Path) -> Result<ChartConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
    ChartConfig::from_json_str(&raw).map_err(|err| format!("`{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut target = None::<PathBuf>;
    let mut source = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut report = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--target" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --target".to_owned())?;
                target = Some(PathBuf::from(value));
            }
            "--source" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --source".to_owned())?;
                source = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--report" => report = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let target = target.ok_or_else(|| format!("missing --target\n{USAGE}"))?;
    let source = source.ok_or_else(|| format!("missing --source\n{USAGE}"))?;
    Ok(CliArgs {
        target,
        source,
        output,
        report,
    })
}
