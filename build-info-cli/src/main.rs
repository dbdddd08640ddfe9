mod options;

use std::io::Write;

use anyhow::{Context, Result};
use build_info::{
    collect, command::SystemRunner, probe_machine, render_c_source, timestamp::now_utc,
    write_c_source, write_manifest, BuildInfoSources,
};
use clap::Parser;
use log::{error, info, LevelFilter};
use options::Options;

/// Parses the program arguments.
fn parse_args() -> Result<Options> {
    let options = Options::parse();
    Ok(options)
}

/// Initializes the program logging
///
/// # Arguments
/// * `filter` - The log level filter, i.e., the minimum log level to be logged.
fn initialize_logging(filter: LevelFilter) {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(filter)
        .init();
}

/// Runs the program.
fn run_program() -> Result<()> {
    let options = parse_args()?;
    initialize_logging(LevelFilter::from(options.log_level));

    info!("Options:");
    options.dump_to_log();
    info!("-------");

    let runner = match &options.repository {
        Some(dir) => SystemRunner::in_dir(dir),
        None => SystemRunner::new(),
    };
    let sources = BuildInfoSources {
        compiler: options.compiler.clone(),
        git: options.git.clone(),
    };

    let machine = probe_machine()?;
    let info = collect(&runner, &sources, &options.configuration, machine, now_utc())?;
    let source = render_c_source(&info);

    // the C source goes last so a failed run never leaves it behind
    if let Some(manifest) = &options.manifest {
        write_manifest(manifest, &info)?;
    }
    write_c_source(&options.output, &source)
        .with_context(|| format!("Failed to generate {}", options.output.display()))?;

    println!("Build ID: {}", info.summary());

    Ok(())
}

fn main() {
    match run_program() {
        Ok(()) => {
            info!("SUCCESS");
        }
        Err(err) => {
            error!("Error: {:#}", err);
            error!("FAILED");

            std::process::exit(1);
        }
    }
}
