use anyhow::{Context, Result};
use clap::{crate_version, App, Arg};
use nemo::build::Builder;
use nemo::config::{Config, Manifest};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = App::new("nemo")
        .version(crate_version!())
        .about("Builds a static blog from a directory of posts")
        .arg(
            Arg::with_name("root")
                .short("r")
                .long("root")
                .takes_value(true)
                .help("The project directory (or any directory below it)"),
        )
        .arg(
            Arg::with_name("index-num")
                .long("index-num")
                .takes_value(true)
                .help("Posts per index page, overriding the skin"),
        )
        .arg(
            Arg::with_name("legacy-parser")
                .long("legacy-parser")
                .help("Render post bodies as plain CommonMark"),
        )
        .arg(
            Arg::with_name("clean")
                .long("clean")
                .help("Remove the output directory before building"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail (-v for debug, -vv for trace)"),
        )
        .get_matches();

    init_tracing(matches.occurrences_of("verbose"));

    let result = matches
        .value_of("index-num")
        .map(|n| n.parse::<usize>().context("--index-num must be a number"))
        .transpose()
        .and_then(|index_num| {
            run(
                PathBuf::from(matches.value_of("root").unwrap_or(".")),
                index_num,
                matches.is_present("legacy-parser"),
                matches.is_present("clean"),
            )
        });

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u64) {
    let default = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(dir: PathBuf, index_num: Option<usize>, legacy_parser: bool, clean: bool) -> Result<()> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Resolving project directory `{}`", dir.display()))?;
    let (manifest, root) = Manifest::from_directory(&dir)?;

    let mut config = Config::from_directory(&root)?;
    if index_num.is_some() {
        config.index_num = index_num;
    }
    config.use_legacy_parser |= legacy_parser;
    config.clean |= clean;

    let report = Builder::new(&root, manifest, config)
        .build()
        .context("Building site")?;

    info!(
        "built {} posts, {} index pages, skipped {} in {:.2?}",
        report.posts.len(),
        report.index_pages.len(),
        report.skipped.len(),
        report.duration
    );
    Ok(())
}
