use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use spider::{LogConfig, LogTarget};

/// Web scraping related tools
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Args {
    #[clap(flatten)]
    pub log: LogArgs,
    #[clap(subcommand)]
    pub cmd: SubCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommand {
    #[clap(name = "mkdir")]
    Mkdir(MkdirArgs),
    #[clap(name = "cp")]
    Cp(CpArgs),
    #[clap(hide = true)]
    Completion,
}

#[derive(Debug, clap::Args)]
pub struct LogArgs {
    /// Optional yaml logging configuration file
    #[clap(env = "SPIDER_LOG_CONFIG", parse(from_os_str), long)]
    pub log_config: Option<PathBuf>,
    /// Override minimum log level
    #[clap(long)]
    pub level: Option<LevelFilter>,
    /// Write logs to stdout instead of stderr
    #[clap(long)]
    pub stdout: bool,
    /// When quiet no logs are outputted
    #[clap(long, short)]
    pub quiet: bool,
}

impl TryFrom<&LogArgs> for LogConfig {
    type Error = anyhow::Error;

    fn try_from(args: &LogArgs) -> Result<Self, Self::Error> {
        let mut conf = if let Some(path) = &args.log_config {
            let file = File::open(path)
                .with_context(|| format!("Couldn't open log config {}", path.display()))?;
            serde_yaml::from_reader(file)
                .with_context(|| format!("Invalid log config {}", path.display()))?
        } else {
            LogConfig::default()
        };
        if let Some(level) = args.level {
            conf.level = level;
        }
        if args.stdout {
            conf.target = LogTarget::Stdout;
        }
        Ok(conf)
    }
}

/// Create a single directory (mode 0o777, parents must exist)
#[derive(Debug, clap::Args)]
pub struct MkdirArgs {
    #[clap(parse(from_os_str))]
    pub path: PathBuf,
}

pub fn mkdir(args: MkdirArgs) -> anyhow::Result<()> {
    spider::mkdir(&args.path)?;
    log::info!("Created directory {}", args.path.display());
    Ok(())
}

/// Copy a file, overwriting the destination
#[derive(Debug, clap::Args)]
pub struct CpArgs {
    #[clap(parse(from_os_str))]
    pub old: PathBuf,
    #[clap(parse(from_os_str))]
    pub new: PathBuf,
}

pub fn cp(args: CpArgs) -> anyhow::Result<()> {
    let dest = spider::copy_file(&args.old, &args.new)?;
    log::info!("Copied {} to {}", args.old.display(), dest.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !args.log.quiet {
        let conf = LogConfig::try_from(&args.log)?;
        spider::init(&conf)?;
    }

    match args.cmd {
        SubCommand::Mkdir(args) => mkdir(args),
        SubCommand::Cp(args) => cp(args),
        SubCommand::Completion => {
            generate(Shell::Bash, &mut Args::command(), "spider", &mut io::stdout());
            Ok(())
        }
    }
}
