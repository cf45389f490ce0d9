use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use patch_release::cli::orchestration::build_request;
use patch_release::cli::{run_resolve_workflow, ResolveWorkflowArgs};
use patch_release::config;
use patch_release::git::Git2Repository;
use patch_release::output::{self, OutputFormat};
use patch_release::tag_source;
use patch_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "patch-release",
    version,
    about = "Compute the next patch version of a version line from existing git tags"
)]
struct Args {
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Major version of the line to release"
    )]
    major: Option<String>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Minor version of the line to release"
    )]
    minor: Option<String>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Git repository to read tags from"
    )]
    repo: PathBuf,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Existing tags, instead of reading the repository"
    )]
    tags: Vec<String>,

    #[arg(long, help = "File with one tag per line ('-' for stdin)")]
    tags_file: Option<String>,

    #[arg(long, value_enum, default_value_t, help = "What to print on stdout")]
    format: OutputFormat,

    #[arg(long, help = "Create a lightweight tag for the version at HEAD")]
    create_tag: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print debug diagnostics")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "patch_release=debug"
    } else {
        "patch_release=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("loading configuration")?;

    // Explicit tags from arguments and file are combined into one list
    let explicit_tags = match &args.tags_file {
        Some(path) => {
            let mut tags = args.tags.clone();
            tags.extend(
                tag_source::read_tag_file(path)
                    .with_context(|| format!("reading tag list from '{}'", path))?,
            );
            Some(tags)
        }
        None if !args.tags.is_empty() => Some(args.tags.clone()),
        None => None,
    };

    let open_repo = explicit_tags.is_none() || args.create_tag;
    let workflow_args = ResolveWorkflowArgs {
        major: args.major,
        minor: args.minor,
        tags: explicit_tags,
        create_tag: args.create_tag,
        dry_run: args.dry_run,
    };

    // Refuse a bad request before touching the repository
    build_request(&workflow_args, &config)?;

    let repo = if open_repo {
        let repo = Git2Repository::open(&args.repo)
            .with_context(|| format!("opening git repository at '{}'", args.repo.display()))?;
        Some(repo)
    } else {
        None
    };

    let result = run_resolve_workflow(repo.as_ref(), &workflow_args, &config)?;

    ui::display_result(&result);
    println!("{}", output::render(args.format, &result));

    Ok(())
}
