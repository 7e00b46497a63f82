use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fxgraph::{
    AnimationBuilder, AnimationOptions, AnimationScript, CompileOptions, EffectPipeline,
    TimelineRecorder,
};

#[derive(Parser, Debug)]
#[command(name = "fxgraph", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an effect pipeline into a node graph.
    Compile(CompileArgs),
    /// Check an effect pipeline without compiling it.
    Validate(ValidateArgs),
    /// Materialize an animation script into timed animations.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input pipeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output graph JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Maximum blend nesting depth.
    #[arg(long, default_value_t = CompileOptions::default().max_branch_depth)]
    max_depth: usize,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input pipeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Maximum blend nesting depth.
    #[arg(long, default_value_t = CompileOptions::default().max_branch_depth)]
    max_depth: usize,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input animation script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Materialize with this duration instead of the script's.
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Output animations JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let pipeline = EffectPipeline::from_path(&args.in_path)?;
    let opts = CompileOptions {
        max_branch_depth: args.max_depth,
    };
    let compiled = fxgraph::compile_graph(pipeline.effects(), &opts)
        .with_context(|| format!("compile pipeline '{}'", args.in_path.display()))?;
    tracing::debug!(nodes = compiled.graph.len(), "compiled");
    write_json(args.out.as_deref(), &compiled)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let pipeline = EffectPipeline::from_path(&args.in_path)?;
    let opts = CompileOptions {
        max_branch_depth: args.max_depth,
    };
    let shape = pipeline
        .validate(&opts)
        .with_context(|| format!("validate pipeline '{}'", args.in_path.display()))?;
    write_json(None, &shape)
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let script = AnimationScript::from_path(&args.in_path)?;
    let backend = TimelineRecorder::new();
    let mut builder = AnimationBuilder::new(&backend, script.target.clone());
    script
        .configure(&mut builder)
        .with_context(|| format!("apply animation script '{}'", args.in_path.display()))?;

    let duration_ms = args
        .duration_ms
        .or(script.duration_ms)
        .unwrap_or(AnimationOptions::default().default_duration_ms);
    let group = builder.materialize(Duration::from_millis(duration_ms))?;
    tracing::debug!(animations = group.len(), duration_ms, "materialized");
    write_json(args.out.as_deref(), group.animations())
}

fn write_json<T: serde::Serialize + ?Sized>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json + "\n")
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}
