use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "popscene", version)]
struct Cli {
    /// Story options JSON (data path, column names, window, top-N).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Population CSV; overrides `data_path` from the config.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the view for one scene index.
    Scene(SceneArgs),
    /// Replay navigation events from the first scene, printing every frame.
    Walk(WalkArgs),
    /// Print the growth ranking used by the country scenes.
    Rank(RankArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene index (0-based). Indices past 3 print the placeholder scene.
    #[arg(long, default_value_t = 0)]
    index: usize,
}

#[derive(Parser, Debug)]
struct WalkArgs {
    /// Comma-separated events: `next`, `previous`.
    #[arg(long, value_delimiter = ',')]
    events: Vec<popscene::NavEvent>,
}

#[derive(Parser, Debug)]
struct RankArgs {
    #[arg(long, value_enum, default_value_t = OrderChoice::Slowest)]
    order: OrderChoice,

    /// Number of countries; defaults to the configured top-N.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderChoice {
    Slowest,
    Fastest,
}

#[derive(Debug, serde::Serialize)]
struct RankRow<'a> {
    rank: usize,
    entity: &'a str,
    growth_rate: f64,
    start: Option<f64>,
    end: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = resolve_opts(&cli)?;

    let (story, view) = popscene::Story::launch(&opts);
    let Some(mut story) = story else {
        print_json(&view, cli.pretty)?;
        anyhow::bail!("could not load '{}'", opts.data_path.display());
    };

    match cli.cmd {
        Command::Scene(args) => {
            let frame = story.jump(args.index);
            print_json(&popscene::StoryView::Ready(frame), cli.pretty)
        }
        Command::Walk(args) => {
            let mut frames = vec![story.current()];
            for event in args.events {
                frames.push(story.handle(event));
            }
            print_json(&frames, cli.pretty)
        }
        Command::Rank(args) => cmd_rank(&story, &opts, args, cli.pretty),
    }
}

fn resolve_opts(cli: &Cli) -> anyhow::Result<popscene::StoryOpts> {
    let mut opts = match &cli.config {
        Some(path) => popscene::StoryOpts::from_path(path)
            .with_context(|| format!("read config '{}'", path.display()))?,
        None => popscene::StoryOpts::default(),
    };
    if let Some(data) = &cli.data {
        opts.data_path = data.clone();
    }
    Ok(opts)
}

fn cmd_rank(
    story: &popscene::Story,
    opts: &popscene::StoryOpts,
    args: RankArgs,
    pretty: bool,
) -> anyhow::Result<()> {
    let order = match args.order {
        OrderChoice::Slowest => popscene::RankOrder::Slowest,
        OrderChoice::Fastest => popscene::RankOrder::Fastest,
    };
    let countries = popscene::country_observations(story.dataset().observations(), opts.window);
    let table = popscene::GrowthTable::build(&countries);
    let ranked = table.ranked(order, args.limit.unwrap_or(opts.top_n));

    let rows: Vec<RankRow<'_>> = ranked
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let (start, end) = c.endpoints();
            RankRow {
                rank: i + 1,
                entity: &c.entity,
                growth_rate: c.growth_rate,
                start,
                end,
            }
        })
        .collect();
    print_json(&rows, pretty)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize output JSON")?;
    println!("{out}");
    Ok(())
}
