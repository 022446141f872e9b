use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verse_story::{PassageSelector, StoryConfig, StoryPaths, StoryRenderer, StoryServer};

#[derive(Parser, Debug)]
#[command(name = "verse-story", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the font if needed, then serve `/` and `/generate`.
    Serve(ServeArgs),
    /// Render a single story image and print its path.
    Render(PathArgs),
    /// Only make sure the font file is present.
    FetchFont(FontArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    addr: String,

    #[command(flatten)]
    paths: PathArgs,
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Passage corpus JSON.
    #[arg(long, default_value = "assets/bible_meditation_structured.json")]
    corpus: PathBuf,

    /// Background image, stretched to the story canvas.
    #[arg(long, default_value = "assets/background.png")]
    background: PathBuf,

    /// Directory that receives generated images.
    #[arg(long, default_value = "generated")]
    output_dir: PathBuf,

    #[command(flatten)]
    font: FontArgs,
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Font file; downloaded from `--font-url` when absent.
    #[arg(long, default_value = "assets/NanumGothic-Bold.ttf")]
    font: PathBuf,

    #[arg(long, default_value = verse_story::DEFAULT_FONT_URL)]
    font_url: String,
}

impl PathArgs {
    fn into_paths(self) -> StoryPaths {
        StoryPaths {
            corpus: self.corpus,
            background: self.background,
            font: self.font.font,
            output_dir: self.output_dir,
            font_url: self.font.font_url,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args),
        Command::Render(args) => cmd_render(args),
        Command::FetchFont(args) => cmd_fetch_font(args),
    }
}

/// Font fetch and registration run before anything is served or rendered.
fn prepared_renderer(paths: StoryPaths) -> anyhow::Result<StoryRenderer> {
    verse_story::ensure_font(&paths.font, &paths.font_url)
        .with_context(|| format!("ensure font '{}'", paths.font.display()))?;

    let mut renderer =
        StoryRenderer::new(StoryConfig::default(), paths, PassageSelector::from_clock())?;
    renderer.prepare_font()?;
    Ok(renderer)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let renderer = prepared_renderer(args.paths.into_paths())?;
    let server = StoryServer::bind(&args.addr, renderer)?;
    server.serve()?;
    Ok(())
}

fn cmd_render(args: PathArgs) -> anyhow::Result<()> {
    let mut renderer = prepared_renderer(args.into_paths())?;
    let story = renderer.render_next(chrono::Local::now().naive_local())?;
    println!("{}", story.path.display());
    eprintln!("{}: {}", story.citation, story.passage.text);
    Ok(())
}

fn cmd_fetch_font(args: FontArgs) -> anyhow::Result<()> {
    let status = verse_story::ensure_font(&args.font, &args.font_url)?;
    eprintln!("{}: {status:?}", args.font.display());
    Ok(())
}
