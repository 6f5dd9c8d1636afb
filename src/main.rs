// this_file: src/main.rs

//! bannerkit CLI: render text as ASCII art banners.

use anyhow::Context;
use bannerkit::{
    input, load_font, BannerCache, BannerRegistry, BatchItem, BatchRenderer, FontLayout, Renderer,
};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// bannerkit: block-letter ASCII art from banner fonts
#[derive(Parser)]
#[command(name = "bannerkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text (or stdin) with a banner
    Render {
        /// Text to render (reads stdin if omitted)
        text: Option<String>,

        /// Banner identifier
        #[arg(short, long, default_value = bannerkit::DEFAULT_BANNER)]
        banner: String,

        /// Render with this font file instead of a named banner
        #[arg(short, long, conflicts_with = "banner")]
        font: Option<PathBuf>,

        /// Interpret literal \n, \t and \r sequences in the text
        #[arg(short, long)]
        escapes: bool,

        #[command(flatten)]
        banners: BannerArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Render JSONL items from stdin, writing JSONL results to stdout
    Batch {
        /// Number of parallel worker threads (0 = auto)
        #[arg(long = "jobs", default_value = "0")]
        jobs: usize,

        #[command(flatten)]
        banners: BannerArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// List the banners available in the banners directory
    List {
        #[command(flatten)]
        banners: BannerArgs,
    },

    /// Print a summary of a banner font file
    Inspect {
        /// Font file to inspect
        path: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print version information
    Version,
}

#[derive(Args)]
struct BannerArgs {
    /// Directory holding <banner>.txt files
    #[arg(long, default_value = "banners")]
    banners_dir: String,
}

#[derive(Args)]
struct LayoutArgs {
    /// Glyph rows per character
    #[arg(long, default_value = "8")]
    height: usize,

    /// File lines per character block (height plus separator lines)
    #[arg(long, default_value = "9")]
    stride: usize,
}

impl LayoutArgs {
    fn layout(&self) -> anyhow::Result<FontLayout> {
        Ok(FontLayout::new(self.height, self.stride)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            text,
            banner,
            font,
            escapes,
            banners,
            layout,
        } => run_render(text, &banner, font, escapes, &banners, layout.layout()?),
        Commands::Batch {
            jobs,
            banners,
            layout,
        } => run_batch(jobs, &banners, layout.layout()?),
        Commands::List { banners } => run_list(&banners),
        Commands::Inspect { path, layout } => run_inspect(&path, layout.layout()?),
        Commands::Version => {
            println!("bannerkit {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

fn run_render(
    text: Option<String>,
    banner: &str,
    font: Option<PathBuf>,
    escapes: bool,
    banners: &BannerArgs,
    layout: FontLayout,
) -> anyhow::Result<()> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            input::strip_trailing_newline(&buf).to_string()
        }
    };

    if input::is_blank(&raw) {
        anyhow::bail!("Please enter some text to convert to ASCII art.");
    }
    input::validate_text(&raw)?;
    let text = if escapes {
        input::interpret_escapes(&raw)
    } else {
        raw
    };

    let block = match font {
        Some(path) => {
            let font = load_font(&path, layout)?;
            Renderer::new(&font).render(&text)
        }
        None => {
            let registry = BannerRegistry::discover(&banners.banners_dir).with_context(|| {
                format!("Cannot read banners directory {}", banners.banners_dir)
            })?;
            BannerCache::new(registry, layout).try_render(&text, banner)?
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{block}")?;
    Ok(())
}

/// Read items line by line, render them in parallel, write results in order.
fn run_batch(jobs: usize, banners: &BannerArgs, layout: FontLayout) -> anyhow::Result<()> {
    let registry = BannerRegistry::discover(&banners.banners_dir)
        .with_context(|| format!("Cannot read banners directory {}", banners.banners_dir))?;
    log::info!(
        "Starting batch mode (banners={}, jobs={}, {})",
        registry.names().join(","),
        jobs,
        layout
    );

    let mut items = Vec::new();
    for (line_no, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<BatchItem>(&line) {
            Ok(item) => items.push(item),
            Err(e) => log::error!("Line {}: Invalid JSON: {}", line_no + 1, e),
        }
    }
    if items.is_empty() {
        anyhow::bail!("No items supplied");
    }
    let total = items.len();

    let renderer = BatchRenderer::new(Arc::new(BannerCache::new(registry, layout)));
    let results = if jobs > 0 {
        renderer.render_batch_with_threads(items, jobs)?
    } else {
        renderer.render_batch(items)
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for result in &results {
        writeln!(handle, "{}", serde_json::to_string(result)?)?;
    }
    handle.flush()?;

    let failed = results.iter().filter(|r| !r.is_success()).count();
    log::info!("Batch complete ({} items, {} failed)", total, failed);
    Ok(())
}

fn run_list(banners: &BannerArgs) -> anyhow::Result<()> {
    let registry = BannerRegistry::discover(&banners.banners_dir)
        .with_context(|| format!("Cannot read banners directory {}", banners.banners_dir))?;
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}

fn run_inspect(path: &Path, layout: FontLayout) -> anyhow::Result<()> {
    let font = load_font(path, layout)?;
    let chars = font.chars();
    println!("{}", path.display());
    println!("  Layout: {}", layout);
    println!("  Glyphs: {}/{}", font.len(), bannerkit::GLYPH_COUNT);
    if let (Some(first), Some(last)) = (chars.first(), chars.last()) {
        println!("  Range: {first:?}..={last:?}");
    }
    let widest = chars
        .iter()
        .filter_map(|&ch| font.glyph(ch).map(|glyph| (ch, glyph.width())))
        .max_by_key(|&(_, width)| width);
    if let Some((ch, width)) = widest {
        println!("  Widest: {ch:?} ({width} columns)");
    }
    Ok(())
}
