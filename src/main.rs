use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use trellis::{
    CssCache, Document, EngineBuilder, EngineError, FilesystemCssCache, InMemoryCssCache,
};

/// Render page-builder layout documents to HTML and CSS.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about)]
struct Cli {
    /// JSON render configuration; omitted keys keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document, printing the HTML and CSS unless output files are given.
    Render {
        document: PathBuf,
        #[arg(long, default_value = "page")]
        page_id: String,
        /// Keep generated CSS in this directory between runs.
        #[arg(long)]
        cache_dir: Option<PathBuf>,
        #[arg(long)]
        out_html: Option<PathBuf>,
        #[arg(long)]
        out_css: Option<PathBuf>,
    },
    /// Clear the cached CSS of one page.
    Invalidate {
        #[arg(long)]
        cache_dir: PathBuf,
        #[arg(long)]
        page_id: String,
    },
    /// Report modules nested outside their declared parent.
    Validate { document: PathBuf },
}

fn read_document(path: &Path) -> Result<Document, EngineError> {
    let source = fs::read_to_string(path)?;
    Ok(Document::from_json(&source)?)
}

fn run(cli: Cli) -> Result<ExitCode, EngineError> {
    let mut builder = EngineBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    let engine = builder.build()?;

    match cli.command {
        Command::Render {
            document,
            page_id,
            cache_dir,
            out_html,
            out_css,
        } => {
            let document = read_document(&document)?;
            let cache: Box<dyn CssCache> = match cache_dir {
                Some(dir) => Box::new(FilesystemCssCache::new(dir)),
                None => Box::new(InMemoryCssCache::new()),
            };
            let page = engine.render_page(&page_id, document, cache.as_ref())?;

            match out_html {
                Some(path) => fs::write(&path, &page.html)?,
                None => println!("{}", page.html),
            }
            match out_css {
                Some(path) => fs::write(&path, &page.css)?,
                None => println!("{}", page.css),
            }
        }
        Command::Invalidate { cache_dir, page_id } => {
            engine.invalidate(&page_id, &FilesystemCssCache::new(cache_dir))?;
            println!("Invalidated cached CSS for '{}'", page_id);
        }
        Command::Validate { document } => {
            let violations = engine.validate(&read_document(&document)?);
            if violations.is_empty() {
                println!("No nesting problems found");
            } else {
                for violation in &violations {
                    println!("{}", violation);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
