use clap::Parser;
use dir_index::{config::IndexConfig, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "dir-index")]
#[command(about = "Generate index.html directory listings for a file tree")]
#[command(long_about = "\
Generate index.html directory listings for a file tree

Every directory under ROOT (ROOT included) gets an index.html listing its
files and subdirectories, directories first, then by name, with the
modification time and size of each entry. Existing index.html files are
overwritten.

Never listed or descended into:
  .git/  .github/  .nojekyll  index.html

Set RUST_LOG=debug to trace exclusions and recursion.")]
#[command(version = version_string())]
struct Cli {
    /// Root directory to index
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let cli = Cli::parse();
    let config = IndexConfig::default();

    generate::generate(&cli.root, &config, output::print_index_event)?;
    output::print_completion(&cli.root);

    Ok(())
}
