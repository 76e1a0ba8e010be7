#![forbid(unsafe_code)]
//! Create CKEditor 5 Plugin - command line entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use create_ckeditor5_plugin::commands::{execute_create, CreateOptions};

#[derive(Parser)]
#[command(name = "create-ckeditor5-plugin")]
#[command(about = "Creates a CKEditor 5 plugin package skeleton")]
#[command(version)]
struct Cli {
    /// Name of the package (@scope/ckeditor5-*)
    package_name: String,

    /// Programming language variant (js, ts)
    #[arg(long)]
    lang: Option<String>,

    /// Output additional logs
    #[arg(short, long)]
    verbose: bool,

    /// Execution of the script in the development mode
    #[arg(long)]
    dev: bool,

    /// Whether use npm to install packages
    #[arg(long)]
    use_npm: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "create_ckeditor5_plugin=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = CreateOptions {
        package_name: cli.package_name,
        lang: cli.lang,
        verbose: cli.verbose,
        dev: cli.dev,
        use_npm: cli.use_npm,
    };

    execute_create(options)
}
