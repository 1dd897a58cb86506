use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use nodegen::{
    GeneratorOptions, PARSENODES_URL, PRIMNODES_URL, generate_node_schema, init_tracing,
};

#[derive(Parser)]
#[command(
    name = "nodegen",
    version,
    about = "Generate a closed TypeScript schema for PostgreSQL parse-tree nodes"
)]
struct Cli {
    /// Directory where downloaded headers are cached
    #[arg(long, default_value = ".")]
    cache_dir: PathBuf,

    /// Directory where the generated artifacts are written
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Source URL for the parse-node header
    #[arg(long, default_value = PARSENODES_URL)]
    nodes_url: String,

    /// Source URL for the primitive-node header
    #[arg(long, default_value = PRIMNODES_URL)]
    prims_url: String,

    /// Echo the generated artifacts to stdout
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let opts = GeneratorOptions {
        cache_dir: cli.cache_dir,
        out_dir: cli.out_dir,
        nodes_url: cli.nodes_url,
        prims_url: cli.prims_url,
        print: cli.print,
    };

    match runtime.block_on(generate_node_schema(&opts)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
