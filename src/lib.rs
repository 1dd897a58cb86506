#![forbid(unsafe_code)]

//! nodegen compiles the `typedef struct` blocks of PostgreSQL's parse-tree
//! headers into a single closed TypeScript schema: a discriminated union of
//! record shapes plus the ordered list of its discriminant names.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod fetch;
mod generator;
pub mod schema;

pub use generator::{GeneratorOptions, PARSENODES_URL, PRIMNODES_URL, generate_node_schema};

/// Initialize the global tracing subscriber.
///
/// `NODEGEN_LOG` controls the log level: "trace", "debug", "info", "warn",
/// "error", or a full tracing filter spec like "nodegen=debug".
pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    let filter = match std::env::var("NODEGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("{crate_root}={level}")
        }
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
