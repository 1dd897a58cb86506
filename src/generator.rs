//! Orchestration: fetch both headers, run the pipeline, write the artifacts.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::fetch::fetch_header;
use crate::schema;

/// Pinned source for the parse-node header.
pub const PARSENODES_URL: &str = "https://raw.githubusercontent.com/postgres/postgres/REL_13_STABLE/src/include/nodes/parsenodes.h";

/// Pinned source for the primitive-node header.
pub const PRIMNODES_URL: &str = "https://raw.githubusercontent.com/postgres/postgres/REL_13_STABLE/src/include/nodes/primnodes.h";

/// File name of the closed interface artifact.
const TYPEDEF_FILE: &str = "typedef.txt";

/// File name of the tag-name list artifact.
const TAG_LIST_FILE: &str = "typeliteralarray.txt";

/// Everything the generator needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Directory where downloaded headers are cached.
    pub cache_dir: PathBuf,
    /// Directory where the two artifacts are written.
    pub out_dir: PathBuf,
    /// Source URL for the parse-node header.
    pub nodes_url: String,
    /// Source URL for the primitive-node header.
    pub prims_url: String,
    /// Echo both artifacts to stdout after writing them.
    pub print: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            nodes_url: PARSENODES_URL.to_string(),
            prims_url: PRIMNODES_URL.to_string(),
            print: false,
        }
    }
}

/// Fetch both headers, generate the closed schema, write both artifacts.
///
/// Nothing is written when any pipeline stage fails. Every declared type
/// that fell to the escape hatch is surfaced through the log before the
/// artifacts are written.
pub async fn generate_node_schema(opts: &GeneratorOptions) -> Result<(), String> {
    let client = reqwest::Client::new();
    let nodes_text = fetch_header(
        &client,
        &opts.nodes_url,
        &opts.cache_dir.join("parsenodes.h"),
    )
    .await?;
    let prims_text = fetch_header(
        &client,
        &opts.prims_url,
        &opts.cache_dir.join("primnodes.h"),
    )
    .await?;

    let resolved = schema::generate(&nodes_text, &prims_text)?;
    for declared in &resolved.unresolved {
        warn!(declared_type = %declared, "declared type resolves against nothing, emitted as `any`");
    }

    let type_defs = resolved.type_definitions();
    let tag_list = resolved.tag_literals();

    fs::create_dir_all(&opts.out_dir)
        .map_err(|e| format!("Failed to create output directory: {e}"))?;
    let typedef_path = opts.out_dir.join(TYPEDEF_FILE);
    fs::write(&typedef_path, &type_defs)
        .map_err(|e| format!("Failed to write {}: {e}", typedef_path.display()))?;
    let tag_list_path = opts.out_dir.join(TAG_LIST_FILE);
    fs::write(&tag_list_path, &tag_list)
        .map_err(|e| format!("Failed to write {}: {e}", tag_list_path.display()))?;

    debug!(
        typedef_path = %typedef_path.display(),
        typedef_len = type_defs.len(),
        tag_list_path = %tag_list_path.display(),
        tag_list_len = tag_list.len(),
        "schema artifacts written"
    );

    if opts.print {
        println!("{type_defs}");
        println!("{tag_list}");
    }

    Ok(())
}
