//! Header-text segmentation: comment stripping and struct-block extraction.
//!
//! The input is a raw C header. Only `typedef struct <Name> { ... } <Name>`
//! blocks are recognized; preprocessor directives, unions, bitfields, and
//! anonymous nesting are outside the supported grammar and simply never
//! match. Extraction is a pure function of the header text.

/// A `typedef struct` block cut out of the header text.
///
/// `body` holds the trimmed lines strictly between the typedef line and the
/// `} <Name>` close marker, with lone `{` lines filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStructBlock {
    pub name: String,
    pub body: Vec<String>,
}

/// Remove every `/* ... */` span from a line.
///
/// Comments are matched non-greedily and may occur multiple times per line.
/// An unterminated `/*` truncates the line at that point.
pub fn strip_block_comments(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        let Some(open) = rest.find("/*") else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..open]);
        match rest[open + 2..].find("*/") {
            Some(close) => rest = &rest[open + 2 + close + 2..],
            None => return out,
        }
    }
}

/// Documentation-only banner lines, dropped before scanning for blocks.
fn is_banner_line(line: &str) -> bool {
    line.starts_with('*') || line.starts_with("/*")
}

/// True when `line` closes the block for `name`: a `}` followed by the exact
/// struct name (optionally with a trailing `;`). `} FooBar;` does not close
/// `Foo`.
fn is_close_marker(line: &str, name: &str) -> bool {
    line.strip_prefix('}')
        .map(|rest| rest.trim().trim_end_matches(';').trim_end() == name)
        .unwrap_or(false)
}

/// Cut every `typedef struct <Name> { ... } <Name>` block out of a header.
///
/// Lines are trimmed and banner lines dropped before scanning, so inline
/// documentation can never be mistaken for code. Blocks are returned in
/// order of appearance. A block with no close marker before end of input is
/// fatal: the rest of the file cannot be segmented reliably.
pub fn extract_struct_blocks(text: &str) -> Result<Vec<RawStructBlock>, String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !is_banner_line(line))
        .collect();

    let mut blocks = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(rest) = line.strip_prefix("typedef struct") else {
            continue;
        };
        let name = strip_block_comments(rest).trim().to_string();
        let close = lines[idx + 1..]
            .iter()
            .position(|candidate| is_close_marker(candidate, &name))
            .ok_or_else(|| {
                format!("No closing `}} {name}` found for `typedef struct {name}`")
            })?;
        let body = lines[idx + 1..idx + 1 + close]
            .iter()
            .filter(|body_line| **body_line != "{")
            .map(|body_line| (*body_line).to_string())
            .collect();
        blocks.push(RawStructBlock { name, body });
    }
    Ok(blocks)
}
