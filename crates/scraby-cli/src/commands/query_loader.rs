use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Query text plus a display name for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    pub origin: Option<String>,
    pub text: String,
}

pub fn load_query(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<QueryInput, String> {
    if let Some(text) = query_text {
        return Ok(QueryInput {
            origin: None,
            text: text.to_owned(),
        });
    }

    if let Some(path) = query_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("query is required: use a file argument, `-` for stdin, or -q/--query".to_string())
}

fn load_stdin() -> Result<QueryInput, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(QueryInput {
        origin: Some("<stdin>".to_owned()),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<QueryInput, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(QueryInput {
        origin: Some(path.to_string_lossy().into_owned()),
        text,
    })
}
