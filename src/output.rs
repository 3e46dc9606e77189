// src/output.rs
// =============================================================================
// This module persists the crawl result.
//
// Two equivalent artifacts, always both written:
// - A JSON array (pretty-printed), for programs
// - A newline-delimited text file, for shell pipelines and eyeballs
//
// Pure I/O - the link list arrives already sorted and deduplicated, and
// nothing here makes decisions about it.
// =============================================================================

use anyhow::Result;
use std::fs;
use std::path::Path;

// Writes the link list as a pretty-printed JSON array
pub fn write_json(path: &Path, links: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(links)?;
    fs::write(path, json)?;
    Ok(())
}

// Writes the link list as newline-delimited text, one URL per line
pub fn write_text(path: &Path, links: &[String]) -> Result<()> {
    let mut body = links.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // No tempfile crate in our dev-dependencies; a process-unique name in
    // the system temp dir is enough for these tests
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("link-harvester-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_write_json_round_trips() {
        let path = temp_path("links.json");
        let links = vec![
            "https://kotlinlang.org/docs/".to_string(),
            "https://kotlinlang.org/docs/intro.html".to_string(),
        ];

        write_json(&path, &links).unwrap();
        let parsed: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, links);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_text_one_url_per_line() {
        let path = temp_path("links.txt");
        let links = vec![
            "https://kotlinlang.org/docs/".to_string(),
            "https://kotlinlang.org/docs/intro.html".to_string(),
        ];

        write_text(&path, &links).unwrap();
        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(
            body,
            "https://kotlinlang.org/docs/\nhttps://kotlinlang.org/docs/intro.html\n"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_text_empty_list() {
        let path = temp_path("empty.txt");
        write_text(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        fs::remove_file(&path).unwrap();
    }
}
