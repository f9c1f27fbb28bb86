//! Snippet formatting and export.
//!
//! A snippet is the self-contained text a user pastes into their project:
//! the record's markup, then its style wrapped in `<style>`, then, only
//! when present, its script wrapped in `<script>`. The concatenation order
//! is part of the contract; the blobs themselves are passed through
//! unmodified.

use crate::error::{LoadzError, Result};
use crate::model::LoaderRecord;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Formats a record's renderable definition for copy/export.
pub fn format_snippet(record: &LoaderRecord) -> String {
    let mut snippet = format!(
        "<!-- {} -->\n<!-- HTML -->\n{}\n\n<!-- CSS -->\n<style>\n{}\n</style>\n",
        record.name, record.markup, record.style
    );

    if let Some(script) = &record.script {
        snippet.push_str(&format!(
            "\n<!-- JavaScript -->\n<script>\n{}\n</script>\n",
            script
        ));
    }

    snippet
}

/// Writes a gzip-compressed tar archive with one `.html` snippet file per
/// record.
pub fn write_archive<W: Write>(writer: W, records: &[LoaderRecord]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for record in records {
        let entry_name = format!("loadz/{}.html", sanitize_filename(&record.id));
        let content = format_snippet(record);

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(LoadzError::Io)?;
    }

    tar.finish().map_err(LoadzError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
