//! Text layout of a catpack archive.
//!
//! An archive is a sequence of entries, each introduced by a marker line:
//!
//! ```text
//! // FILE: A.swift
//! a
//!
//! // FILE: b.json
//! {}
//! ```
//!
//! Names are not escaped. Any line of content that starts with [`MARKER`]
//! will be read back as the start of a new entry.

use std::io::{self, Write};

/// Prefix of every marker line.
pub const MARKER: &str = "// FILE: ";

/// File extensions picked up when packing a directory.
pub const EXTENSIONS: [&str; 4] = ["swift", "plist", "json", "entitlements"];

/// One file inside an archive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub content: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Case-sensitive check against [`EXTENSIONS`].
pub fn has_supported_extension(name: &str) -> bool {
    EXTENSIONS.iter().any(|ext| {
        name.strip_suffix(ext)
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some()
    })
}

/// Writes a single entry. Unless `last` is set, a separator follows so the
/// next marker sits on its own line after exactly one blank line.
pub fn write_entry(archive: &mut impl Write, entry: &Entry, last: bool) -> io::Result<()> {
    writeln!(archive, "{MARKER}{}", entry.name)?;
    archive.write_all(entry.content.as_bytes())?;
    if !last {
        let separator = if entry.content.ends_with('\n') {
            "\n"
        } else {
            "\n\n"
        };
        archive.write_all(separator.as_bytes())?;
    }
    Ok(())
}

struct Marker<'a> {
    /// offset of the marker line
    start: usize,
    /// offset right after the marker's line terminator
    body: usize,
    name: &'a str,
}

fn find_markers(text: &str) -> Vec<Marker<'_>> {
    let mut markers = vec![];
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if let Some(rest) = line.strip_prefix(MARKER) {
            // a marker on the final line may lack its terminator
            let name = rest.strip_suffix('\n').unwrap_or(rest);
            let name = name.strip_suffix('\r').unwrap_or(name);
            markers.push(Marker {
                start: offset,
                body: offset + line.len(),
                name,
            });
        }
        offset += line.len();
    }

    markers
}

/// Drops `\n` and `\r\n` line terminators from both ends.
fn trim_newlines(mut span: &str) -> &str {
    while let Some(rest) = span.strip_prefix("\r\n").or_else(|| span.strip_prefix('\n')) {
        span = rest;
    }
    while let Some(rest) = span.strip_suffix("\r\n").or_else(|| span.strip_suffix('\n')) {
        span = rest;
    }
    span
}

/// Splits archive text at its marker lines. Text before the first marker is
/// ignored. Leading and trailing newlines of each entry are dropped.
pub fn decode(text: &str) -> Vec<Entry> {
    let markers = find_markers(text);
    log::trace!("found {} markers", markers.len());

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            Entry::new(marker.name, trim_newlines(&text[marker.body..end]))
        })
        .collect()
}
