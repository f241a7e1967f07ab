use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    format::{self, Entry},
    Error, Result,
};

#[derive(Clone, Debug)]
pub struct PackConfig {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
}

#[derive(Debug)]
pub struct PackReport {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
    /// Base names in archive order.
    pub files: Vec<String>,
}

impl PackReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Lists the packable files directly inside `dir`, sorted by path.
///
/// Dotfiles are skipped, as is `exclude` (the archive being written) should
/// it live in the same directory.
fn find(dir: &Path, exclude: Option<&Path>) -> Result<Vec<(String, PathBuf)>> {
    let mut files = vec![];

    for entry in fs::read_dir(dir).map_err(Error::read(dir))? {
        let entry = entry.map_err(Error::read(dir))?;
        let path = entry.path();
        let file_name = entry.file_name();

        if !format::has_supported_extension(&file_name.to_string_lossy()) {
            continue;
        }
        let Some(name) = file_name.to_str() else {
            return Err(Error::NonUtf8Name(path));
        };
        if name.starts_with('.') {
            log::trace!("skipping hidden file {name}");
            continue;
        }
        if !path.is_file() {
            log::debug!("skipping {name}: not a regular file");
            continue;
        }
        if exclude.is_some() && fs::canonicalize(&path).ok().as_deref() == exclude {
            log::debug!("skipping {name}: it is the output file");
            continue;
        }

        files.push((name.to_owned(), path));
    }

    files.sort_by(|(_, a), (_, b)| a.cmp(b));
    Ok(files)
}

/// Bundles every matching file of `source_dir` into `output_file`.
///
/// Sources are read in full before the output is opened, so a failed read
/// leaves an existing archive untouched. With nothing to pack no output is
/// created and the report is empty.
pub fn pack(config: &PackConfig) -> Result<PackReport> {
    let PackConfig {
        source_dir,
        output_file,
    } = config;

    if !source_dir.is_dir() {
        return Err(Error::SourceDirNotFound(source_dir.clone()));
    }

    let exclude = fs::canonicalize(output_file).ok();
    let found = find(source_dir, exclude.as_deref())?;

    if found.is_empty() {
        log::warn!(
            "no .{} files found in {}",
            format::EXTENSIONS.join(", ."),
            source_dir.display()
        );
        return Ok(PackReport {
            source_dir: source_dir.clone(),
            output_file: output_file.clone(),
            files: vec![],
        });
    }

    let mut entries = Vec::with_capacity(found.len());
    for (name, path) in found {
        let content = fs::read_to_string(&path).map_err(Error::read(&path))?;
        log::debug!("read {name}: {}B", content.len());
        entries.push(Entry::new(name, content));
    }

    let file = File::create(output_file).map_err(Error::write(output_file))?;
    let mut archive = BufWriter::new(file);
    for (i, entry) in entries.iter().enumerate() {
        format::write_entry(&mut archive, entry, i + 1 == entries.len())
            .map_err(Error::write(output_file))?;
    }
    archive.flush().map_err(Error::write(output_file))?;

    Ok(PackReport {
        source_dir: source_dir.clone(),
        output_file: output_file.clone(),
        files: entries.into_iter().map(|entry| entry.name).collect(),
    })
}
