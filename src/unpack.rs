use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    format::{self, Entry},
    Error, Result,
};

/// How marker names are turned into output paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Only plain base names are accepted.
    #[default]
    Strict,
    /// Names are joined onto the output directory verbatim, separators and
    /// parent references included. Only for archives from a trusted packer.
    Trusted,
}

impl NamePolicy {
    fn check(self, name: &str) -> Result<()> {
        if self == NamePolicy::Trusted {
            return Ok(());
        }

        let reason = if name.is_empty() {
            "empty name"
        } else if name == "." || name == ".." {
            "refers to a directory"
        } else if name.contains(['/', '\\']) {
            "contains a path separator"
        } else if name.contains('\0') {
            "contains a NUL byte"
        } else {
            return Ok(());
        };

        Err(Error::UnsafeName {
            name: name.to_owned(),
            reason,
        })
    }
}

#[derive(Clone, Debug)]
pub struct UnpackConfig {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub names: NamePolicy,
}

#[derive(Debug)]
pub struct UnpackReport {
    pub output_dir: PathBuf,
    /// Paths written, in archive order.
    pub files: Vec<PathBuf>,
}

impl UnpackReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

fn read_archive(input_file: &Path) -> Result<Vec<Entry>> {
    if !input_file.exists() {
        return Err(Error::InputNotFound(input_file.to_path_buf()));
    }
    let text = fs::read_to_string(input_file).map_err(Error::read(input_file))?;
    Ok(format::decode(&text))
}

/// Decodes the archive without writing anything.
pub fn list(input_file: &Path) -> Result<Vec<Entry>> {
    read_archive(input_file)
}

/// Writes every entry of `input_file` into `output_dir`.
///
/// All names are checked against the policy before the first write. The
/// first failing write aborts the run; files written up to that point are
/// left in place.
pub fn unpack(config: &UnpackConfig) -> Result<UnpackReport> {
    let UnpackConfig {
        input_file,
        output_dir,
        names,
    } = config;

    let entries = read_archive(input_file)?;

    if entries.is_empty() {
        log::warn!("no file markers found in {}", input_file.display());
        return Ok(UnpackReport {
            output_dir: output_dir.clone(),
            files: vec![],
        });
    }

    for entry in &entries {
        names.check(&entry.name)?;
    }

    fs::create_dir_all(output_dir).map_err(Error::write(output_dir))?;

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.name.as_str()) {
            log::warn!("{} appears more than once, overwriting", entry.name);
        }

        let path = output_dir.join(&entry.name);
        fs::write(&path, &entry.content).map_err(Error::write(&path))?;
        log::debug!("wrote {} ({}B)", path.display(), entry.content.len());
        files.push(path);
    }

    Ok(UnpackReport {
        output_dir: output_dir.clone(),
        files,
    })
}
