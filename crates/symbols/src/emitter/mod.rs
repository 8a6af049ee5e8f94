//! Artifact rendering and writing.
//!
//! Both artifacts are rendered fully in memory by [`Artifacts::render`];
//! nothing touches the disk until [`Artifacts::write_to`]. Writing stages both
//! files as temporaries next to their targets and renames them into place
//! only once both are staged, so a failed run never leaves a half-generated
//! pair behind.
//!
//! Entry order in both artifacts is fixed: symbol entries sorted by code, code
//! entries sorted by code, codes sorted. Identical resolutions render to
//! identical bytes.

mod grammar;
mod source;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};
use tempfile::NamedTempFile;

use crate::errors::{Result, SymbolsError};
use crate::models::Resolution;

pub use grammar::{render_grammar, GrammarOptions};
pub use source::render_source;

/// Output file names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactNames {
    pub grammar: String,
    pub source: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            grammar: "CurrencyConverterSymbols.g4".to_string(),
            source: "currency_symbols.rs".to_string(),
        }
    }
}

/// Rendered grammar fragment and Rust source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    pub grammar: String,
    pub source: String,
}

impl Artifacts {
    /// Render both artifacts.
    ///
    /// Fails with [`SymbolsError::EmptySymbolTable`] when `resolution` has no
    /// symbol to put in the grammar.
    pub fn render(resolution: &Resolution, options: &GrammarOptions) -> Result<Self> {
        Ok(Self {
            grammar: render_grammar(resolution, options)?,
            source: render_source(resolution),
        })
    }

    /// Write both artifacts into `dir`, creating it if needed.
    ///
    /// Either both files are replaced or neither new file remains: if the
    /// source cannot be moved into place, the grammar just written is removed
    /// again. Returns the written paths as `(grammar, source)`.
    pub fn write_to(&self, dir: &Path, names: &ArtifactNames) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(dir).map_err(|source| SymbolsError::ArtifactWrite {
            path: dir.to_path_buf(),
            source,
        })?;

        let grammar_path = dir.join(&names.grammar);
        let source_path = dir.join(&names.source);
        let staged_grammar = stage(dir, &self.grammar)?;
        let staged_source = stage(dir, &self.source)?;

        persist(staged_grammar, &grammar_path)?;
        if let Err(error) = persist(staged_source, &source_path) {
            if let Err(cleanup) = fs::remove_file(&grammar_path) {
                warn!(
                    "Failed to remove {} after aborted write: {}",
                    grammar_path.display(),
                    cleanup
                );
            }
            return Err(error);
        }

        info!(
            "Wrote {} and {}",
            grammar_path.display(),
            source_path.display()
        );
        Ok((grammar_path, source_path))
    }
}

/// Write `contents` to a temporary file in `dir`, removed on drop unless persisted.
fn stage(dir: &Path, contents: &str) -> Result<NamedTempFile> {
    let write_error = |source| SymbolsError::ArtifactWrite {
        path: dir.to_path_buf(),
        source,
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    Ok(file)
}

fn persist(file: NamedTempFile, path: &Path) -> Result<()> {
    file.persist(path)
        .map(|_| ())
        .map_err(|e| SymbolsError::ArtifactWrite {
            path: path.to_path_buf(),
            source: e.error,
        })
}
