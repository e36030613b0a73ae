use crate::error::{ProcessingError, Result};
use crate::models::column_names;
use crate::readers::TableReader;
use crate::utils::constants::CSV_EXTENSION;
use crate::utils::progress::ProgressReporter;
use polars::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads every CSV file of a directory and stacks them into one frame
pub struct DatasetLoader {
    reader: TableReader,
    max_workers: usize,
}

impl DatasetLoader {
    pub fn new(reader: TableReader) -> Self {
        Self {
            reader,
            max_workers: num_cpus::get(),
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Load all `.csv` files directly inside `dir`.
    ///
    /// A path that is not a directory is a `NotADirectory` error. Earlier
    /// tooling treated that case as a silent no-op, which produced no output
    /// file and no diagnostic.
    pub fn load_directory(
        &self,
        dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<(DataFrame, Vec<PathBuf>)> {
        if !dir.is_dir() {
            return Err(ProcessingError::NotADirectory(dir.display().to_string()));
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            entries.push(entry?.path());
        }
        // read_dir order is platform dependent
        entries.sort();

        self.load_files(entries, progress)
            .map_err(|e| match e {
                ProcessingError::NoInputFiles(_) => {
                    ProcessingError::NoInputFiles(dir.display().to_string())
                }
                other => other,
            })
    }

    /// Load the CSV files among `entries`, in the order given. Other files are skipped.
    pub fn load_files<I>(
        &self,
        entries: I,
        progress: Option<&ProgressReporter>,
    ) -> Result<(DataFrame, Vec<PathBuf>)>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| {
                let is_csv = is_csv_file(path);
                if !is_csv {
                    debug!("Skipping {}", path.display());
                }
                is_csv
            })
            .collect();

        if files.is_empty() {
            return Err(ProcessingError::NoInputFiles("input list".to_string()));
        }

        if let Some(progress) = progress {
            progress.set_length(files.len() as u64);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        // collect() keeps the input order regardless of completion order
        let frames: Vec<DataFrame> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    info!("Reading {}", path.display());
                    if let Some(progress) = progress {
                        progress.set_message(&format!("Reading {}", file_name(path)));
                    }
                    let frame = self.reader.read_table(path);
                    if let Some(progress) = progress {
                        progress.increment(1);
                    }
                    frame
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let combined = stack(&frames, &files)?;
        info!(
            "Loaded {} rows from {} files",
            combined.height(),
            files.len()
        );

        Ok((combined, files))
    }
}

/// Concatenate frames with identical headers. Column types are widened to a
/// common type when files disagree; header-only files take no part in that.
fn stack(frames: &[DataFrame], files: &[PathBuf]) -> Result<DataFrame> {
    let first = frames
        .first()
        .ok_or_else(|| ProcessingError::NoInputFiles("input list".to_string()))?;
    let expected = column_names(first);

    for (frame, path) in frames.iter().zip(files).skip(1) {
        let found = column_names(frame);
        if found != expected {
            return Err(ProcessingError::SchemaMismatch {
                file: path.display().to_string(),
                expected,
                found,
            });
        }
    }

    let mut parts: Vec<LazyFrame> = frames
        .iter()
        .filter(|frame| frame.height() > 0)
        .map(|frame| frame.clone().lazy())
        .collect();
    if parts.is_empty() {
        parts.push(first.clone().lazy());
    }

    let args = UnionArgs {
        to_supertypes: true,
        ..Default::default()
    };
    Ok(concat(parts, args)?.collect()?)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_csv_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == CSV_EXTENSION)
}
