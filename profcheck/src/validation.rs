//! Checks a directory of profile records for required fields.
//!
//! Every entry of the directory is expected to be a file holding one JSON
//! object. Only the presence of the required keys is checked, their values
//! are never inspected.

use std::fs::{read_dir, read_to_string};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ProfileError, ProfileResult};

pub const DEFAULT_DATA_DIR: &'static str = "src/data";
pub const REQUIRED_FIELDS: [&'static str; 2] = ["name", "bio"];

/// What to do once a profile turns out to be invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureMode {
    /// Stop at the first error, remaining files are left unchecked.
    FailFast,
    /// Check every file and gather all errors.
    CollectAll,
}

#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    pub data_dir: PathBuf,
    pub required_fields: Vec<String>,
    pub mode: FailureMode,
}

impl ValidatorConfig {
    pub fn new(data_dir: impl AsRef<Path>) -> ValidatorConfig {
        ValidatorConfig {
            data_dir: data_dir.as_ref().to_path_buf(),
            required_fields: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
            mode: FailureMode::FailFast,
        }
    }

    pub fn with_mode(mut self, mode: FailureMode) -> ValidatorConfig {
        self.mode = mode;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> ValidatorConfig {
        ValidatorConfig::new(DEFAULT_DATA_DIR)
    }
}

/// Outcome of one pass over the data directory.
#[derive(Debug, Default)]
pub struct Report {
    /// Number of files that were opened and inspected.
    pub checked: usize,
    pub errors: Vec<ProfileError>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct ProfileValidator {
    config: ValidatorConfig,
}

impl ProfileValidator {
    pub fn new(config: ValidatorConfig) -> ProfileValidator {
        ProfileValidator { config }
    }

    /// Lists the data directory once, in the order the filesystem yields.
    pub fn list_profiles(&self) -> ProfileResult<Vec<PathBuf>> {
        let dir = &self.config.data_dir;
        let to_error = |source| ProfileError::Filesystem {
            path: dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in read_dir(dir).map_err(to_error)? {
            paths.push(entry.map_err(to_error)?.path());
        }
        Ok(paths)
    }

    pub fn check_file(&self, path: &Path) -> ProfileResult<()> {
        let file = display_name(path);
        log::debug!("checking {}", path.display());

        let contents = read_to_string(path).map_err(|source| ProfileError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;

        // Anything but an object at the top level is rejected by the parser itself.
        let record: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|source| ProfileError::Parse {
                file: file.clone(),
                source,
            })?;
        log::trace!("{} has keys {:?}", file, record.keys().collect::<Vec<_>>());

        check_record(&file, &record, &self.config.required_fields)
    }

    pub fn run(&self) -> Report {
        let mut report = Report::default();
        log::info!("validating profiles in {}", self.config.data_dir.display());

        let paths = match self.list_profiles() {
            Ok(paths) => paths,
            Err(err) => {
                report.errors.push(err);
                return report;
            }
        };

        for path in paths {
            report.checked += 1;
            if let Err(err) = self.check_file(&path) {
                log::info!("{}", err);
                report.errors.push(err);
                if self.config.mode == FailureMode::FailFast {
                    break;
                }
            }
        }

        report
    }
}

/// Asserts that `record` holds every key in `fields`, in order.
pub fn check_record(
    file: &str,
    record: &Map<String, Value>,
    fields: &[String],
) -> ProfileResult<()> {
    match fields.iter().find(|field| !record.contains_key(field.as_str())) {
        Some(field) => Err(ProfileError::MissingField {
            file: file.to_string(),
            field: field.clone(),
        }),
        None => Ok(()),
    }
}

/// Checks every profile in `data_dir`, stopping at the first error.
///
/// Returns the number of files checked.
pub fn validate_profiles(data_dir: impl AsRef<Path>) -> ProfileResult<usize> {
    let report = ProfileValidator::new(ValidatorConfig::new(data_dir)).run();
    match report.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(report.checked),
    }
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
