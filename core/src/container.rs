//! Report archive container handling.
//!
//! Provides abstraction over the zip container that holds a report's layout
//! and data-model parts, with limits on entry counts and uncompressed sizes.

use std::io::{Read, Seek};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error_codes;
use crate::json_access::strip_bom;

#[derive(Debug, Clone, Copy)]
pub struct ContainerLimits {
    pub max_entries: usize,
    pub max_part_uncompressed_bytes: u64,
    pub max_total_uncompressed_bytes: u64,
}

impl Default for ContainerLimits {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            max_part_uncompressed_bytes: 100 * 1024 * 1024,
            max_total_uncompressed_bytes: 500 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a zip container")]
    NotZipContainer,
    #[error("archive has too many entries: {entries} (limit: {max_entries})")]
    TooManyEntries { entries: usize, max_entries: usize },
    #[error("part '{path}' is too large: {size} bytes (limit: {limit} bytes)")]
    PartTooLarge { path: String, size: u64, limit: u64 },
    #[error("total uncompressed size exceeds limit: would exceed {limit} bytes")]
    TotalTooLarge { limit: u64 },
    #[error("failed to read zip entry '{path}': {reason}")]
    ZipRead { path: String, reason: String },
    #[error("part not found in archive: {path}")]
    PartNotFound { path: String },
    #[error("part '{path}' is not valid UTF-8: {reason}")]
    PartNotText { path: String, reason: String },
}

impl ContainerError {
    pub fn code(&self) -> &'static str {
        match self {
            ContainerError::Io(_) => error_codes::CONTAINER_IO,
            ContainerError::NotZipContainer => error_codes::CONTAINER_NOT_ZIP,
            ContainerError::TooManyEntries { .. } => error_codes::CONTAINER_TOO_MANY_ENTRIES,
            ContainerError::PartTooLarge { .. } => error_codes::CONTAINER_PART_TOO_LARGE,
            ContainerError::TotalTooLarge { .. } => error_codes::CONTAINER_TOTAL_TOO_LARGE,
            ContainerError::ZipRead { .. } => error_codes::CONTAINER_ZIP,
            ContainerError::PartNotFound { .. } => error_codes::CONTAINER_ZIP,
            ContainerError::PartNotText { .. } => error_codes::CONTAINER_PART_NOT_TEXT,
        }
    }
}

pub(crate) trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

pub struct ReportContainer {
    archive: ZipArchive<Box<dyn ReadSeek>>,
    limits: ContainerLimits,
    total_read: u64,
}

impl std::fmt::Debug for ReportContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportContainer")
            .field("limits", &self.limits)
            .field("total_read", &self.total_read)
            .finish_non_exhaustive()
    }
}

impl ReportContainer {
    pub fn open_from_reader<R: Read + Seek + 'static>(
        reader: R,
    ) -> Result<ReportContainer, ContainerError> {
        Self::open_from_reader_with_limits(reader, ContainerLimits::default())
    }

    pub fn open_from_reader_with_limits<R: Read + Seek + 'static>(
        reader: R,
        limits: ContainerLimits,
    ) -> Result<ReportContainer, ContainerError> {
        let reader: Box<dyn ReadSeek> = Box::new(reader);
        let archive = ZipArchive::new(reader).map_err(|err| match err {
            ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => {
                ContainerError::NotZipContainer
            }
            ZipError::Io(e) => ContainerError::Io(e),
            other => ContainerError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                other.to_string(),
            )),
        })?;

        if archive.len() > limits.max_entries {
            return Err(ContainerError::TooManyEntries {
                entries: archive.len(),
                max_entries: limits.max_entries,
            });
        }

        let container = ReportContainer {
            archive,
            limits,
            total_read: 0,
        };

        // Logged once per open, not on every part read.
        let names: Vec<&str> = container.archive.file_names().collect();
        debug!(entries = names.len(), ?names, "opened report archive");

        Ok(container)
    }

    pub fn open_from_path(
        path: impl AsRef<std::path::Path>,
    ) -> Result<ReportContainer, ContainerError> {
        Self::open_from_path_with_limits(path, ContainerLimits::default())
    }

    pub fn open_from_path_with_limits(
        path: impl AsRef<std::path::Path>,
        limits: ContainerLimits,
    ) -> Result<ReportContainer, ContainerError> {
        let file = std::fs::File::open(path)?;
        Self::open_from_reader_with_limits(file, limits)
    }

    pub fn read_part(&mut self, name: &str) -> Result<Vec<u8>, ContainerError> {
        let size = {
            let file = self.archive.by_name(name).map_err(|e| match e {
                ZipError::FileNotFound => ContainerError::PartNotFound {
                    path: name.to_string(),
                },
                ZipError::Io(io_err) => ContainerError::ZipRead {
                    path: name.to_string(),
                    reason: io_err.to_string(),
                },
                other => ContainerError::ZipRead {
                    path: name.to_string(),
                    reason: other.to_string(),
                },
            })?;
            file.size()
        };

        if size > self.limits.max_part_uncompressed_bytes {
            return Err(ContainerError::PartTooLarge {
                path: name.to_string(),
                size,
                limit: self.limits.max_part_uncompressed_bytes,
            });
        }

        let new_total = self.total_read.saturating_add(size);
        if new_total > self.limits.max_total_uncompressed_bytes {
            return Err(ContainerError::TotalTooLarge {
                limit: self.limits.max_total_uncompressed_bytes,
            });
        }

        let mut file = self
            .archive
            .by_name(name)
            .map_err(|e| ContainerError::ZipRead {
                path: name.to_string(),
                reason: e.to_string(),
            })?;

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| ContainerError::ZipRead {
                path: name.to_string(),
                reason: e.to_string(),
            })?;

        self.total_read = new_total;
        Ok(buf)
    }

    /// Reads a part and decodes it as UTF-8 text, stripping a leading BOM.
    pub fn read_part_text(&mut self, name: &str) -> Result<String, ContainerError> {
        let bytes = self.read_part(name)?;
        let text = std::str::from_utf8(&bytes).map_err(|e| ContainerError::PartNotText {
            path: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(strip_bom(text).to_string())
    }

    pub fn read_part_text_optional(
        &mut self,
        name: &str,
    ) -> Result<Option<String>, ContainerError> {
        match self.read_part_text(name) {
            Ok(text) => Ok(Some(text)),
            Err(ContainerError::PartNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn limits(&self) -> &ContainerLimits {
        &self.limits
    }
}
