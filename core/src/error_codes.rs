//! Stable error-code strings surfaced alongside typed errors.

pub const CONTAINER_IO: &str = "container/io";
pub const CONTAINER_ZIP: &str = "container/zip";
pub const CONTAINER_NOT_ZIP: &str = "container/not-zip";
pub const CONTAINER_TOO_MANY_ENTRIES: &str = "container/too-many-entries";
pub const CONTAINER_PART_TOO_LARGE: &str = "container/part-too-large";
pub const CONTAINER_TOTAL_TOO_LARGE: &str = "container/total-too-large";
pub const CONTAINER_PART_NOT_TEXT: &str = "container/part-not-text";
