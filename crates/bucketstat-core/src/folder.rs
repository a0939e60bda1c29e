//! Folder placeholder detection.

/// Separator that terminates folder placeholder keys.
pub const FOLDER_DELIMITER: char = '/';

/// Whether `key` is a folder placeholder, i.e. ends with [`FOLDER_DELIMITER`].
///
/// Folder placeholders are zero-byte objects created by consoles and sync
/// tools; they carry no disk cost. The empty key is not a folder.
///
/// ```
/// use bucketstat_core::folder::is_folder;
///
/// assert!(is_folder("photos/2021/"));
/// assert!(!is_folder("photos/2021/a.jpg"));
/// assert!(!is_folder(""));
/// ```
#[must_use]
pub fn is_folder(key: &str) -> bool {
    key.ends_with(FOLDER_DELIMITER)
}
