use std::path::{Path, MAIN_SEPARATOR};

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    fn to_str_checked(&self) -> Result<&str>;

    /// Converts a path to a forward-slash separated string regardless of the
    /// host path separator, so patterns match the same on every platform.
    fn to_slash_string(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_slash_string(&self) -> Result<String> {
        Ok(self.to_str_checked()?.replace(MAIN_SEPARATOR, "/"))
    }
}
