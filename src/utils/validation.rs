use crate::utils::error::{LeagueError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LeagueError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LeagueError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_exists(field_name: &str, path: &str) -> Result<()> {
    // metadata rather than is_file, so named pipes still pass
    if std::fs::metadata(Path::new(path)).is_err() {
        return Err(LeagueError::ConfigError {
            field: field_name.to_string(),
            message: format!("No such input file: {}", path),
        });
    }

    Ok(())
}
