//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures; everything else travels as `anyhow::Error`
#[derive(Debug)]
pub enum CliError {
    /// Audio directory missing or not a directory
    AudioDirNotFound(String),
    /// No audio directory given on the command line or in the config file
    AudioDirMissing,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Name map is not a JSON object
    NameMapError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::AudioDirNotFound(path) => write!(f, "Audio directory not found: {path}"),
            CliError::AudioDirMissing => write!(
                f,
                "No audio directory given (use --audio-dir or [dictionary] audio_dir)"
            ),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NameMapError(msg) => write!(f, "Invalid name map: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_dir_not_found_display() {
        let error = CliError::AudioDirNotFound("clips".to_string());
        assert_eq!(error.to_string(), "Audio directory not found: clips");
    }

    #[test]
    fn test_audio_dir_missing_display() {
        assert!(CliError::AudioDirMissing
            .to_string()
            .contains("--audio-dir"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown format 'yaml'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown format 'yaml'"
        );
    }

    #[test]
    fn test_name_map_error_display() {
        let error = CliError::NameMapError("expected a JSON object".to_string());
        assert_eq!(error.to_string(), "Invalid name map: expected a JSON object");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::AudioDirNotFound("音频".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "Audio directory not found: 音频");
    }
}
