//! CLI error handling

use std::fmt;

use inst_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Path discovery failed
    Config(inst_errors::Error),
    /// Installation failed
    Install(inst_errors::Error),
    /// Serializing the report failed
    Report(serde_json::Error),
    /// Writing the report failed
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e.user_message()),
            CliError::Install(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Report(e) => write!(f, "Failed to render report: {e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) | CliError::Install(e) => Some(e),
            CliError::Report(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<inst_errors::Error> for CliError {
    fn from(e: inst_errors::Error) -> Self {
        CliError::Install(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inst_errors::ManifestError;

    #[test]
    fn test_install_error_rendering() {
        let err = CliError::from(inst_errors::Error::from(ManifestError::ParseFailed {
            path: "/opt/iobroker/package.json".into(),
            message: "key must be a string at line 1 column 2".into(),
        }));
        let rendered = err.to_string();
        assert!(rendered.starts_with("failed to parse manifest /opt/iobroker/package.json"));
        assert!(rendered.contains("Code: manifest.parse_failed"));
        assert!(rendered.contains("Hint: "));
    }

    #[test]
    fn test_report_error_rendering() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::Report(json_err);
        assert!(err.to_string().starts_with("Failed to render report: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_rendering() {
        let err = CliError::Config(
            inst_errors::ConfigError::CurrentDirUnavailable {
                message: "No such file or directory".into(),
            }
            .into(),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: current directory is unavailable: No such file or directory"
        );
    }
}
