//! Integration tests for error types

#[cfg(test)]
mod tests {
    use inst_errors::*;
    use std::path::Path;

    #[test]
    fn test_error_conversion() {
        let fs_err = FsError::SourceNotFound {
            path: "/pkg".into(),
        };
        let err: Error = fs_err.into();
        assert!(matches!(err, Error::Fs(_)));

        let manifest_err = ManifestError::SerializeFailed {
            message: "boom".into(),
        };
        let err: Error = manifest_err.into();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ManifestError::ParseFailed {
            path: "/srv/iobroker/package.json".into(),
            message: "expected value at line 1 column 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse manifest /srv/iobroker/package.json: expected value at line 1 column 2"
        );
    }

    #[test]
    fn test_permission_denied_mapping() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = FsError::create_dir(&io_err, Path::new("/opt/iobroker/lib"));
        assert!(matches!(err, FsError::PermissionDenied { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = FsError::create_dir(&io_err, Path::new("/opt/iobroker/lib"));
        assert!(matches!(err, FsError::CreateDirFailed { .. }));
    }

    #[test]
    fn test_user_facing_codes_and_hints() {
        let err: Error = ManifestError::ParseFailed {
            path: "package.json".into(),
            message: "eof".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("manifest.parse_failed"));
        assert!(err.user_hint().is_some());
    }

    #[test]
    fn test_overlap_errors_have_codes() {
        let err: Error = FsError::SameSourceAndTarget {
            path: "/srv/pkg".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("fs.same_source_and_target"));
        assert!(err.user_hint().is_some());

        let err = FsError::TargetInsideSource {
            source_root: "/srv/pkg".into(),
            target_dir: "/srv/pkg/sub".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot copy /srv/pkg into its own subdirectory /srv/pkg/sub"
        );
        assert_eq!(err.user_code(), Some("fs.target_inside_source"));
    }

    #[test]
    fn test_error_clone() {
        let err = ConfigError::NoPackageRoot {
            path: "/usr/bin/inst".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
