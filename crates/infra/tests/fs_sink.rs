// crates/infra/tests/fs_sink.rs
use std::{fs, io};

use proptest::prelude::*;
use version_stamp_infra::FsVersionFileSink;
use version_stamp_ports::VersionFileSink;
use version_stamp_shared_kernel::{InfrastructureError, VersionStampError};

#[test]
fn overwrites_existing_file_without_merging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_version.py");
    fs::write(&path, "VERSION = \"0.9.0\"\n# stale trailer\n").unwrap();

    FsVersionFileSink.overwrite(&path, "VERSION = \"1.0.0\"").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "VERSION = \"1.0.0\"");
}

#[test]
fn missing_parent_maps_to_file_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("_version.py");

    let err = FsVersionFileSink.overwrite(&path, "VERSION = \"1\"").unwrap_err();

    match err {
        VersionStampError::Infrastructure(InfrastructureError::FileWrite { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn read_only_directory_maps_to_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let pkg = dir.path().join("fritzexporter");
    fs::create_dir(&pkg).unwrap();
    fs::set_permissions(&pkg, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users bypass directory permissions.
    let privileged = fs::write(pkg.join(".writable"), "").is_ok();
    let result = FsVersionFileSink.overwrite(&pkg.join("_version.py"), "VERSION = \"1.4.2\"");
    fs::set_permissions(&pkg, fs::Permissions::from_mode(0o755)).unwrap();
    if privileged {
        return;
    }

    let err = result.unwrap_err();
    assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    assert!(matches!(
        err,
        VersionStampError::Infrastructure(InfrastructureError::FileWrite { .. })
    ));
    assert!(!pkg.join("_version.py").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn device_write_failure_maps_to_file_write_error() {
    let err = FsVersionFileSink
        .overwrite(std::path::Path::new("/dev/full"), "VERSION = \"1.4.2\"")
        .unwrap_err();

    match err {
        VersionStampError::Infrastructure(InfrastructureError::FileWrite { path, source }) => {
            assert_eq!(path, std::path::Path::new("/dev/full"));
            assert_eq!(source.kind(), io::ErrorKind::StorageFull);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

proptest! {
    #[test]
    fn file_holds_exactly_the_written_contents(body in "[^\"\n]{0,64}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_version.py");

        FsVersionFileSink.overwrite(&path, &body).unwrap();
        FsVersionFileSink.overwrite(&path, &body).unwrap();

        prop_assert_eq!(fs::read_to_string(&path).unwrap(), body);
    }
}
