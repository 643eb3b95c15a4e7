#![allow(dead_code)]
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Canned `fail2ban-client` replies used by the fake client script.
pub const STATUS_OUTPUT: &str = "Status\n|- Number of jail:\t2\n`- Jail list:\tsshd, nginx-http-auth";
pub const SSHD_BANS: &str = "192.0.2.10 198.51.100.20";
pub const SSHD_BANS_WITH_TIME: &str = "192.0.2.10 \t2024-03-01 10:00:00 + 600 = 2024-03-01 10:10:00\n\
198.51.100.20 \t1709290800 + 600 = 1709291400";
pub const NGINX_BANS: &str = "203.0.113.5";

/// A directory holding executable shell scripts standing in for the client.
pub struct FakeClientDir {
    dir: TempDir,
}

impl FakeClientDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `name` with the given shell body and make it executable.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A well-behaved client answering the usual queries.
    #[cfg(unix)]
    pub fn healthy_client(&self, name: &str) -> PathBuf {
        let body = format!(
            r#"case "$*" in
  "ping") echo "Server replied: pong" ;;
  "version") echo "1.0.2" ;;
  "status") printf '%s\n' '{status}' ;;
  "get sshd banip") echo '{sshd}' ;;
  "get sshd banip --with-time") printf '%s\n' '{sshd_time}' ;;
  "get nginx-http-auth banip") echo '{nginx}' ;;
  "get nginx-http-auth banip --with-time") exit 255 ;;
  *) echo "unknown command" >&2; exit 255 ;;
esac"#,
            status = STATUS_OUTPUT,
            sshd = SSHD_BANS,
            sshd_time = SSHD_BANS_WITH_TIME,
            nginx = NGINX_BANS,
        );
        self.script(name, &body)
    }
}
