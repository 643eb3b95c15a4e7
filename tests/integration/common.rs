#![allow(dead_code)]

use jailwatch_domain::config::Fail2banConfig;
use jailwatch_infrastructure::fail2ban::Fail2banClient;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scripted `fail2ban-client` whose ban list lives in a plain file, so a
/// test can ban and unban addresses between passes.
pub struct ScriptedDaemon {
    dir: TempDir,
}

impl ScriptedDaemon {
    #[cfg(unix)]
    pub fn start() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let bans = dir.path().join("bans");
        std::fs::write(&bans, "").unwrap();

        // bans file format: "<jail> <ip> <date> <time>" per line
        let script = format!(
            r#"#!/bin/sh
BANS='{bans}'
case "$1" in
  ping) echo "Server replied: pong" ;;
  version) echo "1.0.2" ;;
  status)
    jails=$(cut -d' ' -f1 "$BANS" | sort -u | paste -sd, - | sed 's/,/, /g')
    echo "Status"
    echo "|- Number of jail: 1"
    echo "\`- Jail list: $jails"
    ;;
  get)
    if [ "$4" = "--with-time" ]; then
      awk -v j="$2" '$1 == j {{ print $2 " \t" $3 " " $4 " + 600 = later" }}' "$BANS"
    else
      awk -v j="$2" '$1 == j {{ printf "%s ", $2 }} END {{ print "" }}' "$BANS"
    fi
    ;;
  *) exit 255 ;;
esac
"#,
            bans = bans.display()
        );

        let client = dir.path().join("fail2ban-client");
        std::fs::write(&client, script).unwrap();
        std::fs::set_permissions(&client, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir }
    }

    pub fn client_path(&self) -> PathBuf {
        self.dir.path().join("fail2ban-client")
    }

    pub fn ban(&self, jail: &str, ip: &str, date: &str, time: &str) {
        let path = self.dir.path().join("bans");
        let mut contents = std::fs::read_to_string(&path).unwrap();
        contents.push_str(&format!("{} {} {} {}\n", jail, ip, date, time));
        std::fs::write(&path, contents).unwrap();
    }

    pub fn unban(&self, jail: &str, ip: &str) {
        let path = self.dir.path().join("bans");
        let contents: String = std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .filter(|line| !line.starts_with(&format!("{} {} ", jail, ip)))
            .map(|line| format!("{}\n", line))
            .collect();
        std::fs::write(&path, contents).unwrap();
    }

    pub fn client(&self) -> Fail2banClient {
        Fail2banClient::from_config(&Fail2banConfig {
            client_paths: vec![self.client_path().to_string_lossy().into_owned()],
            use_sudo: false,
            timeout_secs: 5,
            ping_timeout_secs: 5,
            search_path: "/usr/local/bin:/usr/bin:/bin".to_string(),
            fallback_jails: vec![],
            query_ban_times: true,
        })
    }
}
