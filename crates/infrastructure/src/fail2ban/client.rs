use super::parser::{parse_ban_times, parse_banned_ips, parse_jail_list};
use async_trait::async_trait;
use jailwatch_application::ports::BanSource;
use jailwatch_domain::config::Fail2banConfig;
use jailwatch_domain::{DomainError, RawBanTime, SourceStatus};
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

const SUDO: &str = "sudo";

/// One way of launching the client: a program plus leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    program: String,
    prefix: Vec<String>,
}

impl Invocation {
    fn describe(&self, args: &[&str]) -> String {
        let mut parts = Vec::with_capacity(1 + self.prefix.len() + args.len());
        parts.push(self.program.as_str());
        parts.extend(self.prefix.iter().map(String::as_str));
        parts.extend_from_slice(args);
        parts.join(" ")
    }
}

/// [`BanSource`] backed by the `fail2ban-client` command-line tool.
///
/// Each query walks the invocation chain (`sudo -n <path>`, then `<path>`,
/// for every configured path) until one exits successfully. A missing binary
/// or non-zero exit moves on to the next invocation; a timeout ends the query.
pub struct Fail2banClient {
    chain: Vec<Invocation>,
    timeout: Duration,
    ping_timeout: Duration,
    search_path: String,
    fallback_jails: Vec<String>,
}

impl Fail2banClient {
    pub fn from_config(config: &Fail2banConfig) -> Self {
        let mut chain = Vec::with_capacity(config.client_paths.len() * 2);
        for path in &config.client_paths {
            if config.use_sudo {
                chain.push(Invocation {
                    program: SUDO.to_string(),
                    prefix: vec!["-n".to_string(), path.clone()],
                });
            }
            chain.push(Invocation {
                program: path.clone(),
                prefix: Vec::new(),
            });
        }

        Self {
            chain,
            timeout: Duration::from_secs(config.timeout_secs),
            ping_timeout: Duration::from_secs(config.ping_timeout_secs),
            search_path: config.search_path.clone(),
            fallback_jails: config.fallback_jails.clone(),
        }
    }

    pub fn invocation_count(&self) -> usize {
        self.chain.len()
    }

    /// Run `args` through the invocation chain and return stdout of the
    /// first successful attempt.
    async fn run(&self, args: &[&str], limit: Duration) -> Result<String, DomainError> {
        let mut last_failure = "no client invocation configured".to_string();

        for invocation in &self.chain {
            let described = invocation.describe(args);

            let mut cmd = Command::new(&invocation.program);
            cmd.args(&invocation.prefix)
                .args(args)
                .env_clear()
                .env("PATH", &self.search_path)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            match tokio::time::timeout(limit, cmd.output()).await {
                Err(_) => {
                    warn!(command = %described, timeout_secs = limit.as_secs(), "fail2ban-client timed out");
                    return Err(DomainError::SourceUnavailable(format!(
                        "Timeout connecting to Fail2ban service after {}s",
                        limit.as_secs()
                    )));
                }
                Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                    debug!(command = %described, "Command not found");
                    last_failure = "fail2ban-client not found. Is Fail2ban installed?".to_string();
                }
                Ok(Err(e)) => {
                    debug!(command = %described, error = %e, "Failed to spawn command");
                    last_failure = format!("Failed to run fail2ban-client: {}", e);
                }
                Ok(Ok(output)) if output.status.success() => {
                    debug!(command = %described, "fail2ban-client succeeded");
                    return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
                }
                Ok(Ok(output)) => {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    debug!(
                        command = %described,
                        status = %output.status,
                        stderr = %stderr.trim(),
                        "Command returned an error"
                    );
                    last_failure = format!("Fail2ban client error: {}", stderr.trim());
                }
            }
        }

        Err(DomainError::SourceUnavailable(last_failure))
    }
}

#[async_trait]
impl BanSource for Fail2banClient {
    #[instrument(skip(self))]
    async fn status(&self) -> SourceStatus {
        if let Err(e) = self.run(&["ping"], self.ping_timeout).await {
            return SourceStatus::unreachable(source_message(e));
        }

        let version = self
            .run(&["version"], self.ping_timeout)
            .await
            .ok()
            .map(|out| out.trim().to_string())
            .filter(|v| !v.is_empty());

        SourceStatus::running(version)
    }

    #[instrument(skip(self))]
    async fn list_jails(&self) -> Vec<String> {
        match self.run(&["status"], self.timeout).await {
            Ok(output) => parse_jail_list(&output).unwrap_or_else(|| {
                debug!("No jail list in status output, using fallback jails");
                self.fallback_jails.clone()
            }),
            Err(e) => {
                warn!(error = %e, fallback = ?self.fallback_jails, "Cannot list jails, using fallback");
                self.fallback_jails.clone()
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_banned(&self, jail: &str) -> Vec<String> {
        match self.run(&["get", jail, "banip"], self.timeout).await {
            Ok(output) => parse_banned_ips(&output),
            Err(e) => {
                warn!(jail = %jail, error = %e, "Cannot list banned addresses");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_banned_with_raw_times(&self, jail: &str) -> Vec<RawBanTime> {
        match self
            .run(&["get", jail, "banip", "--with-time"], self.timeout)
            .await
        {
            Ok(output) => parse_ban_times(&output),
            Err(e) => {
                debug!(jail = %jail, error = %e, "Ban times unavailable");
                Vec::new()
            }
        }
    }
}

fn source_message(e: DomainError) -> String {
    match e {
        DomainError::SourceUnavailable(message) => message,
        other => other.to_string(),
    }
}
