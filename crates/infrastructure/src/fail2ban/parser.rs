//! Parsers for `fail2ban-client` text output.

use jailwatch_domain::RawBanTime;

const JAIL_LIST_MARKER: &str = "Jail list:";

/// Extract jail names from `fail2ban-client status`.
///
/// ```text
/// Status
/// |- Number of jail:      2
/// `- Jail list:   nginx-http-auth, sshd
/// ```
///
/// Returns `None` when no jail list line is present.
pub fn parse_jail_list(output: &str) -> Option<Vec<String>> {
    output.lines().find_map(|line| {
        let (_, names) = line.split_once(JAIL_LIST_MARKER)?;
        Some(
            names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    })
}

/// Addresses from `get <jail> banip`: whitespace separated, possibly empty.
pub fn parse_banned_ips(output: &str) -> Vec<String> {
    output.split_whitespace().map(str::to_string).collect()
}

/// Lines of `get <jail> banip --with-time`:
///
/// ```text
/// 192.0.2.7 	2024-03-01 10:00:00 + 600 = 2024-03-01 10:10:00
/// ```
///
/// Field 1 is the address; fields 2 and 3 are handed to the timestamp
/// resolver untouched. Lines without at least an address and one time
/// field are skipped.
pub fn parse_ban_times(output: &str) -> Vec<RawBanTime> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let ip = fields.next()?;
            let primary = fields.next()?;
            let secondary = fields.next().unwrap_or("");
            Some(RawBanTime::new(ip, primary, secondary))
        })
        .collect()
}
