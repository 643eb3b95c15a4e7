pub mod database;
pub mod fail2ban;
pub mod history;
