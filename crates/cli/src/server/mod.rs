pub mod shutdown;
pub mod web;

pub use shutdown::cancel_on_signal;
pub use web::start_web_server;
