pub mod socket;
pub mod web;

pub use socket::start_socket_server;
pub use web::start_web_server;
