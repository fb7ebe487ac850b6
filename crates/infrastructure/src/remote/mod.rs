//! Remote backend transport over a UNIX domain socket.
pub mod clients;
pub mod errors;
pub mod framing;
pub mod handler;
pub mod server;

pub use clients::{ClientSession, ClientTable};
pub use errors::ServerError;
pub use framing::{Frame, RequestFramer};
pub use handler::{BackendConnectionHandler, ConnectionHandler};
pub use server::UnixSocketServer;
