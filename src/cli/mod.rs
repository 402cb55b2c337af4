pub mod email;
pub mod server;
