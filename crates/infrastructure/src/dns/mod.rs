pub mod listener;
pub mod rdata;
pub mod server;
pub mod wire;

pub use listener::UdpListener;
pub use rdata::{encode_rdata, RdataEncoder, RdataError};
pub use server::DnsServerHandler;
