use crate::dns::server::DnsServerHandler;
use portare_dns_domain::config::DispatchMode;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_RECV_BUFFER: usize = 4096;

/// Receive loop over a single UDP socket.
pub struct UdpListener {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    dispatch: DispatchMode,
    recv_buffer_size: usize,
}

impl UdpListener {
    pub fn new(socket: UdpSocket, handler: DnsServerHandler, dispatch: DispatchMode) -> Self {
        Self {
            socket: Arc::new(socket),
            handler: Arc::new(handler),
            dispatch,
            recv_buffer_size: DEFAULT_RECV_BUFFER,
        }
    }

    pub fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serves until `shutdown` is cancelled. In-flight concurrent tasks are not awaited.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut recv_buf = vec![0u8; self.recv_buffer_size];
        info!(
            local_addr = ?self.socket.local_addr().ok(),
            dispatch = self.dispatch.as_str(),
            "DNS listener started"
        );

        loop {
            let received = tokio::select! {
                _ = shutdown.cancelled() => break,
                received = self.socket.recv_from(&mut recv_buf) => received,
            };

            let (len, from) = match received {
                Ok(r) => r,
                Err(e) => {
                    error!(error = %e, "UDP recv error");
                    continue;
                }
            };

            match self.dispatch {
                DispatchMode::Concurrent => {
                    let handler = self.handler.clone();
                    let socket = self.socket.clone();
                    let datagram: Arc<[u8]> = Arc::from(&recv_buf[..len]);
                    tokio::spawn(async move {
                        respond(&handler, &socket, &datagram, from).await;
                    });
                }
                DispatchMode::Sequential => {
                    respond(&self.handler, &self.socket, &recv_buf[..len], from).await;
                }
            }
        }

        info!("DNS listener stopped");
    }
}

async fn respond(
    handler: &DnsServerHandler,
    socket: &UdpSocket,
    datagram: &[u8],
    from: SocketAddr,
) {
    if let Some(response) = handler.handle_datagram(datagram).await {
        if let Err(e) = socket.send_to(&response, from).await {
            error!(client = %from, error = %e, "Failed to send response");
        }
    }
}
