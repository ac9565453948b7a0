use portare_dns_application::use_cases::ResolveQueryUseCase;
use portare_dns_domain::Config;
use portare_dns_infrastructure::dns::{DnsServerHandler, UdpListener};
use portare_dns_infrastructure::repositories::InMemoryZoneStore;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_dns_server(
    config: &Config,
    store: Arc<InMemoryZoneStore>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.dns_bind_addr().parse()?;
    let socket = create_udp_socket(socket_addr, config.server.recv_buffer_size)?;

    let use_case = ResolveQueryUseCase::from_config(store, &config.resolver);
    let handler = DnsServerHandler::new(Arc::new(use_case));
    let listener = UdpListener::new(socket, handler, config.resolver.dispatch)
        .with_recv_buffer_size(config.server.recv_buffer_size);

    info!(
        bind_address = %socket_addr,
        zone_match_order = %config.resolver.zone_match_order,
        lookup_mode = config.resolver.lookup_mode.as_str(),
        lookup_timeout_ms = config.resolver.lookup_timeout_ms,
        "DNS server ready"
    );

    listener.run(shutdown).await;
    Ok(())
}

fn create_udp_socket(socket_addr: SocketAddr, recv_buffer_size: usize) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(recv_buffer_size.max(64 * 1024))?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
