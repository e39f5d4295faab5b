use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tern_dns_infrastructure::dns::server::DnsServerHandler;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

const MAX_DATAGRAM_SIZE: usize = 512;

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %socket_addr, "DNS server ready");

    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let datagram = recv_buf[..n].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(response) = handler.handle_datagram(&datagram, from).await {
                send_reply(&socket, &response, from).await;
            }
        });
    }
}

async fn send_reply(socket: &UdpSocket, response: &[u8], to: SocketAddr) {
    if let Err(first) = socket.send_to(response, to).await {
        debug!(client = %to, error = %first, "Reply send failed, retrying");
        if let Err(e) = socket.send_to(response, to).await {
            error!(client = %to, error = %e, "Failed to send reply");
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
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
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
