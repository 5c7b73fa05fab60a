//! Integration tests for the TCP transport.
//!
//! These spin up a real listener on a loopback port and verify that bytes
//! actually flow in both directions, that closure surfaces as `Ok(None)`,
//! and that large sends arrive complete (short writes are looped, not
//! surfaced).

use chatline_transport::{Connection, TcpConnection, TcpTransport, Transport};

/// Binds a transport on a random loopback port and returns it with the
/// address a client should dial.
async fn bind_transport() -> (TcpTransport, String) {
    let transport = TcpTransport::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = transport.local_addr().expect("should have local addr");
    (transport, addr.to_string())
}

async fn connect_client(addr: &str) -> TcpConnection {
    let (host, service) = addr.rsplit_once(':').expect("addr has a port");
    TcpConnection::connect(host, service)
        .await
        .expect("client should connect")
}

#[tokio::test]
async fn test_accept_and_send_receive_both_directions() {
    let (mut transport, addr) = bind_transport().await;

    let server_task =
        tokio::spawn(
            async move { transport.accept().await.expect("should accept") },
        );
    let client = connect_client(&addr).await;
    let server_conn = server_task.await.expect("accept task should complete");

    assert!(server_conn.id().into_inner() > 0);
    assert_ne!(server_conn.id(), client.id());

    server_conn
        .send(b"hello from server")
        .await
        .expect("send should succeed");
    let received = client
        .recv()
        .await
        .expect("recv should succeed")
        .expect("should have data");
    assert_eq!(received, b"hello from server");

    client
        .send(b"hello from client")
        .await
        .expect("send should succeed");
    let received = server_conn
        .recv()
        .await
        .expect("recv should succeed")
        .expect("should have data");
    assert_eq!(received, b"hello from client");
}

#[tokio::test]
async fn test_recv_returns_none_on_peer_close() {
    let (mut transport, addr) = bind_transport().await;

    let server_task =
        tokio::spawn(
            async move { transport.accept().await.expect("should accept") },
        );
    let client = connect_client(&addr).await;
    let server_conn = server_task.await.expect("accept task should complete");

    client.close().await.expect("close should succeed");
    drop(client);

    let received = server_conn.recv().await.expect("recv should succeed");
    assert!(received.is_none(), "closed stream should read as None");
}

#[tokio::test]
async fn test_large_send_arrives_complete() {
    let (mut transport, addr) = bind_transport().await;

    let server_task =
        tokio::spawn(
            async move { transport.accept().await.expect("should accept") },
        );
    let client = connect_client(&addr).await;
    let server_conn = server_task.await.expect("accept task should complete");

    // Much larger than one receive buffer, so it arrives in many chunks.
    let payload: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let expected = payload.clone();

    let send_task = tokio::spawn(async move {
        server_conn.send(&payload).await.expect("send should succeed");
        server_conn.close().await.expect("close should succeed");
    });

    let mut received = Vec::new();
    while let Some(chunk) = client.recv().await.expect("recv should succeed") {
        received.extend_from_slice(&chunk);
    }
    send_task.await.expect("send task should complete");

    assert_eq!(received, expected);
}

#[tokio::test]
async fn test_connect_to_unreachable_service_fails() {
    // Port 1 on loopback is essentially never listening.
    let result = TcpConnection::connect("127.0.0.1", "1").await;
    assert!(result.is_err());
}
