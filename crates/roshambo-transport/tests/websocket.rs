//! Integration tests for the WebSocket transport.
//!
//! These spin up a real listener and a real tokio-tungstenite client to
//! verify that frames actually flow, that a clean client close surfaces as
//! `Ok(None)`, and that `closed()` resolves when the transport ends.

#[cfg(feature = "websocket")]
mod websocket {
    use std::time::Duration;

    use roshambo_transport::{Connection, Transport, WebSocketTransport};

    type ClientWs = tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >;

    async fn connect_client(addr: &str) -> ClientWs {
        let url = format!("ws://{addr}");
        let (ws, _) = tokio_tungstenite::connect_async(&url)
            .await
            .expect("client should connect");
        ws
    }

    /// Binds on port 0, accepts one connection, and returns both ends.
    async fn accepted_pair() -> (
        roshambo_transport::WebSocketConnection,
        ClientWs,
    ) {
        let mut transport = WebSocketTransport::bind("127.0.0.1:0")
            .await
            .expect("should bind");
        let addr = transport
            .local_addr()
            .expect("should have local addr")
            .to_string();

        let server_handle = tokio::spawn(async move {
            transport.accept().await.expect("should accept")
        });
        let client_ws = connect_client(&addr).await;
        let server_conn = server_handle.await.expect("task should complete");
        (server_conn, client_ws)
    }

    #[tokio::test]
    async fn test_accept_and_send_receive() {
        let (server_conn, mut client_ws) = accepted_pair().await;

        assert!(server_conn.id().into_inner() > 0);

        // Server sends, client receives.
        server_conn
            .send(b"hello from server")
            .await
            .expect("send should succeed");

        use futures_util::StreamExt;
        let msg = client_ws.next().await.unwrap().unwrap();
        assert_eq!(msg.into_data().as_ref(), b"hello from server");

        // Client sends, server receives.
        use futures_util::SinkExt;
        use tokio_tungstenite::tungstenite::Message;
        client_ws
            .send(Message::Binary(b"hello from client".to_vec().into()))
            .await
            .unwrap();

        let received = server_conn
            .recv()
            .await
            .expect("recv should succeed")
            .expect("should have data");
        assert_eq!(received, b"hello from client");

        server_conn.close().await.expect("close should succeed");
    }

    #[tokio::test]
    async fn test_text_frames_arrive_as_bytes() {
        let (server_conn, mut client_ws) = accepted_pair().await;

        use futures_util::SinkExt;
        use tokio_tungstenite::tungstenite::Message;
        client_ws
            .send(Message::Text("{\"action\":\"pick\"}".into()))
            .await
            .unwrap();

        let received = server_conn.recv().await.unwrap().unwrap();
        assert_eq!(received, b"{\"action\":\"pick\"}");
    }

    #[tokio::test]
    async fn test_recv_returns_none_on_client_close() {
        let (server_conn, mut client_ws) = accepted_pair().await;

        use futures_util::SinkExt;
        use tokio_tungstenite::tungstenite::Message;
        client_ws.send(Message::Close(None)).await.unwrap();

        let result = server_conn.recv().await.expect("recv should not error");
        assert!(result.is_none(), "should return None on client close");
    }

    #[tokio::test]
    async fn test_closed_resolves_after_remote_close() {
        let (server_conn, mut client_ws) = accepted_pair().await;

        use futures_util::SinkExt;
        use tokio_tungstenite::tungstenite::Message;
        client_ws.send(Message::Close(None)).await.unwrap();

        // Termination is observed by the receive path.
        let result = server_conn.recv().await.unwrap();
        assert!(result.is_none());

        // And closed() resolves promptly once observed.
        tokio::time::timeout(Duration::from_secs(1), server_conn.closed())
            .await
            .expect("closed() should resolve after remote close");
    }

    #[tokio::test]
    async fn test_closed_resolves_after_local_close() {
        let (server_conn, _client_ws) = accepted_pair().await;

        server_conn.close().await.expect("close should succeed");

        tokio::time::timeout(Duration::from_secs(1), server_conn.closed())
            .await
            .expect("closed() should resolve after local close");
    }

    #[tokio::test]
    async fn test_closed_pends_while_connection_is_live() {
        let (server_conn, _client_ws) = accepted_pair().await;

        let outcome = tokio::time::timeout(
            Duration::from_millis(50),
            server_conn.closed(),
        )
        .await;
        assert!(outcome.is_err(), "closed() must not resolve while live");
    }
}
