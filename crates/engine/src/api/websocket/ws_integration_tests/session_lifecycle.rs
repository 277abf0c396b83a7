use super::*;

use futures_util::SinkExt;

#[tokio::test]
async fn when_clients_connect_then_each_gets_sequential_anonymous_name() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (_a, a_name) = ws_connect_greeted(addr).await;
    let (_b, b_name) = ws_connect_greeted(addr).await;

    assert_eq!(a_name, "Anon_1");
    assert_eq!(b_name, "Anon_2");
    assert_eq!(connections.connection_count().await, 2);
}

#[tokio::test]
async fn when_client_connects_on_root_path_then_it_is_greeted() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections).await;

    let mut ws = ws_connect_path(addr, "/").await;
    assert_eq!(ws_expect_hello(&mut ws).await, "Anon_1");
}

#[tokio::test]
async fn when_client_disconnects_then_session_is_removed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let (_b, _) = ws_connect_greeted(addr).await;
    assert_eq!(connections.connection_count().await, 2);

    a.close(None).await.unwrap();

    let manager = connections.clone();
    eventually(move || {
        let manager = manager.clone();
        async move { manager.connection_count().await == 1 }
    })
    .await;
}

#[tokio::test]
async fn when_member_disconnects_then_room_closes_even_with_members_left() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let (mut b, _) = ws_connect_greeted(addr).await;

    ws_send_raw(&mut a, r#"{"type":"join_room","room_id":"r1","deck_id":"d1"}"#).await;
    ws_sync(&mut a).await;
    ws_send_raw(&mut b, r#"{"type":"join_room","room_id":"r1","deck_id":"d2"}"#).await;
    ws_sync(&mut b).await;
    assert_eq!(
        connections.room_members(&RoomId::from("r1")).await.unwrap().len(),
        2
    );

    a.close(None).await.unwrap();

    let manager = connections.clone();
    eventually(move || {
        let manager = manager.clone();
        async move { manager.room_count().await == 0 }
    })
    .await;

    // B stays connected and can still talk to the broker.
    assert!(ws_sync(&mut b).await.is_empty());
    assert_eq!(connections.connection_count().await, 1);
}

#[tokio::test]
async fn when_empty_policy_keeps_room_for_remaining_member() {
    let connections = test_manager(2, RoomClosePolicy::WhenEmpty);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let (mut b, _) = ws_connect_greeted(addr).await;

    ws_send_raw(&mut a, r#"{"type":"join_room","room_id":"r1","deck_id":"d1"}"#).await;
    ws_sync(&mut a).await;
    ws_send_raw(&mut b, r#"{"type":"join_room","room_id":"r1","deck_id":"d2"}"#).await;
    ws_sync(&mut b).await;

    a.close(None).await.unwrap();

    let manager = connections.clone();
    eventually(move || {
        let manager = manager.clone();
        async move { manager.connection_count().await == 1 }
    })
    .await;

    let members = connections.room_members(&RoomId::from("r1")).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name.as_str(), "Anon_2");
}

#[tokio::test]
async fn when_binary_frame_is_utf8_then_it_is_handled_as_text() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    a.send(tokio_tungstenite::tungstenite::Message::Binary(
        br#"{"type":"set_name","name":"Alice"}"#.to_vec(),
    ))
    .await
    .unwrap();
    ws_sync(&mut a).await;

    let players = connections.players().await;
    assert_eq!(players[0].name.as_str(), "Alice");
}
