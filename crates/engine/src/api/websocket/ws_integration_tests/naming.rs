use super::*;

async fn names(connections: &SharedConnectionManager) -> Vec<String> {
    connections
        .players()
        .await
        .into_iter()
        .map(|p| p.name.to_string())
        .collect()
}

#[tokio::test]
async fn when_name_is_taken_then_second_claimant_gets_id_suffix() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, a_name) = ws_connect_greeted(addr).await;
    let (mut b, b_name) = ws_connect_greeted(addr).await;
    assert_eq!((a_name.as_str(), b_name.as_str()), ("Anon_1", "Anon_2"));

    ws_send_client(
        &mut a,
        &ClientMessage::SetName {
            name: "Alice".to_string(),
        },
    )
    .await;
    // Renames are silent.
    assert!(ws_sync(&mut a).await.is_empty());

    ws_send_client(
        &mut b,
        &ClientMessage::SetName {
            name: "Alice".to_string(),
        },
    )
    .await;
    assert!(ws_sync(&mut b).await.is_empty());

    assert_eq!(names(&connections).await, vec!["Alice", "Alice_3"]);
}

#[tokio::test]
async fn when_set_name_is_empty_then_player_is_renamed_to_empty() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_raw(&mut a, r#"{"type":"set_name","name":""}"#).await;

    assert!(ws_sync(&mut a).await.is_empty());
    assert_eq!(names(&connections).await, vec![""]);
}

#[tokio::test]
async fn when_set_name_is_long_then_it_is_kept_whole() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let long = "n".repeat(65);
    ws_send_client(&mut a, &ClientMessage::SetName { name: long.clone() }).await;

    assert!(ws_sync(&mut a).await.is_empty());
    assert_eq!(names(&connections).await, vec![long]);
}

#[tokio::test]
async fn when_set_name_lacks_name_then_frame_is_echoed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let raw = r#"{"type":"set_name"}"#;
    ws_send_raw(&mut a, raw).await;

    assert_eq!(ws_recv_text(&mut a).await, format!("I got your: {raw}"));
    assert_eq!(names(&connections).await, vec!["Anon_1"]);
}

#[tokio::test]
async fn when_join_room_carries_name_then_player_is_renamed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_client(
        &mut a,
        &ClientMessage::JoinRoom {
            room_id: "r1".to_string(),
            deck_id: "d1".to_string(),
            player_name: Some("Bob".to_string()),
        },
    )
    .await;
    assert!(ws_sync(&mut a).await.is_empty());

    assert_eq!(names(&connections).await, vec!["Bob"]);
}

#[tokio::test]
async fn when_join_room_name_is_not_a_string_then_name_is_unchanged() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_raw(
        &mut a,
        r#"{"type":"join_room","room_id":"r1","deck_id":"d1","player_name":7}"#,
    )
    .await;
    assert!(ws_sync(&mut a).await.is_empty());

    assert_eq!(names(&connections).await, vec!["Anon_1"]);
    assert_eq!(connections.room_count().await, 1);
}

#[tokio::test]
async fn when_holder_disconnects_then_name_becomes_free() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let (mut b, _) = ws_connect_greeted(addr).await;

    ws_send_raw(&mut a, r#"{"type":"set_name","name":"Alice"}"#).await;
    ws_sync(&mut a).await;
    a.close(None).await.unwrap();

    let manager = connections.clone();
    eventually(move || {
        let manager = manager.clone();
        async move { manager.connection_count().await == 1 }
    })
    .await;

    ws_send_raw(&mut b, r#"{"type":"set_name","name":"Alice"}"#).await;
    ws_sync(&mut b).await;
    assert_eq!(names(&connections).await, vec!["Alice"]);
}
