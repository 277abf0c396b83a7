use super::*;

const JOIN_R1: &str = r#"{"type":"join_room","room_id":"r1","deck_id":"d1"}"#;

#[tokio::test]
async fn when_first_player_joins_then_room_is_created_silently() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_raw(&mut a, JOIN_R1).await;
    assert!(ws_sync(&mut a).await.is_empty());

    let rooms = connections.rooms().await;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_id, RoomId::from("r1"));
    assert_eq!(rooms[0].members.len(), 1);
}

#[tokio::test]
async fn when_second_player_joins_then_both_are_members() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let (mut b, _) = ws_connect_greeted(addr).await;
    ws_send_raw(&mut a, JOIN_R1).await;
    ws_sync(&mut a).await;
    ws_send_raw(&mut b, r#"{"type":"join_room","room_id":"r1","deck_id":"d2"}"#).await;
    assert!(ws_sync(&mut b).await.is_empty());

    let members = connections.room_members(&RoomId::from("r1")).await.unwrap();
    let names: Vec<_> = members.iter().map(|m| m.name.to_string()).collect();
    assert_eq!(names, vec!["Anon_1", "Anon_2"]);
}

#[tokio::test]
async fn when_room_is_full_then_joiner_receives_room_join_failed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let (mut b, _) = ws_connect_greeted(addr).await;
    let (mut c, _) = ws_connect_greeted(addr).await;

    for ws in [&mut a, &mut b] {
        ws_send_raw(ws, JOIN_R1).await;
        assert!(ws_sync(ws).await.is_empty());
    }

    ws_send_raw(&mut c, JOIN_R1).await;
    let msg = ws_recv_server(&mut c).await;
    assert_eq!(msg, ServerMessage::room_full());

    let members = connections.room_members(&RoomId::from("r1")).await.unwrap();
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn when_capacity_is_configured_then_it_bounds_membership() {
    let connections = test_manager(3, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let mut clients = Vec::new();
    for _ in 0..4 {
        let (ws, _) = ws_connect_greeted(addr).await;
        clients.push(ws);
    }

    for ws in clients.iter_mut().take(3) {
        ws_send_raw(ws, JOIN_R1).await;
        assert!(ws_sync(ws).await.is_empty());
    }

    let last = &mut clients[3];
    ws_send_raw(last, JOIN_R1).await;
    let earlier = ws_sync(last).await;
    assert_eq!(
        earlier,
        vec![r#"{"type":"room_join_failed","reason":"Room is full"}"#.to_string()]
    );
}

#[tokio::test]
async fn when_join_room_fields_are_malformed_then_frame_is_echoed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let raw = r#"{"type":"join_room","room_id":5,"deck_id":"d1"}"#;
    ws_send_raw(&mut a, raw).await;

    assert_eq!(ws_recv_text(&mut a).await, format!("I got your: {raw}"));
    assert_eq!(connections.room_count().await, 0);
}

#[tokio::test]
async fn when_player_joins_same_room_twice_then_membership_is_unchanged() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_raw(&mut a, JOIN_R1).await;
    ws_send_raw(&mut a, JOIN_R1).await;
    assert!(ws_sync(&mut a).await.is_empty());

    let members = connections.room_members(&RoomId::from("r1")).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].deck_id.as_ref().map(|d| d.as_str()), Some("d1"));
}
