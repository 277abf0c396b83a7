use super::*;

#[tokio::test]
async fn when_frame_is_not_json_then_it_is_echoed_verbatim() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections.clone()).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_raw(&mut a, "hello there").await;

    assert_eq!(ws_recv_text(&mut a).await, "I got your: hello there");
    assert_eq!(connections.room_count().await, 0);
    let players = connections.players().await;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name.as_str(), "Anon_1");
}

#[tokio::test]
async fn when_type_is_unknown_then_it_is_echoed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    let raw = r#"{"type":"chat","text":"gg"}"#;
    ws_send_raw(&mut a, raw).await;

    assert_eq!(ws_recv_text(&mut a).await, format!("I got your: {raw}"));
}

#[tokio::test]
async fn when_json_is_not_an_object_then_it_is_echoed() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    ws_send_raw(&mut a, "[1,2,3]").await;
    assert_eq!(ws_recv_text(&mut a).await, "I got your: [1,2,3]");

    ws_send_raw(&mut a, r#"{"room_id":"r1"}"#).await;
    assert_eq!(ws_recv_text(&mut a).await, r#"I got your: {"room_id":"r1"}"#);
}

#[tokio::test]
async fn when_frames_arrive_then_replies_keep_their_order() {
    let connections = test_manager(2, RoomClosePolicy::AnyDeparture);
    let (addr, _server) = spawn_ws_server(connections).await;

    let (mut a, _) = ws_connect_greeted(addr).await;
    for i in 0..5 {
        ws_send_raw(&mut a, &format!("frame {i}")).await;
    }
    for i in 0..5 {
        assert_eq!(ws_recv_text(&mut a).await, format!("I got your: frame {i}"));
    }
}
