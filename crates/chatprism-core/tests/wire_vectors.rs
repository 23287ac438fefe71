//! Wire-shape vector tests: built envelopes must serialize exactly as recorded.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chatprism_core::builder::{
    create_admin_announcement, create_private_message, create_rich_broadcast,
    create_simple_broadcast, create_text_event, AdminAnnouncement, RichBroadcast, TextStyle,
};
use chatprism_core::protocol::{Envelope, PreparedEnvelope};

mod vector_loader;
use vector_loader::load;

fn assert_matches(name: &str, env: &Envelope) {
    let v = load(name);
    let got = serde_json::to_value(env).unwrap();
    assert_eq!(got, v.expect, "vector={}", v.description);

    // The recorded shape must also parse back into the same envelope.
    let parsed: Envelope = serde_json::from_value(v.expect).unwrap();
    assert_eq!(&parsed, env, "vector={}", v.description);
}

#[test]
fn simple_broadcast_vector() {
    let env = create_simple_broadcast("hi", Some("bob")).unwrap();
    assert_matches("simple_broadcast_sender.json", &env);
}

#[test]
fn rich_broadcast_vector() {
    let opts = RichBroadcast {
        bold: true,
        click_url: "https://example.org/gallery".into(),
        hover_text: "open the gallery".into(),
        images: vec![
            Some("https://example.org/a.png".into()),
            None,
            Some("https://example.org/b.png".into()),
        ],
        ..RichBroadcast::default()
    };
    let env = create_rich_broadcast("new screenshot", &opts).unwrap();
    assert_matches("rich_broadcast_images.json", &env);
}

#[test]
fn admin_announcement_vector() {
    let opts = AdminAnnouncement {
        click_value: "/vote restart".into(),
        hover_text: "click to vote".into(),
        ..AdminAnnouncement::default()
    };
    let env = create_admin_announcement("server restarts at 22:00", &opts).unwrap();
    assert_matches("admin_announcement.json", &env);
}

#[test]
fn private_message_vector() {
    let style = TextStyle::default()
        .color("green")
        .italic(true)
        .font("minecraft:uniform")
        .insertion("/home");
    let env = create_private_message(
        "069a79f4-44e9-4726-a5be-fca90e38aaf5",
        create_text_event("welcome back", &style),
        "Notch",
    );
    assert_matches("private_message.json", &env);
}

#[test]
fn compact_json_keeps_non_ascii() {
    let env = create_admin_announcement("hi", &AdminAnnouncement::default()).unwrap();
    let prepared = PreparedEnvelope::prepare(&env).unwrap();
    let s = prepared.as_str().unwrap();
    assert_eq!(prepared.api, "broadcast");
    assert!(s.starts_with(r#"{"api":"broadcast","data":{"message":"#));
    assert!(s.contains("[管理员公告] "));
    assert!(!s.contains('\n'));
    assert!(!s.contains("\\u"));
}
