#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chatprism_core::protocol::Envelope;
use chatprism_relay::config::RelayConfig;
use chatprism_relay::sink::MemorySink;
use chatprism_relay::Relay;

fn relay() -> (Relay, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Relay::new(RelayConfig::default(), sink.clone()), sink)
}

#[tokio::test]
async fn delivers_one_line_per_command() {
    let (relay, sink) = relay();
    relay
        .handle_line(r#"{"type":"simple","message":"hi"}"#)
        .await
        .unwrap();

    let out = sink.delivered();
    assert_eq!(out.len(), 1);
    let env: Envelope = serde_json::from_slice(&out[0]).unwrap();
    assert_eq!(env.message().text, "hi");
}

#[tokio::test]
async fn run_skips_bad_lines_and_continues() {
    let (relay, sink) = relay();
    let input = concat!(
        r#"{"type":"simple","message":"one"}"#,
        "\n",
        "garbage\n",
        "\n",
        r#"{"type":"broadcast","components":[]}"#,
        "\n",
        r#"{"type":"admin","text":"two"}"#,
        "\n",
    );

    let failed = relay.run(input.as_bytes()).await.unwrap();
    assert_eq!(failed, 2);

    let texts: Vec<String> = sink
        .delivered()
        .iter()
        .map(|b| {
            let env: Envelope = serde_json::from_slice(b).unwrap();
            match env.message().extra().first() {
                Some(first) => first.text.clone(),
                None => env.message().text.clone(),
            }
        })
        .collect();
    assert_eq!(texts, ["one", "two"]);
}

#[tokio::test]
async fn build_does_not_deliver() {
    let (relay, sink) = relay();
    let env = relay
        .build(r#"{"type":"private","uuid":"u","nickname":"n","message":{"text":"x"}}"#)
        .unwrap();
    assert_eq!(env.api(), "send_private_msg");
    assert!(sink.delivered().is_empty());
}
