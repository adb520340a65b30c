use memechat_core::{filter_transcript, Message};

fn sample_transcript() -> Vec<Message> {
    vec![
        Message::welcome("09:00"),
        Message::user("tell me a dad joke", "09:01"),
        Message::assistant("Here's a dad joke for you 👴", None, "09:02"),
        Message::user("LOL", "09:03"),
    ]
}

#[test]
fn empty_query_returns_every_message_in_order() {
    let transcript = sample_transcript();

    let filtered = filter_transcript(&transcript, "");

    assert_eq!(filtered.len(), transcript.len());
    for (filtered, original) in filtered.iter().zip(&transcript) {
        assert_eq!(*filtered, original);
    }
}

#[test]
fn unmatched_query_returns_an_empty_view() {
    let transcript = sample_transcript();

    assert!(filter_transcript(&transcript, "xyz").is_empty());
}

#[test]
fn query_matching_is_case_insensitive() {
    let transcript = sample_transcript();

    let filtered = filter_transcript(&transcript, "lol");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].text.as_deref(), Some("LOL"));
}

#[test]
fn active_query_excludes_the_composing_placeholder() {
    let mut transcript = sample_transcript();
    transcript.push(Message::composing("09:04"));

    // The placeholder is part of the unfiltered view...
    assert_eq!(filter_transcript(&transcript, "").len(), transcript.len());

    // ...but has no text to match once a query is active.
    let filtered = filter_transcript(&transcript, "joke");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|message| !message.pending));
}
