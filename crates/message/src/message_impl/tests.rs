use std::fmt::Write as _;

use super::*;
use crate::{InvalidLineError, SourceRoot};

fn source_root() -> SourceRoot {
    SourceRoot::new("Source/")
}

#[test]
fn new_message_is_empty_without_provenance() {
    let message = Message::new();
    assert!(message.is_empty());
    assert_eq!(message.text(), "");
    assert_eq!(message.source(), "");
    assert_eq!(message.line(), 0);
    assert_eq!(message, Message::default());
}

#[test]
fn append_accumulates_display_values() {
    let mut message = Message::new();
    message.append("value=").append(42);
    assert_eq!(message.text(), "value=42");
    assert!(!message.is_empty());
}

#[test]
fn write_macro_appends_to_text() {
    let mut message = Message::new();
    write!(message, "{}-{}", "a", 1).expect("write succeeds");
    message.write_char('!').expect("write succeeds");
    assert_eq!(message.text(), "a-1!");
}

#[test]
fn set_text_replaces_previous_content() {
    let mut message = Message::new();
    message.append("old");
    message.set_text("new");
    assert_eq!(message.text(), "new");
}

#[test]
fn set_text_with_content_is_not_empty() {
    let mut message = Message::new();
    message.set_text("x");
    assert!(!message.is_empty());
    assert_eq!(message.text(), "x");
}

#[test]
fn set_text_none_or_empty_clears() {
    let mut message = Message::new();
    message.set_text("content");
    message.set_text(None);
    assert!(message.is_empty());

    message.set_text("content");
    message.set_text("");
    assert!(message.is_empty());
}

#[test]
fn provenance_does_not_affect_emptiness() {
    let mut message = Message::new();
    message.set_source_with("Source/Foo.cpp", &source_root());
    message.set_line(12);
    assert!(message.is_empty());
}

#[test]
fn set_source_with_normalizes_path() {
    let mut message = Message::new();
    message.set_source_with("Source/Logger/Message.cpp", &source_root());
    assert_eq!(message.source(), "Logger/Message.cpp");

    message.set_source_with(None, &source_root());
    assert_eq!(message.source(), "");
}

#[test]
fn set_source_uses_configured_root() {
    let path = r"C:\proj\Source\Common\Utility.cpp";
    let mut message = Message::new();
    message.set_source(path);
    assert_eq!(message.source(), SourceRoot::configured().normalize(path));
    assert!(!message.source().contains('\\'));
}

#[test]
fn set_line_accepts_positive_values() {
    let mut message = Message::new();
    message.set_line(1);
    assert_eq!(message.line(), 1);

    message.set_line(250_u32);
    assert_eq!(message.line(), 250);
}

#[test]
#[should_panic(expected = "attempted to set an invalid source line")]
fn set_line_zero_panics() {
    Message::new().set_line(0);
}

#[test]
#[should_panic(expected = "attempted to set an invalid source line")]
fn set_line_negative_panics() {
    Message::new().set_line(-5);
}

#[test]
fn try_set_line_leaves_message_unchanged_on_error() {
    let mut message = Message::new();
    message.set_line(7);

    let error = message.try_set_line(-1).expect_err("negative line");
    assert_eq!(error, InvalidLineError::NotPositive(-1));
    assert_eq!(message.line(), 7);
}

#[test]
fn take_moves_content_and_resets_source() {
    let mut original = Message::new();
    original.append("payload");
    original.set_source_with("Source/Foo.cpp", &source_root());
    original.set_line(10);

    let moved = original.take();

    assert_eq!(moved.text(), "payload");
    assert_eq!(moved.source(), "Foo.cpp");
    assert_eq!(moved.line(), 10);

    assert!(original.is_empty());
    assert_eq!(original.source(), "");
    assert_eq!(original.line(), 0);
}

#[test]
fn moved_message_does_not_alias_original_buffer() {
    let mut original = Message::new();
    original.append("first");

    let mut moved = original.take();
    moved.append(" second");
    original.append("fresh");

    assert_eq!(moved.text(), "first second");
    assert_eq!(original.text(), "fresh");
}

#[test]
fn setters_chain() {
    let mut message = Message::new();
    message
        .set_text("value=")
        .append(42)
        .set_source_with("Source/Foo.cpp", &source_root())
        .set_line(10);

    let record = message.into_record();
    assert_eq!(record.text, "value=42");
    assert_eq!(record.source, "Foo.cpp");
    assert_eq!(record.line, 10);
}

#[test]
fn message_here_captures_location() {
    let message = crate::message_here!();
    assert!(message.is_empty());
    assert!(message.line() > 0);
    assert!(message.source().ends_with("message_impl/tests.rs"));
}

#[test]
fn message_here_formats_text() {
    let message = crate::message_here!("{}={}", "value", 42);
    assert_eq!(message.text(), "value=42");
}
