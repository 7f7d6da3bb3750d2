use super::*;
use crate::{docvec, line};

use pretty_assertions::assert_eq;

#[test]
fn string_sink_accumulates_output() {
    let mut buffer = String::new();
    buffer.write("hello").expect("write failed");
    buffer.line(2).expect("write failed");
    buffer.write("world").expect("write failed");

    assert_eq!("hello\n  world", buffer);
}

#[test]
fn line_floors_negative_indents_at_zero() {
    let mut buffer = String::new();
    buffer.line(-3).expect("write failed");
    buffer.line(0).expect("write failed");

    assert_eq!("\n\n", buffer);
}

#[test]
fn stream_writer_renders_to_a_byte_sink() {
    let mut writer = StreamWriter::new(Vec::new());
    docvec!["a", line(), "b"]
        .render(&mut writer, 80)
        .expect("rendering failed");

    assert_eq!(b"a\nb".to_vec(), writer.into_inner());
}

#[test]
fn stream_writer_indents_after_line_breaks() {
    let mut writer = StreamWriter::new(Vec::new());
    writer.write("a").expect("write failed");
    writer.line(2).expect("write failed");
    writer.line(-1).expect("write failed");

    assert_eq!(b"a\n  \n".to_vec(), writer.into_inner());
}
