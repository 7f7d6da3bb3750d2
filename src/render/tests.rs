use super::*;
use crate::{docvec, line, nil, softline, text};

use im::vector;
use pretty_assertions::assert_eq;

#[test]
fn fits_test() {
    // Negative limits never fit.
    assert!(!fits(-1, vector![]));

    // An empty queue always fits.
    assert!(fits(0, vector![]));

    // The empty document costs nothing.
    assert!(fits(0, vector![(0, false, nil())]));

    // Text fits while it is no longer than the remaining budget.
    assert!(fits(5, vector![(0, false, text("Hello"))]));
    assert!(!fits(4, vector![(0, false, text("Hello"))]));

    // A line break ends the measurement window.
    assert!(fits(0, vector![(0, false, line())]));
    assert!(fits(0, vector![(0, false, line()), (0, false, text("wibble"))]));

    // A flattened line break costs a single space.
    assert!(fits(1, vector![(0, true, line())]));
    assert!(!fits(0, vector![(0, true, line())]));

    // Concatenation accumulates across children.
    assert!(fits(2, vector![(0, false, docvec!["1", "2"])]));
    assert!(!fits(1, vector![(0, false, docvec!["1", "2"])]));

    // ...and across separate queue entries.
    assert!(fits(2, vector![(0, false, text("a")), (0, false, text("b"))]));
    assert!(!fits(2, vector![(0, false, text("a")), (0, false, text("bc"))]));

    // Nesting does not affect the measurement.
    assert!(fits(2, vector![(0, false, text("12").nest(4))]));
    assert!(!fits(1, vector![(0, false, text("12").nest(4))]));

    // A flattened queue entry treats its breaks as spaces.
    assert!(fits(3, vector![(0, true, docvec!["a", line(), "b"])]));
    assert!(!fits(2, vector![(0, true, docvec!["a", line(), "b"])]));

    // A choice fits when its flat branch does.
    assert!(fits(3, vector![(0, false, docvec!["a", softline(), "b"])]));
    // When the flat branch overflows, the break ends the line, so the
    // tail can no longer overflow it.
    assert!(fits(1, vector![(0, false, docvec!["a", softline(), "b"])]));
    // A committed text overflow is still an overflow.
    assert!(!fits(0, vector![(0, false, docvec!["a", softline(), "b"])]));
}

#[test]
fn fmt_renders_queued_documents_in_order() {
    let mut buffer = String::new();
    let docs = vector![(0, false, docvec!["a", line(), "b"])];
    fmt(&mut buffer, 80, 0, docs).expect("rendering failed");

    assert_eq!("a\nb", buffer);
}

#[test]
fn fmt_honours_the_indent_carried_by_each_task() {
    let mut buffer = String::new();
    let docs = vector![(4, false, docvec!["a", line(), "b"])];
    fmt(&mut buffer, 80, 0, docs).expect("rendering failed");

    assert_eq!("a\n    b", buffer);
}

#[test]
fn fmt_spaces_flattened_tasks() {
    let mut buffer = String::new();
    let docs = vector![(0, true, docvec!["a", line(), "b"])];
    fmt(&mut buffer, 80, 0, docs).expect("rendering failed");

    assert_eq!("a b", buffer);
}
