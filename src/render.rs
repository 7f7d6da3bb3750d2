//! The layout engine.
//!
//! Rendering is a depth-first walk over the document with an explicit
//! work queue. Each layout alternative is resolved greedily by a bounded
//! lookahead over the candidate branch *and* all work still pending on
//! the queue; once committed, a choice is never reconsidered.

#[cfg(test)]
mod tests;

use im::Vector;

use crate::doc::{Doc, Node};
use crate::error::Result;
use crate::io::Writer;

/// A pending unit of work: the indentation in force, whether line breaks
/// flatten to spaces along this path, and the document itself.
pub(crate) type Task = (isize, bool, Doc);

/// Decide whether the work at the front of the queue fits within the
/// remaining `limit` columns of the current line.
///
/// The queue is the renderer's pending work with the candidate branch
/// pushed on the front, so the measurement covers the candidate and
/// everything that would follow it on the same line. The walk ends at
/// the first unflattened line break: whatever comes after it starts a
/// fresh line and cannot overflow this one.
pub(crate) fn fits(mut limit: isize, mut docs: Vector<Task>) -> bool {
    loop {
        if limit < 0 {
            return false;
        }

        let (indent, flattened, document) = match docs.pop_front() {
            Some(task) => task,
            None => return true,
        };

        match &document.node {
            Node::Nil => {}

            Node::Line => {
                if flattened {
                    limit -= 1;
                } else {
                    return true;
                }
            }

            Node::Text(text) => limit -= text.len() as isize,

            Node::Concat(children) => {
                for child in children.iter().rev() {
                    docs.push_front((indent, flattened || child.flattened, child.clone()));
                }
            }

            Node::Nest(nest) => {
                docs.push_front((
                    indent + nest.indent,
                    flattened || nest.doc.flattened,
                    nest.doc.clone(),
                ));
            }

            Node::Choice(choice) => {
                if flattened {
                    docs.push_front((indent, true, choice.left.clone()));
                } else {
                    let mut attempt = docs.clone();
                    attempt.push_front((indent, choice.left.flattened, choice.left.clone()));
                    if fits(limit, attempt) {
                        return true;
                    }
                    docs.push_front((indent, choice.right.flattened, choice.right.clone()));
                }
            }
        }
    }
}

/// Drive the queued documents through `writer`, consulting [`fits`] at
/// every unflattened choice.
pub(crate) fn fmt(
    writer: &mut impl Writer,
    limit: isize,
    mut width: isize,
    mut docs: Vector<Task>,
) -> Result<()> {
    tracing::trace!(limit, "rendering document");

    while let Some((indent, flattened, document)) = docs.pop_front() {
        match &document.node {
            Node::Nil => {}

            Node::Line => {
                if flattened {
                    writer.write(" ")?;
                    width += 1;
                } else {
                    writer.line(indent)?;
                    width = indent;
                }
            }

            Node::Text(text) => {
                writer.write(text)?;
                width += text.len() as isize;
            }

            Node::Concat(children) => {
                for child in children.iter().rev() {
                    docs.push_front((indent, flattened || child.flattened, child.clone()));
                }
            }

            Node::Nest(nest) => {
                docs.push_front((
                    indent + nest.indent,
                    flattened || nest.doc.flattened,
                    nest.doc.clone(),
                ));
            }

            Node::Choice(choice) => {
                if flattened {
                    docs.push_front((indent, true, choice.left.clone()));
                } else {
                    docs.push_front((indent, choice.left.flattened, choice.left.clone()));
                    if !fits(limit - width, docs.clone()) {
                        docs[0] = (indent, choice.right.flattened, choice.right.clone());
                    }
                }
            }
        }
    }

    Ok(())
}
