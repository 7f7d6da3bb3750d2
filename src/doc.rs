//! The document algebra.
//!
//! A [`Doc`] is an immutable value describing formatting intent: text
//! fragments, mandatory and optional line breaks, indentation scopes,
//! and grouped layout alternatives. Sub-documents are shared by
//! reference, so cloning is cheap and a document may appear in several
//! places at once (notably [`Doc::group`] keeps two references to its
//! argument, one of them flattened).
#![allow(clippy::wrong_self_convention)]


use std::ops::{Add, AddAssign, Div, DivAssign, Shl, ShlAssign};
use std::sync::Arc;

use ecow::{eco_format, EcoString};
use itertools::{Itertools, Position};

use crate::error::Result;
use crate::io::Writer;
use crate::render;

/// Build a document out of a heterogeneous list of [`Documentable`]
/// values.
#[macro_export]
macro_rules! docvec {
    () => {
        $crate::nil()
    };

    ($($x:expr),+ $(,)?) => {
        $crate::concat(vec![$($crate::Documentable::to_doc($x)),+])
    };
}

/// Coerce a value into a [`Doc`].
pub trait Documentable {
    fn to_doc(self) -> Doc;
}

impl Documentable for Doc {
    fn to_doc(self) -> Doc {
        self
    }
}

impl Documentable for char {
    fn to_doc(self) -> Doc {
        char(self)
    }
}

impl Documentable for &str {
    fn to_doc(self) -> Doc {
        text(self)
    }
}

impl Documentable for String {
    fn to_doc(self) -> Doc {
        text(self)
    }
}

impl Documentable for EcoString {
    fn to_doc(self) -> Doc {
        text(self)
    }
}

impl Documentable for isize {
    fn to_doc(self) -> Doc {
        text(eco_format!("{}", self))
    }
}

impl Documentable for i64 {
    fn to_doc(self) -> Doc {
        text(eco_format!("{}", self))
    }
}

impl Documentable for usize {
    fn to_doc(self) -> Doc {
        text(eco_format!("{}", self))
    }
}

impl Documentable for u64 {
    fn to_doc(self) -> Doc {
        text(eco_format!("{}", self))
    }
}

impl Documentable for f64 {
    fn to_doc(self) -> Doc {
        text(eco_format!("{:?}", self))
    }
}

impl<D: Documentable> Documentable for Option<D> {
    fn to_doc(self) -> Doc {
        self.map(Documentable::to_doc).unwrap_or_else(nil)
    }
}

impl Documentable for Vec<Doc> {
    fn to_doc(self) -> Doc {
        concat(self)
    }
}

/// An immutable, cheaply clonable document.
///
/// Cloning only bumps reference counts; sub-documents are shared, never
/// copied. Each handle carries its own flattened bit, so flattening one
/// reference to a shared node leaves every other reference untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    pub(crate) node: Node,
    pub(crate) flattened: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    /// The empty document, the identity of concatenation.
    Nil,

    /// A mandatory line break, a single space when flattened.
    Line,

    /// Literal text. Never empty, never contains a newline.
    Text(EcoString),

    /// Two or more documents emitted in order.
    Concat(Arc<Vec<Doc>>),

    /// Layout alternatives. The left branch is the flatter one.
    Choice(Arc<Choice>),

    /// Adjusts the indentation of the line breaks inside.
    Nest(Arc<Nest>),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Choice {
    pub left: Doc,
    pub right: Doc,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Nest {
    pub indent: isize,
    pub doc: Doc,
}

/// The empty document.
pub fn nil() -> Doc {
    Doc::new(Node::Nil)
}

/// A mandatory line break.
pub fn line() -> Doc {
    Doc::new(Node::Line)
}

/// A literal text fragment. Empty strings collapse to [`nil`].
///
/// The text must not contain `\n`; break lines with [`line`] instead.
pub fn text(text: impl Into<EcoString>) -> Doc {
    let text = text.into();
    if text.is_empty() {
        return nil();
    }
    debug_assert!(
        !text.contains('\n'),
        "text fragments must not contain newlines"
    );
    Doc::new(Node::Text(text))
}

/// A single character of text.
pub fn char(c: char) -> Doc {
    let mut fragment = EcoString::new();
    fragment.push(c);
    text(fragment)
}

/// A line break that renders as a single space when it fits on the
/// current line.
pub fn softline() -> Doc {
    Doc::choice(char(' '), line())
}

/// A line break that renders as nothing when it fits on the current
/// line.
pub fn softbreak() -> Doc {
    Doc::choice(nil(), line())
}

/// Concatenate a sequence of documents. Empty documents are elided.
pub fn concat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut children: Vec<Doc> = docs.into_iter().filter(|doc| !doc.is_nil()).collect();
    if children.len() < 2 {
        return children.pop().unwrap_or_else(nil);
    }
    Doc::new(Node::Concat(Arc::new(children)))
}

/// Concatenate documents with a line break between each pair.
pub fn vcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    concat(Itertools::intersperse(docs.into_iter(), line()))
}

/// Concatenate documents with nothing between them.
pub fn join(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(nil(), |acc, doc| acc.append(doc))
}

/// Interleave a separator between documents, grouping each item with the
/// separator that follows it.
///
/// A separator containing a [`softline`] may therefore break after any
/// item; a plain text separator never breaks.
pub fn sep(separator: Doc, docs: impl IntoIterator<Item = Doc>) -> Doc {
    let mut result = nil();
    for (position, doc) in docs.into_iter().with_position() {
        match position {
            Position::Last | Position::Only => result += doc,
            Position::First | Position::Middle => result += (doc + separator.clone()).group(),
        }
    }
    result
}

impl Doc {
    fn new(node: Node) -> Self {
        Self {
            node,
            flattened: false,
        }
    }

    fn choice(left: Doc, right: Doc) -> Doc {
        Doc::new(Node::Choice(Arc::new(Choice { left, right })))
    }

    /// True if this document is the empty document.
    pub fn is_nil(&self) -> bool {
        matches!(self.node, Node::Nil)
    }

    /// Interpret every line break in this reference as a single space.
    ///
    /// The flag lives on the handle: other references to the same nodes
    /// are unaffected.
    pub fn flatten(mut self) -> Self {
        self.flattened = true;
        self
    }

    /// Lay this document out on a single line if it fits within the
    /// remaining columns, otherwise keep its line breaks.
    pub fn group(self) -> Self {
        let flat = self.clone().flatten();
        Doc::choice(flat, self)
    }

    /// Add `indent` to the indentation of every line break inside.
    ///
    /// Nests sum arithmetically and `indent` may be negative; the
    /// writer floors the effective indentation at zero.
    pub fn nest(self, indent: isize) -> Self {
        Doc::new(Node::Nest(Arc::new(Nest { indent, doc: self })))
    }

    /// Concatenate `other` onto the end of this document.
    ///
    /// Appending to a uniquely owned concatenation extends it in place;
    /// shared documents are never mutated.
    pub fn append(mut self, other: impl Documentable) -> Self {
        let other = other.to_doc();
        if other.is_nil() {
            return self;
        }
        if self.is_nil() {
            return other;
        }

        if !self.flattened {
            if let Node::Concat(children) = &mut self.node {
                if let Some(children) = Arc::get_mut(children) {
                    children.push(other);
                    return self;
                }
            }
        }

        Doc::new(Node::Concat(Arc::new(vec![self, other])))
    }

    /// Wrap this document in `open` and `close`.
    pub fn surround(self, open: impl Documentable, close: impl Documentable) -> Self {
        open.to_doc().append(self).append(close)
    }

    pub fn angles(self) -> Self {
        self.surround('<', '>')
    }

    pub fn braces(self) -> Self {
        self.surround('{', '}')
    }

    pub fn brackets(self) -> Self {
        self.surround('[', ']')
    }

    pub fn parens(self) -> Self {
        self.surround('(', ')')
    }

    pub fn quotes(self) -> Self {
        self.surround('\'', '\'')
    }

    pub fn dquotes(self) -> Self {
        self.surround('"', '"')
    }

    /// Render the document, fitting lines to `columns` wherever the
    /// layout allows a choice.
    pub fn render(&self, writer: &mut impl Writer, columns: isize) -> Result<()> {
        let docs = im::vector![(0, self.flattened, self.clone())];
        render::fmt(writer, columns, 0, docs)
    }

    /// Render the document to a fresh string.
    pub fn pretty(&self, columns: isize) -> String {
        let mut buffer = String::new();
        self.render(&mut buffer, columns)
            .expect("writing to a string buffer failed");
        buffer
    }
}

impl Default for Doc {
    fn default() -> Self {
        nil()
    }
}

impl<T: Documentable> Add<T> for Doc {
    type Output = Doc;

    fn add(self, other: T) -> Doc {
        self.append(other)
    }
}

impl<T: Documentable> AddAssign<T> for Doc {
    fn add_assign(&mut self, other: T) {
        *self = std::mem::take(self).append(other);
    }
}

/// `a / b` concatenates with a line break between the two.
impl<T: Documentable> Div<T> for Doc {
    type Output = Doc;

    fn div(self, other: T) -> Doc {
        self.append(line()).append(other)
    }
}

impl<T: Documentable> DivAssign<T> for Doc {
    fn div_assign(&mut self, other: T) {
        *self = std::mem::take(self) / other;
    }
}

/// `a << b` concatenates with a space between the two.
impl<T: Documentable> Shl<T> for Doc {
    type Output = Doc;

    fn shl(self, other: T) -> Doc {
        self.append(char(' ')).append(other)
    }
}

impl<T: Documentable> ShlAssign<T> for Doc {
    fn shl_assign(&mut self, other: T) {
        *self = std::mem::take(self) << other;
    }
}
