//! Text encodings for debugging and comparing trees. Not a stable format.
//!
//! The parenthetic form writes a node as `key(left)(right)`. An empty child
//! is `()`, and trailing empty children are left out, so a leaf is just its
//! key and a node with only a right child reads `key()(right)`. Keys must
//! not contain parentheses.

use std::fmt::{Display, Write};
use std::str::FromStr;

use crate::error::{ForestError, Result};
use crate::node::TreeNode;
use crate::types::KeyNode;

pub fn to_parenthetic<K: Display, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> String {
    fn write<K: Display, N: KeyNode<K>>(arena: &[N], i: u32, out: &mut String) {
        let n = &arena[i as usize];
        let _ = write!(out, "{}", n.key());
        match (n.l(), n.r()) {
            (None, None) => {}
            (Some(l), None) => {
                out.push('(');
                write(arena, l, out);
                out.push(')');
            }
            (l, Some(r)) => {
                out.push('(');
                if let Some(l) = l {
                    write(arena, l, out);
                }
                out.push_str(")(");
                write(arena, r, out);
                out.push(')');
            }
        }
    }
    let mut out = String::new();
    if let Some(i) = root {
        write(arena, i, &mut out);
    }
    out
}

struct Parser<'a, K> {
    src: &'a str,
    pos: usize,
    arena: Vec<TreeNode<K>>,
}

impl<K: FromStr> Parser<'_, K> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn error(&self, position: usize, reason: impl Into<String>) -> ForestError {
        ForestError::Parse {
            position,
            reason: reason.into(),
        }
    }

    fn node(&mut self, parent: Option<u32>) -> Result<u32> {
        let start = self.pos;
        while !matches!(self.peek(), None | Some(b'(') | Some(b')')) {
            self.pos += 1;
        }
        let src = self.src;
        let token = &src[start..self.pos];
        if token.is_empty() {
            return Err(self.error(start, "expected a key"));
        }
        let key = token
            .parse::<K>()
            .map_err(|_| self.error(start, format!("invalid key {token:?}")))?;
        let mut node = TreeNode::new(key);
        node.p = parent;
        self.arena.push(node);
        let idx = (self.arena.len() - 1) as u32;
        if self.peek() == Some(b'(') {
            self.arena[idx as usize].l = self.child(idx)?;
            if self.peek() == Some(b'(') {
                self.arena[idx as usize].r = self.child(idx)?;
            }
        }
        Ok(idx)
    }

    fn child(&mut self, parent: u32) -> Result<Option<u32>> {
        // Opening parenthesis already peeked by the caller.
        self.pos += 1;
        if self.peek() == Some(b')') {
            self.pos += 1;
            return Ok(None);
        }
        let child = self.node(Some(parent))?;
        if self.peek() != Some(b')') {
            return Err(self.error(self.pos, "expected ')'"));
        }
        self.pos += 1;
        Ok(Some(child))
    }
}

/// Parses the output of [`to_parenthetic`] back into a parent-linked arena.
///
/// The empty string is the empty tree. Errors carry the byte offset at which
/// parsing stopped.
pub fn from_parenthetic<K: FromStr>(src: &str) -> Result<(Vec<TreeNode<K>>, Option<u32>)> {
    if src.is_empty() {
        return Ok((Vec::new(), None));
    }
    let mut parser = Parser {
        src,
        pos: 0,
        arena: Vec::new(),
    };
    let root = parser.node(None)?;
    if parser.pos != src.len() {
        return Err(parser.error(parser.pos, "trailing input"));
    }
    Ok((parser.arena, Some(root)))
}

/// Pre-order keys separated by single spaces, with `#` standing in for
/// every missing child.
pub fn order_string<K: Display, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> String {
    fn walk<K: Display, N: KeyNode<K>>(arena: &[N], node: Option<u32>, out: &mut Vec<String>) {
        match node {
            None => out.push("#".to_string()),
            Some(i) => {
                let n = &arena[i as usize];
                out.push(n.key().to_string());
                walk(arena, n.l(), out);
                walk(arena, n.r(), out);
            }
        }
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out.join(" ")
}
