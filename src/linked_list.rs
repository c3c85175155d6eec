//! Singly linked list of integers.
//!
//! The list owns its head node and every node owns its successor, so a chain
//! can never be shared between lists and can never form a cycle.

use crate::node::Node;
use log::{debug, warn};
use std::fmt;
use std::io::{self, Write};

/// Token closing every rendering of a list.
pub const END_MARKER: &str = "nil";

/// Separator written after each rendered value.
pub const SEPARATOR: &str = " -> ";

/// A singly linked list of `i32` values with a tracked length.
///
/// Mutation goes through `&mut self`; the list carries no internal locking, so
/// sharing one list between threads for mutation requires external
/// synchronization such as a `Mutex`.
pub struct LinkedList {
    head: Option<Box<Node>>,
    length: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            length: 0,
        }
    }

    /// Appends `value` at the end of the list.
    ///
    /// Walks from the head to the last node, so this is O(n) in the length of
    /// the list.
    pub fn add(&mut self, value: i32) {
        *self.tail_link() = Some(Box::new(Node::new(value)));
        self.length += 1;
        debug!("add {}: length now {}", value, self.length);
    }

    /// Inserts `value` in front of the current head in O(1).
    pub fn prepend(&mut self, value: i32) {
        self.head = Node::prepend(self.head.take(), value);
        self.length += 1;
        debug!("prepend {}: length now {}", value, self.length);
    }

    /// Prints the list to stdout, e.g. `5 -> 10 -> 20 -> nil`.
    pub fn display(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_to(&mut out) {
            warn!("failed to print list: {}", err);
        }
    }

    /// Writes the rendering followed by a line break to `out`, one token at a time.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for token in self.tokens() {
            out.write_all(token.as_bytes())?;
        }
        writeln!(out)
    }

    /// The rendering without the trailing line break.
    pub fn render(&self) -> String {
        self.tokens().collect()
    }

    /// Lazy sequence of rendered tokens: `"<value> -> "` per node, then `"nil"`.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            values: self.iter(),
            finished: false,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    // Values from head to tail
    pub fn values(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.length);
        values.extend(self.iter());
        values
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // Follow the links until the empty slot after the last node
    fn tail_link(&mut self) -> &mut Option<Box<Node>> {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl Drop for LinkedList {
    // Unlink nodes one at a time; the default recursive drop can overflow the
    // stack on long chains
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{}{}", value, SEPARATOR)?;
        }
        f.write_str(END_MARKER)
    }
}

impl Extend<i32> for LinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut appended = 0;
        let mut tail = self.tail_link();
        for value in iter {
            let node = tail.insert(Box::new(Node::new(value)));
            tail = &mut node.next;
            appended += 1;
        }
        self.length += appended;
        debug!("extend: appended {}, length now {}", appended, self.length);
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the values of a [`LinkedList`], head to tail.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

/// Rendered tokens of a [`LinkedList`]. Ends with [`END_MARKER`] exactly once.
pub struct Tokens<'a> {
    values: Iter<'a>,
    finished: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.values.next() {
            Some(value) => Some(format!("{}{}", value, SEPARATOR)),
            None => {
                self.finished = true;
                Some(END_MARKER.to_string())
            }
        }
    }
}
