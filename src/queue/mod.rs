//! A FIFO queue of owned strings over a singly-linked node chain.
//!
//! Each node is boxed onto the heap and owned through the `next` link of its
//! predecessor (or by `head` for the first node). `tail` is a non-owning
//! shortcut to the last node so pushes at the back stay O(1). Reversal and
//! sorting only rewire `next` links, they never allocate or free nodes.

mod sort;

use crate::{Error, Result};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link = Option<NonNull<Node>>;

struct Node {
    value: String,
    next: Link,
}

impl Node {
    /// Boxes a fresh node holding its own copy of `value`.
    fn alloc(value: &str, next: Link) -> NonNull<Node> {
        unsafe {
            NonNull::new_unchecked(Box::into_raw(Box::new(Node {
                value: value.to_owned(),
                next,
            })))
        }
    }
}

pub struct Queue {
    head: Link,
    tail: Link,
    len: usize,
}

impl Queue {
    pub fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at the front of the queue, the next one `remove_head` returns.
    pub fn front(&self) -> Option<&str> {
        self.head.map(|node| unsafe { &*(*node.as_ptr()).value })
    }

    /// Value at the back of the queue, the most recent `insert_tail`.
    pub fn back(&self) -> Option<&str> {
        self.tail.map(|node| unsafe { &*(*node.as_ptr()).value })
    }

    /// Pushes a copy of `s` onto the front of the queue.
    pub fn insert_head(&mut self, s: &str) {
        let node = Node::alloc(s, self.head);

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Pushes a copy of `s` onto the back of the queue without walking the
    /// chain.
    pub fn insert_tail(&mut self, s: &str) {
        let node = Node::alloc(s, None);

        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detaches the front node and returns its value.
    pub fn remove_head(&mut self) -> Result<String> {
        let head = self.head.ok_or(Error::Empty)?;
        let node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = node.next;
        if self.head.is_none() {
            // Draining the last node must clear the tail shortcut too,
            // otherwise it dangles.
            self.tail = None;
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// Like [`remove_head`], but copies the value into `buf` instead of
    /// returning it: up to `buf.len() - 1` bytes followed by a terminating 0
    /// byte, silently truncated if the value is longer. Returns the number
    /// of value bytes copied. A zero-length buffer receives nothing. The
    /// front node is released either way.
    ///
    /// [`remove_head`]: Queue::remove_head
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let value = self.remove_head()?;

        let n = value.len().min(buf.len().saturating_sub(1));
        buf[..n].copy_from_slice(&value.as_bytes()[..n]);
        if n < buf.len() {
            buf[n] = 0;
        }

        Ok(n)
    }

    /// Reverses the queue in place by detaching each node from the front of
    /// the remaining chain and prepending it onto the rebuilt one. Rewires
    /// links only, O(n) time and no allocation.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut prev: Link = None;
        let mut cur = self.head;

        // The old head ends up last.
        self.tail = self.head;

        while let Some(node) = cur {
            unsafe {
                cur = (*node.as_ptr()).next;
                (*node.as_ptr()).next = prev;
            }
            prev = Some(node);
        }

        self.head = prev;
    }

    /// Sorts the queue by ascending byte-wise comparison of values using a
    /// recursive merge sort over the chain. Only `next` links are rewired.
    /// The merge prefers the left chain on ties, so the sort is stable.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }

        self.head = unsafe { sort::merge_sort(self.head) };

        // The merge does not track the last node, repair the shortcut.
        let mut tail = self.head.expect("sorted a non-empty queue");
        unsafe {
            while let Some(next) = (*tail.as_ptr()).next {
                tail = next;
            }
        }
        self.tail = Some(tail);
    }

    /// Releases every node and its string, head to tail.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();

        while let Some(node) = cur {
            cur = unsafe { Box::from_raw(node.as_ptr()) }.next;
        }

        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            remaining: self.len,
            _queue: PhantomData,
        }
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for Queue {
    fn default() -> Self {
        Queue::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Clone for Queue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> Extend<&'a str> for Queue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for s in iter {
            self.insert_tail(s);
        }
    }
}

impl Extend<String> for Queue {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for s in iter {
            self.insert_tail(&s);
        }
    }
}

/// Borrowing iterator over the values in queue order.
pub struct Iter<'a> {
    next: Link,
    remaining: usize,
    _queue: PhantomData<&'a Queue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.next?;
        self.remaining -= 1;
        unsafe {
            self.next = (*node.as_ptr()).next;
            Some(&*(*node.as_ptr()).value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Draining iterator, pops from the head until the queue is empty.
pub struct IntoIter(Queue);

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.0.remove_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

// The chain itself cannot derive these, so a `Queue` travels as the plain
// sequence of its values.

impl Serialize for Queue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Queue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
