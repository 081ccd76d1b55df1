#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A singly-linked, size-tracked list of `i32` values.
//!
//! Nodes live in a store owned by the list and are linked by slot index, so every list owns its
//! nodes exclusively and two lists never share one. The list keeps `head`, `tail` and `size` in
//! step across every operation:
//!
//! * `size == 0` exactly when `head` and `tail` are both `None`;
//! * following `next` from `head` `size - 1` times lands on `tail`, whose `next` is `None`.
//!
//! [`List::check_invariants`] verifies both.

mod error;

pub use error::{ListError, ListResult};

use std::fmt;
use tracing::{debug, trace};

/// Slot index of a node inside its list's store.
type Link = usize;

#[derive(Clone, Copy, Debug)]
struct Node {
    value: i32,
    next: Option<Link>,
}

pub struct List {
    size: usize,
    head: Option<Link>,
    tail: Option<Link>,
    nodes: Vec<Node>,
    vacant: Vec<Link>,
}

impl List {
    pub fn new() -> List {
        List {
            size: 0,
            head: None,
            tail: None,
            nodes: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Builds a list holding `values` in order.
    pub fn from_slice(values: &[i32]) -> List {
        values.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Value at the head. Fails with [`ListError::Empty`] on an empty list.
    pub fn front(&self) -> ListResult<i32> {
        match self.head {
            Some(link) => Ok(self.nodes[link].value),
            None => {
                trace!("front() on empty list");
                Err(ListError::Empty)
            }
        }
    }

    /// Value at the tail. Fails with [`ListError::Empty`] on an empty list.
    pub fn back(&self) -> ListResult<i32> {
        match self.tail {
            Some(link) => Ok(self.nodes[link].value),
            None => {
                trace!("back() on empty list");
                Err(ListError::Empty)
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.get_link_at(index).map(|link| self.nodes[link].value)
    }

    pub fn push_front(&mut self, value: i32) {
        let next = self.head;
        let link = self.alloc(value, next);
        self.head = Some(link);
        if self.tail.is_none() {
            self.tail = Some(link);
        }
        self.size += 1;
    }

    pub fn push_back(&mut self, value: i32) {
        let link = self.alloc(value, None);
        match self.tail {
            Some(pre_tail) => self.nodes[pre_tail].next = Some(link),
            None => self.head = Some(link),
        }
        self.tail = Some(link);
        self.size += 1;
    }

    /// Detaches the head and returns its value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<i32> {
        let Some(head) = self.head else {
            trace!("pop_front() on empty list");
            return None;
        };

        self.head = self.nodes[head].next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        Some(self.release(head))
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == len()` appends. Anything past that is rejected and the list is left as it was.
    pub fn insert(&mut self, index: usize, value: i32) -> ListResult<()> {
        if index > self.size {
            trace!(index, size = self.size, "insert() rejected");
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.size {
            self.push_back(value);
            return Ok(());
        }

        let prev = self.predecessor_of(index)?;
        let next = self.nodes[prev].next;
        let link = self.alloc(value, next);
        self.nodes[prev].next = Some(link);
        self.size += 1;
        Ok(())
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// Valid for `index < len()`; otherwise the list is left as it was.
    pub fn erase(&mut self, index: usize) -> ListResult<i32> {
        if index >= self.size {
            trace!(index, size = self.size, "erase() rejected");
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        if index == 0 {
            return self.pop_front().ok_or(ListError::Empty);
        }

        let prev = self.predecessor_of(index)?;
        let victim = self.nodes[prev]
            .next
            .ok_or_else(|| ListError::Corrupted(format!("no node at index {index}")))?;

        self.nodes[prev].next = self.nodes[victim].next;
        if self.tail == Some(victim) {
            self.tail = Some(prev);
        }
        self.size -= 1;
        Ok(self.release(victim))
    }

    /// Drops every node and returns to the empty state.
    pub fn clear(&mut self) {
        debug!(released = self.size, "clearing list");
        self.size = 0;
        self.head = None;
        self.tail = None;
        self.nodes = Vec::new();
        self.vacant = Vec::new();
    }

    /// Deep copy: a new list with freshly allocated nodes holding the same values in order.
    pub fn duplicate(&self) -> List {
        debug!(size = self.size, "duplicating list");
        let mut copy = List {
            nodes: Vec::with_capacity(self.size),
            ..List::new()
        };
        for node in self.chain() {
            copy.push_back(node.value);
        }
        copy
    }

    /// Takes every node of `source` in O(1). `source` is left empty and stays usable.
    pub fn transfer_from(source: &mut List) -> List {
        debug!(size = source.size, "transferring list");
        std::mem::take(source)
    }

    /// Releases this list's nodes and takes over those of `source`, leaving `source` empty.
    pub fn assign_transfer_from(&mut self, source: &mut List) {
        // Capture before releasing ours.
        let taken = List::transfer_from(source);
        self.clear();
        *self = taken;
    }

    /// Snapshot of the values from head to tail.
    pub fn to_vec(&self) -> Vec<i32> {
        self.chain().map(|node| node.value).collect()
    }

    /// Walks the chain from `head` and checks that `size`, `head` and `tail` agree with it.
    pub fn check_invariants(&self) -> ListResult<()> {
        let empty = self.size == 0;
        if self.head.is_none() != empty || self.tail.is_none() != empty {
            return Err(ListError::Corrupted(format!(
                "size {} disagrees with head {:?} and tail {:?}",
                self.size, self.head, self.tail
            )));
        }

        let mut reached = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(link) = current {
            if reached == self.size {
                return Err(ListError::Corrupted(format!(
                    "more than {} nodes reachable from head",
                    self.size
                )));
            }
            if link >= self.nodes.len() {
                return Err(ListError::Corrupted(format!(
                    "link {link} points outside the node store"
                )));
            }
            reached += 1;
            last = Some(link);
            current = self.nodes[link].next;
        }

        if reached != self.size {
            return Err(ListError::Corrupted(format!(
                "size is {} but {reached} nodes are reachable",
                self.size
            )));
        }
        if last != self.tail {
            return Err(ListError::Corrupted(format!(
                "tail {:?} is not the last reachable node {:?}",
                self.tail, last
            )));
        }
        let live = self.nodes.len().saturating_sub(self.vacant.len());
        if live != self.size {
            return Err(ListError::Corrupted(format!(
                "store holds {live} live nodes for size {}",
                self.size
            )));
        }
        Ok(())
    }

    fn alloc(&mut self, value: i32, next: Option<Link>) -> Link {
        let node = Node { value, next };
        match self.vacant.pop() {
            Some(link) => {
                self.nodes[link] = node;
                link
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, link: Link) -> i32 {
        let value = self.nodes[link].value;
        if self.size == 0 {
            self.nodes = Vec::new();
            self.vacant = Vec::new();
        } else {
            self.nodes[link].next = None;
            self.vacant.push(link);
        }
        value
    }

    fn get_link_at(&self, index: usize) -> Option<Link> {
        if index >= self.size {
            return None;
        }

        let mut current = self.head?;
        for _ in 0..index {
            current = self.nodes[current].next?;
        }
        Some(current)
    }

    fn predecessor_of(&self, index: usize) -> ListResult<Link> {
        self.get_link_at(index - 1)
            .ok_or_else(|| ListError::Corrupted(format!("no node before index {index}")))
    }

    fn chain(&self) -> Chain<'_> {
        Chain {
            nodes: &self.nodes,
            current: self.head,
        }
    }
}

struct Chain<'a> {
    nodes: &'a [Node],
    current: Option<Link>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = &self.nodes[self.current?];
        self.current = node.next;
        Some(node)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .chain()
                .zip(other.chain())
                .all(|(a, b)| a.value == b.value)
    }
}

impl Eq for List {}

impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for List {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", node.value)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("size", &self.size)
            .field("values", &self.to_vec())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> List {
        List::from_slice(&[1, 2, 3, 4, 5])
    }

    fn assert_valid(list: &List) {
        assert_eq!(list.check_invariants(), Ok(()), "{list:?}");
    }

    #[test]
    fn new_list_is_empty() {
        let list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_vec(), Vec::<i32>::new());
        assert_valid(&list);
    }

    #[test]
    fn front_and_back_on_empty_fail() {
        let list = List::default();
        assert_eq!(list.front(), Err(ListError::Empty));
        assert_eq!(list.back(), Err(ListError::Empty));
    }

    #[test]
    fn push_front_back_then_pop() {
        let mut list = List::new();
        list.push_front(2);
        list.push_back(5);
        list.push_front(1);
        assert_eq!(list.to_vec(), vec![1, 2, 5]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(1));
        assert_eq!(list.back(), Ok(5));
        assert_valid(&list);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.to_vec(), vec![2, 5]);
        assert_eq!(list.len(), 2);
        assert_valid(&list);
    }

    #[test]
    fn push_front_on_empty_sets_tail() {
        let mut list = List::new();
        list.push_front(4);
        assert_eq!(list.back(), Ok(4));
        list.push_back(6);
        assert_eq!(list.to_vec(), vec![4, 6]);
        assert_valid(&list);
    }

    #[test]
    fn pop_front_on_empty_leaves_list_alone() {
        let mut list = List::new();
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_valid(&list);
    }

    #[test]
    fn popping_last_element_resets_tail() {
        let mut list = List::new();
        list.push_back(7);
        assert_eq!(list.pop_front(), Some(7));
        assert!(list.is_empty());
        assert_eq!(list.back(), Err(ListError::Empty));
        assert_valid(&list);

        list.push_back(99);
        assert_eq!(list.to_vec(), vec![99]);
        assert_eq!(list.front(), Ok(99));
        assert_eq!(list.back(), Ok(99));
        assert_valid(&list);
    }

    #[test]
    fn insert_at_front_middle_and_end() {
        let mut list = seeded();
        assert_eq!(list.insert(0, 100), Ok(()));
        assert_eq!(list.to_vec(), vec![100, 1, 2, 3, 4, 5]);
        assert_eq!(list.insert(3, 200), Ok(()));
        assert_eq!(list.to_vec(), vec![100, 1, 2, 200, 3, 4, 5]);
        assert_eq!(list.insert(list.len(), 300), Ok(()));
        assert_eq!(list.to_vec(), vec![100, 1, 2, 200, 3, 4, 5, 300]);
        assert_eq!(list.back(), Ok(300));
        assert_valid(&list);

        assert_eq!(list.erase(list.len() - 1), Ok(300));
        assert_eq!(list.back(), Ok(5));
        assert_valid(&list);

        list.push_back(999);
        assert_eq!(list.to_vec(), vec![100, 1, 2, 200, 3, 4, 5, 999]);
        assert_eq!(list.back(), Ok(999));
        assert_valid(&list);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut list = seeded();
        assert_eq!(
            list.insert(6, 42),
            Err(ListError::IndexOutOfRange { index: 6, size: 5 })
        );
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_valid(&list);

        let mut empty = List::new();
        assert!(empty.insert(1, 42).is_err());
        assert_eq!(empty.insert(0, 42), Ok(()));
        assert_eq!(empty.to_vec(), vec![42]);
        assert_valid(&empty);
    }

    #[test]
    fn erase_returns_removed_value() {
        let mut list = seeded();
        assert_eq!(list.erase(0), Ok(1));
        assert_eq!(list.erase(1), Ok(3));
        assert_eq!(list.to_vec(), vec![2, 4, 5]);
        assert_valid(&list);
    }

    #[test]
    fn erase_out_of_range_is_rejected() {
        let mut list = seeded();
        assert_eq!(
            list.erase(5),
            Err(ListError::IndexOutOfRange { index: 5, size: 5 })
        );
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);

        let mut empty = List::new();
        assert_eq!(
            empty.erase(0),
            Err(ListError::IndexOutOfRange { index: 0, size: 0 })
        );
        assert_valid(&empty);
    }

    #[test]
    fn erasing_tail_moves_tail_back() {
        let mut list = List::from_slice(&[1, 2]);
        assert_eq!(list.erase(1), Ok(2));
        assert_eq!(list.back(), Ok(1));
        assert_valid(&list);

        list.push_back(3);
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert_valid(&list);
    }

    #[test]
    fn erasing_only_element_empties_list() {
        let mut list = List::from_slice(&[8]);
        assert_eq!(list.erase(0), Ok(8));
        assert!(list.is_empty());
        assert_valid(&list);

        list.push_front(9);
        assert_eq!(list.to_vec(), vec![9]);
        assert_valid(&list);
    }

    #[test]
    fn clear_releases_everything() {
        let mut list = seeded();
        list.clear();
        assert!(list.is_empty());
        assert!(list.nodes.is_empty());
        assert!(list.vacant.is_empty());
        assert_valid(&list);

        list.push_back(1);
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn vacated_slots_are_reused() {
        let mut list = seeded();
        list.erase(2).unwrap();
        list.pop_front().unwrap();
        assert_eq!(list.nodes.len(), 5);

        list.push_back(6);
        list.insert(1, 7).unwrap();
        assert_eq!(list.nodes.len(), 5);
        assert_eq!(list.to_vec(), vec![2, 7, 4, 5, 6]);
        assert_valid(&list);
    }

    #[test]
    fn get_walks_to_index() {
        let list = seeded();
        assert_eq!(list.get(0), Some(1));
        assert_eq!(list.get(4), Some(5));
        assert_eq!(list.get(5), None);
        assert_eq!(List::new().get(0), None);
    }

    #[test]
    fn duplicate_is_independent() {
        let mut a = List::from_slice(&[0, 10, 20, 30]);
        let b = a.duplicate();
        assert_eq!(a.to_vec(), b.to_vec());

        a.push_back(40);
        a.erase(1).unwrap();
        assert_eq!(a.to_vec(), vec![0, 20, 30, 40]);
        assert_eq!(b.to_vec(), vec![0, 10, 20, 30]);
        assert_valid(&a);
        assert_valid(&b);
    }

    #[test]
    fn duplicate_compacts_the_store() {
        let mut a = seeded();
        a.erase(3).unwrap();
        let b = a.clone();
        assert_eq!(b.nodes.len(), 4);
        assert!(b.vacant.is_empty());
        assert_eq!(a, b);
        assert_valid(&b);
    }

    #[test]
    fn transfer_empties_source() {
        let mut a = seeded();
        let mut c = List::transfer_from(&mut a);
        assert_eq!(c.to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(a.front(), Err(ListError::Empty));
        assert_valid(&a);
        assert_valid(&c);

        a.push_back(1);
        c.push_back(6);
        assert_eq!(a.to_vec(), vec![1]);
        assert_eq!(c.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn assign_transfer_replaces_receiver() {
        let mut c = seeded();
        let mut d = List::new();
        d.push_back(7);
        d.assign_transfer_from(&mut c);
        assert_eq!(d.to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(c.is_empty());
        assert_valid(&c);
        assert_valid(&d);
    }

    #[test]
    fn assign_transfer_from_empty_source_empties_receiver() {
        let mut source = List::new();
        let mut receiver = seeded();
        receiver.assign_transfer_from(&mut source);
        assert!(receiver.is_empty());
        assert_valid(&receiver);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(List::new().to_string(), "[]");
        assert_eq!(List::from_slice(&[1, 2, 5]).to_string(), "[1 2 5]");
        assert_eq!(
            format!("{:?}", List::from_slice(&[3])),
            "List { size: 1, values: [3] }"
        );
    }

    #[test]
    fn equality_compares_values() {
        let a: List = (1..=3).collect();
        let mut b = List::new();
        b.push_front(3);
        b.push_front(1);
        b.insert(1, 2).unwrap();
        assert_eq!(a, b);

        b.push_back(4);
        assert_ne!(a, b);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut list = List::from_slice(&[1]);
        list.extend(vec![2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.back(), Ok(3));
        assert_valid(&list);
    }

    #[test]
    fn to_vec_does_not_mutate() {
        let list = seeded();
        assert_eq!(list.to_vec(), list.to_vec());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn check_invariants_catches_stale_tail() {
        let mut list = seeded();
        list.tail = Some(1);
        assert!(matches!(
            list.check_invariants(),
            Err(ListError::Corrupted(_))
        ));
    }

    #[test]
    fn check_invariants_catches_stale_size() {
        let mut list = seeded();
        list.size = 4;
        assert!(matches!(
            list.check_invariants(),
            Err(ListError::Corrupted(_))
        ));
    }
}
