//! Recency List Module
//!
//! Doubly-linked list of entries ordered by access time, backed by a slot arena
//! so every node has a stable `usize` handle and all operations are O(1).

// == Node ==
#[derive(Debug)]
struct Node<K, T> {
    key: K,
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Handles returned by [`push_front`](Self::push_front) stay valid until the node
/// is removed; freed slots are reused by later insertions.
#[derive(Debug)]
pub(crate) struct RecencyList<K, T> {
    nodes: Vec<Option<Node<K, T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K, T> RecencyList<K, T> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a node as most recently used and returns its handle.
    pub fn push_front(&mut self, key: K, value: T) -> usize {
        let node = Node {
            key,
            value,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    ///
    /// Returns false if `idx` is not a live handle.
    pub fn move_to_front(&mut self, idx: usize) -> bool {
        if self.node(idx).is_none() {
            return false;
        }
        if self.head != Some(idx) {
            self.unlink(idx);
            self.link_front(idx);
        }
        true
    }

    // == Remove ==
    /// Unlinks a node and returns its key and value.
    pub fn remove(&mut self, idx: usize) -> Option<(K, T)> {
        self.node(idx)?;
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some((node.key, node.value))
    }

    // == Pop Back ==
    /// Removes and returns the least recently used node.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<(K, T)> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Accessors ==
    /// Returns the key and value behind a handle.
    pub fn get(&self, idx: usize) -> Option<(&K, &T)> {
        self.node(idx).map(|node| (&node.key, &node.value))
    }

    /// Returns the value behind a handle for in-place updates.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.node_mut(idx).map(|node| &mut node.value)
    }

    /// Returns the handle of the least recently used node.
    #[allow(dead_code)]
    pub fn back(&self) -> Option<usize> {
        self.tail
    }

    /// Iterates from most to least recently used.
    #[allow(dead_code)]
    pub fn iter(&self) -> Iter<'_, K, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Length ==
    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every node and invalidates all handles.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Internal Linking ==
    fn node(&self, idx: usize) -> Option<&Node<K, T>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<K, T>> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.node_mut(head) {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(node) = self.node_mut(prev_idx) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(node) = self.node_mut(next_idx) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
    }
}

// == Iterator ==
/// Iterator over `(key, value)` pairs from most to least recently used.
pub(crate) struct Iter<'a, K, T> {
    list: &'a RecencyList<K, T>,
    cursor: Option<usize>,
}

impl<'a, K, T> Iterator for Iter<'a, K, T> {
    type Item = (&'a K, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str, u32>) -> Vec<&'static str> {
        list.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str, u32> = RecencyList::with_capacity(4);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::with_capacity(4);

        let first = list.push_front("key1", 1);
        list.push_front("key2", 2);
        list.push_front("key3", 3);

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(list.back(), Some(first));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::with_capacity(4);

        let a = list.push_front("a", 1);
        list.push_front("b", 2);
        list.push_front("c", 3);

        assert!(list.move_to_front(a));

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(list.pop_back(), Some(("b", 2)));
        assert_eq!(list.pop_back(), Some(("c", 3)));
        assert_eq!(list.pop_back(), Some(("a", 1)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_head_to_front_is_noop() {
        let mut list = RecencyList::with_capacity(2);

        list.push_front("a", 1);
        let b = list.push_front("b", 2);

        assert!(list.move_to_front(b));
        assert_eq!(keys(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_move_stale_handle() {
        let mut list = RecencyList::with_capacity(2);

        let a = list.push_front("a", 1);
        list.remove(a);

        assert!(!list.move_to_front(a));
        assert!(!list.move_to_front(99));
    }

    #[test]
    fn test_pop_back_empty() {
        let mut list: RecencyList<&str, u32> = RecencyList::with_capacity(1);
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = RecencyList::with_capacity(4);

        list.push_front("key1", 1);
        let middle = list.push_front("key2", 2);
        list.push_front("key3", 3);

        assert_eq!(list.remove(middle), Some(("key2", 2)));
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["key3", "key1"]);
        assert_eq!(list.remove(middle), None);
    }

    #[test]
    fn test_remove_only_node_resets_ends() {
        let mut list = RecencyList::with_capacity(1);

        let only = list.push_front("key1", 1);
        list.remove(only);

        assert_eq!(list.back(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut list = RecencyList::with_capacity(2);

        list.push_front("a", 1);
        let b = list.push_front("b", 2);
        list.remove(b);
        let c = list.push_front("c", 3);

        assert_eq!(b, c);
        assert_eq!(list.get(c), Some((&"c", &3)));
        assert_eq!(keys(&list), vec!["c", "a"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = RecencyList::with_capacity(1);

        let a = list.push_front("a", 1);
        if let Some(value) = list.get_mut(a) {
            *value = 10;
        }

        assert_eq!(list.get(a), Some((&"a", &10)));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::with_capacity(3);

        let a = list.push_front("a", 1);
        let b = list.push_front("b", 2);
        let c = list.push_front("c", 3);

        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        assert_eq!(list.pop_back(), Some(("a", 1)));
        assert_eq!(list.pop_back(), Some(("c", 3)));
        assert_eq!(list.pop_back(), Some(("b", 2)));
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::with_capacity(3);

        list.push_front("a", 1);
        list.push_front("b", 2);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.back(), None);
        assert_eq!(list.iter().count(), 0);

        list.push_front("c", 3);
        assert_eq!(keys(&list), vec!["c"]);
    }
}
