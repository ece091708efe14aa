use std::{
    fmt::{self, Debug, Display},
    iter::FusedIterator,
    ops::Shl,
};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/*
 * Singly linked list where every insertion and removal happens at the head.
 * Iteration goes from the most recently inserted value to the oldest one.
 */
pub struct OrderedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        OrderedList {
            head: None,
            size: 0,
        }
    }

    /*
     * The previous head (if any) becomes the second element.
     */
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.size += 1;
    }

    /*
     * Detach the head and hand its value back, None when empty.
     */
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.size -= 1;
            node.value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /*
     * Lazy front-to-back traversal. Every call starts a fresh, independent
     * traversal. The list cannot be mutated while one is alive : the
     * iterator borrows the list.
     */
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }
}

impl<T: PartialEq> OrderedList<T> {
    /*
     * Linear scan from the head, returns the first stored value equal to <value>
     */
    pub fn contains(&self, value: &T) -> Option<&T> {
        self.iter().find(|candidate| *candidate == value)
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Release the chain node by node instead of recursing through Box drops
impl<T> Drop for OrderedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

/*
 * `list << 3 << 5` : insert at the head and give the list back for chaining
 */
impl<T> Shl<T> for OrderedList<T> {
    type Output = Self;

    fn shl(mut self, value: T) -> Self {
        self.push_front(value);
        self
    }
}

impl<'a, T> Shl<T> for &'a mut OrderedList<T> {
    type Output = Self;

    fn shl(self, value: T) -> Self {
        self.push_front(value);
        self
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/*
 * Consuming traversal : pops values off the head one at a time
 */
pub struct IntoIter<T>(OrderedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/*
 * Every value goes to the head, so the list ends up in reverse source order
 */
impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_front(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = OrderedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Debug> Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/*
 * Values from head to tail, separated by a space
 */
impl<T: Display> Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
