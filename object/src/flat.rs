//! Depth-first flattening of in-memory data sets.
//!
//! The iterators in this module visit every element of a data set tree
//! in pre-order:
//! a sequence element is yielded before the elements of its items,
//! and all of its items are visited before moving on to its next sibling.
//!
//! Traversal is driven by an explicit stack of borrowed slice iterators,
//! so that the tree is never modified
//! and dropping an iterator at any point releases all of its state.

use crate::mem::{InMemElement, SequenceItem};
use std::iter::FusedIterator;
use std::slice;

/// One level of the traversal stack.
#[derive(Debug, Clone)]
enum Frame<'a> {
    /// elements of a data set or of a sequence item
    Elements {
        iter: slice::Iter<'a, InMemElement>,
        depth: u32,
    },
    /// items of a sequence element,
    /// whose elements are at the given depth
    Items {
        iter: slice::Iter<'a, SequenceItem>,
        depth: u32,
    },
}

/// An iterator over all elements of a data set tree
/// paired with their nesting depth.
///
/// Elements at the root have depth 0,
/// and the elements in the items of a sequence element at depth `d`
/// have depth `d + 1`.
///
/// Cloning the iterator forks the traversal at its current position.
#[derive(Debug, Clone)]
pub struct FlatElementsWithDepth<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> FlatElementsWithDepth<'a> {
    /// Create a new flattening iterator over the given root elements.
    pub fn new(elements: &'a [InMemElement]) -> Self {
        FlatElementsWithDepth {
            stack: vec![Frame::Elements {
                iter: elements.iter(),
                depth: 0,
            }],
        }
    }
}

impl<'a> Iterator for FlatElementsWithDepth<'a> {
    type Item = (u32, &'a InMemElement);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.last_mut()? {
                Frame::Elements { iter, depth } => {
                    let depth = *depth;
                    match iter.next() {
                        Some(elem) => {
                            if let Some(items) = elem.items() {
                                self.stack.push(Frame::Items {
                                    iter: items.iter(),
                                    depth: depth + 1,
                                });
                            }
                            return Some((depth, elem));
                        }
                        None => {
                            self.stack.pop();
                        }
                    }
                }
                Frame::Items { iter, depth } => {
                    let depth = *depth;
                    match iter.next() {
                        Some(item) => {
                            self.stack.push(Frame::Elements {
                                iter: item.elements().iter(),
                                depth,
                            });
                        }
                        None => {
                            self.stack.pop();
                        }
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at least the rest of each pending element list
        let lower = self
            .stack
            .iter()
            .map(|frame| match frame {
                Frame::Elements { iter, .. } => iter.len(),
                Frame::Items { .. } => 0,
            })
            .sum();
        (lower, None)
    }
}

impl FusedIterator for FlatElementsWithDepth<'_> {}

/// An iterator over all elements of a data set tree,
/// in depth-first pre-order.
///
/// This is [`FlatElementsWithDepth`] without the depth.
#[derive(Debug, Clone)]
pub struct FlatElements<'a> {
    inner: FlatElementsWithDepth<'a>,
}

impl<'a> FlatElements<'a> {
    /// Create a new flattening iterator over the given root elements.
    pub fn new(elements: &'a [InMemElement]) -> Self {
        FlatElements {
            inner: FlatElementsWithDepth::new(elements),
        }
    }
}

impl<'a> Iterator for FlatElements<'a> {
    type Item = &'a InMemElement;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, elem)| elem)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for FlatElements<'_> {}
