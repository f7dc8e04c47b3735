//! Flattening of arbitrarily nested input arrays
use serde_json::Value;

use crate::error::{EncodingError, Result};

/// A scalar leaf or an ordered sequence of further nested values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn seq<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Nested::Seq(items.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Consumes the structure and returns its leaves depth-first, left to right.
    pub fn into_flat(self) -> Vec<T> {
        let mut res = Vec::new();
        let mut stack = vec![vec![self].into_iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Nested::Leaf(v)) => res.push(v),
                Some(Nested::Seq(items)) => stack.push(items.into_iter()),
                None => {
                    stack.pop();
                }
            }
        }
        res
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::Seq(items)
    }
}

/// JSON arrays become sequences, every other JSON value is a leaf.
impl From<Value> for Nested<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Nested::Seq(items.into_iter().map(Nested::from).collect()),
            other => Nested::Leaf(other),
        }
    }
}

/// Collects every leaf of `a` depth-first, left to right. Empty sequences
/// contribute nothing and a bare leaf yields a single element.
pub fn flat_array<T: Clone>(a: &Nested<T>) -> Vec<T> {
    let mut res = Vec::new();
    // explicit stack so deep nesting does not grow the call stack
    let mut stack = vec![std::slice::from_ref(a).iter()];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Leaf(v)) => res.push(v.clone()),
            Some(Nested::Seq(items)) => stack.push(items.iter()),
            None => {
                stack.pop();
            }
        }
    }
    res
}

/// Same as [`flat_array`], but only accepts a sequence at the top level.
pub fn try_flat_array<T: Clone>(a: &Nested<T>) -> Result<Vec<T>> {
    if a.is_leaf() {
        return Err(EncodingError::TypeMismatch {
            expected: "sequence",
            found: "scalar",
        });
    }
    Ok(flat_array(a))
}
