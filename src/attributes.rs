//! Ordered SVG attribute lists.
//!
//! Each configuration type turns itself into an [`Attributes`] value, and a
//! component merges the attributes of its geometry, appearance and transform
//! before writing them out.  Insertion order is the output order; setting an
//! attribute that already exists replaces its value in place.

use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use quick_xml::escape::escape;

use crate::parsers::fmt_number;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<&'static str, String>);

impl Attributes {
    pub fn new() -> Attributes {
        Attributes::default()
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn insert_number(&mut self, name: &'static str, value: f64) {
        self.insert(name, fmt_number(value));
    }

    /// Inserts a number only if there is one.
    pub fn insert_opt_number(&mut self, name: &'static str, value: Option<f64>) {
        if let Some(v) = value {
            self.insert_number(name, v);
        }
    }

    /// Merges `other` into `self`; values from `other` win.
    pub fn update(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Builds a complete element.
    ///
    /// With `content` of `None` the element is self-closing.  Content is
    /// written verbatim; callers escape it if it is character data.
    pub fn element(&self, name: &str, content: Option<&str>) -> String {
        let open = if self.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, self)
        };

        match content {
            None => format!("<{} />", open),
            Some(c) => format!("<{}>{}</{}>", open, c, name),
        }
    }
}

/// Writes `name="value"` pairs separated by spaces, with values escaped.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .0
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape(v.as_str())))
            .join(" ");

        f.write_str(&s)
    }
}

/// Types that describe some of an element's attributes.
pub trait ToAttributes {
    fn to_attributes(&self) -> Attributes;
}
