use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{btree_map, BTreeMap};

/// ## Program source
///
/// Statement text keyed by line number, unparsed.
/// Iteration is always in ascending line number order.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    source: BTreeMap<LineNumber, String>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn insert(&mut self, number: LineNumber, text: String) -> Option<String> {
        self.source.insert(number, text)
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<String> {
        self.source.remove(&number)
    }

    pub fn get(&self, number: LineNumber) -> Option<&str> {
        self.source.get(&number).map(String::as_str)
    }

    pub fn lines(&self) -> btree_map::Iter<'_, LineNumber, String> {
        self.source.iter()
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        let line = Line::new(line)?;
        match line.number() {
            None if line.is_empty() => Ok(()),
            None => Err(error!(DirectStatementInFile)),
            Some(number) => {
                self.insert(number, line.into_text());
                Ok(())
            }
        }
    }

    /// One `<number> <text>` entry per stored line.
    pub fn list(&self) -> Vec<String> {
        self.source
            .iter()
            .map(|(number, text)| format!("{} {}", number, text))
            .collect()
    }
}
