use super::{token::Relation, Column, Error};

type Result<T> = std::result::Result<T, Error>;

fn is_basic_whitespace(c: u8) -> bool {
    c.is_ascii_whitespace()
}

fn is_basic_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

fn is_basic_alphanumeric(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// ## Cursor over one line of BASIC text
///
/// Every matcher either consumes what it matched or leaves the cursor
/// where it was, except for leading whitespace which most matchers skip.
/// Keywords and identifiers come back lowercased.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    line: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Scanner<'a> {
        Scanner { line, cursor: 0 }
    }

    pub fn cursor(&self) -> Column {
        self.cursor
    }

    pub fn rest(&self) -> &'a str {
        &self.line[self.cursor..]
    }

    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.cursor).copied()
    }

    fn take_while<F: Fn(u8) -> bool>(&mut self, f: F) -> &'a str {
        let mark = self.cursor;
        while let Some(c) = self.peek() {
            if !f(c) {
                break;
            }
            self.cursor += 1;
        }
        &self.line[mark..self.cursor]
    }

    pub fn skip_whitespace(&mut self) {
        self.take_while(is_basic_whitespace);
    }

    pub fn skip_to_end(&mut self) {
        self.cursor = self.line.len();
    }

    pub fn is_eol(&mut self) -> bool {
        self.skip_whitespace();
        self.cursor >= self.line.len()
    }

    /// A syntax error describing what was wanted and what is left.
    pub fn expected(&self, what: &str) -> Error {
        let rest = self.rest().trim();
        if rest.is_empty() {
            error!(SyntaxError; format!("{} expected, found end of line", what))
        } else {
            error!(SyntaxError; format!("{} expected, found: {}", what, rest))
        }
    }

    pub fn expect_eol(&mut self) -> Result<()> {
        if self.is_eol() {
            Ok(())
        } else {
            Err(error!(SyntaxError; format!("Unexpected text: {}", self.rest().trim_end())))
        }
    }

    /// A run of letters at the cursor. Does not skip whitespace.
    pub fn keyword(&mut self) -> Option<String> {
        match self.peek() {
            Some(c) if is_basic_alphabetic(c) => {
                Some(self.take_while(is_basic_alphabetic).to_ascii_lowercase())
            }
            _ => None,
        }
    }

    /// A letter followed by letters and digits.
    pub fn identifier(&mut self) -> Option<String> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if is_basic_alphabetic(c) => {
                Some(self.take_while(is_basic_alphanumeric).to_ascii_lowercase())
            }
            _ => None,
        }
    }

    /// Digits, optionally followed by a decimal point and more digits.
    pub fn number(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let mark = self.cursor;
        if self.take_while(is_basic_digit).is_empty() {
            return None;
        }
        if self.peek() == Some(b'.') {
            self.cursor += 1;
            self.take_while(is_basic_digit);
        }
        Some(&self.line[mark..self.cursor])
    }

    /// A double quoted string without the quotes. No escapes.
    pub fn string(&mut self) -> Result<Option<&'a str>> {
        self.skip_whitespace();
        if self.peek() != Some(b'"') {
            return Ok(None);
        }
        let start = self.cursor + 1;
        match self.line[start..].find('"') {
            Some(len) => {
                self.cursor = start + len + 1;
                Ok(Some(&self.line[start..start + len]))
            }
            None => {
                self.skip_to_end();
                Err(error!(SyntaxError; "Unclosed string"))
            }
        }
    }

    pub fn relation(&mut self) -> Option<Relation> {
        self.skip_whitespace();
        let rest = self.rest();
        for relation in Relation::ALL.iter() {
            if rest.starts_with(relation.as_str()) {
                self.cursor += relation.as_str().len();
                return Some(*relation);
            }
        }
        None
    }

    pub fn literal(&mut self, text: &str) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(text) {
            self.cursor += text.len();
            true
        } else {
            false
        }
    }

    /// Matches a whole keyword or puts the cursor back.
    pub fn keyword_nocase(&mut self, kw: &str) -> bool {
        let mark = self.cursor;
        self.skip_whitespace();
        match self.keyword() {
            Some(token) if token.eq_ignore_ascii_case(kw) => true,
            _ => {
                self.cursor = mark;
                false
            }
        }
    }
}
