use super::{Address, Listing};
use crate::error;
use crate::lang::{Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Address table
///
/// The program as it looked when RUN started: line numbers in ascending
/// order with their text. An [`Address`] is an index into this table.
/// Jump targets are resolved against it, never against the live listing,
/// so editing the program only takes effect at the next RUN.

#[derive(Debug, Default, Clone)]
pub struct AddressTable {
    lines: Vec<(LineNumber, Rc<str>)>,
}

impl AddressTable {
    pub fn snapshot(listing: &Listing) -> AddressTable {
        AddressTable {
            lines: listing
                .lines()
                .map(|(number, text)| (*number, Rc::from(text.as_str())))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, addr: Address) -> Option<(LineNumber, Rc<str>)> {
        self.lines
            .get(addr)
            .map(|(number, text)| (*number, text.clone()))
    }

    pub fn line_number(&self, addr: Address) -> Option<LineNumber> {
        self.lines.get(addr).map(|(number, _)| *number)
    }

    /// Resolves a line number, as computed by a GOTO or GOSUB expression.
    pub fn resolve(&self, target: f64) -> Result<Address> {
        let target = target.trunc();
        if target >= 0.0 && target <= LineNumber::max_value() as f64 {
            let number = target as LineNumber;
            if let Ok(addr) = self.lines.binary_search_by_key(&number, |(n, _)| *n) {
                return Ok(addr);
            }
        }
        Err(error!(UndefinedLine; super::number::format(target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn table() -> AddressTable {
        let mut listing = Listing::default();
        listing.insert(100, "END".to_string());
        listing.insert(10, "PRINT 1".to_string());
        listing.insert(50, "GOTO 10".to_string());
        AddressTable::snapshot(&listing)
    }

    #[test]
    fn test_sorted_snapshot() {
        let t = table();
        assert_eq!(t.len(), 3);
        assert_eq!(t.line_number(0), Some(10));
        assert_eq!(t.line_number(1), Some(50));
        assert_eq!(t.line_number(2), Some(100));
        assert_eq!(t.line_number(3), None);
    }

    #[test]
    fn test_resolve() {
        let t = table();
        assert_eq!(t.resolve(50.0).unwrap(), 1);
        assert_eq!(t.resolve(100.9).unwrap(), 2);
        let e = t.resolve(60.0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLine);
        assert_eq!(e.to_string(), "Line not found: 60");
        assert!(t.resolve(-10.0).is_err());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut listing = Listing::default();
        listing.insert(10, "PRINT 1".to_string());
        let t = AddressTable::snapshot(&listing);
        listing.insert(10, "PRINT 2".to_string());
        listing.insert(20, "END".to_string());
        assert_eq!(t.len(), 1);
        assert_eq!(&*t.line(0).unwrap().1, "PRINT 1");
    }
}
