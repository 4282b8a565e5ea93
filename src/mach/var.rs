use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names arrive already lowercased from the scanner. A variable exists
/// from its first assignment until `clear`.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn get(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn fetch(&self, var_name: &str) -> Result<f64> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(VariableNotFound; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: f64) -> Result<()> {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                if self.vars.len() >= u16::max_value() as usize {
                    return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
                }
                self.vars.insert(var_name.to_string(), value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_fetch() {
        let mut v = Var::new();
        assert!(v.fetch("a").is_err());
        v.store("a", 1.5).unwrap();
        assert_eq!(v.fetch("a").unwrap(), 1.5);
        v.store("a", 0.0).unwrap();
        assert!(v.contains("a"));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_not_found_names_variable() {
        let v = Var::new();
        assert_eq!(v.fetch("zz").unwrap_err().to_string(), "Variable not found: zz");
    }

    #[test]
    fn test_clear() {
        let mut v = Var::new();
        v.store("x", 1.0).unwrap();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.get("x"), None);
    }
}
