use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Flat name-to-value store. There is no declaration step; the first
/// `STORE` creates the binding and later stores overwrite it.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear()
    }

    pub fn exists(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        self.vars.insert(var_name.clone(), value);
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable;
                format!("Variável '{}' não definida", var_name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_store_creates_and_overwrites() {
        let mut vars = Var::new();
        let name: Rc<str> = "x".into();
        assert!(!vars.exists(&name));
        vars.store(&name, Val::Integer(1));
        vars.store(&name, Val::Integer(2));
        assert!(vars.exists(&name));
        assert_eq!(vars.fetch(&name).unwrap(), Val::Integer(2));
    }

    #[test]
    fn test_fetch_of_unbound_name_fails() {
        let vars = Var::new();
        let error = vars.fetch("nada").unwrap_err();
        assert_eq!(error.code(), ErrorCode::UndefinedVariable);
        assert_eq!(error.to_string(), "Variável 'nada' não definida");
    }

    #[test]
    fn test_clear_removes_all_bindings() {
        let mut vars = Var::new();
        vars.store(&"a".into(), Val::Integer(1));
        vars.store(&"b".into(), Val::Decimal(2.5));
        vars.clear();
        assert!(!vars.exists("a"));
        assert!(!vars.exists("b"));
    }
}
