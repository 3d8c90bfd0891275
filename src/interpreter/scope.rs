use std::collections::HashMap;

use super::error::{RuntimeError, RuntimeResult};

/// Two-level lexical scoping (§4.3): one persistent global map, plus a LIFO stack of local
/// frames — one frame per in-flight function call, not one per nested block. A function body's
/// own `{ }` and any nested `if`/`while` bodies all share the *same* frame.
#[derive(Debug, Default)]
pub struct Scope {
    global: HashMap<String, i64>,
    locals: Vec<HashMap<String, i64>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_global(&mut self, line: usize, name: &str, addr: i64) -> RuntimeResult<()> {
        if self.global.contains_key(name) {
            return Err(RuntimeError::new(
                line,
                format!("duplicate global variable '{name}'"),
            ));
        }
        self.global.insert(name.to_owned(), addr);
        Ok(())
    }

    pub fn define_local(&mut self, line: usize, name: &str, addr: i64) -> RuntimeResult<()> {
        let frame = self
            .locals
            .last_mut()
            .expect("define_local called with no active call frame");
        if frame.contains_key(name) {
            return Err(RuntimeError::new(line, format!("duplicate variable '{name}'")));
        }
        frame.insert(name.to_owned(), addr);
        Ok(())
    }

    /// Local frame first, then global — a local binding shadows a global of the same name.
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.locals
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.global.get(name))
            .copied()
    }

    pub fn push_frame(&mut self) {
        self.locals.push(HashMap::new());
    }

    pub fn pop_frame(&mut self) {
        self.locals.pop();
    }

    pub fn depth(&self) -> usize {
        self.locals.len()
    }

    /// Name/address pairs of every global, for `--dump-vars`.
    pub fn globals(&self) -> impl Iterator<Item = (&str, i64)> {
        self.global.iter().map(|(name, &addr)| (name.as_str(), addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_shadows_global() {
        let mut scope = Scope::new();
        scope.define_global(1, "x", 100).unwrap();
        scope.push_frame();
        scope.define_local(1, "x", 200).unwrap();
        assert_eq!(scope.lookup("x"), Some(200));
        scope.pop_frame();
        assert_eq!(scope.lookup("x"), Some(100));
    }

    #[test]
    fn duplicate_global_is_rejected() {
        let mut scope = Scope::new();
        scope.define_global(1, "x", 0).unwrap();
        assert!(scope.define_global(2, "x", 8).is_err());
    }

    #[test]
    fn duplicate_local_within_same_frame_is_rejected() {
        let mut scope = Scope::new();
        scope.push_frame();
        scope.define_local(1, "y", 0).unwrap();
        assert!(scope.define_local(2, "y", 8).is_err());
    }
}
