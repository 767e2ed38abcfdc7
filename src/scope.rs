use std::rc::Rc;

use crate::expr::Expr;

/// Variables visible at one point of the grammar.
///
/// Scopes are persistent: [`Scope::bind`] returns a new scope sharing the existing
/// bindings and leaves `self` untouched, so a binding made while parsing one branch is
/// never visible from a sibling branch.
#[derive(Debug, Clone, Default)]
pub struct Scope(Option<Rc<Binding>>);

#[derive(Debug)]
struct Binding {
    name: String,
    operand: Rc<Expr>,
    parent: Scope,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, name: &str, operand: Rc<Expr>) -> Self {
        Self(Some(Rc::new(Binding {
            name: name.to_string(),
            operand,
            parent: self.clone(),
        })))
    }

    /// Nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Rc<Expr>> {
        self.bindings()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.operand)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    fn bindings(&self) -> impl Iterator<Item = &Binding> {
        let mut current = self.0.as_deref();
        std::iter::from_fn(move || {
            let binding = current?;
            current = binding.parent.0.as_deref();
            Some(binding)
        })
    }
}
