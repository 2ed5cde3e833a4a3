use crate::interpreter::{evaluator::builtin::Builtin, lexer::separate, value::core::Value};

/// A function-like value: a named entity with zero or more definitions and an
/// accumulated given-argument prefix.
///
/// A `Function` with an empty overload set can never be completed — it acts
/// as an opaque symbolic placeholder that only ever accumulates arguments and
/// can be displayed, never evaluated to a primitive. This is how the language
/// represents unevaluated expressions such as `add x 3` with `x` unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Identifier used for display and recursive self-reference through the
    /// enclosing namespace.
    pub name:        String,
    /// Ordered overload set. Order is significant: the first structurally
    /// eligible match wins.
    pub definitions: Vec<Definition>,
    /// Previously supplied arguments. Grows as more arguments arrive through
    /// successive partial applications.
    pub given:       Vec<Value>,
}

/// One pattern/body pair under a function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Ordered parameter patterns.
    pub parameters: Vec<Pattern>,
    /// The definition's body.
    pub body:       Body,
}

/// A parameter position of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// A concrete value incoming arguments must equal.
    Literal(Value),
    /// A local name that captures any argument.
    Binding(String),
}

/// What runs when a definition is selected.
///
/// Source bodies stay unparsed until the definition is picked; evaluating
/// them lazily in the call's namespace is what permits self-reference and
/// mutual recursion through the shared global namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Unparsed source text, evaluated in the call's local namespace.
    Source(String),
    /// A native primitive substituting for the text-body evaluation step.
    Native(Builtin),
}

impl Function {
    /// Creates a symbolic placeholder for a name not present in the
    /// namespace: no definitions, no given arguments.
    #[must_use]
    pub fn unresolved(name: &str) -> Self {
        Self { name:        name.to_string(),
               definitions: Vec::new(),
               given:       Vec::new(), }
    }
}

impl std::fmt::Display for Function {
    /// Renders the pending application as `name arg1 arg2 ..`, wrapping each
    /// given argument in parentheses when its own rendering is not a single
    /// token.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        for argument in &self.given {
            let rendered = argument.to_string();

            if separate(&rendered).first().copied() == Some(rendered.as_str()) {
                write!(f, " {rendered}")?;
            } else {
                write!(f, " ({rendered})")?;
            }
        }

        Ok(())
    }
}
