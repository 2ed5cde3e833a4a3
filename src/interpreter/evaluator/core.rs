use std::{collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::builtin,
        lexer::separate,
        value::{
            core::Value,
            function::{Body, Definition, Function, Pattern},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A lexical scope mapping names to values.
///
/// One global namespace persists for a program's lifetime; each function call
/// clones it into a private copy, installs the selected definition's bindings
/// there, and evaluates the body against the copy. Callee-introduced bindings
/// never leak back to the caller — scopes are copied, not linked.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    bindings: HashMap<String, Value>,
}

impl Namespace {
    /// Creates an empty namespace. Declaration-time pattern resolution uses
    /// one of these so that pattern identifiers stay symbolic.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a namespace pre-seeded with the builtin overload set.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut namespace = Self::new();
        builtin::install(&mut namespace);
        namespace
    }

    /// Looks up a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds a name to a value, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Appends a definition to the named function, creating the entry if it
    /// is absent. A name previously bound to a plain value is replaced by a
    /// fresh function.
    pub fn declare(&mut self, name: &str, definition: Definition) {
        if let Some(Value::Function(function)) = self.bindings.get_mut(name) {
            Rc::make_mut(function).definitions.push(definition);
            return;
        }

        self.bindings.insert(name.to_string(),
                             Value::from(Function { name:        name.to_string(),
                                                    definitions: vec![definition],
                                                    given:       Vec::new(), }));
    }
}

/// Resolves expression text into a value.
///
/// The algorithm, in strict priority order:
/// 1. Strip layers of fully-enclosing matched parentheses.
/// 2. A quote-delimited string is a `Text` literal (content verbatim).
/// 3. A bracket-delimited string is an `Array` of recursively resolved
///    elements.
/// 4. Integer parse, then real parse — `"3"` is an integer, `"3.0"` a real.
/// 5. Otherwise the first token is the head and the remaining tokens are
///    resolved eagerly into an argument list. A parenthesized head is itself
///    resolved as an expression, so `(add 2) 3` equals `add 2 3`. An absent
///    head becomes a fresh symbolic function; a head bound to a function is
///    extended with the arguments; a head bound to a plain value returns that
///    value directly, discarding the already-evaluated arguments (preserved
///    behavior — invoking a plain value is deliberately not an error).
///
/// # Returns
/// The resolved value, which may be a pending function when the call is not
/// yet saturated or its arguments are still symbolic.
///
/// # Examples
/// ```
/// use curria::interpreter::{
///     evaluator::core::{resolve, Namespace},
///     value::core::Value,
/// };
///
/// let namespace = Namespace::with_builtins();
/// assert_eq!(resolve("add 2 3", &namespace).unwrap(), Value::from(5));
/// assert_eq!(resolve("3.5", &namespace).unwrap(), Value::from(3.5));
/// ```
pub fn resolve(text: &str, namespace: &Namespace) -> EvalResult<Value> {
    let stripped = strip_parens(text);

    if stripped.is_empty() {
        return Err(RuntimeError::EmptyExpression);
    }

    if stripped.len() >= 2 && stripped.starts_with('"') && stripped.ends_with('"') {
        return Ok(Value::Text(stripped[1..stripped.len() - 1].to_string()));
    }

    if stripped.len() >= 2 && stripped.starts_with('[') && stripped.ends_with(']') {
        let mut elements = Vec::new();
        for part in separate(&stripped[1..stripped.len() - 1]) {
            elements.push(resolve(part, namespace)?);
        }
        return Ok(Value::from(elements));
    }

    if let Ok(integer) = stripped.parse::<i64>() {
        return Ok(Value::from(integer));
    }
    if let Ok(real) = stripped.parse::<f64>() {
        return Ok(Value::from(real));
    }

    let parts = separate(stripped);
    let head = parts[0];

    let mut arguments = Vec::with_capacity(parts.len() - 1);
    for part in &parts[1..] {
        arguments.push(resolve(part, namespace)?);
    }

    // A grouped head like `(add 2) 3` is an expression of its own.
    if parts.len() > 1 && head.starts_with('(') {
        return match resolve(head, namespace)? {
            Value::Function(function) => function.extend(arguments, namespace),
            value => Ok(value),
        };
    }

    match namespace.get(head) {
        Some(Value::Function(function)) => function.extend(arguments, namespace),
        Some(value) => Ok(value.clone()),
        None => Function::unresolved(head).extend(arguments, namespace),
    }
}

/// Adds a definition for `name` to the namespace.
///
/// Each pattern token is resolved against an *empty* namespace to distinguish
/// literal patterns from binding identifiers: a token that resolves to a
/// (necessarily symbolic) function becomes a binding named after it, anything
/// else is a literal the incoming argument must equal. The body stays
/// unparsed until the definition is selected.
///
/// Nothing is appended unless every pattern token resolves without error, so
/// a failed declaration never leaves a partial entry behind.
///
/// # Examples
/// ```
/// use curria::interpreter::{
///     evaluator::core::{declare, resolve, Namespace},
///     value::core::Value,
/// };
///
/// let mut namespace = Namespace::with_builtins();
/// declare("double", &["n"], "mult n 2", &mut namespace).unwrap();
/// assert_eq!(resolve("double 21", &namespace).unwrap(), Value::from(42));
/// ```
pub fn declare(name: &str,
               patterns: &[&str],
               body: &str,
               namespace: &mut Namespace)
               -> EvalResult<()> {
    let empty = Namespace::new();

    let mut parameters = Vec::with_capacity(patterns.len());
    for token in patterns {
        parameters.push(match resolve(token, &empty)? {
                            Value::Function(function) => Pattern::Binding(function.name.clone()),
                            literal => Pattern::Literal(literal),
                        });
    }

    namespace.declare(name,
                      Definition { parameters,
                                   body: Body::Source(body.to_string()) });

    Ok(())
}

/// Removes layers of parentheses that enclose the whole trimmed string.
fn strip_parens(text: &str) -> &str {
    let mut stripped = text.trim();

    while stripped.len() >= 2
          && stripped.starts_with('(')
          && stripped.ends_with(')')
          && encloses(stripped)
    {
        stripped = stripped[1..stripped.len() - 1].trim();
    }

    stripped
}

/// Tests whether the group opened by the first character spans the whole
/// string, i.e. the depth never returns to zero before the final character.
fn encloses(text: &str) -> bool {
    let mut depth = 0_i32;

    for (index, character) in text.char_indices() {
        match character {
            '(' | '[' => depth += 1,
            ')' | ']' => {
                depth -= 1;
                if depth <= 0 && index + character.len_utf8() < text.len() {
                    return false;
                }
            },
            _ => {},
        }
    }

    depth == 0
}
