use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{resolve, EvalResult, Namespace},
        lexer::separate,
        value::{
            core::Value,
            function::{Body, Definition, Function, Pattern},
        },
    },
};

impl Function {
    /// Extends the function with newly supplied arguments and dispatches.
    ///
    /// The previously given arguments always precede the new ones. Dispatch
    /// is two-phase:
    /// 1. *Eliminate*: an overload is dropped if any literal pattern in the
    ///    newly covered index range is not value-equal to its argument.
    ///    Binding patterns accept anything.
    /// 2. *Saturate*: the first surviving overload, in declaration order,
    ///    whose parameter count does not exceed the available argument count
    ///    is called.
    ///
    /// When no overload is both eligible and saturated, the result is a new
    /// pending function carrying the surviving overloads and all arguments so
    /// far — a legitimate first-class value, printable and storable. With
    /// zero surviving overloads it is a permanently pending, symbolic value;
    /// failing to match is never an error.
    ///
    /// # Parameters
    /// - `new_args`: Arguments supplied by this application.
    /// - `namespace`: The caller's scope, cloned per call.
    ///
    /// # Returns
    /// The call's result, or a pending function, or an error raised by the
    /// selected definition.
    pub fn extend(&self, new_args: Vec<Value>, namespace: &Namespace) -> EvalResult<Value> {
        let mut args = self.given.clone();
        args.extend(new_args);

        let surviving: Vec<&Definition> =
            self.definitions
                .iter()
                .filter(|definition| {
                    (self.given.len()..args.len()).all(|index| {
                        match definition.parameters.get(index) {
                            Some(Pattern::Literal(literal)) => args[index] == *literal,
                            _ => true,
                        }
                    })
                })
                .collect();

        for definition in &surviving {
            if definition.parameters.len() <= args.len() {
                return self.call(definition, &args, namespace);
            }
        }

        Ok(Value::from(Self { name:        self.name.clone(),
                              definitions: surviving.into_iter().cloned().collect(),
                              given:       args, }))
    }

    /// Runs the selected definition.
    ///
    /// Source bodies evaluate in a private copy of the enclosing namespace
    /// holding the definition's bindings; literal-pattern positions install
    /// nothing, the dispatcher already verified them. A body whose head
    /// resolves to a non-function is the call's result; otherwise the head
    /// function is extended with the remaining body values in the local
    /// scope, and the result with any leftover supplied arguments in the
    /// *outer* scope — those belong to the caller's context. A non-function
    /// result that leaves supplied arguments unconsumed is an arity error.
    fn call(&self,
            definition: &Definition,
            args: &[Value],
            namespace: &Namespace)
            -> EvalResult<Value> {
        let source = match &definition.body {
            Body::Native(builtin) => {
                return builtin.eval(&self.name, definition, args, namespace);
            },
            Body::Source(source) => source,
        };

        let taken = definition.parameters.len();

        let mut local = namespace.clone();
        for (position, pattern) in definition.parameters.iter().enumerate() {
            if let Pattern::Binding(binding) = pattern {
                local.insert(binding.clone(), args[position].clone());
            }
        }

        let parts = separate(source);
        if parts.is_empty() {
            return Err(RuntimeError::EmptyExpression);
        }

        let mut body_values = Vec::with_capacity(parts.len());
        for part in &parts {
            body_values.push(resolve(part, &local)?);
        }

        let remaining = &args[taken..];
        let head = body_values.remove(0);

        let function = match head {
            Value::Function(function) => function,
            value => {
                if !remaining.is_empty() {
                    return Err(RuntimeError::TooManyArguments { name: self.name.clone() });
                }
                return Ok(value);
            },
        };

        match function.extend(body_values, &local)? {
            Value::Function(pending) => pending.extend(remaining.to_vec(), namespace),
            value => {
                if remaining.is_empty() {
                    Ok(value)
                } else {
                    Err(RuntimeError::TooManyArguments { name: self.name.clone() })
                }
            },
        }
    }
}

/// Builds the pending function a builtin returns when one of its operands is
/// still symbolic: the single native definition plus the operands as given
/// arguments.
pub(crate) fn deferred(name: &str, definition: &Definition, operands: &[Value]) -> Value {
    Value::Function(Rc::new(Function { name:        name.to_string(),
                                       definitions: vec![definition.clone()],
                                       given:       operands.to_vec(), }))
}
