use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Namespace},
            dispatch::deferred,
        },
        value::{
            core::Value,
            function::{Body, Definition, Pattern},
        },
    },
};

/// The native primitives shipped with every program.
///
/// Each one is installed as a single-definition function whose body is
/// [`Body::Native`]; dispatch treats it exactly like a user-declared
/// definition, so builtins curry and participate in overload elimination the
/// same way. When a required operand is still a function (unresolved or
/// partial), the builtin defers into a pending value instead of failing, so
/// builtins compose transparently with partially-applied user functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `add a b` — numeric addition, text concatenation, elementwise on
    /// arrays.
    Add,
    /// `sub a b` — numeric subtraction, elementwise on arrays.
    Sub,
    /// `mult a b` — numeric multiplication, elementwise on arrays.
    Mult,
    /// `div a b` — true division; the result is always real.
    Div,
    /// `map f values` — applies `f` to each element of `values`.
    Map,
    /// `range start stop step` — half-open numeric range.
    Range,
}

/// Name, primitive, and parameter bindings for every builtin.
const BUILTIN_TABLE: &[(&str, Builtin, &[&str])] = &[
    ("add", Builtin::Add, &["a", "b"]),
    ("sub", Builtin::Sub, &["a", "b"]),
    ("mult", Builtin::Mult, &["a", "b"]),
    ("div", Builtin::Div, &["a", "b"]),
    ("map", Builtin::Map, &["f", "values"]),
    ("range", Builtin::Range, &["start", "stop", "step"]),
];

/// Installs the builtin overload set into a namespace.
pub fn install(namespace: &mut Namespace) {
    for (name, builtin, bindings) in BUILTIN_TABLE {
        let parameters = bindings.iter()
                                 .map(|binding| Pattern::Binding((*binding).to_string()))
                                 .collect();

        namespace.declare(name,
                          Definition { parameters,
                                       body: Body::Native(*builtin) });
    }
}

impl Builtin {
    /// Runs the native computation for a selected definition.
    ///
    /// Mirrors the dispatch contract of source bodies: if any required
    /// operand is still a function, the call defers into a pending value
    /// carrying the operands; otherwise the primitive computes, and leftover
    /// supplied arguments are an arity error.
    pub(crate) fn eval(self,
                       name: &str,
                       definition: &Definition,
                       args: &[Value],
                       namespace: &Namespace)
                       -> EvalResult<Value> {
        let taken = definition.parameters.len();
        let operands = &args[..taken];
        let remaining = &args[taken..];

        if self.defers_on(operands) {
            return Ok(deferred(name, definition, operands));
        }

        let result = match self {
            Self::Add | Self::Sub | Self::Mult | Self::Div => {
                arithmetic(self, name, &operands[0], &operands[1])?
            },
            Self::Map => map(name, &operands[0], &operands[1], namespace)?,
            Self::Range => range(name, operands)?,
        };

        if remaining.is_empty() {
            Ok(result)
        } else {
            Err(RuntimeError::TooManyArguments { name: name.to_string() })
        }
    }

    /// Tests whether the operands force a deferred result. `map` only cares
    /// about its array operand — a partially-applied `f` is the whole point.
    fn defers_on(self, operands: &[Value]) -> bool {
        match self {
            Self::Map => operands[1].is_function(),
            _ => operands.iter().any(Value::is_function),
        }
    }
}

/// Applies an arithmetic primitive to two operands.
///
/// Arrays pair elementwise when both sides are arrays of equal length and
/// broadcast when one side is a scalar. Two integers stay integral (checked,
/// overflow is an error) except under `div`, which always performs true
/// division; mixed numeric operands promote to real; `add` concatenates two
/// texts. Anything else is a type error.
fn arithmetic(kind: Builtin, name: &str, a: &Value, b: &Value) -> EvalResult<Value> {
    use Value::{Array, Integer, Text};

    match (a, b) {
        (Array(left), Array(right)) => {
            if left.len() != right.len() {
                return Err(RuntimeError::TypeError { details: format!("cannot pair arrays of lengths {} and {}",
                                                                      left.len(),
                                                                      right.len()) });
            }

            let mut elements = Vec::with_capacity(left.len());
            for (l, r) in left.iter().zip(right.iter()) {
                elements.push(arithmetic(kind, name, l, r)?);
            }
            Ok(Value::from(elements))
        },
        (Array(left), _) => {
            let mut elements = Vec::with_capacity(left.len());
            for l in left.iter() {
                elements.push(arithmetic(kind, name, l, b)?);
            }
            Ok(Value::from(elements))
        },
        (_, Array(right)) => {
            let mut elements = Vec::with_capacity(right.len());
            for r in right.iter() {
                elements.push(arithmetic(kind, name, a, r)?);
            }
            Ok(Value::from(elements))
        },
        (Integer(l), Integer(r)) if kind != Builtin::Div => {
            let result = match kind {
                Builtin::Add => l.checked_add(*r),
                Builtin::Sub => l.checked_sub(*r),
                _ => l.checked_mul(*r),
            };

            result.map(Value::from)
                  .ok_or_else(|| RuntimeError::Overflow { name: name.to_string() })
        },
        (Text(l), Text(r)) => {
            if kind == Builtin::Add {
                Ok(Value::Text(format!("{l}{r}")))
            } else {
                Err(RuntimeError::TypeError { details: format!("unsupported operands for '{name}': {a} and {b}") })
            }
        },
        _ => {
            let l = a.as_real()?;
            let r = b.as_real()?;

            Ok(Value::from(match kind {
                               Builtin::Add => l + r,
                               Builtin::Sub => l - r,
                               Builtin::Mult => l * r,
                               _ => l / r,
                           }))
        },
    }
}

/// Applies `f` to every element of the array, one `extend` per element.
/// Elements the function cannot yet consume simply stay pending inside the
/// result.
fn map(name: &str, f: &Value, values: &Value, namespace: &Namespace) -> EvalResult<Value> {
    let Value::Function(function) = f else {
        return Err(RuntimeError::InvalidArgument { name: name.to_string() });
    };
    let Value::Array(elements) = values else {
        return Err(RuntimeError::InvalidArgument { name: name.to_string() });
    };

    let mut mapped = Vec::with_capacity(elements.len());
    for element in elements.iter() {
        mapped.push(function.extend(vec![element.clone()], namespace)?);
    }

    Ok(Value::from(mapped))
}

/// Generates the half-open range `[start, stop)` advancing by `step`.
///
/// All-integer operands yield an integer array; otherwise the walk happens in
/// reals. A `step` of zero never terminates and is rejected; a direction that
/// can never reach `stop` yields an empty array.
fn range(name: &str, operands: &[Value]) -> EvalResult<Value> {
    use Value::Integer;

    if let (Integer(start), Integer(stop), Integer(step)) =
        (&operands[0], &operands[1], &operands[2])
    {
        if *step == 0 {
            return Err(RuntimeError::InvalidArgument { name: name.to_string() });
        }

        let mut elements = Vec::new();
        let mut current = *start;
        while (*step > 0 && current < *stop) || (*step < 0 && current > *stop) {
            elements.push(Value::from(current));
            current = match current.checked_add(*step) {
                Some(next) => next,
                None => break,
            };
        }

        return Ok(Value::from(elements));
    }

    let start = operands[0].as_real()?;
    let stop = operands[1].as_real()?;
    let step = operands[2].as_real()?;

    if step == 0.0 {
        return Err(RuntimeError::InvalidArgument { name: name.to_string() });
    }

    let mut elements = Vec::new();
    let mut current = start;
    while (step > 0.0 && current < stop) || (step < 0.0 && current > stop) {
        elements.push(Value::from(current));
        current += step;
    }

    Ok(Value::from(elements))
}
