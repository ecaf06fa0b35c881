//! Path expressions: a navigation chain written as a Rust expression
//!
//! ```
//! use voidsafe::{wrap, Path, Value};
//!
//! let profile = Value::map([("tags", Value::from(vec!["admin", "ops"]))]);
//! let data = Value::map([("profile", profile)]);
//! let path: Path = r#"profile["tags"][-1].upper()"#.parse()?;
//!
//! assert_eq!(wrap(&data).follow(&path).value(), Value::from("OPS"));
//! # Ok::<(), voidsafe::VoidSafeError>(())
//! ```
//!
//! A leading identifier is a member of the root; `_` stands for the root
//! itself, so `_[0]` starts with an element access. Keys, indices and call
//! arguments must be literals.

use std::fmt;
use std::str::FromStr;

use syn::ext::IdentExt;

use crate::context::ParseContext;
use crate::error::{Result, VoidSafeError};
use crate::value::Value;

/// One navigation step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Member access by name
    Member(String),
    /// Element access by key or index
    Element(Value),
    /// Call with arguments
    Call(Vec<Value>),
}

/// A parsed sequence of navigation steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Create an empty path (follows to the root itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member access (builder pattern)
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::Member(name.into()));
        self
    }

    /// Append an element access (builder pattern)
    pub fn element(mut self, key: impl Into<Value>) -> Self {
        self.steps.push(Step::Element(key.into()));
        self
    }

    /// Append a call (builder pattern)
    pub fn call(mut self, args: Vec<Value>) -> Self {
        self.steps.push(Step::Call(args));
        self
    }

    /// The steps in application order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Parse with the default [`ParseContext`].
    ///
    /// # Errors
    ///
    /// See [`Path::parse_with`].
    pub fn parse(src: &str) -> Result<Self> {
        Self::parse_with(src, &ParseContext::default())
    }

    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// Returns `Syntax` if `src` is not a Rust expression.
    /// Returns `InvalidPath` if it uses anything other than member, index,
    /// call and literal syntax.
    /// Returns `PathTooDeep` if it nests deeper than `ctx.max_depth`.
    pub fn parse_with(src: &str, ctx: &ParseContext) -> Result<Self> {
        let expr: syn::Expr = syn::parse_str(src)?;
        let mut steps = Vec::new();
        lower(&expr, &mut steps, ctx, 0)?;
        Ok(Self { steps })
    }
}

impl FromStr for Path {
    type Err = VoidSafeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_")?;
        for step in &self.steps {
            match step {
                Step::Member(name) => write!(f, ".{}", name)?,
                Step::Element(key) => write!(f, "[{:?}]", key)?,
                Step::Call(args) => {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{:?}", arg)?;
                    }
                    write!(f, ")")?;
                }
            }
        }
        Ok(())
    }
}

fn check_depth(ctx: &ParseContext, depth: usize) -> Result<()> {
    if depth > ctx.max_depth {
        return Err(VoidSafeError::PathTooDeep { max: ctx.max_depth });
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> VoidSafeError {
    VoidSafeError::InvalidPath(message.into())
}

/// Lower a navigation expression into steps, innermost first.
fn lower(expr: &syn::Expr, steps: &mut Vec<Step>, ctx: &ParseContext, depth: usize) -> Result<()> {
    check_depth(ctx, depth)?;

    match expr {
        // `_` is the root itself
        syn::Expr::Infer(_) => Ok(()),

        syn::Expr::Path(path) => {
            let ident = path
                .path
                .get_ident()
                .filter(|_| path.qself.is_none())
                .ok_or_else(|| invalid("qualified paths are not navigation steps"))?;
            steps.push(Step::Member(ident.unraw().to_string()));
            Ok(())
        }

        syn::Expr::Field(field) => {
            lower(&field.base, steps, ctx, depth + 1)?;
            steps.push(match &field.member {
                syn::Member::Named(ident) => Step::Member(ident.unraw().to_string()),
                syn::Member::Unnamed(index) => Step::Element(Value::Int(i64::from(index.index))),
            });
            Ok(())
        }

        syn::Expr::Index(index) => {
            lower(&index.expr, steps, ctx, depth + 1)?;
            steps.push(Step::Element(literal(&index.index, ctx, depth + 1)?));
            Ok(())
        }

        syn::Expr::MethodCall(call) => {
            if call.turbofish.is_some() {
                return Err(invalid("turbofish is not supported"));
            }
            lower(&call.receiver, steps, ctx, depth + 1)?;
            steps.push(Step::Member(call.method.unraw().to_string()));
            steps.push(Step::Call(arguments(&call.args, ctx, depth + 1)?));
            Ok(())
        }

        syn::Expr::Call(call) => {
            lower(&call.func, steps, ctx, depth + 1)?;
            steps.push(Step::Call(arguments(&call.args, ctx, depth + 1)?));
            Ok(())
        }

        syn::Expr::Paren(paren) => lower(&paren.expr, steps, ctx, depth + 1),
        syn::Expr::Group(group) => lower(&group.expr, steps, ctx, depth + 1),

        _ => Err(invalid("expected member, index or call syntax")),
    }
}

fn arguments(
    args: &syn::punctuated::Punctuated<syn::Expr, syn::Token![,]>,
    ctx: &ParseContext,
    depth: usize,
) -> Result<Vec<Value>> {
    args.iter().map(|arg| literal(arg, ctx, depth)).collect()
}

/// Evaluate a literal key or argument.
fn literal(expr: &syn::Expr, ctx: &ParseContext, depth: usize) -> Result<Value> {
    check_depth(ctx, depth)?;

    match expr {
        syn::Expr::Lit(lit) => match &lit.lit {
            syn::Lit::Str(s) => Ok(Value::string(s.value())),
            syn::Lit::ByteStr(b) => Ok(Value::bytes(b.value())),
            syn::Lit::Byte(b) => Ok(Value::Int(i64::from(b.value()))),
            syn::Lit::Char(c) => Ok(Value::Char(c.value())),
            syn::Lit::Int(n) => Ok(Value::Int(n.base10_parse::<i64>()?)),
            syn::Lit::Float(n) => Ok(Value::Float(n.base10_parse::<f64>()?)),
            syn::Lit::Bool(b) => Ok(Value::Bool(b.value)),
            _ => Err(invalid("unsupported literal")),
        },

        syn::Expr::Unary(unary) if matches!(unary.op, syn::UnOp::Neg(_)) => {
            match literal(&unary.expr, ctx, depth + 1)? {
                Value::Int(n) => n
                    .checked_neg()
                    .map(Value::Int)
                    .ok_or_else(|| invalid("integer literal out of range")),
                Value::Float(n) => Ok(Value::Float(-n)),
                _ => Err(invalid("only numbers can be negated")),
            }
        }

        // `None` is the only identifier allowed as a literal
        syn::Expr::Path(path) if path.qself.is_none() && path.path.is_ident("None") => {
            Ok(Value::Null)
        }

        syn::Expr::Paren(paren) => literal(&paren.expr, ctx, depth + 1),
        syn::Expr::Group(group) => literal(&group.expr, ctx, depth + 1),

        _ => Err(invalid("keys and arguments must be literals")),
    }
}
