use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions never change the environment by themselves; only statements
/// bind variables or functions. Every child is owned exclusively, so the tree
/// has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Int(i64),
    /// A boolean literal, `true` or `false`.
    Bool(bool),
    /// A string literal, already unescaped.
    Str(String),
    /// The `null` literal.
    Null,
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (addition, comparison, etc.).
    ///
    /// Unary `-e` and `+e` are represented as `0 - e` and `0 + e`.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `fib(n - 1)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments, in call order.
        arguments: Vec<Self>,
    },
}

/// Drops the tree with an explicit work list so that a deeply nested
/// expression does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

/// Moves the children of `expr` that have children of their own onto
/// `pending`. Leaf children are left in place and dropped with their parent.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    let has_children = |expr: &Expr| match expr {
        Expr::Binary { .. } => true,
        Expr::Call { arguments, .. } => !arguments.is_empty(),
        _ => false,
    };
    match expr {
        Expr::Binary { left, right, .. } => {
            for child in [left, right] {
                if has_children(&**child) {
                    pending.push(std::mem::replace(child.as_mut(), Expr::Null));
                }
            }
        },
        Expr::Call { arguments, .. } => {
            pending.extend(arguments.drain(..).filter(has_children));
        },
        _ => {},
    }
}

impl Expr {
    /// Builds a binary node, boxing both operands.
    ///
    /// ## Example
    /// ```
    /// use sprig::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Int(1), Expr::Int(2));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a function call.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     arguments }
    }
}

/// A braced list of statements, the body of `if`, `while` and `def`.
pub type Block = Vec<Statement>;

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements evaluated when the function is called.
    pub body:   Block,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression(Expr),
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// Conditional statement with an optional else block.
    If {
        /// The condition expression.
        condition:  Expr,
        /// Statements run when the condition is truthy.
        then_block: Block,
        /// Statements run when the condition is falsy.
        else_block: Option<Block>,
    },
    /// Loop running its body while the condition is truthy.
    While {
        /// The condition expression, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
    },
    /// A user-defined function declaration.
    FuncDef(FunctionDef),
}

/// The root of a parsed program: the ordered top-level statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    /// Top-level statements and function definitions.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Integer division truncating toward zero (`/`)
    Division,
    /// Equal to (`==`)
    IsEqual,
    /// Not equal to (`!=`)
    IsNotEqual,
    /// Less than (`<`)
    IsLesser,
    /// Less than or equal (`<=`)
    IsLesserOrEqual,
    /// Greater than (`>`)
    IsGreater,
    /// Greater than or equal (`>=`)
    IsGreaterOrEqual,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Division, IsEqual, IsGreater, IsGreaterOrEqual, IsLesser, IsLesserOrEqual,
            IsNotEqual, Multiply, Subtract,
        };
        let operator = match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Division => "/",
            IsEqual => "==",
            IsNotEqual => "!=",
            IsLesser => "<",
            IsLesserOrEqual => "<=",
            IsGreater => ">",
            IsGreaterOrEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `s` as a double-quoted literal the lexer reads back unchanged.
fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &[Statement]) -> fmt::Result {
    f.write_str("{")?;
    for statement in block {
        write!(f, " {statement}")?;
    }
    f.write_str(" }")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i64::MIN) => write!(f, "((0 - {}) - 1)", i64::MAX),
            Self::Int(n) if *n < 0 => write!(f, "(0 - {})", n.unsigned_abs()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write_string_literal(f, s),
            Self::Null => f.write_str("null"),
            Self::Variable { name } => f.write_str(name),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{expr};"),
            Self::Assignment { name, value } => write!(f, "{name} = {value};"),
            Self::If { condition,
                       then_block,
                       else_block, } => {
                write!(f, "if ({condition}) ")?;
                write_block(f, then_block)?;
                if let Some(else_block) = else_block {
                    f.write_str(" else ")?;
                    write_block(f, else_block)?;
                }
                Ok(())
            },
            Self::While { condition, body } => {
                write!(f, "while ({condition}) ")?;
                write_block(f, body)
            },
            Self::FuncDef(def) => {
                write!(f, "def {}(", def.name)?;
                write_comma_separated(f, &def.params)?;
                f.write_str(") ")?;
                write_block(f, &def.body)
            },
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
