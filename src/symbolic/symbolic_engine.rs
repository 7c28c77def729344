#![allow(non_camel_case_types)]
use std::fmt;

// Tagged tree for rendering a winning postfix expression. Every node owns
// its children exclusively; the parser moves nodes in and out of its stack.

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Int(i64),
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    sin(Box<Expr>),
    cos(Box<Expr>),
    tan(Box<Expr>),
    sqrt(Box<Expr>),
    log(Box<Expr>),
    Neg(Box<Expr>),
}

// Implement Display for pretty printing

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render_infix())
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Neg(self.boxed())
    }
}

impl Expr {
    // just shortcut for box
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Precedence level of a binary node; None for everything else.
    /// Addition and subtraction bind weakest, then multiplication and
    /// division, then exponentiation.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => Some(50),
            Expr::Mul(_, _) | Expr::Div(_, _) => Some(60),
            Expr::Pow(_, _) => Some(70),
            _ => None,
        }
    }

    pub fn op_symbol(&self) -> Option<char> {
        match self {
            Expr::Add(_, _) => Some('+'),
            Expr::Sub(_, _) => Some('-'),
            Expr::Mul(_, _) => Some('*'),
            Expr::Div(_, _) => Some('/'),
            Expr::Pow(_, _) => Some('^'),
            _ => None,
        }
    }

    /// Renders the tree in infix notation with the minimal parentheses the
    /// precedence table requires. A left child is wrapped only when it is a
    /// weaker-binding binary node; a right child additionally when it
    /// repeats a non-associative operator (subtraction or division).
    pub fn render_infix(&self) -> String {
        match self {
            Expr::Int(value) => value.to_string(),
            Expr::Var(name) => name.clone(),
            Expr::sin(arg) => format!("sin({})", arg.render_infix()),
            Expr::cos(arg) => format!("cos({})", arg.render_infix()),
            Expr::tan(arg) => format!("tan({})", arg.render_infix()),
            Expr::sqrt(arg) => format!("sqrt({})", arg.render_infix()),
            Expr::log(arg) => format!("log({})", arg.render_infix()),
            Expr::Neg(rhs) => {
                if rhs.precedence().is_some() {
                    format!("-({})", rhs.render_infix())
                } else {
                    format!("-{}", rhs.render_infix())
                }
            }
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => self.render_binop(lhs, rhs),
        }
    }

    fn render_binop(&self, lhs: &Expr, rhs: &Expr) -> String {
        let symbol = self.op_symbol().unwrap();
        let precedence = self.precedence().unwrap();

        let mut lhs_str = lhs.render_infix();
        if let Some(lhs_precedence) = lhs.precedence() {
            if lhs_precedence < precedence {
                lhs_str = format!("({})", lhs_str);
            }
        }

        let mut rhs_str = rhs.render_infix();
        if let Some(rhs_precedence) = rhs.precedence() {
            // division and subtraction aren't associative
            let non_associative =
                (symbol == '/' || symbol == '-') && rhs.op_symbol() == Some(symbol);
            if rhs_precedence < precedence || non_associative {
                rhs_str = format!("({})", rhs_str);
            }
        }

        format!("{} {} {}", lhs_str, symbol, rhs_str)
    }

    /// Converts a single-variable tree into an executable Rust closure.
    /// The recursive structure mirrors the expression tree; any variable
    /// node stands for the single argument.
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Int(value) => {
                let value = *value as f64;
                Box::new(move |_| value)
            }
            Expr::Var(_) => Box::new(|x| x),
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::sin(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).sin())
            }
            Expr::cos(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).cos())
            }
            Expr::tan(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).tan())
            }
            Expr::sqrt(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).sqrt())
            }
            Expr::log(arg) => {
                let arg_fn = arg.lambdify1D();
                Box::new(move |x| arg_fn(x).ln())
            }
            Expr::Neg(rhs) => {
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| -rhs_fn(x))
            }
        }
    }
}
