use crate::symbolic::symbolic_engine::Expr;

// Rebuilds a tagged tree from a reverse polish string. This runs once per
// successful search, so clarity wins over speed here. The variable set is
// wider than the generator's single 'x'; the extra symbols are accepted for
// handwritten input.

pub fn parse_rpn_func(input: &str) -> Result<Expr, String> {
    let mut stack: Vec<Expr> = Vec::new();

    for symbol in input.chars() {
        match symbol {
            '0' => stack.push(Expr::Int(0)),
            '1' => stack.push(Expr::Int(1)),
            'x' | 'y' | 'z' | 'a' | 'b' | 'c' => stack.push(Expr::Var(symbol.to_string())),

            'S' | 'C' | 'T' | 'R' | 'L' => {
                let arg = pop_operand(&mut stack, symbol)?;
                let node = match symbol {
                    'S' => Expr::sin(Box::new(arg)),
                    'C' => Expr::cos(Box::new(arg)),
                    'T' => Expr::tan(Box::new(arg)),
                    'R' => Expr::sqrt(Box::new(arg)),
                    _ => Expr::log(Box::new(arg)),
                };
                stack.push(node);
            }

            '+' | '-' | '*' | '/' => {
                let rhs = pop_operand(&mut stack, symbol)?;
                let lhs = pop_operand(&mut stack, symbol)?;
                let node = match symbol {
                    '+' => Expr::Add(Box::new(lhs), Box::new(rhs)),
                    '-' => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                    '*' => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                };
                stack.push(node);
            }

            // the shorthand tokens desugar into binary nodes
            '\\' => {
                let arg = pop_operand(&mut stack, symbol)?;
                stack.push(Expr::Div(Box::new(Expr::Int(1)), Box::new(arg)));
            }
            'H' => {
                let arg = pop_operand(&mut stack, symbol)?;
                stack.push(Expr::Div(Box::new(arg), Box::new(Expr::Int(2))));
            }
            '<' => {
                let arg = pop_operand(&mut stack, symbol)?;
                stack.push(Expr::Sub(Box::new(arg), Box::new(Expr::Int(1))));
            }
            '>' => {
                let arg = pop_operand(&mut stack, symbol)?;
                stack.push(Expr::Add(Box::new(arg), Box::new(Expr::Int(1))));
            }
            '2' => {
                let arg = pop_operand(&mut stack, symbol)?;
                stack.push(Expr::Pow(Box::new(arg), Box::new(Expr::Int(2))));
            }
            '~' => {
                let arg = pop_operand(&mut stack, symbol)?;
                stack.push(Expr::Neg(Box::new(arg)));
            }

            _ => {
                return Err(format!(
                    "unknown token '{}' in reverse polish expression",
                    symbol
                ));
            }
        }
    }

    if stack.len() != 1 {
        return Err(format!(
            "expression is not stack-balanced: {} values left on the stack",
            stack.len()
        ));
    }
    Ok(stack.pop().unwrap())
}

fn pop_operand(stack: &mut Vec<Expr>, symbol: char) -> Result<Expr, String> {
    stack
        .pop()
        .ok_or_else(|| format!("operand stack underflow at token '{}'", symbol))
}

impl Expr {
    /// Parses a reverse polish string produced by the composer. Such strings
    /// are stack-balanced by construction, so a failure here is a bug.
    pub fn from_postfix(input: &str) -> Expr {
        parse_rpn_func(input)
            .unwrap_or_else(|msg| panic!("failed to parse reverse polish {:?}: {}", input, msg))
    }
}

/// Converts a reverse polish expression into human-readable infix notation,
/// simplifying the tree on the way.
///
/// ```
/// use RustedIntegrator::symbolic::parse_rpn::infix_from_postfix;
/// assert_eq!(infix_from_postfix("xx+"), "x + x");
/// assert_eq!(infix_from_postfix("11+1+"), "3");
/// ```
pub fn infix_from_postfix(input: &str) -> String {
    Expr::from_postfix(input).simplify().to_string()
}
