use crate::symbolic::symbolic_engine::Expr;

// Bottom-up rewriting of the parsed tree. The rule set is deliberately
// small: constant folding, double negation and the multiplicative identity.
// No zero identities, no associativity, no factoring.

impl Expr {
    /// Runs simplification passes until one of them changes nothing, so the
    /// result is a fixpoint of the rewrite rules.
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        loop {
            let (next, modified) = current.simplify_pass();
            current = next;
            if !modified {
                return current;
            }
        }
    }

    /// One post-order pass: children first, then the rewrite rules on the
    /// rebuilt node.
    fn simplify_pass(&self) -> (Expr, bool) {
        let (node, children_modified) = match self {
            Expr::Int(_) | Expr::Var(_) => (self.clone(), false),
            Expr::Add(lhs, rhs) => {
                let (lhs, lhs_modified) = lhs.simplify_pass();
                let (rhs, rhs_modified) = rhs.simplify_pass();
                (
                    Expr::Add(Box::new(lhs), Box::new(rhs)),
                    lhs_modified || rhs_modified,
                )
            }
            Expr::Sub(lhs, rhs) => {
                let (lhs, lhs_modified) = lhs.simplify_pass();
                let (rhs, rhs_modified) = rhs.simplify_pass();
                (
                    Expr::Sub(Box::new(lhs), Box::new(rhs)),
                    lhs_modified || rhs_modified,
                )
            }
            Expr::Mul(lhs, rhs) => {
                let (lhs, lhs_modified) = lhs.simplify_pass();
                let (rhs, rhs_modified) = rhs.simplify_pass();
                (
                    Expr::Mul(Box::new(lhs), Box::new(rhs)),
                    lhs_modified || rhs_modified,
                )
            }
            Expr::Div(lhs, rhs) => {
                let (lhs, lhs_modified) = lhs.simplify_pass();
                let (rhs, rhs_modified) = rhs.simplify_pass();
                (
                    Expr::Div(Box::new(lhs), Box::new(rhs)),
                    lhs_modified || rhs_modified,
                )
            }
            Expr::Pow(base, exp) => {
                let (base, base_modified) = base.simplify_pass();
                let (exp, exp_modified) = exp.simplify_pass();
                (
                    Expr::Pow(Box::new(base), Box::new(exp)),
                    base_modified || exp_modified,
                )
            }
            Expr::sin(arg) => {
                let (arg, modified) = arg.simplify_pass();
                (Expr::sin(Box::new(arg)), modified)
            }
            Expr::cos(arg) => {
                let (arg, modified) = arg.simplify_pass();
                (Expr::cos(Box::new(arg)), modified)
            }
            Expr::tan(arg) => {
                let (arg, modified) = arg.simplify_pass();
                (Expr::tan(Box::new(arg)), modified)
            }
            Expr::sqrt(arg) => {
                let (arg, modified) = arg.simplify_pass();
                (Expr::sqrt(Box::new(arg)), modified)
            }
            Expr::log(arg) => {
                let (arg, modified) = arg.simplify_pass();
                (Expr::log(Box::new(arg)), modified)
            }
            Expr::Neg(rhs) => {
                let (rhs, modified) = rhs.simplify_pass();
                (Expr::Neg(Box::new(rhs)), modified)
            }
        };

        match node.rewrite() {
            Some(rewritten) => (rewritten, true),
            None => (node, children_modified),
        }
    }

    /// Applies the rewrite rules to a single node; None means the node is
    /// already in normal form.
    fn rewrite(&self) -> Option<Expr> {
        // Minus Int = another Int
        // Minus Minus Something = Something
        if let Expr::Neg(rhs) = self {
            if let Expr::Int(value) = rhs.as_ref() {
                return Some(Expr::Int(-value));
            }
            if let Expr::Neg(inner) = rhs.as_ref() {
                return Some(inner.as_ref().clone());
            }
            return None;
        }

        // Evaluate operators acting on integers (only if the result is an
        // integer: division folds only when divisible, exponentiation only
        // when the checked integer power is representable)
        match self {
            Expr::Add(lhs, rhs) => {
                if let (Expr::Int(a), Expr::Int(b)) = (lhs.as_ref(), rhs.as_ref()) {
                    return Some(Expr::Int(a + b));
                }
            }
            Expr::Sub(lhs, rhs) => {
                if let (Expr::Int(a), Expr::Int(b)) = (lhs.as_ref(), rhs.as_ref()) {
                    return Some(Expr::Int(a - b));
                }
            }
            Expr::Mul(lhs, rhs) => {
                if let (Expr::Int(a), Expr::Int(b)) = (lhs.as_ref(), rhs.as_ref()) {
                    return Some(Expr::Int(a * b));
                }
            }
            Expr::Div(lhs, rhs) => {
                if let (Expr::Int(a), Expr::Int(b)) = (lhs.as_ref(), rhs.as_ref()) {
                    if *b != 0 && a % b == 0 {
                        return Some(Expr::Int(a / b));
                    }
                    return None;
                }
            }
            Expr::Pow(base, exp) => {
                if let (Expr::Int(a), Expr::Int(b)) = (base.as_ref(), exp.as_ref()) {
                    if let Ok(exp) = u32::try_from(*b) {
                        if let Some(value) = a.checked_pow(exp) {
                            return Some(Expr::Int(value));
                        }
                    }
                    return None;
                }
            }
            _ => {}
        }

        // The integer 1 is the multiplication identity.
        if let Expr::Mul(lhs, rhs) = self {
            if **lhs == Expr::Int(1) {
                return Some(rhs.as_ref().clone());
            }
            if **rhs == Expr::Int(1) {
                return Some(lhs.as_ref().clone());
            }
        }

        None
    }
}
