//! Tagged formula expressions rendered to Excel A1 syntax.
//!
//! Forecast cells are built as small expression trees (references,
//! literals, arithmetic, function calls) and rendered to formula text at
//! write time. Cell addresses are always derived from layout row numbers,
//! never concatenated by hand, which removes the address-typo class of
//! bugs entirely.

use crate::layout::column_letter;
use crate::types::Statement;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A single cell address, optionally qualified with a sheet name.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRef {
    pub sheet: Option<Statement>,
    /// 0-indexed column.
    pub col: u16,
    /// 1-indexed Excel row.
    pub row: u32,
    /// Render with `$` anchors (`$B$5`).
    pub absolute: bool,
}

impl CellRef {
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(sheet) = self.sheet {
            let name = sheet.sheet_name();
            if name.contains(' ') {
                out.push('\'');
                out.push_str(name);
                out.push('\'');
            } else {
                out.push_str(name);
            }
            out.push('!');
        }
        if self.absolute {
            out.push('$');
        }
        out.push_str(&column_letter(self.col));
        if self.absolute {
            out.push('$');
        }
        out.push_str(&self.row.to_string());
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Text(String),
    Ref(CellRef),
    /// Same-sheet range, e.g. `E15:G15` inside AVERAGE.
    Range(CellRef, CellRef),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    Call(&'static str, Vec<Expr>),
}

/// Reference to a cell on the same sheet.
pub fn cell(col: u16, row: u32) -> Expr {
    Expr::Ref(CellRef {
        sheet: None,
        col,
        row,
        absolute: false,
    })
}

/// Reference to a cell on another sheet.
pub fn sheet_cell(sheet: Statement, col: u16, row: u32) -> Expr {
    Expr::Ref(CellRef {
        sheet: Some(sheet),
        col,
        row,
        absolute: false,
    })
}

/// Anchored same-sheet reference (`$B$5`).
pub fn abs_cell(col: u16, row: u32) -> Expr {
    Expr::Ref(CellRef {
        sheet: None,
        col,
        row,
        absolute: true,
    })
}

pub fn num(value: f64) -> Expr {
    Expr::Num(value)
}

pub fn text(value: &str) -> Expr {
    Expr::Text(value.to_string())
}

/// Same-sheet range spanning `cols` on a single row.
pub fn row_range(col_start: u16, col_end: u16, row: u32) -> Expr {
    Expr::Range(
        CellRef {
            sheet: None,
            col: col_start,
            row,
            absolute: false,
        },
        CellRef {
            sheet: None,
            col: col_end,
            row,
            absolute: false,
        },
    )
}

pub fn call(name: &'static str, args: Vec<Expr>) -> Expr {
    Expr::Call(name, args)
}

pub fn iff(cond: Expr, if_true: Expr, if_false: Expr) -> Expr {
    Expr::Call("IF", vec![cond, if_true, if_false])
}

pub fn eq(left: Expr, right: Expr) -> Expr {
    Expr::Eq(Box::new(left), Box::new(right))
}

/// Fold a non-empty list of terms into nested additions.
pub fn sum(terms: Vec<Expr>) -> Expr {
    let mut iter = terms.into_iter();
    let first = iter.next().unwrap_or(Expr::Num(0.0));
    iter.fold(first, |acc, term| acc + term)
}

impl Expr {
    /// Operator precedence for parenthesization (higher binds tighter).
    fn precedence(&self) -> u8 {
        match self {
            Expr::Eq(..) => 1,
            Expr::Add(..) | Expr::Sub(..) => 2,
            Expr::Mul(..) | Expr::Div(..) => 3,
            Expr::Neg(..) => 4,
            _ => 5,
        }
    }

    fn render_operand(&self, parent: u8, right_assoc: bool, out: &mut String) {
        let child = self.precedence();
        let needs_parens = child < parent || (child == parent && right_assoc);
        if needs_parens {
            out.push('(');
        }
        self.render_into(out);
        if needs_parens {
            out.push(')');
        }
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Expr::Num(value) => {
                out.push_str(&format_number(*value));
            }
            Expr::Text(value) => {
                out.push('"');
                out.push_str(value);
                out.push('"');
            }
            Expr::Ref(cell) => out.push_str(&cell.render()),
            Expr::Range(from, to) => {
                out.push_str(&from.render());
                out.push(':');
                out.push_str(&to.render());
            }
            Expr::Neg(inner) => {
                out.push('-');
                // Unary minus distributes over `*` and `/`, so only
                // operands looser than the Mul/Div level need parens.
                inner.render_operand(3, false, out);
            }
            Expr::Add(left, right) => {
                left.render_operand(2, false, out);
                out.push('+');
                right.render_operand(2, false, out);
            }
            Expr::Sub(left, right) => {
                left.render_operand(2, false, out);
                out.push('-');
                right.render_operand(2, true, out);
            }
            Expr::Mul(left, right) => {
                left.render_operand(3, false, out);
                out.push('*');
                right.render_operand(3, false, out);
            }
            Expr::Div(left, right) => {
                left.render_operand(3, false, out);
                out.push('/');
                right.render_operand(3, true, out);
            }
            Expr::Eq(left, right) => {
                left.render_operand(1, false, out);
                out.push('=');
                right.render_operand(1, true, out);
            }
            Expr::Call(name, args) => {
                out.push_str(name);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    arg.render_into(out);
                }
                out.push(')');
            }
        }
    }

    /// Render the expression body (no leading `=`).
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Collect every cell reference in the expression, in render order.
    pub fn references(&self) -> Vec<CellRef> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references(&self, refs: &mut Vec<CellRef>) {
        match self {
            Expr::Ref(cell) => refs.push(cell.clone()),
            Expr::Range(from, to) => {
                refs.push(from.clone());
                refs.push(to.clone());
            }
            Expr::Neg(inner) => inner.collect_references(refs),
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Eq(l, r) => {
                l.collect_references(refs);
                r.collect_references(refs);
            }
            Expr::Call(_, args) => {
                for arg in args {
                    arg.collect_references(refs);
                }
            }
            Expr::Num(_) | Expr::Text(_) => {}
        }
    }
}

/// Format a literal without trailing zeros (`0.055`, `190`).
fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        let formatted = format!("{:.6}", n);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;
    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}
