use crate::error::Reason;
use poly_core::Poly;

/// The operand stack of the calculator.
#[derive(Debug, Clone, Default)]
pub struct PolyStack {
    polys: Vec<Poly>,
}

impl PolyStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of polynomials on the stack.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Checks that the stack holds at least `count` polynomials.
    pub fn require(&self, count: usize) -> Result<(), Reason> {
        if self.polys.len() < count {
            Err(Reason::StackUnderflow)
        } else {
            Ok(())
        }
    }

    /// Pushes a polynomial on top of the stack.
    pub fn push(&mut self, poly: Poly) {
        self.polys.push(poly);
    }

    /// Removes the polynomial on top of the stack and returns it.
    pub fn pop(&mut self) -> Result<Poly, Reason> {
        self.polys.pop().ok_or(Reason::StackUnderflow)
    }

    /// Returns the polynomial on top of the stack.
    pub fn top(&self) -> Result<&Poly, Reason> {
        self.polys.last().ok_or(Reason::StackUnderflow)
    }

    /// Returns the two polynomials on top of the stack, topmost first.
    pub fn top_two(&self) -> Result<(&Poly, &Poly), Reason> {
        match self.polys.as_slice() {
            [.., second, first] => Ok((first, second)),
            _ => Err(Reason::StackUnderflow),
        }
    }

    /// Removes the two polynomials on top of the stack, returning them topmost first. The stack
    /// is left unchanged if it holds fewer than two polynomials.
    pub fn pop_two(&mut self) -> Result<(Poly, Poly), Reason> {
        self.require(2)?;
        let first = self.pop()?;
        let second = self.pop()?;
        Ok((first, second))
    }

    /// Removes the `count` polynomials on top of the stack, returning them in the order they
    /// were pushed. The stack is left unchanged if it holds fewer than `count` polynomials.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<Poly>, Reason> {
        self.require(count)?;
        Ok(self.polys.split_off(self.polys.len() - count))
    }
}
