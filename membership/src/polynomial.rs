use rug::Integer;

/// Integer polynomial stored by ascending power: `coefficients[k]` multiplies `x^k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<Integer>,
}

impl Polynomial {
    /// Returns the monic polynomial `(x - roots[0]) * ... * (x - roots[n-1])`.
    ///
    /// Roots are consumed in slice order. Repeated roots raise the multiplicity
    /// of that root. An empty slice gives the constant polynomial 1.
    pub fn from_roots(roots: &[Integer]) -> Self {
        let mut poly: Self = Self {
            coefficients: vec![Integer::from(1)],
        };
        roots.iter().for_each(|s| poly.mul_linear_assign(s));
        poly
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients `[a0, a1, ..., an]`.
    pub fn coefficients(&self) -> &[Integer] {
        &self.coefficients
    }

    /// Plaintext evaluation by Horner's rule.
    pub fn evaluate(&self, x: &Integer) -> Integer {
        self.coefficients
            .iter()
            .rev()
            .fold(Integer::new(), |acc, a| acc * x + a)
    }

    /// Multiplies the receiver by `(x - s)`: `new[k] = old[k-1] - s * old[k]`.
    fn mul_linear_assign(&mut self, s: &Integer) {
        let old: &[Integer] = &self.coefficients;
        let mut new: Vec<Integer> = vec![Integer::new(); old.len() + 1];
        (0..new.len()).for_each(|k| {
            if k > 0 {
                new[k] += &old[k - 1];
            }
            if k < old.len() {
                new[k] -= Integer::from(s * &old[k]);
            }
        });
        self.coefficients = new;
    }
}
