use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is a plain `f64` accumulator with no rounding applied while
/// summing. The [`Display`] implementation formats it as dollars to 2 decimal
/// places, with commas separating the thousands. A negative amount keeps its
/// sign after the dollar symbol (`$-12.00`).
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Usd(f64);

impl Usd {
    #[must_use]
    pub fn new(dollars: f64) -> Self {
        Self(dollars)
    }

    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "${}", self.0);
        }
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        write!(f, "${sign}{}.{cents}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Usd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
