use std::fmt;

/// Exact scaled decimal as carried by the `'D'` field type.
///
/// The wire holds an unsigned scale byte followed by a signed 32-bit
/// mantissa; the value is `mantissa × 10^-scale`. Keeping the two parts
/// as integers means nothing is ever rounded through a binary float.
///
/// Equality is structural: `Decimal::new(1, 10)` (1.0) and
/// `Decimal::new(0, 1)` (1) are different wire values and compare unequal.
/// Use [`Decimal::numeric_eq`] to compare by magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
  scale: u8,
  mantissa: i32,
}

impl Decimal {
  #[must_use]
  pub const fn new(scale: u8, mantissa: i32) -> Self {
    Self { scale, mantissa }
  }

  /// Number of digits after the decimal point.
  #[must_use]
  pub const fn scale(self) -> u8 {
    self.scale
  }

  #[must_use]
  pub const fn mantissa(self) -> i32 {
    self.mantissa
  }

  /// Strip trailing zero digits from the mantissa, lowering the scale to
  /// match. Zero normalizes to scale 0.
  #[must_use]
  pub fn normalize(self) -> Self {
    let mut scale = self.scale;
    let mut mantissa = self.mantissa;
    while scale > 0 && mantissa % 10 == 0 {
      mantissa /= 10;
      scale -= 1;
    }
    Self { scale, mantissa }
  }

  /// Compare by numeric value rather than wire representation.
  #[must_use]
  pub fn numeric_eq(self, other: Self) -> bool {
    self.normalize() == other.normalize()
  }

  /// Lossy conversion for callers that only need an approximation.
  #[must_use]
  pub fn to_f64(self) -> f64 {
    f64::from(self.mantissa) / 10f64.powi(i32::from(self.scale))
  }
}

impl fmt::Display for Decimal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = i64::from(self.mantissa).unsigned_abs().to_string();
    let scale = usize::from(self.scale);
    if self.mantissa < 0 {
      f.write_str("-")?;
    }
    if scale == 0 {
      return f.write_str(&digits);
    }
    if digits.len() > scale {
      let (int_part, frac_part) = digits.split_at(digits.len() - scale);
      write!(f, "{int_part}.{frac_part}")
    } else {
      write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
    }
  }
}
