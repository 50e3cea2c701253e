use std::fmt::Display;

/// A runtime numeric value. Mixed-type arithmetic widens to `Real`; the two
/// division forms have their own result rules (see `from_quotient` and
/// `integer_divide`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(value) => value as f64,
            Value::Real(value) => value,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Integer(value) => value == 0,
            Value::Real(value) => value == 0.0,
        }
    }

    /// Result of `/`: an exact integer quotient collapses back to
    /// `Integer`. The comparison is exact equality against the truncated
    /// quotient, not a rounding tolerance.
    pub fn from_quotient(quotient: f64) -> Value {
        let representable =
            quotient >= i64::MIN as f64 && quotient <= i64::MAX as f64;
        if quotient.is_finite() && representable && quotient == quotient.trunc() {
            Value::Integer(quotient as i64)
        } else {
            Value::Real(quotient)
        }
    }

    pub fn add(self, other: Value) -> Value {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left + right),
            (left, right) => Value::Real(left.as_f64() + right.as_f64()),
        }
    }

    pub fn subtract(self, other: Value) -> Value {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left - right),
            (left, right) => Value::Real(left.as_f64() - right.as_f64()),
        }
    }

    pub fn multiply(self, other: Value) -> Value {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => Value::Integer(left * right),
            (left, right) => Value::Real(left.as_f64() * right.as_f64()),
        }
    }

    /// Real division. The divisor must be checked for zero by the caller.
    pub fn divide(self, other: Value) -> Value {
        Value::from_quotient(self.as_f64() / other.as_f64())
    }

    /// `div`: floor division, always an integer. Floors toward negative
    /// infinity, so `-7 div 2 = -4`. The divisor must be checked for zero by
    /// the caller.
    pub fn integer_divide(self, other: Value) -> Value {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => {
                let quotient = left / right;
                if left % right != 0 && (left < 0) != (right < 0) {
                    Value::Integer(quotient - 1)
                } else {
                    Value::Integer(quotient)
                }
            }
            (left, right) => Value::Integer((left.as_f64() / right.as_f64()).floor() as i64),
        }
    }

    pub fn negate(self) -> Value {
        match self {
            Value::Integer(value) => Value::Integer(-value),
            Value::Real(value) => Value::Real(-value),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Real(value) => write!(f, "{}", value),
        }
    }
}
