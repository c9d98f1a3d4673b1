use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Value operators
///
/// The coercion rules live here so the executor can stay a pure
/// token walker. Int math is overflow-checked; mixed Int/Float math
/// promotes the Int side; everything else is an error.

pub struct Operation {}

impl Operation {
    fn cannot(op: &str, lhs: &Val, rhs: &Val) -> Error {
        error!(BadMath; op, format!("CANNOT OPERATE ON {} AND {}", lhs.type_name(), rhs.type_name()))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            // A string operand concatenates the display of both sides.
            (Str(l), r) => Ok(Str(format!("{}{}", l, r))),
            (l, Str(r)) => Ok(Str(format!("{}{}", l, r))),
            (Int(l), Int(r)) => match l.checked_add(r) {
                Some(n) => Ok(Int(n)),
                None => Err(error!(Overflow; "+")),
            },
            (Int(l), Float(r)) => Ok(Float(l as f64 + r)),
            (Float(l), Int(r)) => Ok(Float(l + r as f64)),
            (Float(l), Float(r)) => Ok(Float(l + r)),
            (l, r) => Err(Operation::cannot("+", &l, &r)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => match l.checked_sub(r) {
                Some(n) => Ok(Int(n)),
                None => Err(error!(Overflow; "-")),
            },
            (Int(l), Float(r)) => Ok(Float(l as f64 - r)),
            (Float(l), Int(r)) => Ok(Float(l - r as f64)),
            (Float(l), Float(r)) => Ok(Float(l - r)),
            (l, r) => Err(Operation::cannot("-", &l, &r)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            // A string repeats a non-negative Int number of times.
            (Str(s), Int(n)) | (Int(n), Str(s)) => {
                if n < 0 {
                    Err(error!(BadMath; "*", "NEGATIVE REPEAT COUNT"))
                } else {
                    Ok(Str(s.repeat(n as usize)))
                }
            }
            (Int(l), Int(r)) => match l.checked_mul(r) {
                Some(n) => Ok(Int(n)),
                None => Err(error!(Overflow; "*")),
            },
            (Int(l), Float(r)) => Ok(Float(l as f64 * r)),
            (Float(l), Int(r)) => Ok(Float(l * r as f64)),
            (Float(l), Float(r)) => Ok(Float(l * r)),
            (l, r) => Err(Operation::cannot("*", &l, &r)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => match l.checked_div(r) {
                Some(n) => Ok(Int(n)),
                None => {
                    if r == 0 {
                        Err(error!(BadMath; "/", "DIVISION BY ZERO"))
                    } else {
                        Err(error!(Overflow; "/"))
                    }
                }
            },
            (Int(l), Float(r)) => Ok(Float(l as f64 / r)),
            (Float(l), Int(r)) => Ok(Float(l / r as f64)),
            (Float(l), Float(r)) => Ok(Float(l / r)),
            (l, r) => Err(Operation::cannot("/", &l, &r)),
        }
    }

    pub fn remainder(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => match l.checked_rem(r) {
                Some(n) => Ok(Int(n)),
                None => {
                    if r == 0 {
                        Err(error!(BadMath; "%", "DIVISION BY ZERO"))
                    } else {
                        Err(error!(Overflow; "%"))
                    }
                }
            },
            (Int(l), Float(r)) => Ok(Float(l as f64 % r)),
            (Float(l), Int(r)) => Ok(Float(l % r as f64)),
            (Float(l), Float(r)) => Ok(Float(l % r)),
            (l, r) => Err(Operation::cannot("%", &l, &r)),
        }
    }

    /// Exponentiation is Float even for Int bases.
    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => Ok(Float((l as f64).powf(r as f64))),
            (Int(l), Float(r)) => Ok(Float((l as f64).powf(r))),
            (Float(l), Int(r)) => Ok(Float(l.powf(r as f64))),
            (Float(l), Float(r)) => Ok(Float(l.powf(r))),
            (l, r) => Err(Operation::cannot("**", &l, &r)),
        }
    }

    pub fn bit_and(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => Ok(Int(l & r)),
            (l, r) => Err(Operation::cannot("&", &l, &r)),
        }
    }

    pub fn bit_or(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => Ok(Int(l | r)),
            (l, r) => Err(Operation::cannot("|", &l, &r)),
        }
    }

    pub fn bit_xor(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => Ok(Int(l ^ r)),
            (l, r) => Err(Operation::cannot("^", &l, &r)),
        }
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => {
                if (0..64).contains(&r) {
                    Ok(Int(l << r))
                } else {
                    Err(error!(Overflow; "<<"))
                }
            }
            (l, r) => Err(Operation::cannot("<<", &l, &r)),
        }
    }

    /// Right shift is arithmetic: the sign bit fills in from the left.
    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => {
                if (0..64).contains(&r) {
                    Ok(Int(l >> r))
                } else {
                    Err(error!(Overflow; ">>"))
                }
            }
            (l, r) => Err(Operation::cannot(">>", &l, &r)),
        }
    }

    pub fn less(lhs: &Val, rhs: &Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Int(l), Int(r)) => Ok(l < r),
            (Int(l), Float(r)) => Ok((*l as f64) < *r),
            (Float(l), Int(r)) => Ok(*l < *r as f64),
            (Float(l), Float(r)) => Ok(l < r),
            (l, r) => Err(error!(BadComparison; "<",
                format!("CANNOT ORDER {} AND {}", l.type_name(), r.type_name()))),
        }
    }

    pub fn greater(lhs: &Val, rhs: &Val) -> Result<bool> {
        Operation::less(rhs, lhs)
    }

    pub fn equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        Ok(lhs == rhs)
    }

    pub fn not_equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        Ok(lhs != rhs)
    }

    pub fn less_equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        Ok(Operation::less(lhs, rhs)? || Operation::equal(lhs, rhs)?)
    }

    pub fn greater_equal(lhs: &Val, rhs: &Val) -> Result<bool> {
        Ok(Operation::greater(lhs, rhs)? || Operation::equal(lhs, rhs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorKind;

    #[test]
    fn test_int_math() {
        assert_eq!(Operation::sum(Val::Int(7), Val::Int(3)).unwrap(), Val::Int(10));
        assert_eq!(
            Operation::subtract(Val::Int(7), Val::Int(3)).unwrap(),
            Val::Int(4)
        );
        assert_eq!(
            Operation::multiply(Val::Int(7), Val::Int(3)).unwrap(),
            Val::Int(21)
        );
        assert_eq!(Operation::divide(Val::Int(7), Val::Int(3)).unwrap(), Val::Int(2));
        assert_eq!(
            Operation::remainder(Val::Int(7), Val::Int(3)).unwrap(),
            Val::Int(1)
        );
    }

    #[test]
    fn test_power_is_float() {
        assert_eq!(
            Operation::power(Val::Int(7), Val::Int(3)).unwrap(),
            Val::Float(343.0)
        );
        assert_eq!(
            Operation::power(Val::Int(7), Val::Int(3)).unwrap().to_string(),
            "343.0"
        );
    }

    #[test]
    fn test_overflow_checked() {
        let err = Operation::sum(Val::Int(i64::MAX), Val::Int(1)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Overflow("+".into()));
        let err = Operation::multiply(Val::Int(i64::MIN), Val::Int(-1)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Overflow("*".into()));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(Operation::divide(Val::Int(1), Val::Int(0)).is_err());
        assert!(Operation::remainder(Val::Int(1), Val::Int(0)).is_err());
        // Float division reaches infinity instead.
        assert_eq!(
            Operation::divide(Val::Float(1.0), Val::Int(0)).unwrap(),
            Val::Float(f64::INFINITY)
        );
    }

    #[test]
    fn test_string_concat() {
        let out = Operation::sum(Val::Str("We like ".into()), Val::Int(2)).unwrap();
        assert_eq!(out, Val::Str("We like 2".into()));
        let out = Operation::sum(Val::Float(4.0), Val::Str(" ever!".into())).unwrap();
        assert_eq!(out, Val::Str("4.0 ever!".into()));
    }

    #[test]
    fn test_string_repeat() {
        let out = Operation::multiply(Val::Str("🍪".into()), Val::Int(5)).unwrap();
        assert_eq!(out, Val::Str("🍪🍪🍪🍪🍪".into()));
        let out = Operation::multiply(Val::Int(2), Val::Str("ab".into())).unwrap();
        assert_eq!(out, Val::Str("abab".into()));
        assert!(Operation::multiply(Val::Str("x".into()), Val::Int(-1)).is_err());
    }

    #[test]
    fn test_bitwise_int_only() {
        assert_eq!(
            Operation::bit_and(Val::Int(6), Val::Int(3)).unwrap(),
            Val::Int(2)
        );
        assert_eq!(
            Operation::shift_left(Val::Int(1), Val::Int(4)).unwrap(),
            Val::Int(16)
        );
        assert_eq!(
            Operation::shift_right(Val::Int(-16), Val::Int(2)).unwrap(),
            Val::Int(-4)
        );
        assert!(Operation::bit_or(Val::Float(1.0), Val::Int(1)).is_err());
    }

    #[test]
    fn test_comparisons() {
        assert!(Operation::less(&Val::Int(1), &Val::Float(1.5)).unwrap());
        assert!(Operation::greater_equal(&Val::Int(2), &Val::Float(2.0)).unwrap());
        assert!(Operation::equal(&Val::Str("a".into()), &Val::Str("a".into())).unwrap());
        // Mixed shapes are unequal, not an error.
        assert!(!Operation::equal(&Val::Int(1), &Val::Str("1".into())).unwrap());
        assert!(Operation::not_equal(&Val::Int(1), &Val::Str("1".into())).unwrap());
        // Ordering strings is an error.
        assert!(Operation::less(&Val::Str("a".into()), &Val::Str("b".into())).is_err());
        assert!(Operation::less_equal(&Val::Str("a".into()), &Val::Str("a".into())).is_err());
    }
}
