use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// ## Runtime values

#[derive(Debug, Clone)]
pub enum Val {
    Int(i64),
    Float(f64),
    Str(String),
    Dict(BTreeMap<Val, Val>),
}

impl Val {
    /// Build a value from one line of user input: integer if the text
    /// parses as one, then float, then the text itself. Never a dict.
    pub fn from_input(text: &str) -> Val {
        if let Ok(n) = text.parse::<i64>() {
            return Val::Int(n);
        }
        if let Ok(n) = text.parse::<f64>() {
            return Val::Float(n);
        }
        Val::Str(text.to_string())
    }

    pub fn type_name(&self) -> &'static str {
        use Val::*;
        match self {
            Int(_) => "INT",
            Float(_) => "FLOAT",
            Str(_) => "STRING",
            Dict(_) => "DICT",
        }
    }

    // Numeric rank 0, strings 1, dicts 2. Only used to order keys of
    // different shapes inside the same dict.
    fn rank(&self) -> u8 {
        use Val::*;
        match self {
            Int(_) | Float(_) => 0,
            Str(_) => 1,
            Dict(_) => 2,
        }
    }

    // An integral float hashes as the integer it equals.
    fn as_exact_int(&self) -> Option<i64> {
        use Val::*;
        match self {
            Int(n) => Some(*n),
            Float(n) => {
                if n.is_finite()
                    && n.fract() == 0.0
                    && *n >= i64::MIN as f64
                    && *n <= i64::MAX as f64
                {
                    Some(*n as i64)
                } else {
                    None
                }
            }
            Str(_) | Dict(_) => None,
        }
    }
}

impl PartialEq for Val {
    fn eq(&self, other: &Val) -> bool {
        use Val::*;
        match (self, other) {
            (Int(l), Int(r)) => l == r,
            (Float(l), Float(r)) => OrderedFloat(*l) == OrderedFloat(*r),
            (Int(l), Float(r)) | (Float(r), Int(l)) => {
                OrderedFloat(*l as f64) == OrderedFloat(*r)
            }
            (Str(l), Str(r)) => l == r,
            (Dict(l), Dict(r)) => l == r,
            _ => false,
        }
    }
}

impl Eq for Val {}

impl Ord for Val {
    fn cmp(&self, other: &Val) -> Ordering {
        use Val::*;
        match (self, other) {
            (Int(l), Int(r)) => l.cmp(r),
            (Int(l), Float(r)) => OrderedFloat(*l as f64).cmp(&OrderedFloat(*r)),
            (Float(l), Int(r)) => OrderedFloat(*l).cmp(&OrderedFloat(*r as f64)),
            (Float(l), Float(r)) => OrderedFloat(*l).cmp(&OrderedFloat(*r)),
            (Str(l), Str(r)) => l.cmp(r),
            (Dict(l), Dict(r)) => l.cmp(r),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Val {
    fn partial_cmp(&self, other: &Val) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Val {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Val::*;
        if let Some(n) = self.as_exact_int() {
            0u8.hash(state);
            n.hash(state);
            return;
        }
        match self {
            Int(_) => {}
            Float(n) => {
                1u8.hash(state);
                OrderedFloat(*n).hash(state);
            }
            Str(s) => {
                2u8.hash(state);
                s.hash(state);
            }
            Dict(map) => {
                3u8.hash(state);
                map.len().hash(state);
                for (key, val) in map {
                    key.hash(state);
                    val.hash(state);
                }
            }
        }
    }
}

fn fmt_entry(val: &Val, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match val {
        Val::Str(s) => write!(f, "\"{}\"", s),
        other => write!(f, "{}", other),
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Int(n) => write!(f, "{}", n),
            Float(n) => {
                // Integral doubles keep their trailing .0 so 8.0 / 2 does
                // not silently read as an integer.
                if n.is_finite() && n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Str(s) => write!(f, "{}", s),
            Dict(map) => {
                write!(f, "[")?;
                for (index, (key, val)) in map.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    fmt_entry(key, f)?;
                    write!(f, " = ")?;
                    fmt_entry(val, f)?;
                }
                write!(f, "]")
            }
        }
    }
}
