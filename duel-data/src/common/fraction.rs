use std::{
    cmp,
    fmt,
    fmt::Display,
    str::FromStr,
};

use anyhow::Context;
use num::{
    Integer,
    rational::Ratio,
};
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// An exact ratio used for item and move parameters.
///
/// A fraction is serializable as:
/// - A fraction string (`"1/16"`).
/// - An integer (`2`), which represents a whole number.
/// - A floating point number (`1.5`), which is converted to a fraction out of 4096.
/// - A percentage string (`"10%"`).
/// - A two-length array (`[1, 8]`).
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Creates a new fraction.
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Creates a new percentage as a fraction.
    pub fn percentage(n: u32) -> Self {
        Self::new(n, 100).simplify()
    }

    pub fn numerator(&self) -> u32 {
        self.num
    }

    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// Is the fraction a whole number?
    pub fn is_whole(&self) -> bool {
        self.den == 1
    }

    /// Simplifies the fraction.
    pub fn simplify(&self) -> Self {
        let gcd = self.num.gcd(&self.den);
        if gcd == 0 {
            return *self;
        }
        Self::new(self.num / gcd, self.den / gcd)
    }

    /// Converts the fraction to an exact ratio.
    ///
    /// A zero denominator produces a zero ratio.
    pub fn as_ratio(&self) -> Ratio<u64> {
        if self.den == 0 {
            return Ratio::from_integer(0);
        }
        Ratio::new(self.num as u64, self.den as u64)
    }

    /// Applies the fraction to an integer, truncating the result.
    pub fn of(&self, value: u32) -> u32 {
        (self.as_ratio() * value as u64).to_integer() as u32
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<u32> for Fraction {
    fn from(value: u32) -> Self {
        Self::new(value, 1)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::new((value * 4096f64).trunc() as u32, 4096).simplify()
    }
}

impl FromStr for Fraction {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((n, d)) = s.split_once('/') {
            let n = n
                .trim()
                .parse()
                .with_context(|| format!("invalid numerator: {n}"))?;
            let d = d
                .trim()
                .parse()
                .with_context(|| format!("invalid denominator: {d}"))?;
            Ok(Self::new(n, d))
        } else {
            let s = s.strip_suffix('%').unwrap_or(s);
            Ok(Self::percentage(
                s.trim()
                    .parse()
                    .with_context(|| format!("invalid percentage: {s}"))?,
            ))
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == cmp::Ordering::Equal
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        (self.num as u64 * other.den as u64).cmp(&(other.num as u64 * self.den as u64))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_whole() {
            serializer.serialize_u32(self.num)
        } else {
            serializer.serialize_str(&format!("{self}"))
        }
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an integer, a fraction string, a percentage string, or an array of 2 integers"
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(v)
            .map(Fraction::from)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v < 0f64 {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(Fraction::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Fraction::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let num = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(0, &self)),
        };
        let den = match seq.next_element()? {
            Some(v) => v,
            None => return Err(serde::de::Error::invalid_length(1, &self)),
        };
        if seq.next_element::<u32>()?.is_some() {
            return Err(serde::de::Error::invalid_length(3, &self));
        }
        Ok(Fraction::new(num, den))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
