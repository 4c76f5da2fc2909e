use crate::types::errors::MoneyError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::error;

const DISPLAY_PLACES: u32 = 2;

/// A monetary amount backed by an exact decimal.
///
/// Displays the way the dashboard and the advisor prompt show money: `$`
/// followed by two fractional digits, rounded half away from zero.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Two fractional digits without the currency sign, e.g. `"1234.50"`.
    pub fn to_fixed(&self) -> String {
        let rounded = self.0.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl AddAssign<Money> for Money {
    fn add_assign(&mut self, rhs: Money) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Money AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Money> for Money {
    fn sub_assign(&mut self, rhs: Money) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Money SubAssign error: Overflow")
        }
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "${}", self.to_fixed())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MoneyError::InvalidFormat("Value is an empty string".to_string()));
        }

        let value = value.strip_prefix('$').unwrap_or(value);

        if value.starts_with('.') || value.ends_with('.') {
            return Err(MoneyError::InvalidFormat(format!("Value has a dangling decimal point: {value}")));
        }

        Ok(Money(Decimal::from_str(value)?))
    }
}

/// Stored amounts arrive either as JSON-style numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String)
}

impl TryFrom<RawAmount> for Money {
    type Error = MoneyError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Integer(value) => Ok(Money(Decimal::from(value))),
            RawAmount::Float(value) => Decimal::try_from(value)
                .map(Money)
                .map_err(|_| MoneyError::InvalidFormat(format!("Value is not a finite number: {value}"))),
            RawAmount::Text(value) => Money::from_str(&value)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAmount::deserialize(deserializer)?;
        Money::try_from(raw).map_err(de::Error::custom)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.0, serializer)
    }
}
