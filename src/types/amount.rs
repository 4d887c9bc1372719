use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const MAX_INPUT_DECIMAL_PLACES: u32 = 4;
const MIN_DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A non-negative quantity of money, in currency units rather than cents.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_zero() {
            return Ok(Amount(value.abs()));
        }

        if value.is_sign_negative() {
            return Err(AmountError::Negative(value.to_string()));
        }

        Ok(Amount(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        match self.checked_add(rhs) {
            Some(new_val) => self.0 = new_val.0,
            None => {
                error!("Amount AddAssign error: Overflow, saturating at the maximum");
                self.0 = Decimal::MAX;
            }
        }
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let places = self.0.scale().max(MIN_DISPLAY_DECIMAL_PLACES) as usize;
        write!(formatter, "{:.*}", places, self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses user input such as `"12.5"` or `" 100 "`.
    ///
    /// Input is limited to four decimal places; stored values read back through
    /// `Deserialize` are not.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value).map_err(|error| {
            AmountError::InvalidFormat(format!("Value [{value}] is not a decimal number: {error}"))
        })?;

        if decimal.scale() > MAX_INPUT_DECIMAL_PLACES {
            return Err(AmountError::InvalidFormat("Value has too many decimal places".to_string()));
        }

        Amount::new(decimal)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts both decimal strings and plain JSON numbers.
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Amount::new(value).map_err(de::Error::custom)
    }
}
