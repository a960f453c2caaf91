use crate::error::Error;
use crate::ledger::{check_name, Ledger, Position, TradeRecord};

use serde_json::Value;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new_ledger(format!("not json format : {error}"))
    }
}

pub trait Deserialize: Sized {
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer;
}

pub trait Deserializer {
    fn read<T>(&self, name: &str) -> Result<T, Error>
    where
        T: Deserialize;

    fn read_option<T>(&self, name: &str) -> Result<Option<T>, Error>
    where
        T: Deserialize;

    fn read_array<T>(&self) -> Result<Vec<T>, Error>
    where
        T: Deserialize;

    fn read_string(&self) -> Result<String, Error>;
    fn read_f64(&self) -> Result<f64, Error>;
}

pub struct DeserializerValue<'a> {
    value: &'a Value,
}

impl<'a> DeserializerValue<'a> {
    fn field(&self, name: &str) -> Result<Option<&'a Value>, Error> {
        Ok(self
            .value
            .as_object()
            .ok_or_else(|| Error::new_ledger("field must be an object"))?
            .get(name))
    }
}

impl Deserializer for DeserializerValue<'_> {
    fn read<T>(&self, name: &str) -> Result<T, Error>
    where
        T: Deserialize,
    {
        let value = self
            .field(name)?
            .ok_or_else(|| Error::new_ledger(format!("field {name} is mandatory")))?;
        T::deserialize(DeserializerValue { value })
            .map_err(|err| Error::new_ledger(format!("field {name} : {}", err.message)))
    }

    fn read_option<T>(&self, name: &str) -> Result<Option<T>, Error>
    where
        T: Deserialize,
    {
        self.field(name)?
            .filter(|value| !value.is_null())
            .map(|value| {
                T::deserialize(DeserializerValue { value })
                    .map_err(|err| Error::new_ledger(format!("field {name} : {}", err.message)))
            })
            .transpose()
    }

    fn read_string(&self) -> Result<String, Error> {
        self.value
            .as_str()
            .map(|item| item.to_string())
            .ok_or_else(|| Error::new_ledger("field must be a string"))
    }

    fn read_f64(&self) -> Result<f64, Error> {
        self.value
            .as_f64()
            .ok_or_else(|| Error::new_ledger("field must be a f64"))
    }

    fn read_array<T>(&self) -> Result<Vec<T>, Error>
    where
        T: Deserialize,
    {
        self.value
            .as_array()
            .ok_or_else(|| Error::new_ledger("field must be an array"))?
            .iter()
            .map(|value| T::deserialize(DeserializerValue { value }))
            .collect()
    }
}

impl Deserialize for String {
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer,
    {
        deserializer.read_string()
    }
}

impl Deserialize for f64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer,
    {
        deserializer.read_f64()
    }
}

impl<T> Deserialize for Vec<T>
where
    T: Deserialize,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer,
    {
        deserializer.read_array()
    }
}

impl Deserialize for TradeRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer,
    {
        let buy = deserializer.read_option("buy")?;
        let sell = deserializer.read_option("sell")?;
        let fee = deserializer.read_option("fee")?;
        Ok(TradeRecord { buy, sell, fee })
    }
}

impl Deserialize for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer,
    {
        let symbol: String = deserializer.read("symbol")?;
        let trades = deserializer.read("trades")?;
        Ok(Position::new(symbol, trades))
    }
}

impl Deserialize for Ledger {
    fn deserialize<D>(deserializer: D) -> Result<Self, Error>
    where
        D: Deserializer,
    {
        let name: String = deserializer.read("name")?;
        check_name(&name)?;
        let positions: Vec<Position> = deserializer.read("positions")?;
        let mut ledger = Ledger::new(name);
        for position in positions {
            ledger.add_position(position)?;
        }
        Ok(ledger)
    }
}

pub fn from_reader<R, T>(reader: R) -> Result<T, Error>
where
    R: std::io::Read,
    T: Deserialize,
{
    let value: Value = serde_json::from_reader(reader)?;
    T::deserialize(DeserializerValue { value: &value })
}
