use crate::Address;
use core::fmt;
use primitive_types::U256;
use serde::{
    de::Error,
    Deserialize,
    Deserializer,
    Serializer,
};
use serde_with::{
    DeserializeAs,
    SerializeAs,
};

/// Reads any integer the JSON document may carry: a number of any width, a
/// decimal string, or a `0x`-prefixed hex string.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => {
            let text = number.to_string();
            U256::from_dec_str(&text).map_err(|e| {
                D::Error::custom(format!("invalid integer {text}: {e:?}"))
            })
        }
        serde_json::Value::String(text) => parse_quantity(&text).map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected an integer or a numeric string, got {other}"
        ))),
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer.
pub fn parse_quantity(text: &str) -> Result<U256, String> {
    let text = text.trim();
    match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some("") => Err(format!("empty hex quantity {text:?}")),
        Some(hex) => U256::from_str_radix(hex, 16)
            .map_err(|e| format!("invalid hex quantity {text:?}: {e:?}")),
        None => U256::from_dec_str(text)
            .map_err(|e| format!("invalid decimal quantity {text:?}: {e:?}")),
    }
}

/// Parses a 20 byte address with or without the `0x` prefix.
pub fn parse_address(text: &str) -> Result<Address, String> {
    let text = text.trim();
    let stripped = text.strip_prefix("0x").unwrap_or(text);
    let bytes = hex::decode(stripped).map_err(|e| format!("invalid address {text:?}: {e}"))?;
    if bytes.len() != Address::len_bytes() {
        return Err(format!(
            "invalid address {text:?}: expected {} bytes, got {}",
            Address::len_bytes(),
            bytes.len()
        ))
    }
    Ok(Address::from_slice(&bytes))
}

/// Header quantities, written as `0x`-prefixed minimal hex.
pub(crate) struct HexQuantity;

impl SerializeAs<U256> for HexQuantity {
    fn serialize_as<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{value:x}"))
    }
}

impl<'de> DeserializeAs<'de, U256> for HexQuantity {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_quantity(deserializer)
    }
}

impl SerializeAs<u64> for HexQuantity {
    fn serialize_as<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{value:x}"))
    }
}

impl<'de> DeserializeAs<'de, u64> for HexQuantity {
    fn deserialize_as<D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: U256 = HexQuantity::deserialize_as(deserializer)?;
        if value.bits() > 64 {
            return Err(D::Error::custom(format!("value {value} exceeds 64 bits")))
        }
        Ok(value.low_u64())
    }
}

/// Chain config integers, written as JSON numbers while they fit in a word
/// and as decimal strings beyond that.
pub(crate) struct BigNumber;

impl SerializeAs<U256> for BigNumber {
    fn serialize_as<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.bits() <= 64 {
            serializer.serialize_u64(value.low_u64())
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }
}

impl<'de> DeserializeAs<'de, U256> for BigNumber {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_quantity(deserializer)
    }
}

/// Addresses written as bare hex, without the `0x` prefix.
pub(crate) struct Unprefixed;

impl SerializeAs<Address> for Unprefixed {
    fn serialize_as<S>(value: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(value.as_bytes()))
    }
}

impl<'de> DeserializeAs<'de, Address> for Unprefixed {
    fn deserialize_as<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_string = String::deserialize(deserializer)?;
        parse_address(&raw_string).map_err(D::Error::custom)
    }
}

/// Account keys written with the `0x` prefix and read with or without it.
pub(crate) struct HexAddress;

impl SerializeAs<Address> for HexAddress {
    fn serialize_as<S>(value: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_hex::serialize(value.as_bytes(), serializer)
    }
}

impl<'de> DeserializeAs<'de, Address> for HexAddress {
    fn deserialize_as<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_string = String::deserialize(deserializer)?;
        parse_address(&raw_string).map_err(D::Error::custom)
    }
}

pub(crate) struct HexType;

impl<T: AsRef<[u8]>> SerializeAs<T> for HexType {
    fn serialize_as<S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde_hex::serialize(value, serializer)
    }
}

impl<'de, T, E> DeserializeAs<'de, T> for HexType
where
    for<'a> T: TryFrom<&'a [u8], Error = E>,
    E: fmt::Display,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_hex::deserialize(deserializer)
    }
}

pub mod serde_hex {
    use core::fmt;
    use hex::{
        FromHex,
        ToHex,
    };
    use serde::{
        de::Error,
        Deserializer,
        Serializer,
    };

    pub fn serialize<T, S>(target: T, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: ToHex,
    {
        let s = format!("0x{}", target.encode_hex::<String>());
        ser.serialize_str(&s)
    }

    pub fn deserialize<'de, T, E, D>(des: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        for<'a> T: TryFrom<&'a [u8], Error = E>,
        E: fmt::Display,
    {
        let raw_string: String = serde::Deserialize::deserialize(des)?;
        let stripped_prefix = raw_string.strip_prefix("0x").unwrap_or(&raw_string);
        let bytes: Vec<u8> =
            FromHex::from_hex(stripped_prefix).map_err(D::Error::custom)?;
        let result = T::try_from(bytes.as_slice()).map_err(D::Error::custom)?;
        Ok(result)
    }
}
