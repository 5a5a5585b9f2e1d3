//! Schema type definitions
//!
//! Supported field kinds:
//! - string: non-empty UTF-8 string
//! - integer: base-10 64-bit signed integer
//! - boolean: `true`/`t`/`1` or `false`/`f`/`0`
//! - big_integer: arbitrary-precision non-negative integer (decimal or `0x` hex)
//! - decimal: non-negative decimal number, fraction allowed
//! - address: 20-byte account address, EIP-55 checksummed when mixed-case
//! - address_list: space-separated addresses

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use super::errors::SchemaError;
use super::fields;

/// Bridge modes selecting which conditional schema branch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeMode {
    NativeToErc,
    ErcToErc,
    ErcToNative,
    ErcToErcMultiple,
}

impl BridgeMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [BridgeMode; 4] = [
        BridgeMode::NativeToErc,
        BridgeMode::ErcToErc,
        BridgeMode::ErcToNative,
        BridgeMode::ErcToErcMultiple,
    ];

    /// Returns the wire name used in `BRIDGE_MODE`
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeMode::NativeToErc => "NATIVE_TO_ERC",
            BridgeMode::ErcToErc => "ERC_TO_ERC",
            BridgeMode::ErcToNative => "ERC_TO_NATIVE",
            BridgeMode::ErcToErcMultiple => "ERC_TO_ERC_MULTIPLE",
        }
    }
}

impl fmt::Display for BridgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeMode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BridgeMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SchemaError::invalid_mode(Some(s)))
    }
}

/// A validated account address.
///
/// Keeps the text exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// The all-zero address.
    pub const ZERO: &'static str = "0x0000000000000000000000000000000000000000";

    /// Parses and validates an address.
    pub fn parse(value: &str) -> Result<Self, String> {
        if fields::is_address(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(format!("Invalid address: {}", value))
        }
    }

    /// Returns the all-zero address
    pub fn zero() -> Self {
        Self(Self::ZERO.to_string())
    }

    /// Returns the address as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 40 hex digits without the `0x` prefix
    pub fn hex_digits(&self) -> &str {
        fields::strip_hex_prefix(&self.0)
    }

    /// Returns true if every digit is zero
    pub fn is_zero(&self) -> bool {
        self.hex_digits().bytes().all(|b| b == b'0')
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated non-negative decimal number, such as an ETH amount.
///
/// Kept as the supplied text so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    /// Parses and validates a decimal number.
    pub fn parse(value: &str) -> Result<Self, String> {
        if fields::is_decimal(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(format!("invalid decimal value: {}", value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supported field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    BigInteger,
    Decimal,
    Address,
    AddressList,
}

impl FieldKind {
    /// Returns the kind name for error messages and schema dumps
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::BigInteger => "big_integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Address => "address",
            FieldKind::AddressList => "address_list",
        }
    }

    /// Parses a present raw value into a typed value.
    ///
    /// Returns the human-readable failure reason on error.
    pub fn parse(&self, raw: &str) -> Result<TypedValue, String> {
        match self {
            FieldKind::String => fields::parse_string(raw).map(TypedValue::String),
            FieldKind::Integer => fields::parse_integer(raw).map(TypedValue::Integer),
            FieldKind::Boolean => fields::parse_boolean(raw).map(TypedValue::Boolean),
            FieldKind::BigInteger => fields::parse_big_integer(raw).map(TypedValue::BigInteger),
            FieldKind::Decimal => Decimal::parse(raw).map(TypedValue::Decimal),
            FieldKind::Address => Address::parse(raw).map(TypedValue::Address),
            FieldKind::AddressList => fields::parse_address_list(raw).map(TypedValue::AddressList),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    BigInteger(BigUint),
    Decimal(Decimal),
    Address(Address),
    AddressList(Vec<Address>),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) => f.write_str(s),
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::BigInteger(n) => write!(f, "{}", n),
            TypedValue::Decimal(d) => write!(f, "{}", d),
            TypedValue::Address(a) => write!(f, "{}", a),
            TypedValue::AddressList(list) => {
                for (i, address) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", address)?;
                }
                Ok(())
            }
        }
    }
}

// Big integers and decimals render as strings so JSON consumers never lose precision.
impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypedValue::String(s) => serializer.serialize_str(s),
            TypedValue::Integer(n) => serializer.serialize_i64(*n),
            TypedValue::Boolean(b) => serializer.serialize_bool(*b),
            TypedValue::BigInteger(n) => serializer.serialize_str(&n.to_string()),
            TypedValue::Decimal(d) => serializer.serialize_str(d.as_str()),
            TypedValue::Address(a) => serializer.serialize_str(a.as_str()),
            TypedValue::AddressList(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for address in list {
                    seq.serialize_element(address.as_str())?;
                }
                seq.end()
            }
        }
    }
}

/// Declarative description of one configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Environment variable name
    pub name: String,
    /// Field kind
    pub kind: FieldKind,
    /// Whether absence is a failure (when no default applies)
    pub required: bool,
    /// Value substituted when the field is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<TypedValue>,
    /// Whether the value must be masked when rendered
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub secret: bool,
}

impl FieldSpec {
    /// Create a required field
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            default: None,
            secret: false,
        }
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    /// Create a required string field
    pub fn string(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::String)
    }

    /// Create a required integer field
    pub fn integer(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::Integer)
    }

    /// Create a required boolean field
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::Boolean)
    }

    /// Create a required big integer field
    pub fn big_integer(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::BigInteger)
    }

    /// Create a required decimal number field
    pub fn decimal(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::Decimal)
    }

    /// Create a required address field
    pub fn address(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::Address)
    }

    /// Create a required address list field
    pub fn address_list(name: impl Into<String>) -> Self {
        Self::required(name, FieldKind::AddressList)
    }

    /// Attach a default used when the field is absent
    pub fn with_default(mut self, value: TypedValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Mark the field as secret
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// A derived schema: field specs in assembly order, unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Mode the schema was derived for
    pub mode: BridgeMode,
    /// Field specs in assembly order
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a schema from field specs.
    ///
    /// A later spec with an already-present name replaces the earlier one
    /// in place.
    pub fn new(mode: BridgeMode, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        Self {
            mode,
            fields: Vec::new(),
        }
        .extend(fields)
    }

    /// Returns a schema with the given specs merged in.
    pub fn extend(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        for spec in fields {
            match self.fields.iter().position(|f| f.name == spec.name) {
                Some(i) => self.fields[i] = spec,
                None => self.fields.push(spec),
            }
        }
        self
    }

    /// Returns the spec for a field
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the schema declares the field
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in assembly order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
