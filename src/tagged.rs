// Copyright (c) 2019-2025 Dropbox, Inc.

//! Encoding and decoding of Stone unions ("tagged variants").
//!
//! A union value is a JSON object whose `.tag` key names the active variant. Depending on how the
//! variant is declared, its payload is absent (`void`), stored under a key named after the tag
//! (`nested`), or stored as the fields of a struct alongside the tag (`flat`):
//!
//! ```json
//! {".tag": "reset"}
//! {".tag": "path", "path": {".tag": "not_found"}}
//! {".tag": "file", "name": "a.txt", "id": "id:abc", "size": 3}
//! ```
//!
//! Every union type carries a static variant table (see [`TaggedUnion::VARIANTS`]) which the
//! generic [`decode`] and [`encode`] functions drive. Types are normally declared with the
//! [`tagged_union!`](crate::tagged_union) macro, which builds the enum, the table, and the serde
//! impls in one go.
//!
//! Open unions get an extra `Other` variant which any unrecognized tag decodes to. Closed unions
//! reject unknown tags with a decode error naming the tag, so a schema mismatch is never mistaken
//! for a different known variant.

use serde::de::{self, Unexpected};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[doc(hidden)]
pub use ::serde;
#[doc(hidden)]
pub use ::serde_json;

/// The reserved key holding a union's discriminator.
pub const TAG_KEY: &str = ".tag";

/// The JSON fields of a union value, minus the tag once it has been read.
pub type Fields = Map<String, Value>;

/// One row of a union's variant table: the tag, and how to build the variant from the remaining
/// fields.
pub struct Variant<U: 'static> {
    /// Wire name of the variant.
    pub tag: &'static str,

    /// Builds the variant from the fields that were next to the tag.
    pub decode: fn(&mut Fields) -> Result<U, serde_json::Error>,
}

/// The payload of the active variant, ready to be merged into the outgoing JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The variant carries nothing.
    None,

    /// The payload goes under a key named after the tag. `Value::Null` is omitted entirely.
    Nested(Value),

    /// The payload's fields go next to the tag.
    Flat(Fields),
}

/// A sum type with a string discriminator, encoded the Stone way.
///
/// Implement this with [`tagged_union!`](crate::tagged_union) rather than by hand.
pub trait TaggedUnion: Sized + 'static {
    /// Type name, used in error messages.
    const NAME: &'static str;

    /// Every variant this version of the SDK knows about.
    const VARIANTS: &'static [Variant<Self>];

    /// The value an unrecognized tag decodes to: `Some(Other)` for open unions, `None` for closed
    /// ones.
    fn fallback() -> Option<Self>;

    /// The wire name of the active variant.
    fn tag(&self) -> &'static str;

    /// Split the value into its tag and payload.
    fn to_parts(&self) -> Result<(&'static str, Payload), serde_json::Error>;
}

/// Decode a union from a JSON value.
///
/// A bare string is accepted as shorthand for a variant with no payload, i.e. `"reset"` decodes
/// the same as `{".tag": "reset"}`.
pub fn decode<U: TaggedUnion>(value: Value) -> Result<U, serde_json::Error> {
    let (tag, mut fields) = match value {
        Value::String(tag) => (tag, Fields::new()),
        Value::Object(mut fields) => match fields.remove(TAG_KEY) {
            Some(Value::String(tag)) => (tag, fields),
            Some(other) => {
                return Err(de::Error::invalid_type(unexpected(&other), &"a string tag"));
            }
            None => return Err(de::Error::missing_field(TAG_KEY)),
        },
        other => return Err(de::Error::invalid_type(unexpected(&other), &U::NAME)),
    };

    match U::VARIANTS.iter().find(|variant| variant.tag == tag) {
        Some(variant) => (variant.decode)(&mut fields),
        None => U::fallback().ok_or_else(|| {
            de::Error::custom(format!("unknown variant `{tag}` for closed union {}", U::NAME))
        }),
    }
}

/// Encode a union to a JSON object: the tag plus exactly the active variant's payload.
pub fn encode<U: TaggedUnion>(value: &U) -> Result<Fields, serde_json::Error> {
    let (tag, payload) = value.to_parts()?;
    let mut fields = Fields::new();
    fields.insert(TAG_KEY.to_owned(), Value::String(tag.to_owned()));
    match payload {
        Payload::None | Payload::Nested(Value::Null) => (),
        Payload::Nested(inner) => {
            fields.insert(tag.to_owned(), inner);
        }
        Payload::Flat(inner) => {
            // The outer tag wins over any tag the payload struct might carry itself.
            fields.extend(inner.into_iter().filter(|(key, _)| key != TAG_KEY));
        }
    }
    Ok(fields)
}

/// Take a nested payload out of the union's fields.
///
/// A missing or null value is passed through as `null`, so `Option` payloads decode to `None`.
pub fn decode_nested<T: DeserializeOwned>(fields: &mut Fields, tag: &str)
    -> Result<T, serde_json::Error>
{
    match fields.remove(tag) {
        Some(value) => serde_json::from_value(value),
        None => serde_json::from_value(Value::Null)
            .map_err(|_| de::Error::custom(format!("missing field `{tag}`"))),
    }
}

/// Build a flattened struct payload out of all the union's remaining fields. Fields the struct
/// doesn't know about are ignored.
pub fn decode_flat<T: DeserializeOwned>(fields: &mut Fields) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(std::mem::take(fields)))
}

pub fn encode_nested<T: Serialize>(payload: &T) -> Result<Payload, serde_json::Error> {
    serde_json::to_value(payload).map(Payload::Nested)
}

pub fn encode_flat<T: Serialize>(payload: &T) -> Result<Payload, serde_json::Error> {
    match serde_json::to_value(payload)? {
        Value::Object(fields) => Ok(Payload::Flat(fields)),
        other => Err(ser::Error::custom(format!(
            "flattened union payload must serialize to an object, not {other}"))),
    }
}

/// `Serialize` implementation shared by all unions.
pub fn serialize<U: TaggedUnion, S: Serializer>(value: &U, serializer: S)
    -> Result<S::Ok, S::Error>
{
    encode(value).map_err(ser::Error::custom)?.serialize(serializer)
}

/// `Deserialize` implementation shared by all unions.
pub fn deserialize<'de, U: TaggedUnion, D: Deserializer<'de>>(deserializer: D)
    -> Result<U, D::Error>
{
    let value = Value::deserialize(deserializer)?;
    decode(value).map_err(de::Error::custom)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Declare a Stone union.
///
/// ```
/// dropbox_sdk::tagged_union! {
///     /// Why a lookup failed.
///     #[derive(Debug, Clone, PartialEq, Eq)]
///     pub enum LookupFailure: open {
///         "malformed_path" => MalformedPath(nested Option<String>),
///         "not_found" => NotFound,
///     }
/// }
///
/// let e: LookupFailure = serde_json::from_str(r#"{".tag": "not_found"}"#).unwrap();
/// assert_eq!(e, LookupFailure::NotFound);
/// let e: LookupFailure = serde_json::from_str(r#"{".tag": "brand_new"}"#).unwrap();
/// assert_eq!(e, LookupFailure::Other);
/// ```
///
/// The union is `open` (gains an `Other` variant) or `closed`. Each variant is `"tag" => Name`
/// with no payload, `"tag" => Name(nested Type)` for a payload stored under the tag's key, or
/// `"tag" => Name(flat Type)` for a struct whose fields sit next to the tag.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $openness:ident {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident $( ( $kind:ident $ty:ty ) )?
            ),* $(,)?
        }
    ) => {
        $crate::__tagged_union_enum! {
            $openness;
            $(#[$meta])*
            $vis enum $name {
                $( $(#[$vmeta])* $variant $( ($ty) )? ),*
            }
        }

        impl $crate::tagged::TaggedUnion for $name {
            const NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [$crate::tagged::Variant<Self>] = &[
                $(
                    $crate::tagged::Variant {
                        tag: $tag,
                        decode: {
                            fn decode(fields: &mut $crate::tagged::Fields)
                                -> ::std::result::Result<$name, $crate::tagged::serde_json::Error>
                            {
                                $crate::__tagged_union_decode!(
                                    fields; $name::$variant; $tag $(; $kind $ty)?)
                            }
                            decode
                        },
                    },
                )*
            ];

            fn fallback() -> ::std::option::Option<Self> {
                $crate::__tagged_union_fallback!($openness $name)
            }

            fn tag(&self) -> &'static str {
                match self {
                    $( $name::$variant { .. } => $tag, )*
                    #[allow(unreachable_patterns)]
                    _ => "other",
                }
            }

            fn to_parts(&self) -> ::std::result::Result<
                (&'static str, $crate::tagged::Payload),
                $crate::tagged::serde_json::Error,
            > {
                match self {
                    $(
                        $name::$variant $( ($kind) )? =>
                            $crate::__tagged_union_encode!($tag $(; $kind $kind)?),
                    )*
                    #[allow(unreachable_patterns)]
                    _ => ::std::result::Result::Err(
                        <$crate::tagged::serde_json::Error as $crate::tagged::serde::ser::Error>
                            ::custom(concat!("cannot serialize 'Other' variant of ",
                                stringify!($name)))),
                }
            }
        }

        impl $crate::tagged::serde::Serialize for $name {
            fn serialize<S: $crate::tagged::serde::Serializer>(&self, serializer: S)
                -> ::std::result::Result<S::Ok, S::Error>
            {
                $crate::tagged::serialize(self, serializer)
            }
        }

        impl<'de> $crate::tagged::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::tagged::serde::Deserializer<'de>>(deserializer: D)
                -> ::std::result::Result<Self, D::Error>
            {
                $crate::tagged::deserialize(deserializer)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::tagged::TaggedUnion::tag(self))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_union_enum {
    (
        open;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $( $(#[$vmeta:meta])* $variant:ident $( ($ty:ty) )? ),* }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant $( ($ty) )?, )*
            /// Catch-all used for any variant this version of the SDK doesn't know about.
            Other,
        }
    };
    (
        closed;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $( $(#[$vmeta:meta])* $variant:ident $( ($ty:ty) )? ),* }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant $( ($ty) )?, )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_union_fallback {
    (open $name:ident) => { ::std::option::Option::Some($name::Other) };
    (closed $name:ident) => { ::std::option::Option::None };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_union_decode {
    ($fields:ident; $name:ident :: $variant:ident; $tag:literal) => {{
        let _ = $fields;
        ::std::result::Result::Ok($name::$variant)
    }};
    ($fields:ident; $name:ident :: $variant:ident; $tag:literal; nested $ty:ty) => {
        $crate::tagged::decode_nested::<$ty>($fields, $tag).map($name::$variant)
    };
    ($fields:ident; $name:ident :: $variant:ident; $tag:literal; flat $ty:ty) => {
        $crate::tagged::decode_flat::<$ty>($fields).map($name::$variant)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tagged_union_encode {
    ($tag:literal) => {
        ::std::result::Result::Ok(($tag, $crate::tagged::Payload::None))
    };
    ($tag:literal; nested $payload:ident) => {
        $crate::tagged::encode_nested($payload).map(|payload| ($tag, payload))
    };
    ($tag:literal; flat $payload:ident) => {
        $crate::tagged::encode_flat($payload).map(|payload| ($tag, payload))
    };
}
