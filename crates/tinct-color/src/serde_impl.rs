// SPDX-License-Identifier: MIT
//
// Colors serialize as hex strings so theme tables stay human-editable.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{Rgb, Rgba};

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = Rgba;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string like \"#2d3440\" or \"#ffffff59\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Rgba::hex(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor).map(|rgba| rgba.rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hsl;

    #[test]
    fn rgb_serializes_as_hex() {
        let json = serde_json::to_string(&Rgb::new(0x2d, 0x34, 0x40)).unwrap();
        assert_eq!(json, "\"#2d3440\"");
    }

    #[test]
    fn rgba_roundtrips_alpha() {
        let c: Rgba = serde_json::from_str("\"#ffffff59\"").unwrap();
        assert_eq!(c.alpha, Some(0x59));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ffffff59\"");
    }

    #[test]
    fn malformed_hex_is_a_deserialize_error() {
        let err = serde_json::from_str::<Rgb>("\"#zzz\"").unwrap_err();
        assert!(err.to_string().contains("not a hex digit"), "{err}");
    }

    #[test]
    fn hsl_is_a_plain_struct() {
        let hsl: Hsl = serde_json::from_str(r#"{"h":210.0,"s":20.0,"l":30.0}"#).unwrap();
        assert_eq!(hsl, Hsl { h: 210.0, s: 20.0, l: 30.0 });
    }
}
