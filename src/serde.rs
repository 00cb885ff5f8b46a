use crate::Options;
use crate::ValuesPerLine;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

impl Serialize for ValuesPerLine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for ValuesPerLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> de::Visitor<'de> for Visitor {
            type Value = ValuesPerLine;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a positive number of values per line")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                if value > usize::MAX as u64 {
                    return Err(E::invalid_value(de::Unexpected::Unsigned(value), &self));
                }

                ValuesPerLine::new(value as usize)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                if value < 0 {
                    return Err(E::invalid_value(de::Unexpected::Signed(value), &self));
                }

                de::Visitor::visit_u64(self, value as u64)
            }
        }

        deserializer.deserialize_u64(Visitor)
    }
}

impl Serialize for Options {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut struct_ = serializer.serialize_struct("Options", 2)?;
        struct_.serialize_field("output", &self.output)?;
        struct_.serialize_field("values_per_line", &self.values_per_line)?;
        struct_.end()
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["output", "values_per_line"];

        struct Visitor;
        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Options;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "an object with optional output and values_per_line fields"
                )
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut options = Options::default();
                let mut seen_output = false;
                let mut seen_values_per_line = false;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "output" => {
                            if seen_output {
                                return Err(de::Error::duplicate_field("output"));
                            }
                            seen_output = true;
                            options.output = map.next_value::<PathBuf>()?;
                        }
                        "values_per_line" => {
                            if seen_values_per_line {
                                return Err(de::Error::duplicate_field("values_per_line"));
                            }
                            seen_values_per_line = true;
                            options.values_per_line = map.next_value::<ValuesPerLine>()?;
                        }
                        other => return Err(de::Error::unknown_field(other, FIELDS)),
                    }
                }

                Ok(options)
            }
        }

        deserializer.deserialize_struct("Options", FIELDS, Visitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Options, ValuesPerLine, DEFAULT_OUTPUT};
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn values_per_line_rejects_zero() {
        assert!(serde_json::from_value::<ValuesPerLine>(json!(0)).is_err());
        assert!(serde_json::from_value::<ValuesPerLine>(json!(-3)).is_err());
        assert!(serde_json::from_value::<ValuesPerLine>(json!("22")).is_err());
        assert_eq!(
            serde_json::from_value::<ValuesPerLine>(json!(8)).expect("deserialize"),
            ValuesPerLine::new(8).unwrap()
        );
    }

    #[test]
    fn options_fields_default_individually() {
        let options: Options = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(options, Options::default());

        let options: Options =
            serde_json::from_value(json!({ "output": "wav.txt" })).expect("deserialize");
        assert_eq!(options.output, PathBuf::from("wav.txt"));
        assert_eq!(options.values_per_line, ValuesPerLine::default());

        let options: Options =
            serde_json::from_value(json!({ "values_per_line": 12 })).expect("deserialize");
        assert_eq!(options.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(options.values_per_line.get(), 12);
    }

    #[test]
    fn options_reject_bad_fields() {
        assert!(serde_json::from_value::<Options>(json!({ "values_per_line": 0 })).is_err());
        assert!(serde_json::from_value::<Options>(json!({ "width": 12 })).is_err());
    }

    #[test]
    fn serialize_options() {
        let options = Options::default();
        assert_eq!(
            serde_json::to_value(&options).expect("serialize"),
            json!({ "output": "audio.txt", "values_per_line": 22 })
        );
    }
}
