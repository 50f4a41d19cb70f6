use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::math::mixed_fraction::{MixedFraction, StructuredFraction};

pub fn read_field_number_optional(json: &Value, field: &str) -> Result<Option<u64>> {
    match &json[field] {
        Value::Null => return Ok(None),
        Value::Bool(_) => return Err(anyhow!("field is a boolean, where number expected")),
        Value::Number(n) => match n.as_u64() {
            Some(x) => return Ok(Some(x)),
            None => return Err(anyhow!("number is not a non-negative integer")),
        },
        Value::String(_) => return Err(anyhow!("field is a literal, where number expected")),
        Value::Array(_) => return Err(anyhow!("field is a list, where number expected")),
        Value::Object(_) => return Err(anyhow!("field is an object, where number expected")),
    }
}

pub fn read_field_bool_optional(json: &Value, field: &str) -> Result<Option<bool>> {
    match &json[field] {
        Value::Null => return Ok(None),
        Value::Bool(b) => return Ok(Some(*b)),
        Value::Number(_) => return Err(anyhow!("field is a number, where boolean expected")),
        Value::String(_) => return Err(anyhow!("field is a literal, where boolean expected")),
        Value::Array(_) => return Err(anyhow!("field is a list, where boolean expected")),
        Value::Object(_) => return Err(anyhow!("field is an object, where boolean expected")),
    }
}

/**
 * Read a structured fraction from a json object. Fields that are absent or null are left unset.
 */
pub fn read_structured_fraction(json: &Value) -> Result<StructuredFraction> {
    if !json.is_object() {
        return Err(anyhow!("a structured fraction must be a json object"));
    }

    let result = StructuredFraction {
        is_negative: read_field_bool_optional(json, "isNegative").context("reading field `isNegative`")?,
        whole_number: read_field_number_optional(json, "wholeNumber").context("reading field `wholeNumber`")?,
        numerator: read_field_number_optional(json, "numerator").context("reading field `numerator`")?,
        denominator: read_field_number_optional(json, "denominator").context("reading field `denominator`")?,
    };
    log::debug!("read structured fraction {:?}", result);
    Ok(result)
}

pub fn parse_structured_fraction(s: &str) -> Result<StructuredFraction> {
    let json: Value = serde_json::from_str(s).context("parsing json")?;
    read_structured_fraction(&json)
}

pub fn write_structured_fraction(fraction: &MixedFraction) -> Result<String> {
    Ok(serde_json::to_string(&fraction.to_structured())?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use crate::{
        json::{parse_structured_fraction, read_structured_fraction, write_structured_fraction},
        math::mixed_fraction::{MixedFraction, StructuredFraction},
    };

    #[test]
    fn json_read_partial() {
        let record = read_structured_fraction(&json!({"numerator": 1, "denominator": 2})).unwrap();
        assert_eq!(
            record,
            StructuredFraction {
                is_negative: None,
                whole_number: None,
                numerator: Some(1),
                denominator: Some(2),
            }
        );
        assert_eq!(MixedFraction::from_structured(&record).to_string(), "1/2");

        let record = read_structured_fraction(&json!({})).unwrap();
        assert_eq!(record, StructuredFraction::default());
    }

    #[test]
    fn json_read_wrong_type() {
        let err = read_structured_fraction(&json!({"wholeNumber": "3"})).unwrap_err();
        assert!(format!("{:#}", err).contains("wholeNumber"));

        let err = read_structured_fraction(&json!({"numerator": -1})).unwrap_err();
        assert!(format!("{:#}", err).contains("numerator"));

        let err = read_structured_fraction(&json!({"isNegative": 1})).unwrap_err();
        assert!(format!("{:#}", err).contains("isNegative"));

        assert!(read_structured_fraction(&json!([1, 2])).is_err());
    }

    #[test]
    fn json_write_read() {
        let fraction: MixedFraction = "-3 1/2".parse().unwrap();
        let text = write_structured_fraction(&fraction).unwrap();
        assert_eq!(
            text,
            r#"{"isNegative":true,"wholeNumber":3,"numerator":1,"denominator":2}"#
        );
        let record = parse_structured_fraction(&text).unwrap();
        assert_eq!(MixedFraction::from_structured(&record), fraction);
    }

    #[test]
    fn json_testfile() {
        let fin = fs::read_to_string("testfiles/structured.json").unwrap();
        let record = parse_structured_fraction(&fin).unwrap();
        assert_eq!(MixedFraction::from_structured(&record).to_string(), "-2 3/4");
    }
}
