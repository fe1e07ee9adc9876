use gqlwire::unmarshal::{unmarshal, unmarshal_with_context};
use gqlwire::{Context, ContextUnmarshaler, Error, Id, Number, Unmarshaler, Value};
use serde_json::json;

#[test]
fn strings() -> Result<(), Box<dyn std::error::Error>> {
    let s: String = unmarshal(&Value::from("hi"))?;
    assert_eq!(s, "hi");

    let err = unmarshal::<String>(&Value::from(3i64)).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type Int to String");
    Ok(())
}

#[test]
fn ints() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(unmarshal::<i64>(&Value::from(-5i64))?, -5);
    assert_eq!(unmarshal::<i64>(&Value::from(" 12 "))?, 12);
    assert_eq!(unmarshal::<i32>(&Value::from(4.0))?, 4);

    let err = unmarshal::<i32>(&Value::from(i64::from(i32::MAX) + 1)).unwrap_err();
    assert!(matches!(err, Error::Overflow { target: "Int", .. }));

    let err = unmarshal::<i64>(&Value::Number(Number::U64(u64::MAX))).unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));

    let err = unmarshal::<i32>(&Value::from(1.5)).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type Float to Int");

    let err = unmarshal::<i64>(&Value::from("twelve")).unwrap_err();
    assert!(matches!(err, Error::Parse { expected: "Int64", .. }));
    Ok(())
}

#[test]
fn floats_and_booleans() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(unmarshal::<f64>(&Value::from(2i64))?, 2.0);
    assert_eq!(unmarshal::<f64>(&Value::from("0.25"))?, 0.25);
    assert!(unmarshal::<bool>(&Value::from(true))?);
    assert!(!unmarshal::<bool>(&Value::from("FALSE"))?);

    let err = unmarshal::<bool>(&Value::Null).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type Null to Boolean");
    let err = unmarshal::<f64>(&Value::Array(vec![])).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type List to Float");
    Ok(())
}

#[test]
fn ids_accept_strings_and_integers() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(unmarshal::<Id>(&Value::from("abc"))?, Id::from("abc"));
    assert_eq!(unmarshal::<Id>(&Value::from(7i64))?, Id::from("7"));
    let err = unmarshal::<Id>(&Value::from(true)).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type Boolean to ID");
    Ok(())
}

#[test]
fn options_and_lists() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(unmarshal::<Option<i64>>(&Value::Null)?, None);
    assert_eq!(unmarshal::<Option<i64>>(&Value::from(1i64))?, Some(1));

    let list = Value::from(json!([1, null, 3]));
    assert_eq!(
        unmarshal::<Vec<Option<i32>>>(&list)?,
        vec![Some(1), None, Some(3)]
    );
    assert_eq!(unmarshal::<Vec<String>>(&Value::from("solo"))?, vec!["solo"]);
    assert!(unmarshal::<Vec<String>>(&Value::Null)?.is_empty());

    let err = unmarshal::<Vec<i64>>(&Value::from(json!([1, "x"]))).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Limit(u32);

impl ContextUnmarshaler for Limit {
    fn unmarshal_with_context(&mut self, ctx: &Context, v: &Value) -> gqlwire::Result<()> {
        let max = ctx.value::<u32>().copied().unwrap_or(100);
        let n: i64 = unmarshal(v)?;
        if n < 0 || n > i64::from(max) {
            return Err(Error::message(format!("limit must be between 0 and {}", max)));
        }
        self.0 = n as u32;
        Ok(())
    }
}

#[test]
fn context_unmarshalers_see_request_values() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::new().with_value(10u32);
    assert_eq!(unmarshal_with_context::<Limit>(&ctx, &Value::from(5i64))?, Limit(5));
    let err = unmarshal_with_context::<Limit>(&ctx, &Value::from(50i64)).unwrap_err();
    assert_eq!(err.to_string(), "limit must be between 0 and 10");
    Ok(())
}

#[derive(Debug, Default)]
struct Point {
    x: i64,
    y: i64,
}

impl Unmarshaler for Point {
    fn unmarshal(&mut self, v: &Value) -> gqlwire::Result<()> {
        let Value::Object(_) = v else {
            return Err(Error::Conversion {
                found: v.kind(),
                expected: "Point",
            });
        };
        self.x = unmarshal(v.get("x").unwrap_or(&Value::Null))?;
        self.y = unmarshal(v.get("y").unwrap_or(&Value::Null))?;
        Ok(())
    }
}

#[test]
fn custom_input_objects() -> Result<(), Box<dyn std::error::Error>> {
    let p: Point = unmarshal(&Value::from(json!({"x": 1, "y": -2})))?;
    assert_eq!((p.x, p.y), (1, -2));
    let err = unmarshal::<Point>(&Value::from(json!({"x": 1}))).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type Null to Int64");
    let err = unmarshal::<Point>(&Value::from("p")).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert input of type String to Point");
    Ok(())
}
