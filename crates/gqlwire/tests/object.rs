use gqlwire::{
    Array, Context, Element, Empty, Id, Marshaler, NULL, Object, encode_to_string,
    wrap_context_marshaler,
};

#[test]
fn empty_object() {
    assert_eq!(encode_to_string(&Object::new()), "{}");
    let only_empty = Object::new().field("a", Empty).field("b", Empty);
    assert_eq!(encode_to_string(&only_empty), "{}");
}

#[test]
fn fields_in_insertion_order() {
    let obj = Object::new()
        .field("zeta", 1i64)
        .field("alpha", "x")
        .field("mid", NULL);
    assert_eq!(encode_to_string(&obj), r#"{"zeta":1,"alpha":"x","mid":null}"#);
    assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn empty_fields_are_dropped_with_separators() {
    let mut obj = Object::new();
    obj.insert("skipped", Empty);
    obj.insert("id", Id::from(10i64));
    obj.insert("also_skipped", Empty);
    obj.insert("tags", Array::new());
    assert_eq!(obj.len(), 4);
    assert_eq!(encode_to_string(&obj), r#"{"id":"10","tags":[]}"#);
}

#[test]
fn wrapped_empty_field_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::new();
    let boxed: Box<dyn Marshaler + '_> = Box::new(Empty);
    let obj = Object::new()
        .field("a", Some(Empty))
        .field("b", 1i64)
        .field("c", boxed)
        .field("d", Element::value(Empty))
        .field("e", wrap_context_marshaler(&ctx, &Empty));
    let out = encode_to_string(&obj);
    assert_eq!(out, r#"{"b":1}"#);
    let parsed: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(parsed, serde_json::json!({"b": 1}));
    assert_eq!(encode_to_string(&Object::new().field("a", Some(Empty))), "{}");
    Ok(())
}

#[test]
fn keys_are_escaped() {
    let obj = Object::new().field(String::from("we\"ird\nkey"), true);
    assert_eq!(encode_to_string(&obj), r#"{"we\"ird\nkey":true}"#);
}

#[test]
fn failed_field_keeps_the_object_well_formed() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::new();
    let bad = gqlwire::Float(f64::INFINITY);
    let field_ctx = ctx.with_field("score");
    let obj = Object::new()
        .field("name", "ada")
        .field("score", wrap_context_marshaler(&field_ctx, &bad));
    let out = encode_to_string(&obj);
    assert_eq!(out, r#"{"name":"ada","score":null}"#);
    let parsed: serde_json::Value = serde_json::from_str(&out)?;
    assert!(parsed["score"].is_null());
    assert_eq!(ctx.errors().len(), 1);
    Ok(())
}
