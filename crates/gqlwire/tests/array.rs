use gqlwire::{
    Array, Context, Element, Empty, FALSE, Marshaler, NULL, Object, Sink, TRUE, WriterFn,
    encode_to_string, wrap_context_marshaler,
};
use proptest::prelude::*;

#[test]
fn empty_array() {
    assert_eq!(encode_to_string(&Array::new()), "[]");
}

#[test]
fn all_empty_elements() {
    let arr: Array = vec![Element::Empty, Element::Empty].into();
    assert_eq!(encode_to_string(&arr), "[]");
}

#[test]
fn literals_in_order() {
    let mut arr = Array::new();
    arr.push(TRUE);
    arr.push(NULL);
    arr.push(FALSE);
    assert_eq!(encode_to_string(&arr), "[true,null,false]");
}

#[test]
fn empty_leaves_no_stray_commas() {
    let mut arr = Array::new();
    arr.push(Empty);
    arr.push(1i64);
    arr.push(Empty);
    arr.push(Empty);
    arr.push("two");
    arr.push(Empty);
    assert_eq!(arr.len(), 6);
    assert_eq!(encode_to_string(&arr), r#"[1,"two"]"#);
}

#[test]
fn wrapped_empty_is_still_omitted() -> Result<(), Box<dyn std::error::Error>> {
    let boxed: Box<dyn Marshaler> = Box::new(Empty);
    let mut arr = Array::new();
    arr.push(1i64);
    arr.push(boxed);
    arr.push(Some(Empty));
    arr.push(Element::value(Empty));
    arr.push(Element::value(&Empty));
    arr.push(2i64);
    assert_eq!(arr.len(), 6);
    let out = encode_to_string(&arr);
    assert_eq!(out, "[1,2]");
    let parsed: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(parsed, serde_json::json!([1, 2]));
    Ok(())
}

#[test]
fn empty_behind_adapter_is_omitted() {
    let ctx = Context::new();
    let mut arr = Array::new();
    arr.push(wrap_context_marshaler(&ctx, &Empty));
    arr.push(true);
    arr.push(wrap_context_marshaler(&ctx, &Empty));
    assert_eq!(encode_to_string(&arr), "[true]");
    assert!(!ctx.has_errors());
}

#[test]
fn wrapped_empty_element_reports_empty() {
    let boxed: Box<dyn Marshaler> = Box::new(Some(Empty));
    assert!(Element::from(boxed).is_empty());
    assert!(Element::from(Some(Empty)).is_empty());
    assert!(!Element::from(None::<Empty>).is_empty());
    assert!(!Element::from(NULL).is_empty());
}

#[test]
fn nested_composites() {
    let mut inner = Array::new();
    inner.push(Empty);
    inner.push(false);
    let mut outer = Array::new();
    outer.push(inner);
    outer.push(Object::new().field("id", 7i64));
    outer.push(Array::new());
    assert_eq!(encode_to_string(&outer), r#"[[false],{"id":7},[]]"#);
}

#[test]
fn writer_fn_elements() {
    let mut arr = Array::new();
    arr.push(WriterFn::new(|w| w.write_bytes(b"42")));
    arr.push(None::<i64>);
    arr.push(Some(3i64));
    assert_eq!(encode_to_string(&arr), "[42,null,3]");
}

#[derive(Debug, Clone)]
enum Tok {
    Null,
    True,
    False,
    Empty,
    BoxedEmpty,
    SomeEmpty,
    ValueEmpty,
    Int(i64),
    Str(String),
}

impl Tok {
    fn element(&self) -> Element<'static> {
        match self {
            Tok::Null => NULL.into(),
            Tok::True => TRUE.into(),
            Tok::False => FALSE.into(),
            Tok::Empty => Empty.into(),
            Tok::BoxedEmpty => {
                let boxed: Box<dyn Marshaler> = Box::new(Empty);
                boxed.into()
            }
            Tok::SomeEmpty => Some(Empty).into(),
            Tok::ValueEmpty => Element::value(Empty),
            Tok::Int(i) => (*i).into(),
            Tok::Str(s) => s.clone().into(),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(
            self,
            Tok::Empty | Tok::BoxedEmpty | Tok::SomeEmpty | Tok::ValueEmpty
        )
    }
}

fn tok() -> impl Strategy<Value = Tok> {
    prop_oneof![
        Just(Tok::Null),
        Just(Tok::True),
        Just(Tok::False),
        Just(Tok::Empty),
        Just(Tok::BoxedEmpty),
        Just(Tok::SomeEmpty),
        Just(Tok::ValueEmpty),
        any::<i64>().prop_map(Tok::Int),
        "[a-z\"\\\\ \n]{0,8}".prop_map(Tok::Str),
    ]
}

proptest! {
    #[test]
    fn empty_is_equivalent_to_removal(toks in prop::collection::vec(tok(), 0..32)) {
        let arr: Array = toks.iter().map(Tok::element).collect();
        let parts: Vec<String> = toks
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| encode_to_string(&t.element()))
            .collect();
        let expected = format!("[{}]", parts.join(","));
        prop_assert_eq!(encode_to_string(&arr), expected);
    }

    #[test]
    fn array_output_is_valid_json(toks in prop::collection::vec(tok(), 0..32)) {
        let arr: Array = toks.iter().map(Tok::element).collect();
        let out = encode_to_string(&arr);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let kept = toks.iter().filter(|t| !t.is_empty()).count();
        prop_assert_eq!(parsed.as_array().map(Vec::len), Some(kept));
    }
}
