#![no_main]
use arbitrary::Arbitrary;
use gqlwire::{Array, Element, Empty, FALSE, Marshaler, NULL, Object, TRUE, encode_to_string};
use libfuzzer_sys::{arbitrary, fuzz_target};

const MAX_DEPTH: usize = 6;

#[derive(Arbitrary, Debug)]
enum Node {
    Null,
    True,
    False,
    Empty,
    BoxedEmpty,
    SomeEmpty,
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Node>),
    Fields(Vec<(String, Node)>),
}

impl Node {
    fn element(&self, depth: usize) -> Element<'_> {
        if depth >= MAX_DEPTH {
            return NULL.into();
        }
        match self {
            Node::Null => NULL.into(),
            Node::True => TRUE.into(),
            Node::False => FALSE.into(),
            Node::Empty => Empty.into(),
            Node::BoxedEmpty => {
                let boxed: Box<dyn Marshaler> = Box::new(Empty);
                boxed.into()
            }
            Node::SomeEmpty => Some(Empty).into(),
            Node::Int(i) => (*i).into(),
            Node::Float(f) => (*f).into(),
            Node::Str(s) => s.as_str().into(),
            Node::List(items) => items
                .iter()
                .map(|n| n.element(depth + 1))
                .collect::<Array>()
                .into(),
            Node::Fields(fields) => {
                let mut obj = Object::with_capacity(fields.len());
                for (k, v) in fields {
                    obj.insert(k.as_str(), v.element(depth + 1));
                }
                obj.into()
            }
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Node::Empty | Node::BoxedEmpty | Node::SomeEmpty)
    }
}

fuzz_target!(|root: Vec<Node>| {
    let arr: Array = root.iter().map(|n| n.element(0)).collect();
    let out = encode_to_string(&arr);
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("encoder produced invalid JSON");
    let kept = root.iter().filter(|n| !n.is_empty()).count();
    assert_eq!(parsed.as_array().map(Vec::len), Some(kept));
});
