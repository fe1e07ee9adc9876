#![no_main]
use gqlwire::{Value, encode_to_string};
use libfuzzer_sys::fuzz_target;

fn same_shape(a: &serde_json::Value, b: &serde_json::Value) -> bool {
    use serde_json::Value as J;
    match (a, b) {
        // Float digits may differ by parser rounding; only the kind must survive.
        (J::Number(x), J::Number(y)) => x.is_f64() || y.is_f64() || x == y,
        (J::Array(x), J::Array(y)) => x.len() == y.len() && x.iter().zip(y).all(|(l, r)| same_shape(l, r)),
        (J::Object(x), J::Object(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|((kl, l), (kr, r))| kl == kr && same_shape(l, r))
        }
        _ => a == b,
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(json) = serde_json::from_str::<serde_json::Value>(s) else {
        return;
    };
    let out = encode_to_string(&Value::from(json.clone()));
    let back: serde_json::Value = serde_json::from_str(&out).expect("encoder produced invalid JSON");
    assert!(same_shape(&json, &back), "shape changed: {} -> {}", s, out);
});
