use crate::Value;

/// Performs a deep structural equality check between two values.
///
/// Numbers compare with `==`, so `NaN` is never equal to itself and `0`
/// equals `-0`. Object key order is ignored. Opaque handles are equal only
/// when they are the same handle.
///
/// # Examples
///
/// ```
/// use kitbag_value::{deep_equal, Value};
///
/// let a: Value = vec![Value::from(1), Value::from("two")].into();
/// let b: Value = vec![Value::from(1), Value::from("two")].into();
/// let c: Value = vec![Value::from(1)].into();
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Binary(a), Value::Binary(b)) => a == b,
        (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different types are never equal
        _ => false,
    }
}
