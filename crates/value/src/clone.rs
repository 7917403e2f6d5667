//! Structural clone of [`Value`] trees.
//!
//! Every array and object in the output is a freshly allocated container;
//! no container is shared with the input at any depth.

use crate::{CloneError, Map, Value};

/// What a structural clone does with [`Value::Binary`] and [`Value::Opaque`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonPlainPolicy {
    /// Replace non-plain values with an empty object. Their type and data
    /// are lost.
    #[default]
    EmptyObject,
    /// Copy binary buffers byte for byte and keep opaque handles. Opaque
    /// handles are shared with the source since they cannot be copied.
    Preserve,
}

/// Options for [`try_deep_clone_with`] and [`deep_clone_with`].
#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// Maximum container nesting. A scalar root has depth 0, `[1]` has
    /// depth 1, `[[1]]` depth 2. `None` means unbounded.
    pub max_depth: Option<usize>,
    pub non_plain: NonPlainPolicy,
}

/// Deep clones a value.
///
/// Scalars are returned as equal copies. Arrays and objects are rebuilt
/// recursively, keeping element and key order. Binary buffers and opaque
/// handles become empty objects.
///
/// There is no depth limit: a pathologically deep tree exhausts the stack.
/// Use [`try_deep_clone_with`] with [`CloneOptions::max_depth`] to get an
/// error instead.
///
/// # Examples
///
/// ```
/// use kitbag_value::{deep_clone, Value};
///
/// let hobbies: Value = vec![Value::from("reading"), Value::from("gaming")].into();
/// let mut cloned = deep_clone(&hobbies);
/// cloned.as_array_mut().unwrap().push(Value::from("hiking"));
///
/// assert_eq!(hobbies.as_array().unwrap().len(), 2);
/// assert_eq!(cloned.as_array().unwrap().len(), 3);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (key.clone(), deep_clone(val)))
                .collect(),
        ),
        Value::Binary(_) | Value::Opaque(_) => Value::Object(Map::new()),
    }
}

/// Deep clones a value under `options`, failing when the tree nests deeper
/// than [`CloneOptions::max_depth`].
///
/// The depth check runs before any container is allocated at the offending
/// level, and an error never yields a partial tree.
pub fn try_deep_clone_with(value: &Value, options: &CloneOptions) -> Result<Value, CloneError> {
    clone_at(value, options, 0)
}

/// Deep clones a value under `options` with no depth limit.
///
/// [`CloneOptions::max_depth`] is ignored.
pub fn deep_clone_with(value: &Value, options: &CloneOptions) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| deep_clone_with(item, options))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (key.clone(), deep_clone_with(val, options)))
                .collect(),
        ),
        Value::Binary(_) | Value::Opaque(_) => clone_non_plain(value, options.non_plain),
        scalar => deep_clone(scalar),
    }
}

fn clone_at(value: &Value, options: &CloneOptions, depth: usize) -> Result<Value, CloneError> {
    let enter = || -> Result<usize, CloneError> {
        let next = depth + 1;
        match options.max_depth {
            Some(limit) if next > limit => Err(CloneError::DepthExceeded { limit }),
            _ => Ok(next),
        }
    };

    Ok(match value {
        Value::Array(items) => {
            let next = enter()?;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(clone_at(item, options, next)?);
            }
            Value::Array(out)
        }
        Value::Object(map) => {
            let next = enter()?;
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key.clone(), clone_at(val, options, next)?);
            }
            Value::Object(out)
        }
        Value::Binary(_) | Value::Opaque(_) => clone_non_plain(value, options.non_plain),
        scalar => deep_clone(scalar),
    })
}

fn clone_non_plain(value: &Value, policy: NonPlainPolicy) -> Value {
    match (policy, value) {
        (NonPlainPolicy::Preserve, Value::Binary(bytes)) => Value::Binary(bytes.clone()),
        (NonPlainPolicy::Preserve, Value::Opaque(handle)) => Value::Opaque(handle.clone()),
        _ => Value::Object(Map::new()),
    }
}
