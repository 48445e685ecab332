use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, HashMap};

// field names carrying the internal marker never serialize
static DEFAULT_EXCLUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^_").unwrap());

/// A value that can reduce itself to a JSON-safe form.
///
/// `None` means "not representable": the owning field is silently
/// omitted from the projection rather than failing the caller.
pub trait ToProjected {
    fn to_projected(&self) -> Option<Value>;
}

/// Capability to project an object into a JSON-safe mapping.
///
/// Each record declares its serializable fields through a
/// [`Projection`] builder; fields it does not declare never appear in
/// the output. Nested projectables, sequences, and mappings reduce
/// recursively. Projection must terminate; cyclic graphs are not
/// supported.
pub trait Projectable {
    fn project(&self) -> Map<String, Value>;

    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Value::Object(self.project()))
    }

    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Value::Object(self.project()))
    }
}

/// Builder for the JSON-safe mapping produced by [`Projectable::project`].
///
/// Fields land in declaration order. A field is skipped when its name
/// matches the exclusion pattern or its value is not representable.
pub struct Projection {
    exclude: Regex,
    map: Map<String, Value>,
}

impl Projection {
    pub fn new() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.clone(),
            map: Map::new(),
        }
    }

    pub fn with_exclude(exclude: Regex) -> Self {
        Self {
            exclude,
            map: Map::new(),
        }
    }

    pub fn field<V: ToProjected + ?Sized>(mut self, name: &str, value: &V) -> Self {
        if self.exclude.is_match(name) {
            return self;
        }
        if let Some(projected) = value.to_projected() {
            self.map.insert(name.to_string(), projected);
        }
        self
    }

    pub fn finish(self) -> Map<String, Value> {
        self.map
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new()
    }
}

impl ToProjected for bool {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

impl ToProjected for str {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}

impl ToProjected for String {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

macro_rules! int_to_projected {
    ($($ty:ty),*) => {
        $(impl ToProjected for $ty {
            fn to_projected(&self) -> Option<Value> {
                Some(Value::Number(Number::from(*self as i64)))
            }
        })*
    };
}

int_to_projected!(i8, i16, i32, i64, u8, u16, u32);

impl ToProjected for u64 {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::Number(Number::from(*self)))
    }
}

impl ToProjected for usize {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::Number(Number::from(*self as u64)))
    }
}

// NaN and infinity have no JSON form, so they count as unrepresentable
impl ToProjected for f64 {
    fn to_projected(&self) -> Option<Value> {
        Number::from_f64(*self).map(Value::Number)
    }
}

impl ToProjected for f32 {
    fn to_projected(&self) -> Option<Value> {
        Number::from_f64(f64::from(*self)).map(Value::Number)
    }
}

impl ToProjected for Value {
    fn to_projected(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl<T: ToProjected> ToProjected for Option<T> {
    fn to_projected(&self) -> Option<Value> {
        match self {
            Some(inner) => inner.to_projected(),
            None => Some(Value::Null),
        }
    }
}

// one unrepresentable element poisons the whole sequence
impl<T: ToProjected> ToProjected for [T] {
    fn to_projected(&self) -> Option<Value> {
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            items.push(item.to_projected()?);
        }
        Some(Value::Array(items))
    }
}

impl<T: ToProjected> ToProjected for Vec<T> {
    fn to_projected(&self) -> Option<Value> {
        self.as_slice().to_projected()
    }
}

impl<T: ToProjected> ToProjected for BTreeMap<String, T> {
    fn to_projected(&self) -> Option<Value> {
        let mut map = Map::new();
        for (key, value) in self {
            map.insert(key.clone(), value.to_projected()?);
        }
        Some(Value::Object(map))
    }
}

impl<T: ToProjected> ToProjected for HashMap<String, T> {
    fn to_projected(&self) -> Option<Value> {
        let mut map = Map::new();
        for (key, value) in self {
            map.insert(key.clone(), value.to_projected()?);
        }
        Some(Value::Object(map))
    }
}

impl<T: ToProjected + ?Sized> ToProjected for &T {
    fn to_projected(&self) -> Option<Value> {
        (**self).to_projected()
    }
}
