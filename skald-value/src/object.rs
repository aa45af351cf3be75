use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::EngineError;
use crate::value::{NativeFunction, Value};

/// A shared property-bearing engine object.
///
/// Clones share the same backing store, mirroring reference semantics in
/// the scripting language. Single-threaded by construction (`Rc`).
#[derive(Clone, Default)]
pub struct Object {
    props: Rc<RefCell<HashMap<String, Value>>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a property. A missing key reads as Undefined.
    pub fn get(&self, key: &str) -> Value {
        self.props
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Write a property, overwriting any prior value under the key.
    pub fn set(&self, key: &str, value: Value) {
        self.props.borrow_mut().insert(key.to_string(), value);
    }

    /// Remove a property; returns whether the key was present.
    pub fn delete(&self, key: &str) -> bool {
        self.props.borrow_mut().remove(key).is_some()
    }

    pub fn has(&self, key: &str) -> bool {
        self.props.borrow().contains_key(key)
    }

    /// Install a named native callable as a property.
    pub fn add_function(
        &self,
        name: &str,
        f: impl Fn(&[Value]) -> Result<Value, EngineError> + 'static,
    ) {
        self.set(name, Value::Function(NativeFunction::new(name, f)));
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.props, &other.props)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self.props.borrow();
        let mut keys: Vec<&String> = props.keys().collect();
        keys.sort();
        f.debug_struct("Object").field("keys", &keys).finish()
    }
}
