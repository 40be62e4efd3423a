// Monostate: create as many `Ceo` values as you like, they all read and
// write the same storage.
// Limitation: the call site looks like it builds independent objects.

use std::fmt;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CeoState {
    name: String,
    age: u32,
}

static CEO_STATE: RwLock<CeoState> = RwLock::new(CeoState {
    name: String::new(),
    age: 0,
});

#[derive(Debug, Default, Clone, Copy)]
pub struct Ceo;

impl Ceo {
    pub fn new() -> Self {
        Ceo
    }

    pub fn name(&self) -> String {
        CEO_STATE.read().unwrap_or_else(PoisonError::into_inner).name.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        CEO_STATE.write().unwrap_or_else(PoisonError::into_inner).name = name.into();
    }

    pub fn age(&self) -> u32 {
        CEO_STATE.read().unwrap_or_else(PoisonError::into_inner).age
    }

    pub fn set_age(&self, age: u32) {
        CEO_STATE.write().unwrap_or_else(PoisonError::into_inner).age = age;
    }
}

impl fmt::Display for Ceo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = CEO_STATE.read().unwrap_or_else(PoisonError::into_inner);
        write!(f, "CEO{{name='{}', age={}}}", state.name, state.age)
    }
}
