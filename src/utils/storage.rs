// ============================================================================
// STORAGE - Acceso a almacenamiento clave/valor persistente
// ============================================================================
// En el navegador es localStorage (gloo_storage); en tests, un HashMap en memoria
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};

use crate::error::AuthError;

/// Almacenamiento de strings en crudo (sin serializar)
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// localStorage del navegador
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| AuthError::Storage(format!("No se pudo guardar {} en localStorage", key)))
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| AuthError::Storage(format!("No se pudo eliminar {} de localStorage", key)))
    }
}

/// Almacenamiento en memoria (solo tests)
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
