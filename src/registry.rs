// SPDX-License-Identifier: PMPL-1.0-or-later

//! Minimal service registry used to compose the application at startup.
//!
//! Factories are registered under string tokens and resolved lazily. The first
//! `resolve` for a token runs its factory and caches the instance; every later
//! `resolve` returns the same `Rc`. Storage is type-erased (`dyn Any`) but the
//! public API is typed: `resolve::<T>` downcasts on retrieval and reports a
//! mismatch as an error instead of panicking.
//!
//! Factories receive the registry so they can resolve other services. Lookup is
//! not guarded against cyclic factories (a factory resolving its own token
//! would recurse); the composition graph here has depth one.

use anyhow::{anyhow, bail, Result};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type Factory = Box<dyn Fn(&Registry) -> Rc<dyn Any>>;

#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, Factory>,
    instances: RefCell<HashMap<String, Rc<dyn Any>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `token`. Registering the same token again
    /// replaces the previous factory; already-cached instances are kept.
    pub fn register<T, F>(&mut self, token: &str, factory: F)
    where
        T: 'static,
        F: Fn(&Registry) -> T + 'static,
    {
        self.factories.insert(
            token.to_string(),
            Box::new(move |registry| Rc::new(factory(registry)) as Rc<dyn Any>),
        );
    }

    /// Resolve the memoized instance for `token`, constructing it on first
    /// access. Fails if no factory was registered for the token or if the
    /// cached instance is not a `T`.
    pub fn resolve<T: 'static>(&self, token: &str) -> Result<Rc<T>> {
        if let Some(instance) = self.instances.borrow().get(token) {
            return downcast(token, Rc::clone(instance));
        }

        let Some(factory) = self.factories.get(token) else {
            bail!("service not registered: {token}");
        };

        // The instances borrow is released before the factory runs so that a
        // factory may resolve other tokens.
        let instance = factory(self);
        self.instances
            .borrow_mut()
            .insert(token.to_string(), Rc::clone(&instance));
        downcast(token, instance)
    }
}

fn downcast<T: 'static>(token: &str, instance: Rc<dyn Any>) -> Result<Rc<T>> {
    instance
        .downcast::<T>()
        .map_err(|_| anyhow!("service resolved to unexpected type: {token}"))
}
