use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

use crate::{
    binder::bind,
    env::Environment,
    error::{BindError, InvalidTarget},
    record::Record,
};

type ErasedBind = fn(&mut dyn Any, &dyn Environment) -> Result<(), BindError>;

/// Binds targets whose concrete type is only known at runtime.
///
/// Record types must be registered up front. Targets that are missing or not
/// of a registered type are rejected before any field is visited.
#[derive(Default)]
pub struct Registry {
    records: HashMap<TypeId, ErasedBind>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.records.insert(TypeId::of::<R>(), bind_erased::<R>);
        self
    }

    pub fn bind(&self, target: Option<&mut dyn Any>, env: &dyn Environment) -> Result<(), BindError> {
        let target = target.ok_or(InvalidTarget::Null)?;
        let bind_record = self
            .records
            .get(&(*target).type_id())
            .ok_or(InvalidTarget::NotARecord)?;

        bind_record(target, env)
    }
}

fn bind_erased<R: Record>(target: &mut dyn Any, env: &dyn Environment) -> Result<(), BindError> {
    let record = target
        .downcast_mut::<R>()
        .ok_or(InvalidTarget::NotARecord)?;

    Ok(bind(record, env)?)
}
