use crate::{
    env::Environment,
    error::{FieldError, FieldErrors, ParseCause, Reason},
    kind::{CoerceError, FieldKind, coerce},
    record::{FieldDescriptor, Record},
};

/// Fills every bound field of `record` from `env`.
///
/// All fields are visited in declaration order regardless of earlier
/// failures. Fields that bind successfully keep their new value even when the
/// overall result is an error; failed fields keep whatever they held before.
pub fn bind<R, E>(record: &mut R, env: &E) -> Result<(), FieldErrors>
where
    R: Record,
    E: Environment + ?Sized,
{
    let _span = tracing::debug_span!("bind", record = R::NAME).entered();
    let mut errors = FieldErrors::new();

    for field in R::FIELDS {
        if let Err(reason) = bind_field(record, field, env) {
            tracing::debug!(field = field.name, env_key = field.env_key, %reason, "field not bound");
            errors.add(FieldError {
                record: R::NAME,
                field: field.name,
                kind: field.kind,
                reason,
            });
        }
    }

    errors.into_result()
}

fn bind_field<R, E>(record: &mut R, field: &FieldDescriptor<R>, env: &E) -> Result<(), Reason>
where
    E: Environment + ?Sized,
{
    let Some(env_key) = field.env_key else {
        tracing::trace!(field = field.name, "no env key, skipping");
        return Ok(());
    };

    if !field.writable {
        return Err(Reason::Unsettable);
    }

    let value = env.lookup(env_key);
    if value.is_none() && field.is_required() {
        return Err(Reason::MissingRequired { env_key });
    }
    let value = value.unwrap_or_default();

    let coerced = match coerce(field.kind, &value) {
        Ok(coerced) => coerced,
        Err(CoerceError::Parse(cause)) => {
            return Err(Reason::ParseFailure {
                env_key,
                value,
                cause,
            });
        }
        Err(CoerceError::Unsupported) => return Err(Reason::UnsupportedType),
    };

    let Some(setter) = field.setter else {
        return Err(Reason::UnsupportedType);
    };
    if !setter(record, coerced) {
        return Err(match field.kind {
            FieldKind::Signed(_) | FieldKind::Unsigned(_) => Reason::ParseFailure {
                env_key,
                value,
                cause: ParseCause::OutOfRange(field.kind),
            },
            _ => Reason::UnsupportedType,
        });
    }
    tracing::trace!(field = field.name, env_key, "field bound");

    Ok(())
}
