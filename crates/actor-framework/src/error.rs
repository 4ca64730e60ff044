//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity errors travel inside
//! [`FrameworkError::EntityError`] and can be recovered with [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers a concrete entity error, or returns `self` unchanged if this is
    /// plumbing failure or a different error type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom {0}")]
    struct Boom(u8);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(Boom(7)));
        assert_eq!(err.downcast_entity::<Boom>().unwrap(), Boom(7));
    }

    #[test]
    fn downcast_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.downcast_entity::<Boom>().unwrap_err();
        assert!(back.to_string().contains("other"));

        let closed = FrameworkError::ActorClosed.downcast_entity::<Boom>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
