//! Two-variant result type used by every use case to report expected,
//! domain-level failures as data.
//!
//! Infrastructure faults never travel through [`Either`]; use cases return
//! them through an outer [`Result`] so they can be propagated with `?`.

/// Either a failure value or a success value, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an Either may carry a domain failure that must be handled"]
pub enum Either<F, S> {
    Failure(F),
    Success(S),
}

impl<F, S> Either<F, S> {
    pub fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the failure payload, `None` when this is a success.
    pub fn failure_value(&self) -> Option<&F> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    /// Borrow the success payload, `None` when this is a failure.
    pub fn success_value(&self) -> Option<&S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Take the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when this is a failure. Reaching the wrong variant
    /// is a programming error, not a recoverable condition.
    #[track_caller]
    pub fn expect_success(self, msg: &str) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{msg}"),
        }
    }

    /// Take the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` when this is a success.
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> F {
        match self {
            Self::Failure(value) => value,
            Self::Success(_) => panic!("{msg}"),
        }
    }

    pub fn as_ref(&self) -> Either<&F, &S> {
        match self {
            Self::Failure(value) => Either::Failure(value),
            Self::Success(value) => Either::Success(value),
        }
    }

    pub fn map<T>(self, op: impl FnOnce(S) -> T) -> Either<F, T> {
        match self {
            Self::Failure(value) => Either::Failure(value),
            Self::Success(value) => Either::Success(op(value)),
        }
    }

    pub fn map_failure<G>(self, op: impl FnOnce(F) -> G) -> Either<G, S> {
        match self {
            Self::Failure(value) => Either::Failure(op(value)),
            Self::Success(value) => Either::Success(value),
        }
    }

    /// Convert into a standard [`Result`], for callers that want `?`.
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

impl<F, S> From<Either<F, S>> for Result<S, F> {
    fn from(either: Either<F, S>) -> Self {
        match either {
            Either::Failure(value) => Err(value),
            Either::Success(value) => Ok(value),
        }
    }
}
