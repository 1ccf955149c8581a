//! Axum boundary for the Turnkey use cases.
//!
//! Routes parse request bodies into domain values, run a use case and map the
//! returned `Either` onto an HTTP response:
//!
//! | Outcome | Status |
//! |---|---|
//! | owner registered | `201 Created` |
//! | access token issued | `201 Created` |
//! | invalid request body | `400 Bad Request` |
//! | `WrongCredentialsError` | `401 Unauthorized` |
//! | `OwnerAlreadyExistsError` | `409 Conflict` |
//! | infrastructure fault | `500 Internal Server Error` |

pub mod routes;

pub use routes::{ApiError, ErrorResponse, authenticate, register_owner};
