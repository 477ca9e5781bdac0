//! HTTP JSON service for RoomComfort
//!
//! Exposes one room engine over a small REST-style API. All request and
//! response bodies are the records of `comfort-schemas`; errors are returned
//! as `{"error": "<message>"}` with
//!
//! - `400` for malformed requests and rejected values
//! - `404` for unknown seats, time slots, control sources and missing readings
//! - `500` for anything else
//!
//! | Method | Path                                   | Body / query            |
//! |--------|----------------------------------------|-------------------------|
//! | GET    | `/health`                              |                         |
//! | GET    | `/grid`                                |                         |
//! | GET    | `/time-slots`                          |                         |
//! | GET    | `/readings`                            | archive of all readings |
//! | POST   | `/readings`                            | `SubmitReadingRequest`  |
//! | GET    | `/readings/{seat}/{slot}`              |                         |
//! | GET    | `/positions/{seat}/assessment`         | `?slot=`                |
//! | GET    | `/recommendations`                     | `?slot=&limit=`         |
//! | GET    | `/heatmap`                             | `?slot=`                |
//! | GET    | `/control-sources`                     |                         |
//! | PUT    | `/control-sources/{id}`                | `{"active": bool}`      |
//! | GET    | `/stats`                               |                         |

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod routes;
pub mod settings;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use settings::{Settings, SettingsError};
pub use state::AppState;
