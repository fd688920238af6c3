//! The question bank: paginated listing, search, creation, deletion and
//! per-category listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of questions with the category map |
//! | POST | `/questions` | Search (`searchTerm`) or create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{id}/questions` | Page of questions in one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgQuestionRepository, QuestionRepository};
pub use services::QuestionService;
