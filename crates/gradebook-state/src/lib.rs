//! Gradebook-State: persistence and account services around the core
//!
//! The core crate computes; this crate remembers. It stores student
//! accounts, course results and each student's running CGPA, and offers the
//! sign-up/login and course workflows that feed the core.
//!
//! ## Key Components
//!
//! - `StudentStore` / `CourseStore` / `StandingStore`: async storage traits
//! - `MemoryStore`: in-memory backend
//! - `JsonFileStore`: single-file JSON backend with atomic writes
//! - `Accounts`: sign-up, login, logout; login yields an explicit `Session`
//! - `Gradebook`: course add/edit/delete, dashboard, semester calculation

pub mod accounts;
pub mod credentials;
mod document;
mod error;
pub mod fakes;
pub mod file_store;
pub mod schema;
pub mod service;
pub mod storage_traits;

pub use accounts::{Accounts, Session, SignupForm, MIN_PASSWORD_LEN};
pub use credentials::{PasswordDigest, DEFAULT_DIGEST_ROUNDS, MAX_DIGEST_ROUNDS};
pub use error::StorageError;
pub use fakes::MemoryStore;
pub use file_store::JsonFileStore;
pub use schema::{
    CourseId, NewCourse, NewStudent, SemesterStanding, Standing, StandingUpdate, StoredCourse,
    StudentId, StudentProfile, StudentRecord,
};
pub use service::{CourseForm, Dashboard, Gradebook};
pub use storage_traits::{CourseStore, GradebookStore, StandingStore, StorageResult, StudentStore};
