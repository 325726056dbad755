//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod class_repo;
pub mod group_repo;
pub mod note_repo;
pub mod session_repo;
pub mod user_repo;

pub use class_repo::ClassRepo;
pub use group_repo::GroupRepo;
pub use note_repo::NoteRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
