//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Inserts open an explicit
//! transaction; a failure before commit rolls the whole insert back.

pub mod campaign_repo;
pub mod flash_repo;
pub mod session_repo;
pub mod signature_repo;
pub mod user_repo;

pub use campaign_repo::CampaignRepo;
pub use flash_repo::FlashRepo;
pub use session_repo::SessionRepo;
pub use signature_repo::SignatureRepo;
pub use user_repo::UserRepo;
