//! Git operations abstraction layer
//!
//! The resolver never touches a repository. This module is how its caller
//! collects tag names and, optionally, records the resolved version as a
//! local tag.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use patch_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags()?;
//! println!("{} tags", tags.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// Resolution runs on a single thread, so implementations need not be
/// `Sync`; `git2::Repository` is not.
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to the
/// appropriate [crate::error::ReleaseError] variants.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Order is unspecified; callers must not depend on it.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Find a tag by name and get the OID it points at
    ///
    /// Handles both lightweight and annotated tags.
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - Object ID of the tag if it exists
    /// * `Ok(None)` - If the tag doesn't exist
    /// * `Err` - If there's a Git error
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Get the OID of the commit HEAD points at
    fn head_oid(&self) -> Result<Oid>;

    /// Create a lightweight tag at given OID
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, OID doesn't exist, or Git error occurs
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;
}
