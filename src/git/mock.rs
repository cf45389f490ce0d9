use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: RefCell<HashMap<String, Oid>>,
    head: Option<Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository with no HEAD
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(HashMap::new()),
            head: None,
        }
    }

    /// Create a mock repository holding the given tags, all at `head`
    pub fn with_tags<I, S>(head: Oid, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = MockRepository::new();
        repo.set_head(head);
        for tag in tags {
            repo.add_tag(tag, head);
        }
        repo
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.get_mut().insert(name.into(), oid);
    }

    /// Set the HEAD commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().keys().cloned().collect())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.borrow().get(tag_name).copied())
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| ReleaseError::tag("Cannot resolve HEAD: repository has no commits"))
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        if tags.contains_key(name) {
            return Err(ReleaseError::tag(format!(
                "Cannot create tag: '{}' already exists",
                name
            )));
        }
        tags.insert(name.to_string(), oid);
        Ok(())
    }
}
