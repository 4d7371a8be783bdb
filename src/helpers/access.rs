//! One capability check instead of per-entity owner comparisons.

use crate::models;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
    Moderate,
}

pub trait Owned {
    fn owner_id(&self) -> i32;
}

impl Owned for models::Review {
    fn owner_id(&self) -> i32 {
        self.user_id
    }
}

impl Owned for models::Business {
    fn owner_id(&self) -> i32 {
        self.user_id
    }
}

impl Owned for models::Product {
    fn owner_id(&self) -> i32 {
        self.user_id
    }
}

pub fn can(actor: &models::User, action: Action, resource: &dyn Owned) -> bool {
    match action {
        // a review/product/business is mutable by its owner only
        Action::Edit | Action::Delete => actor.id == resource.owner_id(),
        Action::Moderate => actor.is_admin(),
    }
}
