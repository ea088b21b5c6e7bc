use memeboard_types::Principal;

use crate::error::SdkResult;

/// Supplies the principal on whose behalf a board call runs.
///
/// This is the seam to whatever authenticates callers. The board asks for
/// the identity once per mutating call and records it as author or voter.
pub trait IdentitySource {
    fn principal(&self) -> SdkResult<Principal>;
}

/// An identity source that always answers with the same principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedIdentity(Principal);

impl FixedIdentity {
    pub fn new(principal: Principal) -> Self {
        Self(principal)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(Principal::new(name))
    }
}

impl IdentitySource for FixedIdentity {
    fn principal(&self) -> SdkResult<Principal> {
        Ok(self.0.clone())
    }
}

impl IdentitySource for Principal {
    fn principal(&self) -> SdkResult<Principal> {
        Ok(self.clone())
    }
}
