// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use partio::application::LedgerService;
use partio::domain::PersonId;

/// Helper to create a fresh in-memory ledger service
pub fn test_service() -> LedgerService {
    LedgerService::new()
}

/// Test fixture: standard roster setups
pub struct StandardRoster;

impl StandardRoster {
    /// Create the two-person roster used by most scenarios
    pub async fn alice_and_bob(service: &LedgerService) -> Result<(PersonId, PersonId)> {
        let alice = service.add_person("Alice").await?;
        let bob = service.add_person("Bob").await?;
        Ok((alice, bob))
    }

    /// Two people splitting 60/40
    pub async fn alice_and_bob_60_40(service: &LedgerService) -> Result<(PersonId, PersonId)> {
        let (alice, bob) = Self::alice_and_bob(service).await?;
        service
            .update_percentages(&[(alice, 60.0), (bob, 40.0)])
            .await?;
        Ok((alice, bob))
    }
}
