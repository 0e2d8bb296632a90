use std::sync::Arc;

use tokio::sync::RwLock;

use crate::errors::AppError;

use super::models::{Activity, Catalog};

/// Shared handle over the activity catalog.
///
/// Every check-then-mutate runs under a single write guard, so two signups
/// racing for the last spot cannot both succeed.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    seed: Arc<Catalog>,
    catalog: Arc<RwLock<Catalog>>,
}

impl ActivityStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            seed: Arc::new(catalog.clone()),
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Catalog::seed())
    }

    pub async fn get_all(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Result<Activity, AppError> {
        self.catalog
            .read()
            .await
            .find(name)
            .cloned()
            .ok_or(AppError::ActivityNotFound)
    }

    pub async fn len(&self) -> usize {
        self.catalog.read().await.len()
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> Result<(), AppError> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog.find_mut(name).ok_or(AppError::ActivityNotFound)?;
        activity.sign_up(email).inspect_err(|e| {
            tracing::warn!(activity = name, email, error = %e, "signup rejected");
        })?;
        tracing::info!(
            activity = name,
            email,
            spots_left = activity.spots_left(),
            "participant signed up"
        );
        Ok(())
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> Result<(), AppError> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog.find_mut(name).ok_or(AppError::ActivityNotFound)?;
        activity.unregister(email).inspect_err(|e| {
            tracing::warn!(activity = name, email, error = %e, "unregister rejected");
        })?;
        tracing::info!(activity = name, email, "participant unregistered");
        Ok(())
    }

    /// Puts back the catalog this store was created with.
    pub async fn reset(&self) {
        *self.catalog.write().await = (*self.seed).clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_activity() {
        let store = ActivityStore::seeded();

        assert!(matches!(
            store.get("Underwater Basket Weaving").await,
            Err(AppError::ActivityNotFound)
        ));
    }

    #[tokio::test]
    async fn test_add_and_remove_participant() {
        let store = ActivityStore::seeded();
        let before = store.get("Basketball Club").await.unwrap().participants.len();

        store
            .add_participant("Basketball Club", "new@mergington.edu")
            .await
            .unwrap();
        assert!(store
            .get("Basketball Club")
            .await
            .unwrap()
            .is_registered("new@mergington.edu"));

        store
            .remove_participant("Basketball Club", "new@mergington.edu")
            .await
            .unwrap();
        let after = store.get("Basketball Club").await.unwrap();
        assert_eq!(after.participants.len(), before);
        assert!(!after.is_registered("new@mergington.edu"));
    }

    #[tokio::test]
    async fn test_unknown_activity_is_checked_first() {
        let store = ActivityStore::seeded();

        assert!(matches!(
            store.add_participant("Nope", "a@mergington.edu").await,
            Err(AppError::ActivityNotFound)
        ));
        assert!(matches!(
            store.remove_participant("Nope", "a@mergington.edu").await,
            Err(AppError::ActivityNotFound)
        ));
    }

    #[tokio::test]
    async fn test_remove_unregistered_participant() {
        let store = ActivityStore::seeded();

        assert!(matches!(
            store
                .remove_participant("Soccer Team", "ghost@mergington.edu")
                .await,
            Err(AppError::NotRegistered)
        ));
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let store = ActivityStore::seeded();
        store
            .remove_participant("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        store
            .add_participant("Soccer Team", "a@mergington.edu")
            .await
            .unwrap();

        store.reset().await;

        assert_eq!(store.get_all().await, Catalog::seed());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_signups_never_exceed_capacity() {
        let store = ActivityStore::new(Catalog::new(vec![Activity::new(
            "Robotics",
            "Build robots",
            "Mondays",
            5,
        )]));

        let mut set = tokio::task::JoinSet::new();
        for i in 0..50 {
            let store = store.clone();
            set.spawn(async move {
                store
                    .add_participant("Robotics", &format!("student{i}@mergington.edu"))
                    .await
            });
        }
        let results = set.join_all().await;

        let accepted = results.iter().filter(|r| r.is_ok()).count();
        let full = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::ActivityFull)))
            .count();
        assert_eq!(accepted, 5);
        assert_eq!(full, 45);
        assert_eq!(store.get("Robotics").await.unwrap().participants.len(), 5);
    }
}
