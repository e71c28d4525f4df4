use std::collections::BTreeMap;

use thiserror::Error;
use tracing::info;

use crate::models::Activity;
use crate::store::ActivityStore;

/// Everything that can go wrong with a signup or unregister command. The
/// display strings are the `detail` bodies callers see.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.all()
}

/// Append `email` to the activity's participant list, preserving signup
/// order. An email appears at most once per activity.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    store
        .with_activity_mut(activity_name, |activity| {
            if activity.participants.iter().any(|p| p == email) {
                return Err(ActivityError::AlreadySignedUp);
            }
            activity.participants.push(email.to_string());
            Ok(())
        })
        .ok_or(ActivityError::ActivityNotFound)??;

    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(format!("Signed up {email} for {activity_name}"))
}

/// Remove `email` from the activity's participant list.
pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    store
        .with_activity_mut(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::NotSignedUp);
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .ok_or(ActivityError::ActivityNotFound)??;

    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(format!("Unregistered {email} from {activity_name}"))
}
