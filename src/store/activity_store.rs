use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::Activity;

/// Shared in-memory activity collection, keyed by activity name.
///
/// One coarse lock guards the whole map. Every operation does a handful of
/// string comparisons under the lock, nothing ever awaits while holding it.
/// State is volatile and resets to the seed catalog on restart.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    /// Store seeded with the school's activity catalog.
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    pub fn with_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Snapshot of the full collection.
    pub fn all(&self) -> BTreeMap<String, Activity> {
        self.inner.read().clone()
    }

    /// Run `f` against the named activity. Returns `None` when the name is
    /// not in the catalog.
    pub fn with_activity_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> T,
    ) -> Option<T> {
        let mut activities = self.inner.write();
        activities.get_mut(name).map(f)
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|s| s.to_string()).collect(),
    }
}

/// Fixed catalog the process starts from. Activities are never created or
/// deleted at runtime, only their participant lists change.
fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Tennis Team".to_string(),
        activity(
            "Competitive tennis training and tournaments",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            16,
            &[],
        ),
    );
    activities.insert(
        "Art Club".to_string(),
        activity(
            "Explore painting, drawing, and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Acting, stagecraft, and school theater productions",
            "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
    );
    activities.insert(
        "Math Club".to_string(),
        activity(
            "Problem solving and competition mathematics",
            "Tuesdays, 7:15 AM - 8:00 AM",
            10,
            &["james@mergington.edu"],
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        activity(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    );

    activities
}
