use serde::{Deserialize, Serialize};

/// A single extracurricular offering. The activity name is not part of the
/// record; it is the key in the store's map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order, one entry per student email.
    pub participants: Vec<String>,
}
