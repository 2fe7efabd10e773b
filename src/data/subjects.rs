use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::RawSample;

/// One raw communication event as present in the dataset dump.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawCommEvent {
    /// Serial-date value of the event
    pub date: f64,
    /// e.g. "Voice call", "Short message", "Packet Data"
    pub description: String,
    /// "Incoming" / "Outgoing" / "Missed"
    pub direction: String,
    /// Seconds; null for records the handset never closed out
    pub duration: Option<f64>,
    /// Hashed phone number of the other party
    pub hash_num: f64,
}

/// One subject as present in the dataset dump. The identity fields are
/// optional because not every participant completed device registration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubjectRecord {
    /// Device MAC, encoded as a serial number in the dump
    pub mac: Option<f64>,
    /// Hashed phone number
    pub hashed_number: Option<f64>,
    /// Chronological tower-association samples
    #[serde(default)]
    pub locs: Vec<RawSample>,
    /// Raw communication log
    #[serde(default)]
    pub comm: Vec<RawCommEvent>,
}

impl SubjectRecord {
    /// A record is usable only when both identities are present.
    pub fn is_valid(&self) -> bool {
        self.mac.is_some() && self.hashed_number.is_some()
    }
}

/// Reciprocal survey matrices, indexed by survey row order. Entries are null
/// where a participant gave no answer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkSurvey {
    pub friends: Vec<Vec<Option<f64>>>,
    pub lab: Vec<Vec<Option<f64>>>,
    pub outlab: Vec<Vec<Option<f64>>>,
    /// Hashed numbers in survey row order
    pub sub_sort: Vec<f64>,
}

/// The dataset dump as loaded from disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SubjectCollection {
    pub name: String, // Metadata e.g. "Reality Mining dump"
    pub version: f64,
    pub subjects: Vec<SubjectRecord>,
    pub network: Option<NetworkSurvey>,
}

/// Valid subjects plus the identity lookup tables. The store owns the records
/// exactly once; both tables hold indices into it, never copies, and the
/// contiguous subject id IS the index.
pub struct SubjectStore {
    subjects: Vec<SubjectRecord>,
    mac_table: HashMap<u64, usize>,
    hashed_number_table: HashMap<u64, usize>,
}

impl SubjectStore {
    /// Apply the validity filter and build the lookup tables.
    pub fn from_collection(collection: SubjectCollection) -> (Self, Option<NetworkSurvey>) {
        let SubjectCollection {
            subjects, network, ..
        } = collection;

        let total = subjects.len();
        let subjects: Vec<SubjectRecord> =
            subjects.into_iter().filter(SubjectRecord::is_valid).collect();
        log::info!("{} valid subjects (of {} in the dump)", subjects.len(), total);

        let mut mac_table = HashMap::new();
        let mut hashed_number_table = HashMap::new();
        for (id, subject) in subjects.iter().enumerate() {
            // is_valid above guarantees both keys exist
            if let (Some(mac), Some(hashed)) = (subject.mac, subject.hashed_number) {
                mac_table.insert(mac.to_bits(), id);
                hashed_number_table.insert(hashed.to_bits(), id);
            }
        }

        (
            Self {
                subjects,
                mac_table,
                hashed_number_table,
            },
            network,
        )
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    pub fn get(&self, id: usize) -> Option<&SubjectRecord> {
        self.subjects.get(id)
    }

    // The float keys are compared by bit pattern: lookups must use the value
    // exactly as it appears in the dump, which is how every caller gets it.
    pub fn lookup_mac(&self, mac: f64) -> Option<usize> {
        self.mac_table.get(&mac.to_bits()).copied()
    }

    pub fn lookup_hashed_number(&self, hashed: f64) -> Option<usize> {
        self.hashed_number_table.get(&hashed.to_bits()).copied()
    }
}
