//! The person record and the constants it is built from.

use serde::{Deserialize, Serialize};

/// Number of keys in every generated record.
pub const FIELD_COUNT: usize = 21;

/// Record keys in serialization order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "@id",
    "name",
    "address",
    "description",
    "description1",
    "description2",
    "description3",
    "description4",
    "description5",
    "description6",
    "description7",
    "description8",
    "type",
    "friend",
    "friend1",
    "friend2",
    "friend3",
    "friend4",
    "company",
    "owner",
    "department",
];

/// Offsets added to the record index for `friend`..`friend4`.
pub const FRIEND_OFFSETS: [u64; 5] = [1, 2, 3, 4, 5];

/// Constant values shared by every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTemplate {
    /// Value of `address`.
    pub address: String,
    /// Value of `description` through `description8`.
    pub description: String,
    /// Value of `type`.
    pub kind: String,
    /// Value of `owner`.
    pub owner: String,
    /// Value of `department`.
    pub department: String,
}

impl Default for RecordTemplate {
    fn default() -> Self {
        Self {
            address: "oslo".to_string(),
            description:
                "skfksfksg s lorem sjfnsj and the sun came up over the hills and it was nice"
                    .to_string(),
            kind: "person".to_string(),
            owner: "<owner1>".to_string(),
            department: "<dept1443>".to_string(),
        }
    }
}

/// One synthetic person.
///
/// Field declaration order is the serialization order, so serde emits the
/// keys exactly as listed in [`FIELD_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    pub description1: String,
    pub description2: String,
    pub description3: String,
    pub description4: String,
    pub description5: String,
    pub description6: String,
    pub description7: String,
    pub description8: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub friend: String,
    pub friend1: String,
    pub friend2: String,
    pub friend3: String,
    pub friend4: String,
    pub company: String,
    pub owner: String,
    pub department: String,
}

impl PersonRecord {
    /// Build the record for `index` from `template`.
    ///
    /// The caller guarantees `index + 5` does not overflow.
    pub(crate) fn build(template: &RecordTemplate, index: u64) -> Self {
        let [f0, f1, f2, f3, f4] = FRIEND_OFFSETS.map(|k| object_ref(index + k));
        Self {
            id: object_id(index),
            name: format!("person {index}"),
            address: template.address.clone(),
            description: template.description.clone(),
            description1: template.description.clone(),
            description2: template.description.clone(),
            description3: template.description.clone(),
            description4: template.description.clone(),
            description5: template.description.clone(),
            description6: template.description.clone(),
            description7: template.description.clone(),
            description8: template.description.clone(),
            kind: template.kind.clone(),
            friend: f0,
            friend1: f1,
            friend2: f2,
            friend3: f3,
            friend4: f4,
            company: format!("<company{}>", index + 1),
            owner: template.owner.clone(),
            department: template.department.clone(),
        }
    }

    /// Key/value pairs in serialization order.
    pub fn fields(&self) -> [(&'static str, &str); FIELD_COUNT] {
        [
            (FIELD_NAMES[0], &self.id),
            (FIELD_NAMES[1], &self.name),
            (FIELD_NAMES[2], &self.address),
            (FIELD_NAMES[3], &self.description),
            (FIELD_NAMES[4], &self.description1),
            (FIELD_NAMES[5], &self.description2),
            (FIELD_NAMES[6], &self.description3),
            (FIELD_NAMES[7], &self.description4),
            (FIELD_NAMES[8], &self.description5),
            (FIELD_NAMES[9], &self.description6),
            (FIELD_NAMES[10], &self.description7),
            (FIELD_NAMES[11], &self.description8),
            (FIELD_NAMES[12], &self.kind),
            (FIELD_NAMES[13], &self.friend),
            (FIELD_NAMES[14], &self.friend1),
            (FIELD_NAMES[15], &self.friend2),
            (FIELD_NAMES[16], &self.friend3),
            (FIELD_NAMES[17], &self.friend4),
            (FIELD_NAMES[18], &self.company),
            (FIELD_NAMES[19], &self.owner),
            (FIELD_NAMES[20], &self.department),
        ]
    }

    /// The friend references in offset order.
    pub fn friends(&self) -> [&str; 5] {
        [
            &self.friend,
            &self.friend1,
            &self.friend2,
            &self.friend3,
            &self.friend4,
        ]
    }
}

/// `obj<index>`
pub fn object_id(index: u64) -> String {
    format!("obj{index}")
}

/// `<obj<index>>`
pub fn object_ref(index: u64) -> String {
    format!("<obj{index}>")
}
