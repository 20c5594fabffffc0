use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

/// A single field value on a record.
///
/// Records in the catalog are heterogeneous: a symptom carries a keyword
/// list, a doctor carries a numeric rating, a medicine carries a
/// prescription flag. Representing the value as a closed variant set keeps
/// the ranker's branch logic exhaustive instead of type-probed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag (e.g. prescription-only)
    Bool(bool),

    /// Integer value (e.g. years of experience, bed count)
    Int(i64),

    /// Floating point value (e.g. rating)
    Float(f64),

    /// Scalar text (e.g. name, location)
    Text(String),

    /// Ordered list of text values (e.g. keywords, specialties)
    TextList(Vec<String>),
}

impl FieldValue {
    /// Scalar text content, if this value is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text list content, if this value is a list
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::TextList(items) => Some(items),
            _ => None,
        }
    }
}

/// An immutable catalog record.
///
/// Every record has a numeric identifier unique within its collection and a
/// named field map. Records are seeded once at startup and never mutated;
/// queries clone a record before attaching derived attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Identifier unique within the owning collection
    pub id: u32,

    /// Named fields, flattened into the record's JSON object
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Add a scalar text field (builder style, used by catalog seeding)
    pub fn text(mut self, field: &str, value: &str) -> Self {
        self.fields
            .insert(field.to_string(), FieldValue::Text(value.to_string()));
        self
    }

    /// Add a text list field
    pub fn list<const N: usize>(mut self, field: &str, values: [&str; N]) -> Self {
        self.fields.insert(
            field.to_string(),
            FieldValue::TextList(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    /// Add an integer field
    pub fn int(mut self, field: &str, value: i64) -> Self {
        self.fields
            .insert(field.to_string(), FieldValue::Int(value));
        self
    }

    /// Add a floating point field
    pub fn float(mut self, field: &str, value: f64) -> Self {
        self.fields
            .insert(field.to_string(), FieldValue::Float(value));
        self
    }

    /// Add a boolean field
    pub fn flag(mut self, field: &str, value: bool) -> Self {
        self.fields
            .insert(field.to_string(), FieldValue::Bool(value));
        self
    }

    /// Look up a field value by name
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Look up a scalar text field by name
    pub fn text_value(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }
}

/// The five fixed record collections served by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Symptoms,
    Doctors,
    Hospitals,
    Medicines,
    HealthRecords,
}

impl Collection {
    /// All collections, in response and suggestion scan order
    pub const ALL: [Collection; 5] = [
        Collection::Symptoms,
        Collection::Doctors,
        Collection::Hospitals,
        Collection::Medicines,
        Collection::HealthRecords,
    ];

    /// Key used for this collection in the merged results map
    pub fn key(self) -> &'static str {
        match self {
            Collection::Symptoms => "symptoms",
            Collection::Doctors => "doctors",
            Collection::Hospitals => "hospitals",
            Collection::Medicines => "medicines",
            Collection::HealthRecords => "health_records",
        }
    }

    /// Human-readable category label used in suggestions
    pub fn label(self) -> &'static str {
        match self {
            Collection::Symptoms => "Symptom",
            Collection::Doctors => "Doctor",
            Collection::Hospitals => "Hospital",
            Collection::Medicines => "Medicine",
            Collection::HealthRecords => "Health Record",
        }
    }

    /// Icon token used in suggestions
    pub fn icon(self) -> &'static str {
        match self {
            Collection::Symptoms => "🩺",
            Collection::Doctors => "👨‍⚕️",
            Collection::Hospitals => "🏥",
            Collection::Medicines => "💊",
            Collection::HealthRecords => "📋",
        }
    }

    /// Ordered field names examined when scoring this collection
    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            Collection::Symptoms => &["name", "category", "keywords"],
            Collection::Doctors => &["name", "specialty", "location", "languages"],
            Collection::Hospitals => &["name", "location", "type", "specialties"],
            Collection::Medicines => &["name", "generic", "category", "common_uses"],
            Collection::HealthRecords => &["name", "type", "keywords"],
        }
    }
}

/// Category filter accepted by the search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Symptoms,
    Doctors,
    Hospitals,
    Medicines,
    Records,
}

impl Category {
    /// Whether a collection participates in a search under this filter
    pub fn selects(self, collection: Collection) -> bool {
        matches!(
            (self, collection),
            (Category::All, _)
                | (Category::Symptoms, Collection::Symptoms)
                | (Category::Doctors, Collection::Doctors)
                | (Category::Hospitals, Collection::Hospitals)
                | (Category::Medicines, Collection::Medicines)
                | (Category::Records, Collection::HealthRecords)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new(1)
            .text("name", "Fever")
            .list("keywords", ["pyrexia", "body heat"])
            .int("visits", 3)
            .float("rating", 4.5)
            .flag("chronic", false);

        assert_eq!(record.id, 1);
        assert_eq!(record.text_value("name"), Some("Fever"));
        assert_eq!(
            record.get("keywords").and_then(FieldValue::as_text_list),
            Some(&["pyrexia".to_string(), "body heat".to_string()][..])
        );
        assert_eq!(record.get("visits"), Some(&FieldValue::Int(3)));
        assert_eq!(record.text_value("missing"), None);
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::new(7).text("name", "Cough").flag("chronic", true);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Cough");
        assert_eq!(json["chronic"], true);
    }

    #[test]
    fn test_category_parsing() {
        let category: Category = serde_json::from_str("\"doctors\"").unwrap();
        assert_eq!(category, Category::Doctors);
        assert_eq!(Category::default(), Category::All);
        assert_eq!(Category::Records.to_string(), "records");
    }

    #[test]
    fn test_category_selection() {
        for collection in Collection::ALL {
            assert!(Category::All.selects(collection));
        }
        assert!(Category::Records.selects(Collection::HealthRecords));
        assert!(!Category::Records.selects(Collection::Symptoms));
        assert!(!Category::Doctors.selects(Collection::Hospitals));
    }

    #[test]
    fn test_collection_field_specs() {
        assert_eq!(
            Collection::Symptoms.search_fields(),
            &["name", "category", "keywords"]
        );
        assert_eq!(Collection::HealthRecords.key(), "health_records");
        assert_eq!(Collection::Doctors.label(), "Doctor");
    }
}
