//! Seeded record catalog.
//!
//! The catalog is the immutable data source the search engine runs against.
//! It is built once at process start and shared by reference; nothing in the
//! service mutates it afterwards, so concurrent queries need no locking.
//! The sample data shipped with the service is illustrative only and
//! carries no medical guarantee.

use crate::models::record::{Collection, Record};

/// The five fixed record collections
#[derive(Debug, Clone)]
pub struct Catalog {
    symptoms: Vec<Record>,
    doctors: Vec<Record>,
    hospitals: Vec<Record>,
    medicines: Vec<Record>,
    health_records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog from explicit collections (used by tests)
    pub fn new(
        symptoms: Vec<Record>,
        doctors: Vec<Record>,
        hospitals: Vec<Record>,
        medicines: Vec<Record>,
        health_records: Vec<Record>,
    ) -> Self {
        Self {
            symptoms,
            doctors,
            hospitals,
            medicines,
            health_records,
        }
    }

    /// Records for a collection, in insertion order
    pub fn collection(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Symptoms => &self.symptoms,
            Collection::Doctors => &self.doctors,
            Collection::Hospitals => &self.hospitals,
            Collection::Medicines => &self.medicines,
            Collection::HealthRecords => &self.health_records,
        }
    }

    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        Collection::ALL
            .iter()
            .map(|c| self.collection(*c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sample dataset served by the default deployment
    pub fn seeded() -> Self {
        Self::new(
            seed_symptoms(),
            seed_doctors(),
            seed_hospitals(),
            seed_medicines(),
            seed_health_records(),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_symptoms() -> Vec<Record> {
    vec![
        Record::new(1)
            .text("name", "Fever")
            .text("category", "General")
            .text("severity", "Medium")
            .list("keywords", ["high temperature", "pyrexia", "body heat"]),
        Record::new(2)
            .text("name", "Headache")
            .text("category", "Neurological")
            .text("severity", "Low")
            .list("keywords", ["head pain", "migraine", "cephalalgia"]),
        Record::new(3)
            .text("name", "Cough")
            .text("category", "Respiratory")
            .text("severity", "Medium")
            .list("keywords", ["tussis", "dry cough", "wet cough"]),
        Record::new(4)
            .text("name", "Chest Pain")
            .text("category", "Cardiac")
            .text("severity", "High")
            .list("keywords", ["chest discomfort", "angina", "thoracic pain"]),
        Record::new(5)
            .text("name", "Shortness of Breath")
            .text("category", "Respiratory")
            .text("severity", "High")
            .list(
                "keywords",
                ["dyspnea", "breathlessness", "difficulty breathing"],
            ),
        Record::new(6)
            .text("name", "Abdominal Pain")
            .text("category", "Gastrointestinal")
            .text("severity", "Medium")
            .list("keywords", ["stomach ache", "belly pain", "gastric pain"]),
        Record::new(7)
            .text("name", "Nausea")
            .text("category", "Gastrointestinal")
            .text("severity", "Low")
            .list(
                "keywords",
                ["vomiting sensation", "queasiness", "sick feeling"],
            ),
        Record::new(8)
            .text("name", "Dizziness")
            .text("category", "Neurological")
            .text("severity", "Medium")
            .list(
                "keywords",
                ["vertigo", "lightheadedness", "spinning sensation"],
            ),
        Record::new(9)
            .text("name", "Fatigue")
            .text("category", "General")
            .text("severity", "Low")
            .list(
                "keywords",
                ["tiredness", "weakness", "lethargy", "exhaustion"],
            ),
        Record::new(10)
            .text("name", "Joint Pain")
            .text("category", "Musculoskeletal")
            .text("severity", "Medium")
            .list(
                "keywords",
                ["arthralgia", "joint ache", "knee pain", "elbow pain"],
            ),
    ]
}

fn seed_doctors() -> Vec<Record> {
    vec![
        Record::new(1)
            .text("name", "Dr. Rajesh Kumar")
            .text("specialty", "Cardiologist")
            .text("location", "Delhi")
            .float("rating", 4.8)
            .int("experience", 15)
            .list("languages", ["Hindi", "English"]),
        Record::new(2)
            .text("name", "Dr. Priya Sharma")
            .text("specialty", "Pediatrician")
            .text("location", "Mumbai")
            .float("rating", 4.9)
            .int("experience", 12)
            .list("languages", ["Hindi", "English", "Marathi"]),
        Record::new(3)
            .text("name", "Dr. Amit Patel")
            .text("specialty", "General Physician")
            .text("location", "Ahmedabad")
            .float("rating", 4.7)
            .int("experience", 10)
            .list("languages", ["Hindi", "English", "Gujarati"]),
        Record::new(4)
            .text("name", "Dr. Sunita Reddy")
            .text("specialty", "Gynecologist")
            .text("location", "Hyderabad")
            .float("rating", 4.9)
            .int("experience", 18)
            .list("languages", ["Hindi", "English", "Telugu"]),
        Record::new(5)
            .text("name", "Dr. Vikram Singh")
            .text("specialty", "Orthopedic")
            .text("location", "Jaipur")
            .float("rating", 4.6)
            .int("experience", 14)
            .list("languages", ["Hindi", "English"]),
        Record::new(6)
            .text("name", "Dr. Neha Gupta")
            .text("specialty", "Dermatologist")
            .text("location", "Bangalore")
            .float("rating", 4.8)
            .int("experience", 8)
            .list("languages", ["Hindi", "English", "Kannada"]),
        Record::new(7)
            .text("name", "Dr. Arjun Mehta")
            .text("specialty", "ENT Specialist")
            .text("location", "Pune")
            .float("rating", 4.7)
            .int("experience", 11)
            .list("languages", ["Hindi", "English", "Marathi"]),
        Record::new(8)
            .text("name", "Dr. Kavita Iyer")
            .text("specialty", "Psychiatrist")
            .text("location", "Chennai")
            .float("rating", 4.9)
            .int("experience", 16)
            .list("languages", ["Hindi", "English", "Tamil"]),
        Record::new(9)
            .text("name", "Dr. Rahul Verma")
            .text("specialty", "Neurologist")
            .text("location", "Kolkata")
            .float("rating", 4.8)
            .int("experience", 13)
            .list("languages", ["Hindi", "English", "Bengali"]),
        Record::new(10)
            .text("name", "Dr. Sanjana Das")
            .text("specialty", "Ophthalmologist")
            .text("location", "Lucknow")
            .float("rating", 4.7)
            .int("experience", 9)
            .list("languages", ["Hindi", "English"]),
    ]
}

fn seed_hospitals() -> Vec<Record> {
    vec![
        Record::new(1)
            .text("name", "AIIMS Delhi")
            .text("location", "New Delhi")
            .text("type", "Government")
            .float("rating", 4.9)
            .int("beds", 2500)
            .list("specialties", ["Cardiology", "Neurology", "Oncology"]),
        Record::new(2)
            .text("name", "Apollo Hospital")
            .text("location", "Chennai")
            .text("type", "Private")
            .float("rating", 4.8)
            .int("beds", 500)
            .list(
                "specialties",
                ["Cardiology", "Orthopedics", "Gastroenterology"],
            ),
        Record::new(3)
            .text("name", "Fortis Healthcare")
            .text("location", "Mumbai")
            .text("type", "Private")
            .float("rating", 4.7)
            .int("beds", 400)
            .list("specialties", ["Cardiology", "Neurology", "Pediatrics"]),
        Record::new(4)
            .text("name", "Safdarjung Hospital")
            .text("location", "Delhi")
            .text("type", "Government")
            .float("rating", 4.5)
            .int("beds", 1500)
            .list("specialties", ["General Medicine", "Surgery", "Emergency"]),
        Record::new(5)
            .text("name", "Narayana Health")
            .text("location", "Bangalore")
            .text("type", "Private")
            .float("rating", 4.8)
            .int("beds", 600)
            .list("specialties", ["Cardiology", "Oncology", "Nephrology"]),
        Record::new(6)
            .text("name", "Medanta Hospital")
            .text("location", "Gurugram")
            .text("type", "Private")
            .float("rating", 4.9)
            .int("beds", 1250)
            .list("specialties", ["Cardiology", "Neurology", "Robotic Surgery"]),
        Record::new(7)
            .text("name", "Christian Medical College")
            .text("location", "Vellore")
            .text("type", "Private")
            .float("rating", 4.9)
            .int("beds", 2200)
            .list("specialties", ["All Specialties"]),
        Record::new(8)
            .text("name", "PGI Chandigarh")
            .text("location", "Chandigarh")
            .text("type", "Government")
            .float("rating", 4.8)
            .int("beds", 1900)
            .list("specialties", ["Neurology", "Cardiology", "Transplant"]),
        Record::new(9)
            .text("name", "Tata Memorial Hospital")
            .text("location", "Mumbai")
            .text("type", "Government")
            .float("rating", 4.9)
            .int("beds", 629)
            .list("specialties", ["Oncology", "Cancer Research"]),
        Record::new(10)
            .text("name", "Max Healthcare")
            .text("location", "Delhi")
            .text("type", "Private")
            .float("rating", 4.7)
            .int("beds", 800)
            .list("specialties", ["Cardiology", "Orthopedics", "Neurology"]),
    ]
}

fn seed_medicines() -> Vec<Record> {
    vec![
        Record::new(1)
            .text("name", "Paracetamol")
            .text("generic", "Acetaminophen")
            .text("category", "Analgesic")
            .list("common_uses", ["Fever", "Pain", "Headache"])
            .flag("prescription", false),
        Record::new(2)
            .text("name", "Amoxicillin")
            .text("generic", "Amoxicillin")
            .text("category", "Antibiotic")
            .list(
                "common_uses",
                ["Bacterial Infection", "Respiratory Infection"],
            )
            .flag("prescription", true),
        Record::new(3)
            .text("name", "Ibuprofen")
            .text("generic", "Ibuprofen")
            .text("category", "NSAID")
            .list("common_uses", ["Pain", "Inflammation", "Fever"])
            .flag("prescription", false),
        Record::new(4)
            .text("name", "Metformin")
            .text("generic", "Metformin")
            .text("category", "Antidiabetic")
            .list("common_uses", ["Type 2 Diabetes", "Blood Sugar Control"])
            .flag("prescription", true),
        Record::new(5)
            .text("name", "Omeprazole")
            .text("generic", "Omeprazole")
            .text("category", "Proton Pump Inhibitor")
            .list("common_uses", ["Acidity", "GERD", "Ulcer"])
            .flag("prescription", false),
        Record::new(6)
            .text("name", "Atorvastatin")
            .text("generic", "Atorvastatin")
            .text("category", "Statin")
            .list(
                "common_uses",
                ["High Cholesterol", "Heart Disease Prevention"],
            )
            .flag("prescription", true),
        Record::new(7)
            .text("name", "Amlodipine")
            .text("generic", "Amlodipine")
            .text("category", "Antihypertensive")
            .list("common_uses", ["High Blood Pressure", "Hypertension"])
            .flag("prescription", true),
        Record::new(8)
            .text("name", "Cetirizine")
            .text("generic", "Cetirizine")
            .text("category", "Antihistamine")
            .list("common_uses", ["Allergy", "Hay Fever", "Itching"])
            .flag("prescription", false),
        Record::new(9)
            .text("name", "Azithromycin")
            .text("generic", "Azithromycin")
            .text("category", "Antibiotic")
            .list(
                "common_uses",
                ["Bacterial Infection", "Pneumonia", "Bronchitis"],
            )
            .flag("prescription", true),
        Record::new(10)
            .text("name", "Salbutamol")
            .text("generic", "Salbutamol")
            .text("category", "Bronchodilator")
            .list("common_uses", ["Asthma", "COPD", "Breathing Difficulty"])
            .flag("prescription", true),
    ]
}

fn seed_health_records() -> Vec<Record> {
    vec![
        Record::new(1)
            .text("type", "Lab Report")
            .text("name", "Blood Test")
            .text("date", "2024-10-15")
            .list("keywords", ["CBC", "hemoglobin", "blood count"]),
        Record::new(2)
            .text("type", "Prescription")
            .text("name", "Diabetes Medication")
            .text("date", "2024-10-20")
            .list("keywords", ["metformin", "diabetes", "blood sugar"]),
        Record::new(3)
            .text("type", "X-Ray")
            .text("name", "Chest X-Ray")
            .text("date", "2024-09-10")
            .list("keywords", ["lungs", "chest", "radiography"]),
        Record::new(4)
            .text("type", "ECG")
            .text("name", "Electrocardiogram")
            .text("date", "2024-08-25")
            .list("keywords", ["heart", "cardiac", "ECG"]),
        Record::new(5)
            .text("type", "MRI")
            .text("name", "Brain MRI Scan")
            .text("date", "2024-07-12")
            .list("keywords", ["brain", "neurological", "imaging"]),
        Record::new(6)
            .text("type", "Vaccination")
            .text("name", "COVID-19 Vaccine")
            .text("date", "2024-06-05")
            .list("keywords", ["vaccine", "immunization", "covid"]),
        Record::new(7)
            .text("type", "Lab Report")
            .text("name", "Lipid Profile")
            .text("date", "2024-05-18")
            .list("keywords", ["cholesterol", "lipids", "triglycerides"]),
        Record::new(8)
            .text("type", "Ultrasound")
            .text("name", "Abdominal Ultrasound")
            .text("date", "2024-04-22")
            .list("keywords", ["abdomen", "ultrasound", "imaging"]),
    ]
}
