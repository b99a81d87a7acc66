//! Static Section Content
//!
//! The copy shown for each section. Mirrors what the backend's info
//! endpoints serve, so rendering never waits on (or fails with) the
//! background loads.

use crate::logic::sections::Section;

pub fn section_body(section: Section) -> &'static [&'static str] {
    match section {
        Section::Home => HOME,
        Section::Predict => PREDICT,
        Section::DiseaseInfo => DISEASE_INFO,
        Section::Developers => DEVELOPERS,
        Section::Admin => ADMIN,
    }
}

const HOME: &[&str] = &[
    "Heart disease risk assessment backed by a machine-learning model",
    "trained on 500+ patient records (Random Forest, ~81% accuracy).",
    "Commands: predict, disease, developers, admin, about, help.",
];

const PREDICT: &[&str] = &[
    "Provide the 13 medical indicators below. Each value is checked",
    "against its accepted range before anything is sent to the server.",
];

const DISEASE_INFO: &[&str] = &[
    "Heart disease covers a range of conditions affecting the heart and",
    "blood vessels; coronary artery disease, caused by cholesterol plaque",
    "narrowing the arteries, is the most common.",
    "",
    "Major risk factors:",
    "  - High blood pressure (>140/90 mmHg)",
    "  - High cholesterol (>240 mg/dL)",
    "  - Smoking, diabetes, obesity, physical inactivity",
    "  - Age (men >45, women >55) and family history",
    "",
    "Warning signs that need immediate care: chest pain or pressure,",
    "shortness of breath, sudden dizziness or fainting, unusual fatigue,",
    "palpitations, swelling in the legs or ankles.",
];

const DEVELOPERS: &[&str] = &[
    "Heart Disease Prediction System",
    "Faculty of Engineering & Technology, Department of Computer Applications",
    "Supervisor: Dr. Megha Chhabra",
    "",
    "  Jagrit Sharma    - data preprocessing, visualization, feature engineering",
    "  Abhishek Godara  - model building and evaluation",
    "  Deepanshu        - documentation, presentation, frontend",
];

const ADMIN: &[&str] = &[
    "Administrator area. Sign in with your admin email and password.",
];

/// Panel shown only while an admin session is active
pub const ADMIN_PANEL: &[&str] = &[
    "Model:    Random Forest Classifier (~81% accuracy)",
    "Dataset:  500+ patient records (UCI Heart Disease)",
    "Features: 13 medical indicators per assessment",
];
