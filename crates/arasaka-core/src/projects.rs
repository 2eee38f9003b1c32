//! The project catalog and tag filtering.
//!
//! Records are compiled in. Filtering keeps the projects carrying every
//! selected tag; an empty selection keeps everything.

use std::collections::BTreeSet;

/// Lifecycle label shown on a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Completed,
    Dissertation,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Dissertation => "Dissertation",
        }
    }

    /// CSS modifier for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "status-active",
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::Dissertation => "status-dissertation",
        }
    }
}

/// One project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub tags: &'static [&'static str],
    pub url: Option<&'static str>,
    pub image_src: Option<&'static str>,
}

impl ProjectRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

const CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Credit Scoring Tool",
        description: "Final project. Modern full-stack next.js project including authentication using Firebase, password and email reset, complete settings panel and secure data storage. Utilised newsAPI to fetch and display news articles with filtering system. Credit Scoring model in Python, inspired by the FICO model, alongside my own touch and incorporating machine learning for prediction.",
        status: ProjectStatus::Dissertation,
        tags: &["TypeScript", "Next.js", "React", "Python", "Pandas", "Numpy", "Scikit-learn"],
        url: None,
        image_src: None,
    },
    ProjectRecord {
        name: "Encryption File System",
        description: "Development of end-to-end encrypted communication between client and server. Used RSA encryption and decryption to secure the communication. Also used AES encryption and decryption to secure the data. And finally used SHA-256 to hash the data.",
        status: ProjectStatus::Completed,
        tags: &["Java", "Hashing"],
        url: Some("https://github.com/FP2003/Encryption-Decryption-System"),
        image_src: Some("/images/arasaka.png"),
    },
    ProjectRecord {
        name: "AirBnB Price Predictor",
        description: "Cleaned a dataset with over 65,000 rows and 31 columns, optimising data for model performance, clarity and retainment. Visualised data into appropriate graphs to compile and identify patterns in a 9 page report with reasonings as to why. Tested data with various machine learning models to find optimal accuracy which reached 94% with neural networks. Other machine learning models included: linear regression and xgboost.",
        status: ProjectStatus::Completed,
        tags: &["Python", "Pandas", "Numpy", "Scikit-learn", "TensorFlow"],
        url: Some("https://github.com/FP2003/AirBnB-Price-Prediction-System"),
        image_src: Some("/images/arasaka.png"),
    },
    ProjectRecord {
        name: "Polling Web App",
        description: "Full-stack petition application with a secure authentication system, sign-up forms using AJAX and Zod, Google Captcha verification, and a QR code scanner for a unique UD. A intuitive admin and user panel with dynamic information updates, petition creation, signature tracking, and automated petition response handling. Firebase for secure data storage and implemented graph visualisations to track petition and statistics.",
        status: ProjectStatus::Completed,
        tags: &["TypeScript", "Next.js", "React"],
        url: Some("https://github.com/FP2003/Polling-Web-System"),
        image_src: Some("/images/arasaka.png"),
    },
];

/// The compiled-in project records.
pub fn catalog() -> &'static [ProjectRecord] {
    CATALOG
}

/// Distinct tags in first-seen order.
pub fn all_tags(records: &[ProjectRecord]) -> Vec<&'static str> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .flat_map(|r| r.tags.iter().copied())
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Records whose tags include every selected tag, in catalog order.
pub fn filter<'a>(records: &'a [ProjectRecord], selected: &TagSelection) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|r| selected.iter().all(|tag| r.has_tag(tag)))
        .collect()
}

/// Tags ticked in the filter menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: BTreeSet<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which project card shows its back face. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardFlip {
    flipped: Option<usize>,
}

impl CardFlip {
    pub fn toggle(&mut self, index: usize) {
        self.flipped = if self.flipped == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped == Some(index)
    }

    pub fn reset(&mut self) {
        self.flipped = None;
    }
}
