//! Stub interfaces for the two external collaborators the app consumes
//! conceptually but never really integrates: an image-hosting endpoint and
//! an AI classification/prioritization service. The real classifier's
//! contract is undocumented upstream, so nothing beyond these signatures is
//! assumed.

use anyhow::Result;
use uuid::Uuid;

use crate::models::{IssueCategory, Urgency};

/// What the classifier would hand back for a submitted issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub urgency: Urgency,
    /// Estimated resolution window in days, inclusive.
    pub eta_days: (u32, u32),
}

pub trait Classifier {
    fn classify(&self, description: &str, category: IssueCategory) -> Classification;
}

/// Placeholder classifier: always Medium urgency, always a 3-5 day window.
#[derive(Debug, Default)]
pub struct MockClassifier;

impl Classifier for MockClassifier {
    fn classify(&self, _description: &str, _category: IssueCategory) -> Classification {
        Classification {
            urgency: Urgency::Medium,
            eta_days: (3, 5),
        }
    }
}

pub trait ImageUploader {
    /// Uploads the image bytes and returns a URI for the stored copy.
    fn upload(&self, bytes: &[u8]) -> Result<String>;
}

/// Placeholder uploader: mints a local object handle instead of talking to a
/// hosting service.
#[derive(Debug, Default)]
pub struct MockUploader;

impl ImageUploader for MockUploader {
    fn upload(&self, _bytes: &[u8]) -> Result<String> {
        Ok(format!("blob:local/{}", Uuid::new_v4()))
    }
}
