//! Composition root. Both stores are built once here and handed by reference
//! to whatever consumes them; nothing reaches for an ambient singleton.

use anyhow::Result;

use crate::classify::{Classifier, ImageUploader, MockClassifier, MockUploader};
use crate::models::ReportDraft;
use crate::session::SessionStore;
use crate::store::ReportsStore;

pub struct App {
    pub reports: ReportsStore,
    pub session: SessionStore,
    uploader: Box<dyn ImageUploader>,
    classifier: Box<dyn Classifier>,
}

impl App {
    /// App with the mock dataset and the stub external services.
    pub fn new() -> Self {
        App {
            reports: ReportsStore::seeded(),
            session: SessionStore::new(),
            uploader: Box::new(MockUploader),
            classifier: Box::new(MockClassifier),
        }
    }

    pub fn with_empty_store() -> Self {
        App {
            reports: ReportsStore::new(),
            ..Self::new()
        }
    }

    /// The report form's submission flow: validate the draft, push the photo
    /// through the uploader stub, let the classifier stub assign urgency,
    /// then insert. Returns the id of the new report.
    pub fn submit_report(&mut self, mut draft: ReportDraft, image: Option<&[u8]>) -> Result<String> {
        draft.validate()?;
        if let Some(bytes) = image {
            draft.image_url = Some(self.uploader.upload(bytes)?);
        }
        if let Some(category) = draft.category {
            let classification = self.classifier.classify(&draft.description, category);
            draft.urgency = Some(classification.urgency);
        }
        Ok(self.reports.add_report(draft).id.clone())
    }

    /// The dashboard's status-change handler. Raw selection text is parsed
    /// into the closed status enum before it can reach the store, so values
    /// outside {Pending, In Progress, Resolved} are rejected here. Returns
    /// whether a report with that id existed.
    pub fn set_report_status(&mut self, id: &str, status_text: &str) -> Result<bool> {
        let status = status_text.parse()?;
        Ok(self.reports.update_status(id, status))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
