use super::*;

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(mut self, id: impl Into<String>) -> Self {
        self.form = Some(FormRef { id: id.into() });
        self
    }

    pub fn submission(mut self, submission_id: impl Into<String>) -> Self {
        self.submission = Some(SubmissionRef {
            submission_id: submission_id.into(),
        });
        self
    }

    pub fn file(mut self, file: FileRef) -> Self {
        self.file = Some(file);
        self
    }

    pub fn public_form(mut self, val: bool) -> Self {
        self.public_form = Some(val);
        self
    }

    pub fn is_public_form(&self) -> bool {
        self.public_form == Some(true)
    }
}

impl FileRef {
    pub fn draft(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form_submission_id: None,
        }
    }

    pub fn submitted(
        id: impl Into<String>,
        form_submission_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            form_submission_id: Some(form_submission_id.into()),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.form_submission_id.is_none()
    }
}
