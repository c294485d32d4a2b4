// src/upload.rs
//! File selection: validation, drag and drop, browse, change and reset

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_log;
use crate::core::FsOps;
use crate::error::{ValidationError, ValidationErrorType};
use crate::render::upload::file_info_html;
use crate::session::Session;
use crate::ui::page::{ACTION_BUTTONS, JOB_COMPARISON, PAGE_TOP, RESULTS_SECTION};
use crate::ui::{TransientCue, UploadVisual};
use crate::utils::has_pdf_extension;

pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;
const SUCCESS_CUE: Duration = Duration::from_millis(1000);
const JOB_PANEL_SCROLL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
enum FileSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

/// A file the user picked; only its name and size are known up front.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    source: FileSource,
}

impl SelectedFile {
    pub async fn from_path(path: &Path) -> Result<Self> {
        let metadata = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            size: metadata.len(),
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    pub fn in_memory(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: content.len() as u64,
            source: FileSource::Memory(content),
        }
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        match &self.source {
            FileSource::Path(path) => FsOps::read_file_bytes(path).await,
            FileSource::Memory(content) => Ok(content.clone()),
        }
    }
}

/// `.pdf` (any case) and at most 16 MiB.
pub fn validate_file(file: &SelectedFile) -> Result<(), ValidationError> {
    if !has_pdf_extension(&file.name) {
        return Err(ValidationError::new(
            ValidationErrorType::WrongFormat,
            "Please select a PDF file.",
        ));
    }
    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::new(
            ValidationErrorType::TooLarge,
            "File size must be less than 16MB.",
        ));
    }
    Ok(())
}

pub struct UploadController;

impl UploadController {
    /// Validate and store a file. Returns whether it was accepted; a
    /// rejection only shows a toast.
    pub fn select_file(session: &mut Session, file: SelectedFile) -> bool {
        if let Err(e) = validate_file(&file) {
            app_log!(warn, "Rejected {} ({} bytes): {}", file.name, file.size, e.error_type.code());
            session.toasts.show_error(e.message);
            if session.state.current_file.is_none() {
                session.page.upload_area.visual = UploadVisual::Error;
            }
            return false;
        }

        app_log!(info, "Selected {} ({} bytes)", file.name, file.size);
        session.page.set_upload_selected(file_info_html(&file.name, file.size));
        session.state.current_file = Some(file);

        let page = &mut session.page;
        page.show(JOB_COMPARISON);
        page.show(ACTION_BUTTONS);
        page.upload_area.cue = Some(TransientCue {
            class: "success",
            duration: SUCCESS_CUE,
        });
        page.scroll_after(JOB_COMPARISON, JOB_PANEL_SCROLL_DELAY);
        true
    }

    /// "Change file": forget the file and restore the empty drop zone.
    pub fn clear_file(session: &mut Session) {
        session.state.current_file = None;
        session.page.reset_upload_area();
        session.page.hide(JOB_COMPARISON);
        session.page.hide(ACTION_BUTTONS);
    }

    pub fn drag_over(session: &mut Session) {
        session.page.upload_area.dragover = true;
    }

    pub fn drag_leave(session: &mut Session) {
        session.page.upload_area.dragover = false;
    }

    /// Only the first dropped file is considered.
    pub fn drop(session: &mut Session, files: Vec<SelectedFile>) -> bool {
        session.page.upload_area.dragover = false;
        match files.into_iter().next() {
            Some(file) => Self::select_file(session, file),
            None => false,
        }
    }

    /// Native picker `change`; same funnel as a drop.
    pub fn browse(session: &mut Session, files: Vec<SelectedFile>) -> bool {
        match files.into_iter().next() {
            Some(file) => Self::select_file(session, file),
            None => false,
        }
    }

    /// With a file selected, re-show its info card. Returns `true` when
    /// nothing is selected and the picker should open instead.
    pub fn click_upload_area(session: &mut Session) -> bool {
        match &session.state.current_file {
            Some(file) => {
                let html = file_info_html(&file.name, file.size);
                session.page.set_upload_selected(html);
                false
            }
            None => true,
        }
    }

    /// "Analyze another resume": drop file, results and the saved job
    /// description, then scroll back to the top.
    pub async fn reset_analysis(session: &mut Session) {
        session.state.reset();
        session.charts.destroy_all();
        Self::clear_file(session);
        session.page.hide(RESULTS_SECTION);
        session.forget_job_description().await;
        session.page.scroll_into_view(PAGE_TOP);
        app_log!(info, "Analysis reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{session_with, FakeApi};
    use std::sync::Arc;

    fn pdf(name: &str, size: usize) -> SelectedFile {
        SelectedFile::in_memory(name, vec![0u8; size])
    }

    #[test]
    fn test_validate_file() {
        assert!(validate_file(&pdf("resume.PDF", 10 * 1024 * 1024)).is_ok());
        assert!(validate_file(&pdf("resume.pdf", MAX_FILE_SIZE as usize)).is_ok());

        let err = validate_file(&pdf("resume.pdf", 20 * 1024 * 1024)).unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::TooLarge);
        assert_eq!(err.message, "File size must be less than 16MB.");

        let err = validate_file(&pdf("resume.docx", 10)).unwrap_err();
        assert_eq!(err.error_type, ValidationErrorType::WrongFormat);
    }

    #[tokio::test]
    async fn test_accepts_uppercase_pdf() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        assert!(UploadController::select_file(&mut session, pdf("resume.PDF", 10 * 1024 * 1024)));

        assert_eq!(session.state.current_file.as_ref().unwrap().name, "resume.PDF");
        assert_eq!(session.page.upload_area.visual, UploadVisual::FileSelected);
        assert!(session.page.is_visible(JOB_COMPARISON));
        assert!(session.page.is_visible(ACTION_BUTTONS));
        assert_eq!(session.page.upload_area.cue.as_ref().unwrap().class, "success");
        assert_eq!(session.page.pending_scrolls()[0].delay, JOB_PANEL_SCROLL_DELAY);
        assert!(session.page.upload_area.html.contains("10 MB"));
    }

    #[tokio::test]
    async fn test_rejections_leave_state_untouched() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;

        assert!(!UploadController::select_file(&mut session, pdf("resume.pdf", 20 * 1024 * 1024)));
        assert!(session.state.current_file.is_none());
        assert_eq!(session.toasts.current_error(), Some("File size must be less than 16MB."));
        assert_eq!(session.page.upload_area.visual, UploadVisual::Error);

        assert!(!UploadController::select_file(&mut session, pdf("notes.txt", 10)));
        assert!(session.state.current_file.is_none());
        assert_eq!(session.toasts.current_error(), Some("Please select a PDF file."));
        assert!(!session.page.is_visible(JOB_COMPARISON));
    }

    #[tokio::test]
    async fn test_rejection_keeps_previous_file() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        UploadController::select_file(&mut session, pdf("cv.pdf", 1024));
        UploadController::select_file(&mut session, pdf("cv.docx", 1024));

        assert_eq!(session.state.current_file.as_ref().unwrap().name, "cv.pdf");
        assert_eq!(session.page.upload_area.visual, UploadVisual::FileSelected);
    }

    #[tokio::test]
    async fn test_drag_and_drop() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        UploadController::drag_over(&mut session);
        assert!(session.page.upload_area.dragover);
        UploadController::drag_leave(&mut session);
        assert!(!session.page.upload_area.dragover);

        UploadController::drag_over(&mut session);
        let dropped = vec![pdf("first.pdf", 10), pdf("second.pdf", 10)];
        assert!(UploadController::drop(&mut session, dropped));
        assert!(!session.page.upload_area.dragover);
        assert_eq!(session.state.current_file.as_ref().unwrap().name, "first.pdf");

        assert!(!UploadController::browse(&mut session, Vec::new()));
    }

    #[tokio::test]
    async fn test_change_file_twice_keeps_one_input() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        UploadController::select_file(&mut session, pdf("cv.pdf", 10));
        assert_eq!(session.page.upload_area.file_input_count(), 0);
        UploadController::clear_file(&mut session);
        UploadController::clear_file(&mut session);

        assert!(session.state.current_file.is_none());
        assert_eq!(session.page.upload_area.file_input_count(), 1);
        assert!(!session.page.is_visible(ACTION_BUTTONS));
        assert!(UploadController::click_upload_area(&mut session));
    }

    #[tokio::test]
    async fn test_click_reshows_file_info() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        UploadController::select_file(&mut session, pdf("cv.pdf", 2048));
        session.page.upload_area.html.clear();

        assert!(!UploadController::click_upload_area(&mut session));
        assert!(session.page.upload_area.html.contains("cv.pdf"));
    }

    #[tokio::test]
    async fn test_reset_analysis() {
        let mut session = session_with(Arc::new(FakeApi::default())).await;
        session.set_job_description("Backend role").await;
        UploadController::select_file(&mut session, pdf("cv.pdf", 10));
        session.page.show(RESULTS_SECTION);

        UploadController::reset_analysis(&mut session).await;
        assert!(session.state.current_file.is_none());
        assert!(!session.page.is_visible(RESULTS_SECTION));
        assert!(session
            .storage
            .get_item(crate::core::storage::JOB_DESCRIPTION_KEY)
            .await
            .unwrap()
            .is_none());
        assert_eq!(session.page.pending_scrolls().last().unwrap().target, PAGE_TOP);
    }

    #[tokio::test]
    async fn test_from_path_reads_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.size, 8);
        assert_eq!(file.read_bytes().await.unwrap(), b"%PDF-1.4");
    }
}
