// src/render/upload.rs
use super::escape;
use crate::utils::{format_file_size, truncate_file_name};

pub const FILE_INPUT: &str = "resumeFile";

/// Empty drop zone with its single hidden file input.
pub fn empty_upload_html() -> String {
    r#"<div class="upload-content">
    <div class="upload-icon"><i class="fas fa-cloud-upload-alt"></i></div>
    <h3>Drop your PDF resume here</h3>
    <p>or click to browse files</p>
    <input type="file" id="resumeFile" accept=".pdf" hidden>
    <button class="btn btn-primary" id="chooseFileBtn"><i class="fas fa-folder-open"></i> Choose File</button>
</div>"#
        .to_string()
}

/// Confirmation card for a selected file.
pub fn file_info_html(name: &str, size: u64) -> String {
    format!(
        r#"<div class="upload-success">
    <div class="success-icon"><i class="fas fa-check-circle"></i></div>
    <h3>File Selected Successfully</h3>
    <div class="file-info">
        <div class="file-details">
            <span class="file-name"><i class="fas fa-file-pdf"></i> {name}</span>
            <span class="file-size">{size}</span>
        </div>
        <div class="file-actions">
            <button class="btn btn-secondary" data-action="change-file"><i class="fas fa-exchange-alt"></i> Change File</button>
        </div>
    </div>
</div>"#,
        name = escape(&truncate_file_name(name)),
        size = format_file_size(size)
    )
}
