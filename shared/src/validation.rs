//! Validation utilities for image uploads

/// Accepted image extensions (lower-case)
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Default upload size limit: 5 MB
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Maximum stored length of the free-text location field
pub const MAX_LOCATION_LENGTH: usize = 100;

/// Maximum stored length of a sanitized filename
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Check that a filename carries an accepted image extension
pub fn validate_image_filename(filename: &str) -> Result<(), &'static str> {
    if filename.trim().is_empty() {
        return Err("No selected file");
    }

    let extension = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return Err("File type not allowed. Please upload JPG, JPEG or PNG files only."),
    };

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err("File type not allowed. Please upload JPG, JPEG or PNG files only.");
    }

    Ok(())
}

/// Check upload size against a byte limit
pub fn validate_upload_size(size: usize, max_bytes: usize) -> Result<(), &'static str> {
    if size == 0 {
        return Err("Uploaded file is empty");
    }
    if size > max_bytes {
        return Err("Uploaded file exceeds the maximum allowed size");
    }
    Ok(())
}

/// Validate the optional location entered with an upload
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Err("Location must be at most 100 characters");
    }
    Ok(())
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; whitespace becomes `_`;
/// any directory part and leading dots are dropped. Long names are cut
/// to [`MAX_FILENAME_LENGTH`] bytes, keeping the extension.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = basename
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_start_matches(['.', '_']);
    if cleaned.len() <= MAX_FILENAME_LENGTH {
        return cleaned.to_string();
    }

    // Only ASCII survives the filter, so byte slicing is safe
    match cleaned.rsplit_once('.') {
        Some((stem, ext)) if ext.len() < MAX_FILENAME_LENGTH / 2 => {
            let keep = MAX_FILENAME_LENGTH - ext.len() - 1;
            format!("{}.{}", &stem[..keep.min(stem.len())], ext)
        }
        _ => cleaned[..MAX_FILENAME_LENGTH].to_string(),
    }
}
