//! Upload selection state fed by the picker and by drag-and-drop

use serde::{Deserialize, Serialize};

/// A file handed to the widget, by the native picker or by a drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedFile {
	pub name: String,
	pub size: u64,
}

impl DroppedFile {
	/// # Examples
	///
	/// ```
	/// use formgate::upload::DroppedFile;
	///
	/// let file = DroppedFile::new("cv.pdf", 48_213);
	/// assert_eq!(file.name, "cv.pdf");
	/// ```
	pub fn new(name: impl Into<String>, size: u64) -> Self {
		Self {
			name: name.into(),
			size,
		}
	}
}

/// The single selection slot both input paths write.
///
/// Whichever path wrote last owns the selection; there is no separate
/// "file was chosen" flag to fall out of sync with it.
///
/// # Examples
///
/// ```
/// use formgate::upload::{DroppedFile, UploadSelection};
///
/// let mut selection = UploadSelection::new();
/// assert!(!selection.present());
///
/// selection.assign(vec![DroppedFile::new("cv.pdf", 48_213)]);
/// assert!(selection.present());
/// assert_eq!(selection.first_name(), Some("cv.pdf"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSelection {
	files: Vec<DroppedFile>,
}

impl UploadSelection {
	pub fn new() -> Self {
		Self { files: vec![] }
	}

	/// Replace the selection; the previous selection is discarded
	pub fn assign(&mut self, files: Vec<DroppedFile>) {
		self.files = files;
	}

	pub fn clear(&mut self) {
		self.files.clear();
	}

	pub fn present(&self) -> bool {
		!self.files.is_empty()
	}

	/// Name of the first selected file, the one rendered in the UI
	pub fn first_name(&self) -> Option<&str> {
		self.files.first().map(|f| f.name.as_str())
	}

	pub fn files(&self) -> &[DroppedFile] {
		&self.files
	}
}
