use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while acquiring the raw corpus bytes.
///
/// Every step of the loading sequence fails distinctly so the caller can
/// map each kind to its own reporting or exit conventions.
#[derive(Debug, Error)]
pub enum CorpusIoError {
	#[error("could not open corpus file '{}': {source}", .path.display())]
	Open { path: PathBuf, source: std::io::Error },

	#[error("failed to determine size of corpus file '{}': {source}", .path.display())]
	Size { path: PathBuf, source: std::io::Error },

	#[error("memory allocation failed for corpus buffer ({bytes} bytes)")]
	Alloc { bytes: usize },

	#[error("failed to read corpus file '{}': {source}", .path.display())]
	Read { path: PathBuf, source: std::io::Error },

	#[error("short read on corpus file '{}' (read {got} of {expected} bytes)", .path.display())]
	ShortRead { path: PathBuf, got: usize, expected: usize },
}

/// Reads a corpus file and returns its raw bytes.
///
/// - Reads the entire file into memory in one pass
/// - No decoding is attempted; sanitization happens later
pub(crate) fn read_file_bytes<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>, CorpusIoError> {
	let path = filename.as_ref();

	let mut file = File::open(path).map_err(|source| CorpusIoError::Open {
		path: path.to_path_buf(),
		source,
	})?;

	let expected = file
		.metadata()
		.map_err(|source| CorpusIoError::Size {
			path: path.to_path_buf(),
			source,
		})?
		.len() as usize;

	let mut contents = Vec::new();
	contents
		.try_reserve_exact(expected)
		.map_err(|_| CorpusIoError::Alloc { bytes: expected })?;

	let got = file.read_to_end(&mut contents).map_err(|source| CorpusIoError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	if got != expected {
		return Err(CorpusIoError::ShortRead {
			path: path.to_path_buf(),
			got,
			expected,
		});
	}

	Ok(contents)
}
