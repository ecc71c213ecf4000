use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Extracts an account name from a timeline dump path.
///
/// Examples:
/// - `"./dumps/drake.json"` → `"drake"`
/// - `"drake.json"` → `"drake"`
pub(crate) fn account_name<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns file names only (no paths). Subdirectories are ignored.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn account_name_drops_folder_and_extension() {
		assert_eq!(account_name("./dumps/drake.json").unwrap(), "drake");
		assert_eq!(account_name("kanyewest.json").unwrap(), "kanyewest");
	}

	#[test]
	fn list_files_filters_by_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.json"), "[]").unwrap();
		fs::write(dir.path().join("a.json"), "[]").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();
		fs::create_dir(dir.path().join("nested.json")).unwrap();

		assert_eq!(list_files(dir.path(), "json").unwrap(), ["a.json", "b.json"]);
	}

	#[test]
	fn dot_resolves_to_current_dir() {
		assert_eq!(normalize_folder(Path::new(".")), env::current_dir().unwrap());
		assert_eq!(normalize_folder(Path::new("dumps")), PathBuf::from("dumps"));
	}
}
