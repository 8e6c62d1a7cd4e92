//! Ingestion of author XML files and folders into a dictionary.
//!
//! A corpus is a set of folders of `*.xml` author feeds. Files are visited in
//! sorted path order. A file that cannot be read or parsed is logged, listed
//! in [`CorpusSummary::failed_files`], and skipped; the scan goes on.

use crate::dictionary::{IngestStats, NameFrequencyDictionary};
use crate::error::NameDictError;
use crate::feed::xml::parse_author_xml;
use crate::phonetic::PhoneticEncoder;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Options for [`NameFrequencyDictionary::ingest_xml_folder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderScan {
    /// Descend into subfolders
    pub recursive: bool,
    /// Clear the dictionary before scanning
    pub clear: bool,
}

impl Default for FolderScan {
    fn default() -> Self {
        Self {
            recursive: true,
            clear: false,
        }
    }
}

impl FolderScan {
    /// Sets whether subfolders are scanned
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets whether the dictionary is cleared first
    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }
}

/// Outcome of a folder scan.
#[derive(Debug, Default)]
pub struct CorpusSummary {
    /// Files ingested successfully
    pub files_processed: usize,
    /// Files skipped, with the reason
    pub failed_files: Vec<(PathBuf, String)>,
    /// Counters over all ingested records
    pub stats: IngestStats,
}

impl AddAssign for CorpusSummary {
    fn add_assign(&mut self, other: Self) {
        self.files_processed += other.files_processed;
        self.failed_files.extend(other.failed_files);
        self.stats += other.stats;
    }
}

impl<E: PhoneticEncoder> NameFrequencyDictionary<E> {
    /// Ingests every author of one XML feed file.
    ///
    /// # Errors
    ///
    /// Returns [`NameDictError`] if the file cannot be read or is not well-formed XML.
    pub fn ingest_xml_file(&mut self, path: impl AsRef<Path>) -> Result<IngestStats, NameDictError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| NameDictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let authors = parse_author_xml(&content)?;
        Ok(self.ingest_all(authors))
    }

    /// Ingests every `*.xml` file of a folder.
    ///
    /// # Errors
    ///
    /// Returns [`NameDictError::Io`] if `folder` is not a readable directory.
    /// Failures of individual files do not abort the scan.
    pub fn ingest_xml_folder(
        &mut self,
        folder: impl AsRef<Path>,
        scan: FolderScan,
    ) -> Result<CorpusSummary, NameDictError> {
        let folder = folder.as_ref();
        let files = xml_files(folder, scan.recursive)?;
        if scan.clear {
            self.clear();
        }

        let mut summary = CorpusSummary::default();
        let total = files.len();
        for (index, file) in files.into_iter().enumerate() {
            info!("Processing file {} ({} of {})", file.display(), index + 1, total);
            match self.ingest_xml_file(&file) {
                Ok(stats) => {
                    summary.files_processed += 1;
                    summary.stats += stats;
                }
                Err(err) => {
                    warn!("Skipping {}: {}", file.display(), err);
                    summary.failed_files.push((file, err.to_string()));
                }
            }
        }
        Ok(summary)
    }

    /// Clears the dictionary, then ingests several folders recursively as one corpus.
    ///
    /// # Errors
    ///
    /// Returns [`NameDictError::Io`] for the first folder that is not a readable directory.
    pub fn ingest_xml_folders<P: AsRef<Path>>(
        &mut self,
        folders: &[P],
    ) -> Result<CorpusSummary, NameDictError> {
        self.clear();
        let mut summary = CorpusSummary::default();
        for folder in folders {
            info!("Processing folder {}", folder.as_ref().display());
            summary += self.ingest_xml_folder(folder, FolderScan::default())?;
        }
        Ok(summary)
    }
}

/// The `*.xml` files below `folder`, in sorted order.
fn xml_files(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>, NameDictError> {
    let metadata = std::fs::metadata(folder).map_err(|source| NameDictError::Io {
        path: folder.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(NameDictError::Io {
            path: folder.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) if entry.file_type().is_file() && has_xml_extension(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(err) => warn!("Skipping unreadable entry below {}: {}", folder.display(), err),
        }
    }
    Ok(files)
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::TestEncoder;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    const FILE_A: &str = r#"<Authors>
  <Author><FamilyName>Silva</FamilyName><GivenName>Anne-Els van de</GivenName></Author>
</Authors>"#;

    const FILE_B: &str = r#"<Authors>
  <Author><FamilyName>Silva</FamilyName><GivenName>Anne-Els</GivenName></Author>
  <Author><FamilyName>Leite Júnior</FamilyName><GivenName>Paulo</GivenName></Author>
</Authors>"#;

    fn dictionary() -> NameFrequencyDictionary<TestEncoder> {
        NameFrequencyDictionary::with_encoder(TestEncoder)
    }

    #[test]
    fn test_ingest_xml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.xml");
        fs::write(&path, FILE_B).unwrap();

        let mut dict = dictionary();
        let stats = dict.ingest_xml_file(&path).unwrap();
        assert_eq!(stats.records, 2);
        assert_eq!(dict.get("Leite").unwrap().occ_family, 1);
        assert_eq!(dict.get("Paulo").unwrap().occ_given, 1);
    }

    #[test]
    fn test_ingest_missing_file() {
        let mut dict = dictionary();
        let result = dict.ingest_xml_file("/definitely/not/here.xml");
        assert!(matches!(result, Err(NameDictError::Io { .. })));
    }

    #[test]
    fn test_ingest_folder_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), FILE_A).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b.XML"), FILE_B).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a feed").unwrap();

        let mut dict = dictionary();
        let summary = dict
            .ingest_xml_folder(dir.path(), FolderScan::default())
            .unwrap();
        assert_eq!(summary.files_processed, 2);
        assert!(summary.failed_files.is_empty());
        assert_eq!(summary.stats.records, 3);
        assert_eq!(dict.get("Anne-Els").unwrap().occ_given, 2);
        assert_eq!(dict.get("Silva").unwrap().occ_family, 2);
        assert!(dict.get("Van").is_none());
    }

    #[test]
    fn test_ingest_folder_flat() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), FILE_A).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b.xml"), FILE_B).unwrap();

        let mut dict = dictionary();
        let summary = dict
            .ingest_xml_folder(dir.path(), FolderScan::default().recursive(false))
            .unwrap();
        assert_eq!(summary.files_processed, 1);
        assert!(dict.get("Paulo").is_none());
    }

    #[test]
    fn test_broken_file_does_not_abort_scan() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), "<Authors><Author><FamilyName>X</GivenName>").unwrap();
        fs::write(dir.path().join("b.xml"), FILE_B).unwrap();

        let mut dict = dictionary();
        let summary = dict
            .ingest_xml_folder(dir.path(), FolderScan::default())
            .unwrap();
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.failed_files.len(), 1);
        assert!(summary.failed_files[0].0.ends_with("a.xml"));
        assert_eq!(dict.get("Paulo").unwrap().occ_given, 1);
    }

    #[test]
    fn test_folder_scan_clear() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.xml"), FILE_B).unwrap();

        let mut dict = dictionary();
        dict.ingest(&crate::RawNamePair::new("Olaf", "Lund"));
        dict.ingest_xml_folder(dir.path(), FolderScan::default().clear(true))
            .unwrap();
        assert!(dict.get("Olaf").is_none());
        assert!(dict.get("Paulo").is_some());
    }

    #[test]
    fn test_ingest_folders_as_one_corpus() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(first.path().join("a.xml"), FILE_A).unwrap();
        fs::write(second.path().join("b.xml"), FILE_B).unwrap();

        let mut dict = dictionary();
        dict.ingest(&crate::RawNamePair::new("Olaf", "Lund"));
        let summary = dict
            .ingest_xml_folders(&[first.path(), second.path()])
            .unwrap();
        assert_eq!(summary.files_processed, 2);
        assert!(dict.get("Olaf").is_none());
        assert_eq!(dict.get("Silva").unwrap().occ_family, 2);
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let mut dict = dictionary();
        let result = dict.ingest_xml_folder(dir.path().join("absent"), FolderScan::default());
        assert!(matches!(result, Err(NameDictError::Io { .. })));
    }
}
