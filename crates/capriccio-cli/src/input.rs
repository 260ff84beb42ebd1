//! Reading feature documents from files or stdin.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use capriccio::Feature;
use eyre::{Context, Result};

use crate::error::CliError;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input, selected with `-`.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    /// Interpret a command line argument.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Read every byte of the source.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the source cannot be read.
    pub fn read_bytes(&self) -> Result<Vec<u8>, CliError> {
        match self {
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin().lock().read_to_end(&mut bytes)?;
                Ok(bytes)
            }
            Self::File(path) => Ok(std::fs::read(path)?),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and parse the document at `source`.
///
/// # Errors
///
/// Returns an error naming the source if it cannot be read or parsed.
pub fn load_feature(source: &Source) -> Result<Feature> {
    let bytes = source
        .read_bytes()
        .wrap_err_with(|| format!("failed to read {source}"))?;
    let feature =
        Feature::from_utf8(&bytes).wrap_err_with(|| format!("failed to parse {source}"))?;
    tracing::info!(
        source = %source,
        scenarios = feature.scenarios.len(),
        "parsed feature"
    );
    Ok(feature)
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests fail loudly on fixture I/O errors")]
mod tests {
    use super::*;
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("-", Source::Stdin)]
    #[case("a.feature", Source::File(PathBuf::from("a.feature")))]
    fn interprets_arguments(#[case] arg: &str, #[case] expected: Source) {
        assert_eq!(Source::from_arg(Path::new(arg)), expected);
    }

    #[test]
    fn loads_feature_from_file() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"Feature: F\nScenario: S\nGiven x\n")
            .expect("write fixture");
        let feature = load_feature(&Source::File(file.path().to_path_buf())).expect("parses");
        assert_eq!(feature.name, "F");
    }

    #[test]
    fn parse_errors_name_the_file() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"Feature: F\n").expect("write fixture");
        let source = Source::File(file.path().to_path_buf());
        let err = load_feature(&source).expect_err("document has no scenarios");
        let message = format!("{err:#}");
        assert!(message.contains(&format!("failed to parse {source}")), "{message}");
        assert!(message.contains("line 2"), "{message}");
    }

    #[test]
    fn missing_files_report_io_errors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let source = Source::File(dir.path().join("absent.feature"));
        let err = load_feature(&source).expect_err("file does not exist");
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
