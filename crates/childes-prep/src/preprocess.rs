//! # Transcript Markup Preprocessing
//!
//! CHILDES XML wraps words in grouping and shortening tags which confuse
//! word extraction. A preprocessed copy of the corpus has them removed.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::PrepResult;

/// Markup fragments removed by [`strip_markup`].
pub const STRIPPED_MARKUP: [&str; 5] = [
    "<g>",
    "</g>",
    "<p type=\"drawl\"/>",
    "<shortening>",
    "</shortening>",
];

/// The conventional destination for a preprocessed corpus: `{source}-preprocessed`.
pub fn preprocessed_dir<P: AsRef<Path>>(source: P) -> PathBuf {
    let mut name = source.as_ref().as_os_str().to_os_string();
    name.push("-preprocessed");
    PathBuf::from(name)
}

/// Remove every [`STRIPPED_MARKUP`] fragment from `text`.
pub fn strip_markup(text: &str) -> String {
    let mut text = text.to_string();
    for markup in STRIPPED_MARKUP {
        text = text.replace(markup, "");
    }
    text
}

/// Copy the `source` tree to `destination`, stripping markup from `*.xml` files.
///
/// Returns `Ok(false)` without touching anything if `destination` exists.
pub fn preprocess_corpus_dir<S: AsRef<Path>, D: AsRef<Path>>(
    source: S,
    destination: D,
) -> PrepResult<bool> {
    let destination = destination.as_ref();
    if destination.exists() {
        log::info!(
            "preprocessed directory {} already exists; remove it to re-preprocess",
            destination.display()
        );
        return Ok(false);
    }

    let count = copy_stripped(source.as_ref(), destination)?;
    log::info!("preprocessed {count} xml files into {}", destination.display());
    Ok(true)
}

fn copy_stripped(
    source: &Path,
    destination: &Path,
) -> PrepResult<usize> {
    fs::create_dir_all(destination)?;

    let mut count = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let target = destination.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            count += copy_stripped(&path, &target)?;
        } else if path.extension().is_some_and(|ext| ext == "xml") {
            fs::write(&target, strip_markup(&fs::read_to_string(&path)?))?;
            count += 1;
        } else {
            fs::copy(&path, &target)?;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<u><g><w>hi</w></g><shortening>th</shortening>ere<p type=\"drawl\"/></u>"),
            "<u><w>hi</w>there</u>"
        );
    }

    #[test]
    fn test_preprocessed_dir() {
        assert_eq!(
            preprocessed_dir("data/childes-xml"),
            PathBuf::from("data/childes-xml-preprocessed")
        );
    }

    #[test]
    fn test_preprocess_corpus_dir() {
        tempdir::TempDir::new("preprocess_test")
            .and_then(|dir| {
                let source = dir.path().join("corpus");
                fs::create_dir_all(source.join("Brown/Adam"))?;
                fs::write(source.join("Brown/Adam/a.xml"), "<g>x</g>")?;
                fs::write(source.join("README"), "<g>kept</g>")?;

                let destination = preprocessed_dir(&source);
                assert!(preprocess_corpus_dir(&source, &destination).unwrap());

                assert_eq!(
                    fs::read_to_string(destination.join("Brown/Adam/a.xml"))?,
                    "x"
                );
                assert_eq!(
                    fs::read_to_string(destination.join("README"))?,
                    "<g>kept</g>"
                );

                // A second run leaves the existing copy alone.
                assert!(!preprocess_corpus_dir(&source, &destination).unwrap());

                Ok(())
            })
            .unwrap();
    }
}
