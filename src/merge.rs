//! Corpus merging and JSON output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ConvertConfig;
use crate::convert::{Conversion, ConversionStats, IobConverter, JsonlConverter};
use crate::record::{renumber, SentenceRecord};
use crate::Result;

/// Concatenate record lists in order and renumber globally from zero.
#[must_use]
pub fn concat_corpora<I>(parts: I) -> Vec<SentenceRecord>
where
    I: IntoIterator<Item = Vec<SentenceRecord>>,
{
    let mut merged: Vec<SentenceRecord> = parts.into_iter().flatten().collect();
    renumber(&mut merged);
    merged
}

/// Render records as a pretty-printed JSON array (two-space indent,
/// non-ASCII characters kept literal).
pub fn corpus_to_string(records: &[SentenceRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path` as a pretty-printed JSON array.
///
/// Missing parent directories are created.
pub fn write_corpus(records: &[SentenceRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// What a merge produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Stats of each source, in merge order.
    pub sources: Vec<(PathBuf, ConversionStats)>,
    /// Records written.
    pub total: usize,
    /// Where the corpus was written.
    pub output: PathBuf,
}

/// Merges two IOB files and one JSONL file into one BILUO corpus.
///
/// ```rust,no_run
/// use biluo::CorpusMerger;
///
/// let summary = CorpusMerger::new()
///     .merge("data/all_data.txt", "data/bner.txt", "data/main.jsonl", "data/merged.json")
///     .unwrap();
/// println!("Total data samples: {}", summary.total);
/// ```
#[derive(Debug, Default)]
pub struct CorpusMerger {
    iob: IobConverter,
    jsonl: JsonlConverter,
}

impl CorpusMerger {
    /// Merger with default converters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merger with converters built from `config`.
    #[must_use]
    pub fn from_config(config: &ConvertConfig) -> Self {
        Self {
            iob: config.iob_converter(),
            jsonl: config.jsonl_converter(),
        }
    }

    /// Replace the IOB converter.
    #[must_use]
    pub fn with_iob_converter(mut self, converter: IobConverter) -> Self {
        self.iob = converter;
        self
    }

    /// Replace the JSONL converter.
    #[must_use]
    pub fn with_jsonl_converter(mut self, converter: JsonlConverter) -> Self {
        self.jsonl = converter;
        self
    }

    /// Convert the three sources and concatenate them in order `[a, b, c]`.
    pub fn build(
        &self,
        iob_a: impl AsRef<Path>,
        iob_b: impl AsRef<Path>,
        jsonl: impl AsRef<Path>,
    ) -> Result<(Vec<SentenceRecord>, Vec<(PathBuf, ConversionStats)>)> {
        let sources = [
            (iob_a.as_ref().to_path_buf(), self.iob.convert_file(&iob_a)?),
            (iob_b.as_ref().to_path_buf(), self.iob.convert_file(&iob_b)?),
            (jsonl.as_ref().to_path_buf(), self.jsonl.convert_file(&jsonl)?),
        ];

        let stats = sources
            .iter()
            .map(|(path, conversion)| (path.clone(), conversion.stats))
            .collect();
        let records = concat_corpora(
            sources
                .into_iter()
                .map(|(_, Conversion { records, .. })| records),
        );
        Ok((records, stats))
    }

    /// Convert the three sources, merge them and write the corpus to `output`.
    pub fn merge(
        &self,
        iob_a: impl AsRef<Path>,
        iob_b: impl AsRef<Path>,
        jsonl: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<MergeSummary> {
        let output = output.as_ref();
        let (records, sources) = self.build(iob_a, iob_b, jsonl)?;

        write_corpus(&records, output)?;
        log::info!("Merged file saved at: {}", output.display());
        log::info!("Total data samples: {}", records.len());

        Ok(MergeSummary {
            sources,
            total: records.len(),
            output: output.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TokenRecord;

    fn records(n: usize, first_id: usize) -> Vec<SentenceRecord> {
        (0..n)
            .map(|i| SentenceRecord::new(first_id, vec![TokenRecord::new(format!("t{}", i), "U-PER")]))
            .collect()
    }

    #[test]
    fn test_concat_renumbers_globally() {
        let merged = concat_corpora([records(2, 0), records(3, 0), records(4, 0)]);
        assert_eq!(merged.len(), 9);
        let ids: Vec<usize> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_concat_keeps_source_order() {
        let mut a = records(1, 0);
        a[0].paragraphs[0].sentences[0].tokens[0].text = "first".into();
        let mut c = records(1, 0);
        c[0].paragraphs[0].sentences[0].tokens[0].text = "last".into();
        let merged = concat_corpora([a, Vec::new(), c]);
        assert_eq!(merged[0].tokens().next().unwrap().text, "first");
        assert_eq!(merged[1].tokens().next().unwrap().text, "last");
        assert_eq!(merged[1].id, 1);
    }

    #[test]
    fn test_pretty_json_keeps_non_ascii() {
        let corpus = vec![SentenceRecord::new(0, vec![TokenRecord::new("করিম", "U-PER")])];
        let json = corpus_to_string(&corpus).unwrap();
        assert!(json.contains("\"orth\": \"করিম\""));
        assert!(json.starts_with("[\n  {\n    \"id\": 0,"));
    }

    #[test]
    fn test_empty_corpus_renders_as_empty_array() {
        assert_eq!(corpus_to_string(&[]).unwrap(), "[]");
    }
}
