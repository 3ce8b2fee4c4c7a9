use crate::model::PropertyRecord;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_properties: u32,
    pub created_at: String,
    pub seed: Option<u64>,
    pub version: u32,
}

/// Where a catalog and its sidecar metadata live on disk.
pub struct CatalogPaths {
    pub catalog: PathBuf,
}

impl CatalogPaths {
    pub fn new<P: AsRef<Path>>(catalog: P) -> Self {
        Self { catalog: catalog.as_ref().to_path_buf() }
    }
    fn parent(&self) -> PathBuf {
        self.catalog.parent().map(Path::to_path_buf).unwrap_or_default()
    }
    pub fn meta(&self) -> PathBuf { self.parent().join("meta.json") }
    fn is_jsonl(&self) -> bool {
        self.catalog.extension().and_then(|s| s.to_str()) == Some("jsonl")
    }
}

/// Reads records from a JSON array, a single JSON object, or JSONL (by `.jsonl` extension).
pub fn load_catalog(paths: &CatalogPaths) -> Result<Vec<PropertyRecord>> {
    let path = &paths.catalog;
    let f = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    let mut reader = BufReader::new(f);
    if paths.is_jsonl() {
        let mut records = Vec::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let rec = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: bad property record", path.display(), n + 1))?;
            records.push(rec);
        }
        return Ok(records);
    }
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let json: serde_json::Value = serde_json::from_str(&buf)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    match json {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(json)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(json)?]),
        other => bail!("catalog {} must be an array or object, found {}", path.display(), kind_of(&other)),
    }
}

pub fn save_catalog(paths: &CatalogPaths, records: &[PropertyRecord]) -> Result<()> {
    create_dir_all(paths.parent())?;
    let mut w = BufWriter::new(File::create(&paths.catalog)?);
    if paths.is_jsonl() {
        for rec in records {
            serde_json::to_writer(&mut w, rec)?;
            w.write_all(b"\n")?;
        }
    } else {
        serde_json::to_writer_pretty(&mut w, records)?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_meta(paths: &CatalogPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(paths.parent())?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &CatalogPaths) -> Result<MetaFile> {
    let mut f = File::open(paths.meta())?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}

fn kind_of(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
