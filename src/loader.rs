use std::fs::File;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::types::{RawSample, SampleTable, REQUIRED_COLUMNS};

pub const UPLOAD_PROMPT: &str = "Faça upload do arquivo CSV...";

/// Ask for a CSV path on `output` and read the answer from `input`.
///
/// An empty answer picks `default` when there is one. EOF, or an empty answer
/// without a default, is [`AppError::NoFile`].
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default: Option<&Path>,
) -> Result<PathBuf> {
    let stdout_error = |source| AppError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };

    let prompt = match default {
        Some(path) => format!("{} [{}] ", UPLOAD_PROMPT, path.display()),
        None => format!("{} ", UPLOAD_PROMPT),
    };
    output.write_all(prompt.as_bytes()).map_err(stdout_error)?;
    output.flush().map_err(stdout_error)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|source| AppError::Io {
        path: PathBuf::from("<stdin>"),
        source,
    })?;
    if read == 0 {
        return Err(AppError::NoFile);
    }

    let answer = line.trim();
    if answer.is_empty() {
        return default.map(Path::to_path_buf).ok_or(AppError::NoFile);
    }
    Ok(PathBuf::from(answer))
}

/// 从文件加载样本表
pub fn load_from_path(path: &Path) -> Result<SampleTable> {
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = load_samples(file)?;
    if table.is_empty() {
        warn!("{} has a header but no samples", path.display());
    } else {
        info!("Loaded {} samples from {}", table.len(), path.display());
    }
    Ok(table)
}

/// 解析 CSV：先检查表头，再逐行反序列化
pub fn load_samples<R: Read>(reader: R) -> Result<SampleTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    debug!("CSV header: {:?}", headers);
    // 完全为空的文件没有表头，属于解析失败
    if headers.is_empty() {
        return Err(AppError::EmptyFile);
    }
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(AppError::MissingColumn(missing.to_string()));
    }

    let rows = reader
        .deserialize::<RawSample>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(SampleTable::new(rows))
}
