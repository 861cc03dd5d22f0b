use crate::CrawlError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use url::Url;

/// Writes URLs to `path`, one per line
///
/// With `sort` the lines are in lexicographic order; otherwise the order is
/// whatever the set yields. Missing parent directories are created. An
/// existing file is replaced.
///
/// # Returns
///
/// * `Ok(usize)` - Number of URLs written
/// * `Err(CrawlError::Output)` - The file could not be created or written
pub fn write_url_list(path: &Path, urls: &HashSet<Url>, sort: bool) -> Result<usize, CrawlError> {
    let output_err = |source| CrawlError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(output_err)?;
        }
    }

    let mut lines: Vec<&str> = urls.iter().map(|u| u.as_str()).collect();
    if sort {
        lines.sort_unstable();
    }

    let file = File::create(path).map_err(output_err)?;
    let mut writer = BufWriter::new(file);
    for line in &lines {
        writeln!(writer, "{}", line).map_err(output_err)?;
    }
    writer.flush().map_err(output_err)?;

    Ok(lines.len())
}
