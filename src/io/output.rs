use super::*;
use std::fmt;
use std::path::{Path, PathBuf};

/// File extension of written drawings.
pub const EXTENSION: &str = "dxf";

/// One drawing to be written: where, and which sub-plan goes in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
    pub code: Option<String>,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        if let Some(code) = &self.code {
            write!(f, " (plan '{}')", code)?;
        }
        Ok(())
    }
}

/// Work out the drawings to write for the requested output path and the discovered sub-plan
/// codes.
///
/// A `.dxf` extension (any case) on `requested` is dropped to get the base path. No codes or a
/// single code write to `<base>.dxf`; several codes write `<base>_1.dxf`, `<base>_2.dxf`, ...
/// in code order.
pub fn output_paths(requested: &Path, codes: &[String]) -> Vec<Output> {
    let base = match requested.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(EXTENSION) => requested.with_extension(""),
        _ => requested.to_path_buf(),
    };

    let path = |suffix: &str| {
        let mut s = base.clone().into_os_string();
        s.push(suffix);
        s.push(".");
        s.push(EXTENSION);
        PathBuf::from(s)
    };

    match codes {
        [] => vec![Output {
            path: path(""),
            code: None,
        }],
        [code] => vec![Output {
            path: path(""),
            code: Some(code.clone()),
        }],
        codes => codes
            .iter()
            .enumerate()
            .map(|(i, code)| Output {
                path: path(&format!("_{}", i + 1)),
                code: Some(code.clone()),
            })
            .collect(),
    }
}

/// Convert the plan document at `input` into one or more drawings based on `output`.
///
/// Drawings are written one at a time; a failure stops the run but leaves earlier drawings in
/// place.
pub fn convert_file<I, O>(input: I, output: O, opts: &Options) -> Result<Vec<Output>>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    convert_file_with(input, output, opts, |_| ())
}

/// As [`convert_file`], calling `saved` with each drawing straight after it is written.
pub fn convert_file_with<I, O, F>(
    input: I,
    output: O,
    opts: &Options,
    mut saved: F,
) -> Result<Vec<Output>>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
    F: FnMut(&Output),
{
    let plan = Plan::load(input)?;

    let codes = discover_codes(&plan);
    if !codes.is_empty() {
        log::info!("found sub-plans: {}", codes.join(", "));
    }

    let outputs = output_paths(output.as_ref(), &codes);
    for out in &outputs {
        let bounds = write_plan(&plan, &out.path, out.code.as_deref(), opts)?;
        match bounds.extents() {
            Some(e) => log::info!("wrote {} spanning {:?} to {:?}", out, e.min, e.max),
            None => log::info!("wrote {} (empty)", out),
        }
        saved(out);
    }

    Ok(outputs)
}
