//! Canonical JSON and atomic file writes.
//! - Objects: keys sorted lexicographically (UTF-8 byte order)
//! - Arrays: order preserved
//! - Output: compact, no trailing newline
//! - Atomic write: temp file in the same dir + fsync(temp) + rename; fsync(dir) on Unix.
//!   If the rename fails (e.g. cross-device), write the target directly.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Canonical bytes of `v`. Used for digests only; files on disk stay pretty-printed.
pub fn to_canonical_json_bytes(v: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(1024);
    write_canonical_value(v, &mut out);
    out
}

fn write_canonical_value(v: &Value, out: &mut Vec<u8>) {
    match v {
        Value::Object(map) => {
            out.push(b'{');
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_json_string(k, out);
                out.push(b':');
                write_canonical_value(&map[k.as_str()], out);
            }
            out.push(b'}');
        }
        Value::Array(arr) => {
            out.push(b'[');
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical_value(elem, out);
            }
            out.push(b']');
        }
        Value::String(s) => write_json_string(s, out),
        // Scalars already have a single compact spelling.
        scalar => out.extend_from_slice(scalar.to_string().as_bytes()),
    }
}

fn write_json_string(s: &str, out: &mut Vec<u8>) {
    // Value::String's Display is the escaped JSON literal.
    out.extend_from_slice(Value::String(s.to_owned()).to_string().as_bytes());
}

/// Write `bytes` to `path` atomically, creating the parent directory if needed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let tmp = make_unique_tmp_path(path);
    let written: io::Result<()> = (|| {
        let mut tf = OpenOptions::new().write(true).create_new(true).open(&tmp)?;
        tf.write_all(bytes)?;
        tf.sync_all()
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if fs::rename(&tmp, path).is_err() {
        let direct: io::Result<()> = (|| {
            let mut f = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
            f.write_all(bytes)?;
            f.sync_all()
        })();
        let _ = fs::remove_file(&tmp);
        direct?;
    }

    let _ = fsync_dir(&parent);
    Ok(())
}

/// "<filename>.<pid>.<counter>.tmp" next to `target`.
fn make_unique_tmp_path(target: &Path) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let pid = std::process::id();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let fname = target.file_name().and_then(|s| s.to_str()).unwrap_or("graph");
    target.with_file_name(format!("{fname}.{pid}.{n}.tmp"))
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    OpenOptions::new().read(true).open(dir)?.sync_all()
}

#[cfg(not(unix))]
#[inline]
fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_are_sorted_arrays_preserved() {
        let v = json!({
            "weight": 0.5,
            "name": "Cost",
            "alternatives": [ {"score": 0.1, "name": "B"}, {"name": "A"} ]
        });
        let s = String::from_utf8(to_canonical_json_bytes(&v)).unwrap();
        assert_eq!(
            s,
            r#"{"alternatives":[{"name":"B","score":0.1},{"name":"A"}],"name":"Cost","weight":0.5}"#
        );
    }

    #[test]
    fn strings_are_escaped() {
        let s = String::from_utf8(to_canonical_json_bytes(&json!({"k": "a\"b"}))).unwrap();
        assert_eq!(s, r#"{"k":"a\"b"}"#);
    }

    #[test]
    fn atomic_write_replaces_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("graph.json");
        write_atomic(&target, b"first").unwrap();
        write_atomic(&target, b"second").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");
        let leftovers = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter(|e| e.as_ref().unwrap().path().extension().map_or(false, |x| x == "tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }
}
