use std::{fs, path::Path};

/// Create a file and any missing parent directories.
pub fn touch(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn compare_string_lines_or_panic(ina: &str, inb: &str) {
    let a: Vec<&str> = ina.trim().split('\n').collect();
    let b: Vec<&str> = inb.trim().split('\n').collect();
    assert_eq!(
        a.len(),
        b.len(),
        "number of lines must be equal, got\n{}\nand\n{}",
        ina,
        inb
    );

    for (i, (la, lb)) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(la.trim_end(), lb.trim_end(), "line {} differs", i + 1);
    }
}
