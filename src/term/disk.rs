use crate::mach::transfer::Storage;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Program files in a directory. Names without an extension are stored
/// as `.bas` files.
#[derive(Debug, Clone)]
pub struct Disk {
    root: PathBuf,
}

impl Disk {
    pub fn new<P: Into<PathBuf>>(root: P) -> Disk {
        Disk { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names are limited to letters, digits, `_`, `.` and spaces, so a
    /// file never lands outside the root.
    fn path(&self, name: &str) -> io::Result<PathBuf> {
        let valid = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == ' ';
        if name.is_empty() || name.starts_with('.') || !name.chars().all(valid) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("bad file name \"{}\"", name),
            ));
        }
        if name.contains('.') {
            Ok(self.root.join(name))
        } else {
            Ok(self.root.join(format!("{}.bas", name)))
        }
    }
}

impl Storage for Disk {
    fn read(&self, name: &str) -> io::Result<Option<Vec<String>>> {
        let file = match File::open(self.path(name)?) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error),
        };
        let lines = BufReader::new(file)
            .lines()
            .map(|line| line.map(|s| s.trim_end_matches('\r').to_string()))
            .collect::<io::Result<Vec<String>>>()?;
        Ok(Some(lines))
    }

    fn write(&mut self, name: &str, lines: Vec<String>) -> io::Result<()> {
        let path = self.path(name)?;
        fs::create_dir_all(&self.root)?;
        let mut file = File::create(path)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }

    /// File names with a dot somewhere after the first character.
    fn names(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(error) => return Err(error),
        };
        let mut names = vec![];
        for entry in entries {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if is_program_name(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

fn is_program_name(name: &str) -> bool {
    match name.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < name.len(),
        None => false,
    }
}
