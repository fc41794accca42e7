//! Flat JSON document storage.
//!
//! The whole data set lives in one file shaped like a json-server `db.json`:
//! `{ "employees": [...], "log": [...] }`. Every mutation rewrites the file.

mod document;
pub mod log;

pub use document::Document;

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, LogEntry};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonStore {
    path: PathBuf,
    doc: Document,
}

impl JsonStore {
    /// Open the data file. A missing or empty file yields an empty document.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = match fs::read_to_string(&path) {
            Ok(s) if s.trim().is_empty() => Document::default(),
            Ok(s) => serde_json::from_str(&s)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "data file not found, starting empty");
                Document::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document to a sibling temp file, then rename it into place.
    pub fn save(&self) -> AppResult<()> {
        self.write(&self.doc)
    }

    fn write(&self, doc: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), employees = doc.employees.len(), "data file saved");
        Ok(())
    }

    /// Apply `f` to a copy of the document and keep the copy only once it is
    /// on disk. A failed write leaves the in-memory state untouched.
    fn commit<T>(&mut self, f: impl FnOnce(&mut Document) -> AppResult<T>) -> AppResult<T> {
        let mut next = self.doc.clone();
        let out = f(&mut next)?;
        self.write(&next)?;
        self.doc = next;
        Ok(out)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.doc.employees
    }

    pub fn get(&self, id: u64) -> AppResult<&Employee> {
        self.doc
            .employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(AppError::EmployeeNotFound(id))
    }

    /// Store a new record under the next free id and persist.
    pub fn insert(&mut self, mut employee: Employee) -> AppResult<Employee> {
        self.commit(|doc| {
            employee.id = doc.next_employee_id();
            doc.employees.push(employee.clone());
            Ok(employee)
        })
    }

    /// Full-record overwrite. The id always comes from the caller, never the body.
    pub fn replace(&mut self, id: u64, mut employee: Employee) -> AppResult<Employee> {
        self.commit(|doc| {
            let slot = doc
                .employees
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(AppError::EmployeeNotFound(id))?;
            employee.id = id;
            *slot = employee.clone();
            Ok(employee)
        })
    }

    /// Shallow merge of top-level fields into an existing record.
    pub fn patch(&mut self, id: u64, fields: &Value) -> AppResult<Employee> {
        let obj = fields
            .as_object()
            .ok_or_else(|| AppError::InvalidRequest("patch body must be a JSON object".into()))?;

        let current = self.get(id)?;
        let mut merged = serde_json::to_value(current)?;
        if let Some(target) = merged.as_object_mut() {
            for (k, v) in obj {
                if k != "id" {
                    target.insert(k.clone(), v.clone());
                }
            }
        }
        let employee: Employee = serde_json::from_value(merged)
            .map_err(|e| AppError::InvalidRequest(e.to_string()))?;
        employee.validate()?;
        self.replace(id, employee)
    }

    /// Load a record, let `f` change it, then overwrite the stored copy.
    pub fn update<F>(&mut self, id: u64, f: F) -> AppResult<Employee>
    where
        F: FnOnce(&mut Employee) -> AppResult<()>,
    {
        let mut employee = self.get(id)?.clone();
        f(&mut employee)?;
        self.replace(id, employee)
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.doc.log
    }
}
