use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::managererror::{ManagerError, parse_json_value};

/// Named objects in insertion order.
///
/// Loaders insert into a builder so that later JSON objects can refer to
/// earlier ones by name.
#[derive(Clone, Debug)]
pub struct ManagerBuilder<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>
}

impl<V> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder { entries: Vec::new(), index: HashMap::new() }
    }
}

impl<V> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn insert(&mut self, name: String, v: V) -> Result<(), ManagerError> {
        if self.index.contains_key(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, v));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&V, ManagerError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    /// Reorders the entries from position `start` on to follow `order`.
    ///
    /// Names in `order` that are not in that tail are ignored; tail entries
    /// missing from `order` keep their relative order at the end.
    pub fn reorder_tail(&mut self, start: usize, order: &[String]) {
        let start = start.min(self.entries.len());
        let mut tail: Vec<Option<(String, V)>> = self.entries.drain(start..).map(Some).collect();
        let picks: Vec<usize> = {
            let position: HashMap<&str, usize> = tail
                .iter()
                .enumerate()
                .filter_map(|(i, e)| e.as_ref().map(|(name, _)| (name.as_str(), i)))
                .collect();
            order.iter().filter_map(|name| position.get(name.as_str()).copied()).collect()
        };

        let mut reordered = Vec::with_capacity(tail.len());
        for i in picks {
            if let Some(entry) = tail[i].take() {
                reordered.push(entry);
            }
        }
        reordered.extend(tail.into_iter().flatten());
        self.entries.extend(reordered);

        for (i, (name, _)) in self.entries.iter().enumerate().skip(start) {
            self.index.insert(name.clone(), i);
        }
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}


/// Loads named objects of type `V` from JSON, with `S` as supporting context.
pub trait IManager<V, S> {

    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<V>,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self,
                                builder: &mut ManagerBuilder<V>,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(builder, j.clone(), supports)?;
        }
        Ok(())
    }

    /// Reads a JSON file holding either one object or an array of objects.
    fn from_reader(&self,
                   builder: &mut ManagerBuilder<V>,
                   file_path: &Path,
                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(builder, &json_array, supports)
        } else {
            self.insert_obj_from_json(builder, json_value, supports)
        }
    }
}
