use std::cell::{
    RefCell, RefMut
};
use std::collections::{
    HashMap, HashSet
};
use std::fs::File;
use std::io::BufReader;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


/// Name-keyed registry of objects built from JSON entries.
///
/// `S` is whatever the builder needs besides the entry itself; numerical
/// settings need nothing, so the concrete managers use `()`.
///
/// Loading is all-or-nothing: a batch is fully built and its names checked
/// before anything is inserted. A name may be registered only once.
pub trait IManager<V, S> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;
    
    /// Builds the named object without registering it.
    fn build_obj_from_json(&self, 
                           json_value: serde_json::Value,
                           supports: &S) -> Result<(String, V), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        let elem_opt = map.get(name).cloned();
        elem_opt.ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn build_obj_vec_from_json(&self, 
                               json_vec: &[serde_json::Value],
                               supports: &S) -> Result<Vec<(String, V)>, ManagerError> {
        let mut names = HashSet::new();
        let mut objs = Vec::with_capacity(json_vec.len());
        for j in json_vec.iter() {
            let (name, v) = self.build_obj_from_json(j.clone(), supports)?;
            if !names.insert(name.clone()) || self.contains(&name) {
                return Err(ManagerError::DuplicateNameError(name));
            }
            objs.push((name, v));
        }
        Ok(objs)
    }

    /// Registers objects returned by [`IManager::build_obj_vec_from_json`].
    fn insert_objs(&self, objs: Vec<(String, V)>) {
        let mut map = self.map();
        for (name, v) in objs {
            map.insert(name, v);
        }
    }

    fn insert_obj_from_json(&self, 
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError> {
        self.insert_obj_from_json_vec(&[json_value], supports)
    }

    fn insert_obj_from_json_vec(&self, 
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {                
        let objs = self.build_obj_vec_from_json(json_vec, supports)?;
        self.insert_objs(objs);
        Ok(())
    }

    /// Loads either a single JSON entry or an array of entries from a file.
    fn from_reader(&self, 
                   file_path: &str,
                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array, supports)
        } else {
            self.insert_obj_from_json(json_value, supports)
        }
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where 
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V, ()> for Manager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn build_obj_from_json(&self, 
                           json_value: serde_json::Value,
                           _supports: &()) -> Result<(String, V), ManagerError> {   
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?; 
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.name().to_owned(), v))
    }
}
