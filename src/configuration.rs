use std::cell::{
    RefCell, 
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;


use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager, 
    Manager
};
use crate::math::differentiate::differentiator::BackwardDifferentiator;
use crate::math::differentiate::differentiatormanager::DifferentiatorManager;
use crate::math::integrate::integrator::TrapezoidIntegrator;
use crate::math::integrate::integratormanager::IntegratorManager;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    differentiator: Vec<serde_json::Value>,
    #[serde(default)]
    integrator: Vec<serde_json::Value>
}

/// Named differentiator and integrator settings, loaded from JSON:
///
/// ```json
/// {
///     "differentiator": [{ "name": "Fine", "step_size": 0.001 }],
///     "integrator": [{ "name": "Fine", "subdivisions": 500 }]
/// }
/// ```
pub struct Configuration {
    differentiator_manager_cell: RefCell<Manager<BackwardDifferentiator>>,
    integrator_manager_cell: RefCell<Manager<TrapezoidIntegrator>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            differentiator_manager_cell: RefCell::new(DifferentiatorManager::new()),
            integrator_manager_cell: RefCell::new(IntegratorManager::new())
        }
    }

    pub fn differentiator_manager(&self) -> RefMut<'_, Manager<BackwardDifferentiator>> {
        self.differentiator_manager_cell.borrow_mut()
    }

    pub fn integrator_manager(&self) -> RefMut<'_, Manager<TrapezoidIntegrator>> {
        self.integrator_manager_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        // Both sections must build before either manager is touched.
        let differentiators = self.differentiator_manager().build_obj_vec_from_json(&json_prop.differentiator, &())?;
        let integrators = self.integrator_manager().build_obj_vec_from_json(&json_prop.integrator, &())?;
        self.differentiator_manager().insert_objs(differentiators);
        self.integrator_manager().insert_objs(integrators);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
