use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::differentiate::differentiator::BackwardDifferentiator;


#[derive(Deserialize)]
struct BackwardDifferentiatorJsonProp {
    step_size: f64
}


fn get_differentiator_from_json(json_value: serde_json::Value) -> Result<BackwardDifferentiator, ManagerError> {
    let json_prop: BackwardDifferentiatorJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(BackwardDifferentiator::new(json_prop.step_size)?)
}


pub struct DifferentiatorManager;


impl DifferentiatorManager {
    pub fn new() -> Manager<BackwardDifferentiator> {
        Manager::new(get_differentiator_from_json)
    }
}
