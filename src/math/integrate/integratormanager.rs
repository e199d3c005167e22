use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::integrate::integrator::TrapezoidIntegrator;


#[derive(Deserialize)]
struct TrapezoidIntegratorJsonProp {
    subdivisions: usize
}


fn get_integrator_from_json(json_value: serde_json::Value) -> Result<TrapezoidIntegrator, ManagerError> {
    let json_prop: TrapezoidIntegratorJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(TrapezoidIntegrator::new(json_prop.subdivisions)?)
}


pub struct IntegratorManager;


impl IntegratorManager {
    pub fn new() -> Manager<TrapezoidIntegrator> {
        Manager::new(get_integrator_from_json)
    }
}
