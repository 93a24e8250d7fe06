pub trait Heater: Send + Sync {
    fn describe(&self) -> String;
}

pub struct ElectricHeater;

impl Heater for ElectricHeater {
    fn describe(&self) -> String {
        "electric heater, 1.5kW".to_string()
    }
}

pub struct GasHeater;

impl Heater for GasHeater {
    fn describe(&self) -> String {
        "gas heater, 3 burners".to_string()
    }
}

pub struct OilHeater;

impl Heater for OilHeater {
    fn describe(&self) -> String {
        "oil radiator, fallback only".to_string()
    }
}
