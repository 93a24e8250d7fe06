mod heater;

pub use heater::{ElectricHeater, GasHeater, Heater, OilHeater};
