//! Hand-written stand-in for what a generated registration module would
//! emit from a [`beanforge_reader::BeanDescriptor`]: one `bind` call per
//! bean, at the priority its own annotations declared.

use std::sync::Arc;

use beanforge::{BeanScope, Priority, ScopeBuilder};

use crate::domain::{ElectricHeater, GasHeater, Heater, OilHeater};

pub fn build_scope() -> BeanScope {
    let mut builder = ScopeBuilder::new();

    builder.bind::<Arc<dyn Heater>>("Heater", None, vec![], Priority::Primary, None, Arc::new(ElectricHeater));
    builder.bind::<Arc<dyn Heater>>("Heater", None, vec![], Priority::Normal, None, Arc::new(GasHeater));
    builder.bind::<Arc<dyn Heater>>("Heater", None, vec![], Priority::Secondary, None, Arc::new(OilHeater));
    builder.on_pre_destroy("Heater", || {
        println!("heaters shutting down");
        Ok(())
    });

    builder.build()
}
