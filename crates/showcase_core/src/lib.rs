//! Core state units and renderers for the component showcase.
//! This crate owns every invariant of the three showcase units.

pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod unit;

pub use config::{load_config, parse_config, ConfigError, ConfigResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::showcase::{ConfigValidationError, FeatureDescriptor, PresentationalConfig};
pub use model::task::{TaskId, TaskRecord};
pub use render::card::render_showcase;
pub use render::views::{render_counter, render_task_list};
pub use unit::clock::{Clock, SystemClock};
pub use unit::counter::{
    CounterSnapshot, CounterUnit, LifecycleError, UnitPhase, MAX_COUNT, TICK_PERIOD,
};
pub use unit::task_list::{TaskAction, TaskList, TaskStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
