// Rust guideline compliant 2026-10-14

//! Implementation of the `timeseries list` command.

use crate::commands::resolver_for;
use crate::context::OutputContext;
use crate::fields::{field_map, value_to_string};
use crate::output::tabulate;
use anyhow::Result;
use helium_core::{RecordSource, ResourceKind};
use std::io::Write;

/// Lists the datapoints of a sensor, optionally restricted to one port.
///
/// # Errors
///
/// Returns an error if the sensor does not resolve or the datapoints cannot
/// be fetched.
pub fn execute(
    source: &dyn RecordSource,
    sensor: &str,
    port: Option<&str>,
    mac: bool,
    ctx: &OutputContext,
    out: &mut dyn Write,
) -> Result<()> {
    let sensor_id = resolver_for(source, ResourceKind::Sensor, mac)?.resolve(sensor)?;
    let mut points = source.timeseries(&sensor_id)?;
    if let Some(port) = port {
        points.retain(|point| {
            point.get("attributes/port").map(value_to_string).as_deref() == Some(port)
        });
    }
    tabulate(&points, &field_map(ResourceKind::Timeseries), ctx, out)
}
