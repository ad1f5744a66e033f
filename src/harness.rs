//! # Verification Harness
//!
//! Four self-contained checks against [`Circle`] and [`ResourceManager`].
//! Each [`Case`] builds its own values, so cases can run in any order.
//!
//! The `code-rules` binary runs [`cases`] through [`run_all`] and exits with
//! a non-zero status if the resulting [`Report`] did not pass.

use crate::config::MAX_SIZE;
use crate::model::Status;
use crate::resource::{ResourceError, ResourceManager};
use crate::shape::{Circle, ShapeError};
use tracing::{error, info, info_span};

/// A named verification case.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub run: fn() -> Result<(), String>,
}

/// Result of running one [`Case`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub name: &'static str,
    pub status: Status,
    /// Failure detail, set only when `status` is [`Status::Failure`].
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// True when every case succeeded.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.status == Status::Success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.status == Status::Failure)
    }
}

/// The fixed set of verification cases.
pub fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "circle_area_calculation",
            run: circle_area_calculation,
        },
        Case {
            name: "circle_invalid_radius",
            run: circle_invalid_radius,
        },
        Case {
            name: "resource_manager_data_handling",
            run: resource_manager_data_handling,
        },
        Case {
            name: "resource_manager_size_limit",
            run: resource_manager_size_limit,
        },
    ]
}

/// Runs every case and collects the outcomes in input order.
pub fn run_all(cases: &[Case]) -> Report {
    let outcomes = cases
        .iter()
        .map(|case| {
            let _span = info_span!("case", name = case.name).entered();
            let mut outcome = Outcome {
                name: case.name,
                status: Status::Pending,
                message: None,
            };
            match (case.run)() {
                Ok(()) => {
                    info!("passed");
                    outcome.status = Status::Success;
                }
                Err(msg) => {
                    error!(error = %msg, "failed");
                    outcome.status = Status::Failure;
                    outcome.message = Some(msg);
                }
            }
            outcome
        })
        .collect();
    Report { outcomes }
}

fn circle_area_calculation() -> Result<(), String> {
    let circle = Circle::new(5.0).map_err(|e| e.to_string())?;
    let area = circle.area();
    if area == 78.53975 {
        Ok(())
    } else {
        Err(format!("expected area 78.53975, got {area}"))
    }
}

fn circle_invalid_radius() -> Result<(), String> {
    match Circle::new(-1.0) {
        Err(ShapeError::InvalidArgument(_)) => Ok(()),
        Ok(circle) => Err(format!("expected invalid argument, got {circle:?}")),
    }
}

fn resource_manager_data_handling() -> Result<(), String> {
    let mut manager = ResourceManager::new();
    let data = vec![1, 2, 3, 4, 5];
    manager.add_data(data).map_err(|e| e.to_string())?;
    match manager.data().len() {
        5 => Ok(()),
        n => Err(format!("expected 5 elements, got {n}")),
    }
}

fn resource_manager_size_limit() -> Result<(), String> {
    let mut manager = ResourceManager::new();
    let large_data = vec![0; MAX_SIZE + 1];
    match manager.add_data(large_data) {
        Err(ResourceError::LengthExceeded { .. }) => Ok(()),
        Ok(()) => Err("expected length exceeded, data was accepted".to_string()),
    }
}
