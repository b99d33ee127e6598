use std::fmt;

#[cfg(test)]
use proptest_derive::Arbitrary;
use typed_builder::TypedBuilder;
use vectorcore::{GeometryError, Vector, Vector2D, Vector3D};

use crate::logging::LoggingConfig;

/// One step of the walk-through.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Longitude,
    InnerProduct,
    UnitVector,
    SquaredMagnitude,
    AngleBetween,
    ScaledVector3D,
    ProjectionOnto,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::Longitude,
        Scenario::InnerProduct,
        Scenario::UnitVector,
        Scenario::SquaredMagnitude,
        Scenario::AngleBetween,
        Scenario::ScaledVector3D,
        Scenario::ProjectionOnto,
    ];

    pub fn label(&self) -> &'static str {
        use Scenario::*;

        match self {
            Longitude => "Longitude",
            InnerProduct => "Inner product",
            UnitVector => "Unit vector",
            SquaredMagnitude => "Current magnitude",
            AngleBetween => "Angle between",
            ScaledVector3D => "Scaled Vector3D",
            ProjectionOnto => "Projection onto",
        }
    }

    pub fn evaluate(&self) -> Result<Outcome, GeometryError> {
        use Scenario::*;

        let outcome = match self {
            Longitude => Outcome::Scalar(Vector2D::new(5.0f64, 6.0).magnitude()),
            InnerProduct => Outcome::Scalar(
                Vector2D::new(1.0f64, 2.0).inner_product(&Vector2D::new(2.0, 1.0)),
            ),
            UnitVector => Outcome::Vector2D(Vector2D::new(3.0f64, 4.0).unit_vector()?),
            SquaredMagnitude => {
                let magnitude = Vector2D::new(6.0f64, 7.0).magnitude();
                Outcome::Scalar(magnitude * magnitude)
            }
            AngleBetween => {
                let first = Vector2D::new(5.0f64, 2.0);
                let second = Vector2D::new(-3.0, 6.0);
                let angle = first.angle_between(&second)?;
                Outcome::Degrees(Vector2D::<f64>::radians_to_degrees(angle))
            }
            ScaledVector3D => Outcome::Vector3D(Vector3D::new(2.0f64, 3.0, 4.0) * 2.0),
            ProjectionOnto => Outcome::Vector2D(
                Vector2D::new(-2.0f64, 8.0).projection_onto(&Vector2D::new(-1.0, 3.0))?,
            ),
        };
        Ok(outcome)
    }
}

/// Value computed by a [`Scenario`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Scalar(f64),
    Degrees(f64),
    Vector2D(Vector2D<f64>),
    Vector3D(Vector3D<f64>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // forwards the precision of the outer formatter
        match (self, f.precision()) {
            (Outcome::Scalar(value), Some(p)) => write!(f, "{:.*}", p, value),
            (Outcome::Scalar(value), None) => write!(f, "{}", value),
            (Outcome::Degrees(value), Some(p)) => write!(f, "{:.*} degrees", p, value),
            (Outcome::Degrees(value), None) => write!(f, "{} degrees", value),
            (Outcome::Vector2D(v), Some(p)) => write!(f, "{:.*}", p, v),
            (Outcome::Vector2D(v), None) => write!(f, "{}", v),
            (Outcome::Vector3D(v), Some(p)) => write!(f, "{:.*}", p, v),
            (Outcome::Vector3D(v), None) => write!(f, "{}", v),
        }
    }
}

/// Line printed for a scenario, e.g. `Inner product: 4`.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub scenario: Scenario,
    pub outcome: Outcome,
    precision: Option<usize>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Some(p) => write!(f, "{}: {:.*}", self.scenario.label(), p, self.outcome),
            None => write!(f, "{}: {}", self.scenario.label(), self.outcome),
        }
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct DemoConfig {
    /// Digits after the decimal point. Values are printed in full when unset.
    #[builder(default, setter(strip_option))]
    precision: Option<usize>,
    #[builder(default = Scenario::ALL.to_vec())]
    scenarios: Vec<Scenario>,
    #[builder(default)]
    logging: LoggingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DemoConfig {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

/// Evaluates the configured scenarios in order.
///
/// Stops at the first scenario that fails.
pub fn run(config: &DemoConfig) -> Result<Vec<Report>, GeometryError> {
    let reports = config
        .scenarios
        .iter()
        .map(|&scenario| {
            let outcome = scenario.evaluate().map_err(|err| {
                log::error!("{:?} failed: {}", scenario, err);
                err
            })?;
            log::debug!("{:?} => {:?}", scenario, outcome);
            Ok(Report {
                scenario,
                outcome,
                precision: config.precision,
            })
        })
        .collect::<Result<Vec<_>, GeometryError>>()?;

    log::info!("evaluated {} scenarios", reports.len());
    Ok(reports)
}
