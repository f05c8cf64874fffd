//! Function identifiers and the dispatch table.

use std::fmt;
use std::str::FromStr;

use plot3d_core::GraphError;
use plot3d_math::Point3;
use serde::{Deserialize, Serialize};

use crate::{multi_wave, ripple, sphere, torus, wave};

/// A pure surface function: `(u, v, t) -> position`.
pub type SurfaceFunction = fn(f64, f64, f64) -> Point3;

/// Identifier for one entry of the function catalog.
///
/// The set is closed: a `FunctionId` always names a registered function, so
/// [`lookup`] is total and infallible. Host-side text (config files, UI
/// selections) goes through [`FromStr`], which is the only fallible path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum FunctionId {
    Wave,
    MultiWave,
    Ripple,
    Sphere,
    Torus,
}

/// One entry per `FunctionId`, in declaration order.
const CATALOG: [SurfaceFunction; FunctionId::ALL.len()] = [
    wave,
    multi_wave,
    ripple,
    sphere,
    torus,
];

impl FunctionId {
    /// All identifiers, in catalog order. Iterating this enumerates the
    /// whole catalog.
    pub const ALL: [FunctionId; 5] = [
        FunctionId::Wave,
        FunctionId::MultiWave,
        FunctionId::Ripple,
        FunctionId::Sphere,
        FunctionId::Torus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunctionId::Wave => "Wave",
            FunctionId::MultiWave => "MultiWave",
            FunctionId::Ripple => "Ripple",
            FunctionId::Sphere => "Sphere",
            FunctionId::Torus => "Torus",
        }
    }

    /// The next identifier in catalog order, wrapping at the end. Hosts use
    /// this to cycle through shapes.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }
}

/// Return the surface function registered under `id`.
pub fn lookup(id: FunctionId) -> SurfaceFunction {
    CATALOG[id as usize]
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/alignment specifiers working.
        f.pad(self.name())
    }
}

impl FromStr for FunctionId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GraphError::UnknownFunction(s.to_string()))
    }
}
