use crate::mes::error::{MesError, MesResult};

/// Which spatial directions' grid spacings enter the convergence measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionSelector {
    pub use_dx: bool,
    pub use_dy: bool,
    pub use_dz: bool,
}

impl DirectionSelector {
    pub fn x() -> Self {
        DirectionSelector {
            use_dx: true,
            use_dy: false,
            use_dz: false,
        }
    }

    pub fn xyz() -> Self {
        DirectionSelector {
            use_dx: true,
            use_dy: true,
            use_dz: true,
        }
    }

    /// At least one direction must be flagged before any field is read.
    pub fn validate(&self) -> MesResult<()> {
        if !(self.use_dx || self.use_dy || self.use_dz) {
            return Err(MesError::NoDirection);
        }
        Ok(())
    }

    /// Flagged spacing-field names, in x, y, z order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.use_dx {
            names.push("dx");
        }
        if self.use_dy {
            names.push("dy");
        }
        if self.use_dz {
            names.push("dz");
        }
        names
    }

    /// Directory-name component for the results tree, e.g. "dx_dz".
    pub fn combo_label(&self) -> String {
        self.field_names().join("_")
    }

    /// Plot x-axis label, e.g. "Δx" or "max(Δx, Δz)".
    pub fn axis_label(&self) -> String {
        let deltas: Vec<&str> = self
            .field_names()
            .iter()
            .map(|name| match *name {
                "dx" => "Δx",
                "dy" => "Δy",
                _ => "Δz",
            })
            .collect();
        if deltas.len() == 1 {
            deltas[0].to_string()
        } else {
            format!("max({})", deltas.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selector_is_rejected() {
        let sel = DirectionSelector {
            use_dx: false,
            use_dy: false,
            use_dz: false,
        };
        assert!(matches!(sel.validate(), Err(MesError::NoDirection)));
        assert!(DirectionSelector::x().validate().is_ok());
    }

    #[test]
    fn labels_follow_flags() {
        let sel = DirectionSelector {
            use_dx: true,
            use_dy: false,
            use_dz: true,
        };
        assert_eq!(sel.field_names(), vec!["dx", "dz"]);
        assert_eq!(sel.combo_label(), "dx_dz");
        assert_eq!(sel.axis_label(), "max(Δx, Δz)");
        assert_eq!(DirectionSelector::x().axis_label(), "Δx");
    }
}
